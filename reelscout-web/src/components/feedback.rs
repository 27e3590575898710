//! Feedback components - loader, error line, pre-search placeholder

/// Renders the loading indicator.
pub fn loader() -> String {
    r#"<div class="flex justify-center items-center" role="status">
            <p class="text-slate-100 text-2xl mt-10">Loading...</p>
        </div>"#
        .to_string()
}

/// Renders an error message line.
pub fn error_message(message: &str) -> String {
    format!(
        r#"<p class="text-red-500 text-center mt-6" role="alert">{}</p>"#,
        super::escape(message)
    )
}

/// Renders the placeholder shown before the first manual search.
pub fn search_placeholder() -> String {
    r#"<div class="text-center py-12">
            <div class="text-6xl mb-4">🎬</div>
            <h2 class="text-2xl font-semibold text-slate-100 mb-2">Search for a movie to get started</h2>
            <p class="text-slate-400">Type a title above and press Search</p>
        </div>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_is_escaped() {
        let html = error_message("Movie <b>not</b> found!");
        assert!(html.contains("Movie &lt;b&gt;not&lt;/b&gt; found!"));
        assert!(html.contains("text-red-500"));
    }

    #[test]
    fn test_loader_text() {
        assert!(loader().contains("Loading..."));
    }
}
