//! Base page layout shared by every full-page response.

use axum::response::Html;

/// Renders a full page around `content` with the shared head and variant nav.
pub fn render_page(title: &str, active_nav: &str, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{title} - Reelscout</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script src="https://unpkg.com/htmx.org@1.9.10"></script>
            <style>
                #content-area .loading-indicator {{ display: none; }}
                #content-area.htmx-request .loading-indicator {{ display: block; }}
                #content-area.htmx-request .main-slot {{ display: none; }}
            </style>
        </head>
        <body class="bg-slate-900 min-h-screen font-sans">
            {nav}
            <main class="py-8">
                {content}
            </main>
        </body>
        </html>"#,
        title = crate::components::escape(title),
        nav = nav_bar(active_nav),
    );

    Html(html)
}

/// Renders the navigation between the two search variants.
fn nav_bar(active_page: &str) -> String {
    let nav_item = |href: &str, label: &str, page: &str| {
        let active_class = if page == active_page {
            "text-amber-400 bg-amber-400 bg-opacity-10"
        } else {
            "text-slate-300 hover:text-amber-400 hover:bg-slate-700"
        };

        format!(
            r#"<a href="{href}" class="px-3 py-2 rounded-md text-sm font-medium transition-colors {active_class}">{label}</a>"#
        )
    };

    format!(
        r#"<nav class="bg-slate-800 border-b border-slate-700">
            <div class="max-w-7xl mx-auto px-4 flex items-center justify-between h-14">
                <div class="text-xl font-bold text-amber-400">Reelscout</div>
                <div class="flex space-x-4">
                    {}
                    {}
                </div>
            </div>
        </nav>"#,
        nav_item("/", "Search as you type", "auto"),
        nav_item("/manual", "Search on click", "manual"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_page_marks_active_nav() {
        let Html(html) = render_page("Search", "manual", "<p>body</p>");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Search - Reelscout</title>"));
        assert!(html.contains("htmx.org"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains(r#"href="/manual" class="px-3 py-2 rounded-md text-sm font-medium transition-colors text-amber-400"#));
    }
}
