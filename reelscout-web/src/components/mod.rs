//! Reusable HTML components for HTMX + Tailwind UI
//!
//! Components are server-rendered HTML fragments that can be used
//! in full pages or as HTMX partial updates. All styling uses Tailwind CSS.
//! Any text that came from a user or the movie database goes through
//! [`escape`] before it is interpolated.

pub mod feedback;
pub mod layout;
pub mod movie;

// Re-export main component functions
pub use feedback::{error_message, loader, search_placeholder};
pub use layout::{button, grid, headline, search_input};
pub use movie::{movie_card, movie_grid};

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<img src="x" onerror='1'>&"#),
            "&lt;img src=&quot;x&quot; onerror=&#39;1&#39;&gt;&amp;"
        );
        assert_eq!(escape("Avatar: The Way of Water"), "Avatar: The Way of Water");
    }
}
