//! Layout components - headline, search input, buttons, grids

/// Renders the centred page headline.
pub fn headline(text: &str) -> String {
    format!(
        r#"<div class="flex justify-center">
            <p class="text-5xl md:text-7xl font-bold text-slate-100 text-center">{text}</p>
        </div>"#,
        text = super::escape(text)
    )
}

/// Renders a grid container for responsive layouts.
///
/// Use Tailwind grid column classes like "grid-cols-4" or
/// "grid-cols-1 sm:grid-cols-2 lg:grid-cols-4".
pub fn grid(columns: &str, content: &str) -> String {
    format!(r#"<div class="grid {columns} gap-6">{content}</div>"#)
}

/// Renders the amber action button. Extra attributes are passed through
/// verbatim, so they must already be escaped.
pub fn button(text: &str, attributes: Option<&str>) -> String {
    let attrs = attributes.unwrap_or("");

    format!(
        r#"<button class="h-12 px-6 rounded font-medium transition-colors bg-amber-500 hover:bg-amber-600 text-slate-900 focus:outline-none focus:ring-2 focus:ring-amber-500 focus:ring-offset-2 focus:ring-offset-slate-900" {attrs}>{}</button>"#,
        super::escape(text)
    )
}

/// Renders the movie title search box.
///
/// `value` is escaped; `attributes` carries the htmx wiring and is passed
/// through verbatim.
pub fn search_input(value: &str, attributes: Option<&str>) -> String {
    let attrs = attributes.unwrap_or("");

    format!(
        r#"<input type="search" name="query" value="{value}" placeholder="Search movie..."
                  autocomplete="off"
                  class="w-full h-12 px-3 rounded text-slate-900 focus:outline-none focus:ring-2 focus:ring-amber-500"
                  {attrs} />"#,
        value = super::escape(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_input_escapes_value() {
        let html = search_input(r#"" onfocus="x"#, Some(r#"hx-get="/htmx/search""#));
        assert!(html.contains(r#"value="&quot; onfocus=&quot;x""#));
        assert!(html.contains(r#"hx-get="/htmx/search""#));
        assert!(html.contains(r#"placeholder="Search movie...""#));
    }

    #[test]
    fn test_button_carries_attributes() {
        let html = button("Search", Some(r#"type="submit""#));
        assert!(html.contains("bg-amber-500"));
        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains(">Search</button>"));
    }
}
