//! Generic error page, shared by the `/error` route, the 404 fallback and
//! the typed error renderer.

use maud::{Markup, html};

use super::components;

/// Render the generic error page with the given heading and message.
pub fn error_page(title: &str, message: &str) -> Markup {
    error_page_with_detail(title, message, None)
}

/// Error page with an optional technical detail line.
///
/// The detail is only rendered in dev mode; production error pages carry the
/// generic message alone.
pub fn error_page_with_detail(title: &str, message: &str, detail: Option<&str>) -> Markup {
    components::page(
        title,
        html! {
            div class="error-page" {
                h1 { (title) }
                p { (message) }
                @if let Some(detail) = detail {
                    p class="error-detail" { (detail) }
                }
                a href="/dashboard" { "Back to the dashboard" }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_page_contains_message() {
        let rendered = error_page("Not Found", "No such page.").into_string();
        assert!(rendered.contains("Not Found"));
        assert!(rendered.contains("No such page."));
    }

    #[test]
    fn error_page_escapes_message() {
        let rendered = error_page("Oops", "<img src=x>").into_string();
        assert!(!rendered.contains("<img src=x>"));
    }

    #[test]
    fn detail_line_rendered_when_present() {
        let rendered =
            error_page_with_detail("Oops", "Generic.", Some("node unavailable: offline"))
                .into_string();
        assert!(rendered.contains("error-detail"));
        assert!(rendered.contains("node unavailable: offline"));
    }

    #[test]
    fn detail_line_absent_by_default() {
        let rendered = error_page("Oops", "Generic.").into_string();
        assert!(!rendered.contains("error-detail"));
    }
}
