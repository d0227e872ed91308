//! Response formatting
//!
//! Light markdown-to-HTML pass applied to every result before display.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BOLD: Regex = Regex::new(r"\*\*(.*?)\*\*").expect("Invalid bold regex");
    static ref ITALIC: Regex = Regex::new(r"\*(.*?)\*").expect("Invalid italic regex");
}

/// `\n` → `<br>`, `**x**` → `<strong>x</strong>`, `*x*` → `<em>x</em>`
pub fn format_response(text: &str) -> String {
    let text = text.replace('\n', "<br>");
    let text = BOLD.replace_all(&text, "<strong>${1}</strong>");
    ITALIC.replace_all(&text, "<em>${1}</em>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_markers() {
        assert_eq!(
            format_response("**Bold** and *soft*\nnext"),
            "<strong>Bold</strong> and <em>soft</em><br>next"
        );
    }

    #[test]
    fn test_html_passes_through() {
        let html = "<strong>Summary:</strong><br><br>Plain text.";
        assert_eq!(format_response(html), html);
    }

    #[test]
    fn test_unpaired_marker_is_kept() {
        assert_eq!(format_response("5 * 3"), "5 * 3");
    }
}
