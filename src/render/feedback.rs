use crate::models::Errors;
use crate::views::Bookmark;

/// Shown when the server refused without saying why.
pub const GENERIC_ERROR: &str = "Something went wrong";

/// One line per message.
///
/// ```text
///   ✗ title: required
/// ```
pub fn error_list(errors: Option<&Errors>) -> String {
    let lines: Vec<String> = match errors {
        Some(errors) if !errors.is_empty() => errors
            .messages()
            .map(|(_, message)| format!("  ✗ {}", message))
            .collect(),
        _ => vec![format!("  ✗ {}", GENERIC_ERROR)],
    };
    lines.join("\n")
}

pub fn loading(text: &str) -> String {
    format!("  ... {}", text)
}

/// Bookmark state as one line: icon, optional label, fill colours.
///
/// ```text
/// [■] Bookmarked (#196A69/#196A69)
/// ```
pub fn bookmark_line(bookmark: &Bookmark) -> String {
    let fill = bookmark.fill();
    let icon = if bookmark.is_bookmarked { "[■]" } else { "[□]" };
    match bookmark.label() {
        Some(label) => format!("{} {} ({}/{})", icon, label, fill.inner, fill.outline),
        None => format!("{} ({}/{})", icon, fill.inner, fill.outline),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_list_lines() {
        let mut errors = Errors::new();
        errors.push("title", "required");
        errors.push("text", "too short");
        assert_eq!(error_list(Some(&errors)), "  ✗ too short\n  ✗ required");
    }

    #[test]
    fn test_error_list_without_payload() {
        assert_eq!(error_list(None), "  ✗ Something went wrong");
        assert_eq!(error_list(Some(&Errors::new())), "  ✗ Something went wrong");
    }

    #[test]
    fn test_bookmark_line() {
        assert_eq!(
            bookmark_line(&Bookmark::new("p1", true, true)),
            "[■] Bookmarked (#196A69/#196A69)"
        );
        assert_eq!(
            bookmark_line(&Bookmark::new("p1", false, false)),
            "[□] (#FAFAFA/#27272a)"
        );
    }
}
