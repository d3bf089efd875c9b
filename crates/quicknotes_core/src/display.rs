//! Presentation helpers for rendering notes in a list surface.

/// Character budget for one list row.
pub const PREVIEW_CHAR_LIMIT: usize = 20;

const ELLIPSIS: &str = "...";

/// Renders note text for a list row.
///
/// Texts longer than [`PREVIEW_CHAR_LIMIT`] characters are cut to the
/// first [`PREVIEW_CHAR_LIMIT`] characters followed by an ellipsis
/// marker; shorter texts render unmodified. Counting is by Unicode
/// scalar values, not bytes.
pub fn preview(text: &str) -> String {
    preview_with_limit(text, PREVIEW_CHAR_LIMIT)
}

/// [`preview`] with a caller-chosen character budget.
pub fn preview_with_limit(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(limit).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::{preview, preview_with_limit};

    #[test]
    fn short_text_is_unmodified() {
        assert_eq!(preview("Buy milk"), "Buy milk");
        assert_eq!(preview(""), "");
    }

    #[test]
    fn text_at_the_limit_is_unmodified() {
        let exactly_twenty = "a".repeat(20);
        assert_eq!(preview(&exactly_twenty), exactly_twenty);
    }

    #[test]
    fn text_over_the_limit_is_cut_with_ellipsis() {
        let twenty_one = "b".repeat(21);
        let rendered = preview(&twenty_one);
        assert_eq!(rendered, format!("{}...", "b".repeat(20)));
    }

    #[test]
    fn counting_is_by_characters_not_bytes() {
        // 21 two-byte characters: over the limit by count, cut at 20.
        let text = "é".repeat(21);
        let rendered = preview(&text);
        assert_eq!(rendered, format!("{}...", "é".repeat(20)));
    }

    #[test]
    fn custom_limit_is_respected() {
        assert_eq!(preview_with_limit("abcdef", 3), "abc...");
        assert_eq!(preview_with_limit("abc", 3), "abc");
    }
}
