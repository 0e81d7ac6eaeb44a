//! Character-budget helpers shared by excerpting and enrichment.

/// Truncate `text` to at most `max_chars` characters, on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Truncate to `max_chars` characters, appending `"..."` when anything
/// was cut. Used for display excerpts.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let truncated = truncate_chars(text, max_chars);
    if truncated.len() < text.len() {
        format!("{truncated}...")
    } else {
        truncated.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_untouched() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(excerpt("hello", 10), "hello");
    }

    #[test]
    fn long_text_truncated_with_suffix() {
        assert_eq!(excerpt("hello world", 5), "hello...");
    }

    #[test]
    fn exact_length_has_no_suffix() {
        assert_eq!(excerpt("hello", 5), "hello");
    }

    #[test]
    fn multibyte_boundaries_are_respected() {
        let text = "héllo wörld";
        let cut = truncate_chars(text, 6);
        assert_eq!(cut, "héllo ");
        assert_eq!(cut.chars().count(), 6);
    }

    #[test]
    fn zero_budget_yields_empty() {
        assert_eq!(truncate_chars("abc", 0), "");
        assert_eq!(excerpt("abc", 0), "...");
    }
}
