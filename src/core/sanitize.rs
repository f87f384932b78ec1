// src/core/sanitize.rs
//
// Small text transforms used by the review field rules.

/// Remove every occurrence of `phrase`.
pub fn strip_phrase(s: &str, phrase: &str) -> String {
    if phrase.is_empty() { return s!(s); }
    s.replace(phrase, "")
}

/// Text after the last `marker`, trimmed. Without the marker: the whole text, trimmed.
pub fn after_last(s: &str, marker: &str) -> String {
    match s.rfind(marker) {
        Some(i) if !marker.is_empty() => s[i + marker.len()..].trim().to_string(),
        _ => s.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn after_last_takes_tail() {
        assert_eq!(after_last("5.0 out of 5 starsGreat buy ", "out of 5 stars"), "Great buy");
        assert_eq!(after_last("  Just a title ", "out of 5 stars"), "Just a title");
        assert_eq!(after_last("4.0 out of 5 stars", "out of 5 stars"), "");
    }

    #[test]
    fn strip_phrase_removes_prefix() {
        assert_eq!(strip_phrase("Reviewed in India on 3 May 2024", "Reviewed in India on "), "3 May 2024");
        assert_eq!(strip_phrase("3 May 2024", "Reviewed in India on "), "3 May 2024");
    }
}
