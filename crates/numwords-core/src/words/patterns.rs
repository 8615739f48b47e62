//! Regex patterns and character classes used by number extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Maximal runs of ASCII digits; qualifying edges are checked separately
    // since the regex crate has no lookbehind.
    pub static ref DIGIT_RUN: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Whether `c` counts as part of a word for boundary purposes.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether `c` is a separator on the left of a number: ASCII space, tab,
/// line feed, vertical tab, form feed or carriage return.
///
/// Unicode spaces such as U+00A0 count as glue, like any other symbol.
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Whether a digit run starting at `start` has a free left edge
/// (start of line or a separator).
pub fn has_free_left_edge(text: &str, start: usize) -> bool {
    text[..start].chars().next_back().is_none_or(is_separator)
}

/// Whether a digit run ending at `end` has a word boundary on its right
/// (end of line or a non-word character).
pub fn has_free_right_edge(text: &str, end: usize) -> bool {
    text[end..].chars().next().is_none_or(|c| !is_word_char(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_run_is_maximal() {
        let runs: Vec<&str> = DIGIT_RUN
            .find_iter("a12 345b 6")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(runs, vec!["12", "345", "6"]);
    }

    #[test]
    fn test_digit_run_ascii_only() {
        // Arabic-Indic digits are not decimal digits for our purposes.
        assert!(DIGIT_RUN.find("\u{0661}\u{0662}").is_none());
    }

    #[test]
    fn test_left_edge() {
        assert!(has_free_left_edge("42", 0));
        assert!(has_free_left_edge("is 42", 3));
        assert!(has_free_left_edge("is\t42", 3));
        assert!(!has_free_left_edge("#42", 1));
        assert!(!has_free_left_edge("x42", 1));
        assert!(!has_free_left_edge("é42", 2));
    }

    #[test]
    fn test_left_edge_separators() {
        assert!(has_free_left_edge("\x0B42", 1));
        assert!(has_free_left_edge("\x0C42", 1));
        assert!(has_free_left_edge("\r42", 1));
        // Non-breaking and other Unicode spaces glue like symbols.
        assert!(!has_free_left_edge("\u{00A0}42", 2));
        assert!(!has_free_left_edge("\u{2003}42", 3));
    }

    #[test]
    fn test_right_edge() {
        assert!(has_free_right_edge("42", 2));
        assert!(has_free_right_edge("42.", 2));
        assert!(has_free_right_edge("42,9", 2));
        assert!(!has_free_right_edge("42hrs", 2));
        assert!(!has_free_right_edge("42_", 2));
    }
}
