//! Number-to-words conversion pipeline.
//!
//! A line flows through four stages: the extractor finds the single
//! free-standing number, the grouper splits it into base-1000 groups, each
//! group is rendered to words, and the sentence assembler joins the groups
//! with their scale words.

pub mod extractor;
pub mod grouper;
pub mod patterns;
pub mod render;
pub mod sentence;

pub use extractor::{extract, tokens, NumberExtractor, NumericToken, ValidatedNumber};
pub use grouper::{group, GroupSequence};
pub use render::render_group;
pub use sentence::assemble;

use tracing::debug;

use crate::error::Result;

/// Output for any line that does not hold exactly one convertible number.
pub const INVALID_NUMBER: &str = "number invalid";

/// Output for the number zero.
pub const ZERO: &str = "zero";

/// Trait for extractors that pull a typed value out of free-form text.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// Convert the number embedded in `line` to English words.
///
/// Never fails: lines without exactly one valid number produce
/// [`INVALID_NUMBER`].
pub fn convert(line: &str) -> String {
    match try_convert(line) {
        Ok(words) => words,
        Err(e) => {
            debug!("Rejected line {:?}: {}", line, e);
            INVALID_NUMBER.to_string()
        }
    }
}

/// Convert the number embedded in `line`, reporting why extraction failed.
pub fn try_convert(line: &str) -> Result<String> {
    let number = extract(line)?;
    Ok(to_words(number))
}

/// Spell out an already-validated number.
pub fn to_words(number: ValidatedNumber) -> String {
    if number.get() == 0 {
        return ZERO.to_string();
    }

    let groups = group(number);
    let rendered: Vec<String> = groups.iter().map(render_group).collect();

    assemble(&groups, &rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExtractionError, NumWordsError};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_convert_sentences() {
        assert_eq!(
            convert("The pump is 536 deep underground."),
            "five hundred and thirty-six"
        );
        assert_eq!(
            convert("We processed 9121 records."),
            "nine thousand, one hundred and twenty-one"
        );
        assert_eq!(
            convert("Interactive and printable 10022 ZIP code."),
            "ten thousand and twenty-two"
        );
        assert_eq!(
            convert("The database has 66723107008 records."),
            "sixty-six billion, seven hundred and twenty-three million, one hundred and seven thousand and eight"
        );
    }

    #[test]
    fn test_convert_invalid_lines() {
        assert_eq!(
            convert("Variables reported as having a missing type #65678."),
            INVALID_NUMBER
        );
        assert_eq!(convert("I received 23 456,9 KGs."), INVALID_NUMBER);
        assert_eq!(convert("500hrs"), INVALID_NUMBER);
        assert_eq!(convert(""), INVALID_NUMBER);
        assert_eq!(convert("no digits here"), INVALID_NUMBER);
    }

    #[test]
    fn test_convert_bare_numbers() {
        assert_eq!(convert("0"), "zero");
        assert_eq!(convert("1"), "one");
        assert_eq!(convert("219"), "two hundred and nineteen");
        assert_eq!(convert("1000000"), "one million");
        assert_eq!(convert("007"), "seven");
    }

    #[test]
    fn test_convert_bounds() {
        assert_eq!(
            convert("999999999999999"),
            "nine hundred and ninety-nine trillion, nine hundred and ninety-nine billion, \
             nine hundred and ninety-nine million, nine hundred and ninety-nine thousand, \
             nine hundred and ninety-nine"
        );
        assert_eq!(convert("1000000000000000"), INVALID_NUMBER);
        assert_eq!(convert("99999999999999999999999"), INVALID_NUMBER);
    }

    #[test]
    fn test_try_convert_reports_reason() {
        let err = try_convert("1 2 3").unwrap_err();
        assert!(matches!(
            err,
            NumWordsError::Extraction(ExtractionError::MultipleNumbers { count: 3 })
        ));

        let err = try_convert("#1").unwrap_err();
        assert!(matches!(
            err,
            NumWordsError::Extraction(ExtractionError::NoNumber)
        ));
    }

    #[test]
    fn test_to_words_zero() {
        let zero = ValidatedNumber::try_from(0u64).unwrap();
        assert_eq!(to_words(zero), "zero");
    }
}
