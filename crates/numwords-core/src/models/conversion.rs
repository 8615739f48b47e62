//! Result record for one converted line.

use serde::{Deserialize, Serialize};

use crate::words::{self, INVALID_NUMBER};

/// The outcome of converting a single input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    /// 1-based line number in the source.
    pub line: usize,
    /// The original line text.
    pub input: String,
    /// Words, or "number invalid".
    pub output: String,
    /// Whether the line held a convertible number.
    pub valid: bool,
}

impl Conversion {
    /// Convert `input`, recording its line number.
    pub fn from_line(line: usize, input: impl Into<String>) -> Self {
        let input = input.into();
        let (output, valid) = match words::try_convert(&input) {
            Ok(words) => (words, true),
            Err(_) => (INVALID_NUMBER.to_string(), false),
        };

        Self {
            line,
            input,
            output,
            valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_line_valid() {
        let conversion = Conversion::from_line(3, "We processed 9121 records.");
        assert_eq!(conversion.line, 3);
        assert_eq!(conversion.output, "nine thousand, one hundred and twenty-one");
        assert!(conversion.valid);
    }

    #[test]
    fn test_from_line_invalid() {
        let conversion = Conversion::from_line(1, "500hrs");
        assert_eq!(conversion.output, "number invalid");
        assert!(!conversion.valid);
    }

    #[test]
    fn test_serialize() {
        let conversion = Conversion::from_line(1, "0");
        let json = serde_json::to_string(&conversion).unwrap();
        assert_eq!(
            json,
            r#"{"line":1,"input":"0","output":"zero","valid":true}"#
        );
    }
}
