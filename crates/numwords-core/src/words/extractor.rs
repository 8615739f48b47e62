//! Extraction of the single free-standing number from a line of text.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::patterns::{has_free_left_edge, has_free_right_edge, DIGIT_RUN};
use super::FieldExtractor;
use crate::error::ExtractionError;

/// A number that fits under the largest scale word ("trillion").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ValidatedNumber(u64);

impl ValidatedNumber {
    /// Largest convertible value (fifteen nines).
    pub const MAX: u64 = 999_999_999_999_999;

    /// The underlying value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for ValidatedNumber {
    type Error = ExtractionError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value > Self::MAX {
            return Err(ExtractionError::OutOfRange {
                digits: value.to_string(),
            });
        }
        Ok(Self(value))
    }
}

impl From<ValidatedNumber> for u64 {
    fn from(number: ValidatedNumber) -> Self {
        number.0
    }
}

impl fmt::Display for ValidatedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A free-standing digit run found in a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericToken {
    /// The digits as they appear in the source text.
    pub digits: String,
    /// Byte span in the source text.
    pub position: (usize, usize),
}

impl NumericToken {
    /// Parse the digits into a bounded number.
    pub fn parse(&self) -> Result<ValidatedNumber, ExtractionError> {
        let out_of_range = || ExtractionError::OutOfRange {
            digits: self.digits.clone(),
        };

        // Only overflow can fail here; the token is all ASCII digits.
        let value: u64 = self.digits.parse().map_err(|_| out_of_range())?;
        ValidatedNumber::try_from(value).map_err(|_| out_of_range())
    }
}

/// Find every free-standing digit run in `line`.
///
/// A run qualifies when it starts the line or follows ASCII whitespace, and ends
/// the line or is followed by a non-word character. "#65678" and "500hrs"
/// therefore contribute no token.
pub fn tokens(line: &str) -> Vec<NumericToken> {
    DIGIT_RUN
        .find_iter(line)
        .filter(|m| has_free_left_edge(line, m.start()) && has_free_right_edge(line, m.end()))
        .map(|m| NumericToken {
            digits: m.as_str().to_string(),
            position: (m.start(), m.end()),
        })
        .collect()
}

/// Extract the one number on `line`.
pub fn extract(line: &str) -> Result<ValidatedNumber, ExtractionError> {
    let found = tokens(line);
    trace!("Found {} numeric tokens", found.len());

    match found.as_slice() {
        [] => Err(ExtractionError::NoNumber),
        [token] => token.parse(),
        _ => Err(ExtractionError::MultipleNumbers { count: found.len() }),
    }
}

/// Number field extractor.
pub struct NumberExtractor;

impl NumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NumberExtractor {
    type Output = ValidatedNumber;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        extract(text).ok()
    }

    /// Every free-standing number in range, regardless of how many the
    /// line holds.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        tokens(text)
            .iter()
            .filter_map(|token| token.parse().ok())
            .collect()
    }
}
