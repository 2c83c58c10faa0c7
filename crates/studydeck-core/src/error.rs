//! Error types for deck parsing, classification, and study sessions.
//!
//! Bank transitions never fail; everything that can go wrong lives here so
//! callers can match on the variant instead of on message text.

use thiserror::Error;

/// Errors raised by the study core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StudyError {
    /// A deck line did not split into exactly three `|`-separated fields.
    #[error("line {line}: expected 3 fields separated by '|', found {fields}")]
    MalformedLine { line: usize, fields: usize },

    /// The question or answer field of a deck line was blank.
    #[error("line {line}: {field} must not be empty")]
    EmptyField { line: usize, field: &'static str },

    /// A question was built with a blank question or answer.
    #[error("{field} must not be empty")]
    MissingText { field: &'static str },

    /// `k` was zero or larger than the dataset.
    #[error("k must be between 1 and {len}, got {k}")]
    InvalidNeighbors { k: usize, len: usize },

    /// The classifier was given no labeled examples.
    #[error("dataset is empty")]
    EmptyDataset,

    /// The learner's input stream ended before the session completed.
    #[error("input closed before the session completed")]
    InputClosed,
}

impl StudyError {
    /// Returns `true` if this error came from malformed deck text.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            StudyError::MalformedLine { .. }
                | StudyError::EmptyField { .. }
                | StudyError::MissingText { .. }
        )
    }
}
