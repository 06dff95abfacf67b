//! Error types shared by every operation in the crate.

use thiserror::Error;

/// Errors returned by the shuffle and sort operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SorterError {
    /// No input sequence was supplied at all.
    #[error("{operation}: input sequence is missing")]
    MissingInput { operation: &'static str },

    /// An input sequence was supplied but it has zero length.
    #[error("{operation}: input sequence is empty")]
    EmptyInput { operation: &'static str },

    /// A swap index falls outside the sequence.
    #[error("index {index} is out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SorterError>;
