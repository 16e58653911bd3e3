//! Errors reported by the checked sequence operations.
//!
//! The arithmetic path itself does not return errors: mismatched operand
//! lengths are a caller precondition. These errors surface only from the
//! bounds-checked accessors and the `try_*` family.

use thiserror::Error;

/// Errors that can occur when accessing or combining sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum SequenceError {
    /// A checked accessor was given an index past the end.
    #[error("index {index} out of range for sequence of length {len}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Length of the sequence that was accessed.
        len: usize,
    },

    /// Two sequence operands have different lengths.
    #[error("operand lengths differ: left has {lhs} elements, right has {rhs}")]
    SizeMismatch {
        /// Length of the left operand (or destination).
        lhs: usize,
        /// Length of the right operand (or source).
        rhs: usize,
    },
}

/// Result alias for sequence operations.
pub type Result<T, E = SequenceError> = std::result::Result<T, E>;
