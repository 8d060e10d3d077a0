use std::result;

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for boundvec operations.
#[derive(Debug, Error)]
pub enum Error {
    // Construction errors
    #[error("Length too high: len: {len}, max: {max}")]
    LenTooHigh { len: usize, max: usize },

    #[error("Invalid start index: start: {start}, len: {len} (end index overflows)")]
    InvalidStartIndex { start: usize, len: usize },

    // Access errors
    #[error("Index out of bounds: index: {index}, valid: {start}..{end}")]
    IndexOutOfBounds {
        index: usize,
        start: usize,
        end: usize,
    },

    // Binary operation errors
    #[error("Length mismatch: left: {left}, right: {right}")]
    LenMismatch { left: usize, right: usize },
}
