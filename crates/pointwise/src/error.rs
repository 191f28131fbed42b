//! Error type for the checked batch operations.

use std::fmt;

/// Returned by the `checked_*` batch operations instead of panicking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BatchError {
    /// Binary operation on sequences of different lengths.
    LengthMismatch { left: usize, right: usize },
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { left, right } => {
                write!(f, "point sequences of unequal length: {left} vs {right}")
            }
        }
    }
}

impl std::error::Error for BatchError {}
