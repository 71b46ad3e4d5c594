// src/core/common/error.rs

use std::fmt;

/// Crate-level error type.
///
/// All error conditions are detected at the point of occurrence (metric
/// invocation, API entry) and propagated synchronously to the caller. There
/// is no partial-result recovery and no retry: the index structures are never
/// mutated after construction, so a failed operation cannot corrupt state.
#[derive(Debug)]
pub enum NeighborsError {
    /// Two coordinate vectors of different lengths reached a distance
    /// metric, or points of inconsistent dimension reached a constructor.
    DimensionMismatch { dim1: usize, dim2: usize },
    /// Invalid arguments at an API boundary (zero `k` for a classifier,
    /// mismatched points/labels lengths, degenerate split fractions).
    InvalidInput { message: String },
    /// An index-layer failure surfaced through the crate error.
    Index(String),
    /// An invariant violation that should be unreachable.
    Internal(String),
}

impl fmt::Display for NeighborsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { dim1, dim2 } => {
                write!(f, "Dimension mismatch: dim1 = {}, dim2 = {}", dim1, dim2)
            }
            Self::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            Self::Index(s) => write!(f, "Index Error: {}", s),
            Self::Internal(s) => write!(f, "Internal Error: {}", s),
        }
    }
}

impl std::error::Error for NeighborsError {}
