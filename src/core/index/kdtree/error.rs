// src/core/index/kdtree/error.rs

use std::fmt;

use crate::core::common::NeighborsError;

/// Custom error types for k-d tree operations.
#[derive(Debug)]
pub enum KdTreeError {
    /// Points of inconsistent length reached the builder, a zero-dimension
    /// point set was supplied, or a query vector does not match the tree.
    DimensionMismatch(String),
    /// Error for general issues during build or search.
    Internal(String),
}

impl fmt::Display for KdTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KdTreeError::DimensionMismatch(msg) => {
                write!(f, "KD-Tree Dimension Mismatch: {}", msg)
            }
            KdTreeError::Internal(msg) => write!(f, "KD-Tree Internal Error: {}", msg),
        }
    }
}

impl std::error::Error for KdTreeError {}

// Metric failures surfacing inside build or search map into the tree's own
// vocabulary so `?` composes.
impl From<NeighborsError> for KdTreeError {
    fn from(err: NeighborsError) -> Self {
        match err {
            NeighborsError::DimensionMismatch { dim1, dim2 } => Self::DimensionMismatch(format!(
                "metric received vectors of dimension {} and {}",
                dim1, dim2
            )),
            other => Self::Internal(other.to_string()),
        }
    }
}

// And the other way for callers working in terms of the crate error.
impl From<KdTreeError> for NeighborsError {
    fn from(err: KdTreeError) -> Self {
        Self::Index(err.to_string())
    }
}
