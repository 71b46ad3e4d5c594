#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::cast_precision_loss)]
#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

//! # Neighbors: exact k-nearest-neighbor search over a balanced k-d tree
//!
//! `neighbors` indexes a fixed set of equal-dimension points in a balanced
//! k-d tree and answers exact k-nearest-neighbor queries with a bounded
//! priority queue and geometric pruning. It features:
//! - Balanced construction by median split with cycling axes
//! - Backtracking search that prunes subtrees via single-axis lower bounds
//! - A pluggable distance-metric seam (Euclidean and Manhattan provided)
//! - A linear-scan classifier baseline with majority voting
//! - Simple cross-validation utilities for picking the neighbor count
//!
//! The tree is immutable after construction, so concurrent readers may
//! issue overlapping queries against one instance without locking.

pub mod core;

// Re-export key types for easier use by library consumers
pub use crate::core::common::NeighborsError;
pub use crate::core::index::kdtree::{KdTreeError, SpatialTree};
pub use crate::core::index::linear::LinearScanKnn;
pub use crate::core::metric::{DistanceMetric, Euclidean, FnMetric, Manhattan};
pub use crate::core::selection::{
    best_k_simple_validation, train_test_split, Classifier, KnnClassifier, SelectionOutcome,
    Split,
};
pub use crate::core::types::PointData;

/// Core result type for the library
pub type Result<T> = std::result::Result<T, NeighborsError>;
