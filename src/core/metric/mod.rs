// src/core/metric/mod.rs

//! Distance metrics for k-nearest-neighbor search.
//!
//! A metric computes a non-negative dissimilarity between two equal-length
//! coordinate vectors. The trait is the extension seam: callers supply their
//! own metric at tree construction time, either by implementing
//! [`DistanceMetric`] or by wrapping a plain function in [`FnMetric`].
//!
//! Metrics used with [`SpatialTree`](crate::core::index::kdtree::SpatialTree)
//! must be axis-decomposable: the distance restricted to a single coordinate
//! must never exceed the full distance. The tree's backtracking search uses
//! single-axis distances as pruning lower bounds, and an implementation that
//! violates the bound can silently drop true neighbors. [`Euclidean`] and
//! [`Manhattan`] both satisfy it; the property is a documented precondition,
//! not a runtime check.

use crate::core::common::NeighborsError;

/// A pluggable dissimilarity between two equal-length coordinate vectors.
pub trait DistanceMetric {
    /// Computes the distance between `a` and `b`.
    ///
    /// # Errors
    /// Returns `NeighborsError::DimensionMismatch` if the vectors have
    /// different lengths.
    fn distance(&self, a: &[f32], b: &[f32]) -> Result<f32, NeighborsError>;

    /// Get the name of the metric, used by diagnostic output.
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Adapter that turns a plain function or closure into a
/// [`DistanceMetric`], so callers can supply a callable instead of
/// implementing the trait.
#[derive(Debug, Clone, Copy)]
pub struct FnMetric<F>(pub F);

impl<F> DistanceMetric for FnMetric<F>
where
    F: Fn(&[f32], &[f32]) -> Result<f32, NeighborsError>,
{
    fn distance(&self, a: &[f32], b: &[f32]) -> Result<f32, NeighborsError> {
        (self.0)(a, b)
    }
}

/// Euclidean (L2) distance: the square root of the sum of squared
/// coordinate differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    fn distance(&self, a: &[f32], b: &[f32]) -> Result<f32, NeighborsError> {
        if a.len() != b.len() {
            return Err(NeighborsError::DimensionMismatch { dim1: a.len(), dim2: b.len() });
        }

        let sum_sq_diff: f32 = a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum();

        Ok(sum_sq_diff.sqrt())
    }

    fn name(&self) -> &'static str {
        "euclidean"
    }
}

/// Manhattan (L1) distance: the sum of absolute coordinate differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Manhattan;

impl DistanceMetric for Manhattan {
    fn distance(&self, a: &[f32], b: &[f32]) -> Result<f32, NeighborsError> {
        if a.len() != b.len() {
            return Err(NeighborsError::DimensionMismatch { dim1: a.len(), dim2: b.len() });
        }

        Ok(a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum())
    }

    fn name(&self) -> &'static str {
        "manhattan"
    }
}
