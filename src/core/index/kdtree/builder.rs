// src/core/index/kdtree/builder.rs

//! Logic for building a balanced k-d tree from a set of points.

use std::cmp::Ordering;

use super::error::KdTreeError;
use super::tree::KdNode;
use crate::core::types::PointData;

/// Validates the input point set and builds the root node.
///
/// Every point must share a single dimension `D >= 1`. An empty input is not
/// an error: it produces `Ok((None, 0))`, a rootless tree against which all
/// queries return empty results.
///
/// # Returns
/// The root node (or `None` for an empty input) together with the fixed
/// dimension of the indexed points.
///
/// # Errors
/// `KdTreeError::DimensionMismatch` when the points do not all share one
/// dimension, or when that dimension is zero.
pub fn build_root(points: Vec<PointData>) -> Result<(Option<Box<KdNode>>, u32), KdTreeError> {
    if points.is_empty() {
        return Ok((None, 0));
    }

    let dimension = points[0].dimension;
    if dimension == 0 {
        return Err(KdTreeError::DimensionMismatch("dimension cannot be 0".to_string()));
    }
    for point in &points {
        if point.dimension != dimension || point.data.len() != dimension as usize {
            return Err(KdTreeError::DimensionMismatch(format!(
                "expected dimension {}, but found point with dimension {}",
                dimension,
                point.data.len()
            )));
        }
    }

    Ok((build_recursive(points, dimension as usize, 0), dimension))
}

/// Recursively builds the subtree over `points` at `depth`.
///
/// The split axis cycles through the dimensions (`depth mod dimension`), the
/// subset is sorted by that coordinate, and the lower median becomes the
/// node. The sort is deterministic, so ties on the split coordinate always
/// partition the same way for the same input.
fn build_recursive(
    mut points: Vec<PointData>,
    dimension: usize,
    depth: usize,
) -> Option<Box<KdNode>> {
    if points.is_empty() {
        return None;
    }

    let axis = depth % dimension;
    points.sort_unstable_by(|a, b| {
        a.data[axis].partial_cmp(&b.data[axis]).unwrap_or(Ordering::Equal)
    });

    let median = points.len() / 2;
    let right = points.split_off(median + 1);
    let element = points.pop()?; // points now ends at the median, so never None

    Some(Box::new(KdNode {
        element,
        axis,
        left: build_recursive(points, dimension, depth + 1),
        right: build_recursive(right, dimension, depth + 1),
    }))
}
