// src/core/index/kdtree/search.rs

//! Bounded-heap backtracking k-nearest-neighbor search over the k-d tree.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::slice;

use super::error::KdTreeError;
use super::tree::KdNode;
use crate::core::metric::DistanceMetric;
use crate::core::types::PointData;

/// A candidate in the bounded priority queue.
///
/// The queue is a max-heap keyed on distance to the query, so the worst of
/// the k current candidates sits at the top and can be inspected in O(1) and
/// replaced in O(log k). Equal distances compare equal; which of two tied
/// candidates survives an eviction is then fixed by heap order, which is
/// deterministic for a given input.
#[derive(Debug)]
struct Neighbor<'a> {
    distance: f32,
    element: &'a PointData,
}

impl PartialEq for Neighbor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl Eq for Neighbor<'_> {}

impl PartialOrd for Neighbor<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Neighbor<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.partial_cmp(&other.distance).unwrap_or(Ordering::Equal)
    }
}

/// Performs a k-nearest-neighbor search from `root`.
///
/// # Returns
/// `(point, distance)` pairs sorted ascending by distance to `query`;
/// `min(k, tree size)` of them. `k == 0` and an absent root both yield an
/// empty result rather than an error.
///
/// # Errors
/// `KdTreeError::DimensionMismatch` when the query vector's dimension does
/// not match the tree's.
pub fn find_knn<M: DistanceMetric>(
    root: Option<&KdNode>,
    metric: &M,
    query: &PointData,
    k: usize,
    dimension: u32,
) -> Result<Vec<(PointData, f32)>, KdTreeError> {
    if k == 0 {
        return Ok(Vec::new());
    }
    let root = match root {
        Some(node) => node,
        None => return Ok(Vec::new()), // empty tree
    };
    if query.dimension != dimension || query.data.len() != dimension as usize {
        return Err(KdTreeError::DimensionMismatch(format!(
            "query vector dimension {} does not match tree dimension {}",
            query.dimension, dimension
        )));
    }

    let mut best: BinaryHeap<Neighbor<'_>> = BinaryHeap::with_capacity(k + 1);
    search_recursive(root, metric, query, k, &mut best)?;

    let mut results: Vec<(PointData, f32)> = best
        .into_iter()
        .map(|neighbor| (neighbor.element.clone(), neighbor.distance))
        .collect();
    results.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    Ok(results)
}

fn search_recursive<'a, M: DistanceMetric>(
    node: &'a KdNode,
    metric: &M,
    query: &PointData,
    k: usize,
    best: &mut BinaryHeap<Neighbor<'a>>,
) -> Result<(), KdTreeError> {
    let axis = node.axis;

    let full_distance = metric.distance(&node.element.data, &query.data)?;
    // Distance along the split axis alone. Everything in the far subtree
    // differs from the query by at least this much on `axis`, so it is a
    // lower bound on any far-subtree distance; it doubles as the admission
    // threshold below.
    let axis_distance = metric.distance(
        slice::from_ref(&node.element.data[axis]),
        slice::from_ref(&query.data[axis]),
    )?;

    if best.len() < k {
        best.push(Neighbor { distance: full_distance, element: &node.element });
    } else if best.peek().map_or(false, |worst| axis_distance < worst.distance) {
        // Push-then-pop keeps the queue at k entries and evicts whichever
        // candidate is now the worst, possibly the one just pushed.
        best.push(Neighbor { distance: full_distance, element: &node.element });
        best.pop();
    }

    // Descend first into the side of the split that contains the query.
    let (near, far) = if query.data[axis] <= node.element.data[axis] {
        (node.left.as_deref(), node.right.as_deref())
    } else {
        (node.right.as_deref(), node.left.as_deref())
    };

    if let Some(child) = near {
        search_recursive(child, metric, query, k, best)?;
    }

    // Explore the far subtree only while the queue is short of k candidates
    // or the split plane is closer than the current k-th best distance.
    if best.len() < k || best.peek().map_or(true, |worst| axis_distance < worst.distance) {
        if let Some(child) = far {
            search_recursive(child, metric, query, k, best)?;
        }
    }

    Ok(())
}
