// src/core/index/kdtree/tree.rs

//! The core k-d tree node.

use crate::core::types::PointData;

/// A single node of the balanced k-d tree.
///
/// Every node stores the point chosen as the splitting pivot at its depth,
/// the coordinate axis used for the split (`depth mod dimension`), and
/// exclusively owned child subtrees. No node is shared between parents and
/// there are no cycles, so dropping the root tears down the whole tree.
///
/// Invariants maintained by the builder:
/// - every point in the left subtree has `data[axis] <=` this node's
///   coordinate at `axis`;
/// - every point in the right subtree has `data[axis] >=` it;
/// - subtree sizes differ by at most one, so the height is O(log n).
#[derive(Debug)]
pub struct KdNode {
    /// The point stored at this node.
    pub element: PointData,
    /// Coordinate index used to split this node's children.
    pub axis: usize,
    /// Left subtree (points at or below the split coordinate).
    pub left: Option<Box<KdNode>>,
    /// Right subtree (points at or above the split coordinate).
    pub right: Option<Box<KdNode>>,
}
