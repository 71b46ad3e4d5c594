// src/core/index/kdtree/mod.rs

//! Balanced k-d tree with exact k-nearest-neighbor queries.

// Re-export key components for easier use.
pub use self::error::KdTreeError;

use self::tree::KdNode;
use crate::core::metric::DistanceMetric;
use crate::core::types::PointData;

// Modules within the kdtree crate
mod builder;
mod error;
mod search;
mod tree;

#[cfg(test)]
mod tests;

/// `SpatialTree`: a balanced k-d tree over a fixed set of points.
///
/// Built once from an owned point collection and a caller-supplied distance
/// metric, and immutable afterwards: there is no insertion or removal API,
/// and queries take `&self`, so concurrent readers may issue overlapping
/// searches against one instance without locking.
///
/// Construction partitions the points recursively: at depth `d` the subset
/// is sorted by coordinate `d mod D` and the lower median becomes the node,
/// which yields a height-balanced tree. Search walks the tree with a bounded
/// max-priority-queue of the k best candidates, pruning any subtree whose
/// split plane is provably farther than the current k-th best distance.
///
/// The metric must be axis-decomposable (see
/// [`DistanceMetric`](crate::core::metric::DistanceMetric)) because the
/// pruning bound restricts it to a single coordinate.
#[derive(Debug)]
pub struct SpatialTree<M: DistanceMetric> {
    /// Root node; `None` for a tree built from an empty point set.
    root: Option<Box<KdNode>>,
    /// Number of indexed points.
    size: usize,
    /// Fixed dimension of the indexed points (0 when the tree is empty).
    dimension: u32,
    /// The metric supplied at construction, used by every search.
    metric: M,
}

impl<M: DistanceMetric> SpatialTree<M> {
    /// Builds a balanced tree from `points`.
    ///
    /// An empty collection produces a valid tree of size 0; queries against
    /// it return empty results rather than failing.
    ///
    /// # Errors
    /// `KdTreeError::DimensionMismatch` when the points do not all share a
    /// single dimension `D >= 1`.
    pub fn build(points: Vec<PointData>, metric: M) -> Result<Self, KdTreeError> {
        let size = points.len();
        let (root, dimension) = builder::build_root(points)?;
        Ok(Self { root, size, dimension, metric })
    }

    /// Number of points indexed by the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree indexes no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Dimensionality of the indexed points; 0 for an empty tree.
    #[must_use]
    pub const fn dimension(&self) -> u32 {
        self.dimension
    }

    /// Returns the `k` points closest to `query`, ascending by distance.
    ///
    /// The result holds `min(k, len())` entries: a `k` larger than the tree
    /// returns every point, and `k == 0` returns an empty vector (a
    /// documented policy, not an error).
    ///
    /// # Errors
    /// `KdTreeError::DimensionMismatch` when the query's dimension does not
    /// match the tree's.
    pub fn search_knn(
        &self,
        query: &PointData,
        k: usize,
    ) -> Result<Vec<(PointData, f32)>, KdTreeError> {
        search::find_knn(self.root.as_deref(), &self.metric, query, k, self.dimension)
    }

    /// Returns the single nearest point and its distance, or `None` for an
    /// empty tree.
    ///
    /// # Errors
    /// Same as [`Self::search_knn`].
    pub fn search_nn(&self, query: &PointData) -> Result<Option<(PointData, f32)>, KdTreeError> {
        Ok(self.search_knn(query, 1)?.into_iter().next())
    }
}
