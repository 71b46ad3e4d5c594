// src/core/index/linear.rs

//! Linear-scan k-nearest-neighbor baseline.
//!
//! A full-pass classifier over a labeled point set: compute every distance,
//! heapify, pop the k closest, majority-vote their labels. O(N + k log N)
//! per query. Useful on its own for small datasets and as a brute-force
//! oracle for the k-d tree.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::common::NeighborsError;
use crate::core::metric::DistanceMetric;
use crate::core::types::PointData;

/// Entry in the scan heap.
///
/// The ordering is reversed so `BinaryHeap` acts as a min-heap keyed on
/// distance; ties on distance resolve by training-set position, so equally
/// distant points pop in insertion order.
#[derive(Debug)]
struct ScanCandidate {
    distance: f32,
    index: usize,
}

impl PartialEq for ScanCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.distance == other.distance
    }
}

impl Eq for ScanCandidate {}

impl PartialOrd for ScanCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScanCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Linear-scan k-NN classifier over a labeled training set.
///
/// Holds the points, one label per point, the neighbor count `k`, and the
/// distance metric. Immutable after construction.
#[derive(Debug)]
pub struct LinearScanKnn<M, L> {
    points: Vec<PointData>,
    labels: Vec<L>,
    k: usize,
    metric: M,
}

impl<M, L> LinearScanKnn<M, L>
where
    M: DistanceMetric,
    L: Clone + PartialEq,
{
    /// Creates a classifier over `points` with one label per point.
    ///
    /// # Errors
    /// `NeighborsError::InvalidInput` when `k == 0` (a classifier must
    /// produce a label), the training set is empty, or the points and labels
    /// counts differ; `NeighborsError::DimensionMismatch` when the points do
    /// not all share one dimension.
    pub fn new(
        points: Vec<PointData>,
        labels: Vec<L>,
        k: usize,
        metric: M,
    ) -> Result<Self, NeighborsError> {
        if k == 0 {
            return Err(NeighborsError::InvalidInput {
                message: "k must be at least 1 for classification".to_string(),
            });
        }
        if points.is_empty() {
            return Err(NeighborsError::InvalidInput {
                message: "training set must not be empty".to_string(),
            });
        }
        if points.len() != labels.len() {
            return Err(NeighborsError::InvalidInput {
                message: format!("{} points but {} labels", points.len(), labels.len()),
            });
        }
        let dimension = points[0].dimension;
        for point in &points {
            if point.dimension != dimension || point.data.len() != dimension as usize {
                return Err(NeighborsError::DimensionMismatch {
                    dim1: dimension as usize,
                    dim2: point.data.len(),
                });
            }
        }

        Ok(Self { points, labels, k, metric })
    }

    /// Number of training points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: the constructor rejects an empty training set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The configured neighbor count.
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k
    }

    /// Returns the label of the majority among the `k` nearest training
    /// points (`k` clamped to the training-set size). Ties between equally
    /// frequent labels go to the label encountered first among the
    /// neighbors, in ascending-distance order.
    ///
    /// # Errors
    /// `NeighborsError::DimensionMismatch` when the query's dimension does
    /// not match the training points'.
    pub fn classify(&self, query: &PointData) -> Result<L, NeighborsError> {
        let closest = self.closest(query, self.k)?;

        // Count votes in first-seen order so ties resolve to the earlier
        // label, matching the heap's pop order.
        let mut counts: Vec<(&L, usize)> = Vec::new();
        for &(index, _) in &closest {
            let label = &self.labels[index];
            match counts.iter_mut().find(|(seen, _)| *seen == label) {
                Some(entry) => entry.1 += 1,
                None => counts.push((label, 1)),
            }
        }

        let mut winner: Option<(&L, usize)> = None;
        for (label, count) in counts {
            match winner {
                Some((_, best)) if count <= best => {}
                _ => winner = Some((label, count)),
            }
        }

        winner.map(|(label, _)| label.clone()).ok_or_else(|| {
            NeighborsError::Internal("no vote candidates for a non-empty training set".to_string())
        })
    }

    /// The `k` training points closest to `query` with their distances,
    /// ascending. Exposed so the scan can serve as a correctness oracle for
    /// tree-based search.
    ///
    /// # Errors
    /// Same as [`Self::classify`].
    pub fn neighbors(
        &self,
        query: &PointData,
        k: usize,
    ) -> Result<Vec<(PointData, f32)>, NeighborsError> {
        let closest = self.closest(query, k)?;
        Ok(closest
            .into_iter()
            .map(|(index, distance)| (self.points[index].clone(), distance))
            .collect())
    }

    /// Pops the `count` closest training points (clamped to the set size).
    /// Returns `(training index, distance)` pairs ascending by distance.
    fn closest(&self, query: &PointData, count: usize) -> Result<Vec<(usize, f32)>, NeighborsError> {
        let mut candidates = Vec::with_capacity(self.points.len());
        for (index, point) in self.points.iter().enumerate() {
            let distance = self.metric.distance(&point.data, &query.data)?;
            candidates.push(ScanCandidate { distance, index });
        }

        // O(N) heapify, then O(log N) per pop.
        let mut heap = BinaryHeap::from(candidates);
        let count = count.min(self.points.len());
        let mut closest = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(candidate) = heap.pop() {
                closest.push((candidate.index, candidate.distance));
            }
        }

        Ok(closest)
    }
}
