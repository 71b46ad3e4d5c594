// src/core/selection/mod.rs

//! Model selection over an abstract classifier.
//!
//! Simple (hold-out) cross-validation: split the labeled data into train,
//! validation, and test sets, sweep the neighbor count `k`, keep the `k`
//! scoring best on validation, and report accuracy on the untouched test
//! set. The selection loop drives classifiers only through the
//! [`Classifier`] fit/score abstraction.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::core::common::NeighborsError;
use crate::core::index::linear::LinearScanKnn;
use crate::core::metric::DistanceMetric;
use crate::core::types::PointData;

/// Minimal fit/score abstraction the selection loop operates on.
pub trait Classifier<L> {
    /// Learns from a labeled training set.
    ///
    /// # Errors
    /// Implementation-specific input validation failures.
    fn fit(&mut self, points: &[PointData], labels: &[L]) -> Result<(), NeighborsError>;

    /// Mean accuracy over a labeled evaluation set.
    ///
    /// # Errors
    /// `NeighborsError::InvalidInput` when called before `fit` or on an
    /// empty evaluation set.
    fn score(&self, points: &[PointData], labels: &[L]) -> Result<f32, NeighborsError>;
}

/// [`Classifier`] adapter over the linear-scan k-NN baseline for a fixed
/// neighbor count.
#[derive(Debug)]
pub struct KnnClassifier<M, L> {
    k: usize,
    metric: M,
    fitted: Option<LinearScanKnn<M, L>>,
}

impl<M, L> KnnClassifier<M, L>
where
    M: DistanceMetric + Clone,
    L: Clone + PartialEq,
{
    /// Creates an unfitted classifier with the given neighbor count.
    pub const fn new(k: usize, metric: M) -> Self {
        Self { k, metric, fitted: None }
    }

    /// The configured neighbor count.
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k
    }
}

impl<M, L> Classifier<L> for KnnClassifier<M, L>
where
    M: DistanceMetric + Clone,
    L: Clone + PartialEq,
{
    fn fit(&mut self, points: &[PointData], labels: &[L]) -> Result<(), NeighborsError> {
        self.fitted = Some(LinearScanKnn::new(
            points.to_vec(),
            labels.to_vec(),
            self.k,
            self.metric.clone(),
        )?);
        Ok(())
    }

    fn score(&self, points: &[PointData], labels: &[L]) -> Result<f32, NeighborsError> {
        let model = self.fitted.as_ref().ok_or_else(|| NeighborsError::InvalidInput {
            message: "classifier must be fit before scoring".to_string(),
        })?;
        if points.len() != labels.len() {
            return Err(NeighborsError::InvalidInput {
                message: format!("{} points but {} labels", points.len(), labels.len()),
            });
        }
        if points.is_empty() {
            return Err(NeighborsError::InvalidInput {
                message: "cannot score on an empty evaluation set".to_string(),
            });
        }

        let mut correct = 0_usize;
        for (p, label) in points.iter().zip(labels.iter()) {
            if model.classify(p)? == *label {
                correct += 1;
            }
        }
        Ok(correct as f32 / points.len() as f32)
    }
}

/// One train/test partition of a labeled point set.
#[derive(Debug)]
pub struct Split<L> {
    pub train_points: Vec<PointData>,
    pub train_labels: Vec<L>,
    pub test_points: Vec<PointData>,
    pub test_labels: Vec<L>,
}

/// Shuffles the labeled set with a seeded rng and splits off a test set of
/// roughly `test_fraction` of the samples (at least one sample lands on each
/// side). The same seed always produces the same split.
///
/// # Errors
/// `NeighborsError::InvalidInput` when the lengths differ, fewer than two
/// samples are supplied, or `test_fraction` is outside `(0, 1)`.
pub fn train_test_split<L: Clone>(
    points: &[PointData],
    labels: &[L],
    test_fraction: f32,
    seed: u64,
) -> Result<Split<L>, NeighborsError> {
    if points.len() != labels.len() {
        return Err(NeighborsError::InvalidInput {
            message: format!("{} points but {} labels", points.len(), labels.len()),
        });
    }
    if points.len() < 2 {
        return Err(NeighborsError::InvalidInput {
            message: "need at least 2 samples to split".to_string(),
        });
    }
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(NeighborsError::InvalidInput {
            message: format!("test_fraction must be in (0, 1), got {}", test_fraction),
        });
    }

    let mut indices: Vec<usize> = (0..points.len()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_len =
        ((points.len() as f32 * test_fraction).round() as usize).clamp(1, points.len() - 1);
    let (test_idx, train_idx) = indices.split_at(test_len);

    Ok(Split {
        train_points: train_idx.iter().map(|&i| points[i].clone()).collect(),
        train_labels: train_idx.iter().map(|&i| labels[i].clone()).collect(),
        test_points: test_idx.iter().map(|&i| points[i].clone()).collect(),
        test_labels: test_idx.iter().map(|&i| labels[i].clone()).collect(),
    })
}

/// Result of a neighbor-count sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOutcome {
    /// The `k` that scored best on the validation set.
    pub best_k: usize,
    /// Its accuracy on the validation set.
    pub validation_score: f32,
    /// Accuracy of the refit winner on the held-out test set.
    pub test_score: f32,
}

/// Picks the best neighbor count by simple cross-validation.
///
/// The labeled set is split 80/20 into a working set and a test set, and the
/// working set 75/25 into train and validation (60/20/20 overall). Every
/// `k` in `1..=max_k` is fit on train and scored on validation; the winner
/// is refit on the whole working set and scored once on test. Classifiers
/// are produced by `make_classifier`, so any [`Classifier`] implementation
/// can be swept.
///
/// # Errors
/// `NeighborsError::InvalidInput` when `max_k == 0` or the set is too small
/// to split twice; any error the classifier raises during fit or score.
pub fn best_k_simple_validation<L, C, F>(
    points: &[PointData],
    labels: &[L],
    max_k: usize,
    seed: u64,
    mut make_classifier: F,
) -> Result<SelectionOutcome, NeighborsError>
where
    L: Clone + PartialEq,
    C: Classifier<L>,
    F: FnMut(usize) -> C,
{
    if max_k == 0 {
        return Err(NeighborsError::InvalidInput {
            message: "max_k must be at least 1".to_string(),
        });
    }

    let outer = train_test_split(points, labels, 0.2, seed)?;
    // The inner test split serves as the validation set.
    let inner = train_test_split(&outer.train_points, &outer.train_labels, 0.25, seed)?;

    let mut best_k = 0_usize;
    let mut best_score = f32::NEG_INFINITY;
    for k in 1..=max_k {
        let mut classifier = make_classifier(k);
        classifier.fit(&inner.train_points, &inner.train_labels)?;
        let score = classifier.score(&inner.test_points, &inner.test_labels)?;
        if score > best_score {
            best_k = k;
            best_score = score;
        }
    }

    let mut winner = make_classifier(best_k);
    winner.fit(&outer.train_points, &outer.train_labels)?;
    let test_score = winner.score(&outer.test_points, &outer.test_labels)?;

    Ok(SelectionOutcome { best_k, validation_score: best_score, test_score })
}
