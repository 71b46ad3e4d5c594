// src/core/types/mod.rs

//! Core data types shared across the crate.

/// An owned, fixed-length coordinate vector.
///
/// Points are immutable value data: equality between points carries no
/// spatial meaning and is only used by callers for bookkeeping. The
/// `dimension` field always matches `data.len()` when the point was created
/// through [`PointData::new`] or [`PointData::from_coords`].
#[derive(Debug, Clone, PartialEq)]
pub struct PointData {
    /// Dimensionality of the point.
    pub dimension: u32,
    /// The coordinates, one `f32` per dimension.
    pub data: Vec<f32>,
}

impl PointData {
    /// Creates a point after checking that `data` has exactly `dimension`
    /// coordinates. Returns `None` on a length mismatch.
    #[must_use]
    pub fn new(dimension: u32, data: Vec<f32>) -> Option<Self> {
        if data.len() == dimension as usize {
            Some(Self { dimension, data })
        } else {
            None
        }
    }

    /// Creates a point whose dimension is taken from the coordinate count.
    #[must_use]
    pub fn from_coords(data: Vec<f32>) -> Self {
        let dimension = data.len() as u32;
        Self { dimension, data }
    }

    /// Check that every coordinate is finite (no NaN or infinite values).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.data.iter().all(|&x| x.is_finite())
    }
}
