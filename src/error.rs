//! Error types returned at the chart API boundary.

use thiserror::Error;

use crate::series::SeriesId;

/// Errors raised by series construction and data updates.
///
/// These are precondition violations: the caller handed over data that does
/// not fit the series. The series is left untouched when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// Coordinate component arrays have different lengths.
    #[error("coordinate arrays differ in length: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Length of the first component array.
        expected: usize,
        /// Length of the offending component array.
        actual: usize,
    },

    /// More samples than the series was allocated for.
    #[error("write of {requested} samples exceeds series capacity of {capacity}")]
    CapacityExceeded {
        /// Allocated sample capacity.
        capacity: usize,
        /// Number of samples in the rejected write.
        requested: usize,
    },

    /// Surface vertex count does not describe a `width x height` grid.
    #[error("surface grid {width}x{height} does not match {len} vertices")]
    InvalidGrid {
        /// Grid width in samples.
        width: usize,
        /// Grid height in samples.
        height: usize,
        /// Number of vertices provided.
        len: usize,
    },

    /// No series with this id is attached to the chart.
    #[error("series {0:?} is not attached to this chart")]
    SeriesNotFound(SeriesId),
}

/// Result alias for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;
