// File: crates/chart-geometry/src/error.rs
// Summary: Error taxonomy for the geometry layer.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A calculator precondition failed (tick count, empty values, zero total).
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Data-to-pixel mapping was asked to divide by a max value that is not positive.
    #[error("non-positive scale: max value {0} must be finite and greater than zero")]
    NonPositiveScale(f32),

    /// The computed shape would carry NaN/Infinity into a drawn path.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
