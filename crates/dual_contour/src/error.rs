//! Error types for contour extraction.
//!
//! Only malformed input aborts an extraction. Degenerate QEF systems are
//! resolved by the solver's fallback ladder and never surface here.

use thiserror::Error;

/// Errors that can occur while configuring or running an extraction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContourError {
  /// Grid bounds are empty, inverted or non-finite on one axis.
  #[error("invalid bounds on axis {axis}: min {min} must be finite and below max {max}")]
  InvalidBounds {
    /// Offending axis.
    axis: usize,
    /// Lower bound supplied.
    min: f64,
    /// Upper bound supplied.
    max: f64,
  },

  /// Cell size is zero, negative or non-finite.
  #[error("cell size must be positive and finite, got {0}")]
  InvalidCellSize(f64),

  /// The grid holds more cells than mesh indices can address.
  #[error("grid of {cells} cells exceeds the addressable limit")]
  TooManyCells {
    /// Number of cells the bounds would produce (saturated).
    cells: usize,
  },

  /// Bias strength is negative or non-finite.
  #[error("bias strength must be non-negative and finite, got {0}")]
  InvalidBiasStrength(f64),

  /// Finite difference step is zero, negative or non-finite.
  #[error("finite difference step must be positive and finite, got {0}")]
  InvalidStep(f64),

  /// Interpolation was requested between two samples of the same sign.
  #[error("values {v0} and {v1} do not have opposite sign")]
  NoSignChange {
    /// Sample at the start of the edge.
    v0: f64,
    /// Sample at the end of the edge.
    v1: f64,
  },

  /// The field produced a zero-length or non-finite normal at a crossing.
  #[error("field normal at {point:?} is degenerate")]
  DegenerateNormal {
    /// Crossing position where the normal was evaluated.
    point: Vec<f64>,
  },
}

/// Result type alias for contour extraction.
pub type ContourResult<T> = Result<T, ContourError>;
