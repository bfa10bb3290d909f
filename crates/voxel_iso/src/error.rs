//! Error types for polygonization, refinement and grid construction.

use thiserror::Error;

/// Errors raised while turning one cube into polygons.
///
/// These are per-cube: a sweep decides through its
/// [`InvalidCubePolicy`](crate::types::InvalidCubePolicy) whether to skip the
/// cube or stop.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolygonizeError {
  /// A face had an odd number of crossed edges.
  #[error("face {face} has {crossings} crossed edges (expected 0, 2 or 4)")]
  InconsistentFace {
    /// Face index (see [`FACE_EDGES`](crate::edge_table::FACE_EDGES)).
    face: usize,
    /// Number of crossed edges found on the face.
    crossings: usize,
  },

  /// A 4-crossing face could not be split into two same-corner pairs.
  #[error("saddle face {face} has no consistent high-corner pairing")]
  UnresolvedSaddle {
    /// Face index.
    face: usize,
  },

  /// Segment chaining ran out of segments before the loop closed.
  #[error("polygon did not close after {vertices} vertices")]
  OpenPolygon {
    /// Vertices collected before chaining stopped.
    vertices: usize,
  },
}

/// Why a surface point refinement gave up.
///
/// These are expected outcomes: callers drop the point or end the trace.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RefineFailure {
  /// Error exceeded the caller's allowed bound.
  #[error("field error {error} exceeds allowed bound {bound}")]
  ErrorBoundExceeded { error: f64, bound: f64 },

  /// Gradient vanished or the probe could not resolve a derivative.
  #[error("no usable step direction")]
  FlatGradient,

  /// Error grew beyond the first iteration's error.
  #[error("diverging: error {error} above initial {initial}")]
  Diverging { error: f64, initial: f64 },

  /// Iteration cap reached without converging.
  #[error("no convergence after {0} iterations")]
  IterationLimit(usize),
}

/// Errors building a sampled scalar grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
  /// Value buffer length does not match the grid dimensions.
  #[error("expected {expected} samples for the grid, got {actual}")]
  SampleCountMismatch { expected: usize, actual: usize },

  /// An axis has fewer than two samples, so it holds no cubes.
  #[error("grid axis {axis} has {samples} samples (need at least 2)")]
  TooFewSamples { axis: usize, samples: usize },

  /// Sweep stride of zero.
  #[error("sweep stride must be at least 1")]
  ZeroStride,

  /// Sample spacing must be positive and finite.
  #[error("invalid grid spacing {0:?}")]
  InvalidSpacing([f64; 3]),
}

/// Result type for polygonization.
pub type PolygonizeResult<T> = std::result::Result<T, PolygonizeError>;

/// Result type for grid construction.
pub type GridResult<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_display() {
    let err = PolygonizeError::InconsistentFace {
      face: 3,
      crossings: 1,
    };
    assert_eq!(
      format!("{err}"),
      "face 3 has 1 crossed edges (expected 0, 2 or 4)"
    );

    let err = RefineFailure::IterationLimit(20);
    assert!(format!("{err}").contains("20"));

    let err = GridError::SampleCountMismatch {
      expected: 8,
      actual: 7,
    };
    assert!(format!("{err}").contains("expected 8"));
  }
}
