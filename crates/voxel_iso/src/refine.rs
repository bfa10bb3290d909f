//! Surface point refinement.
//!
//! Snaps an approximate point onto the level set `f(p) = target` with a
//! Newton step along the unit gradient. The derivative along that direction
//! is measured with a forward probe whose length scales with the cube size,
//! so the same code works on analytic fields and on trilinear grids.
//!
//! ```text
//!   p ──► e = |f(p) - target| ──► e <= tolerance ? ──► done
//!                                   │ no
//!                                   ▼
//!            n = ∇f / |∇f|,  f_probe = f(p + ε n)
//!                                   │
//!                                   ▼
//!            p += n ε (f - target) / (f - f_probe)    clamp inside domain
//! ```

use glam::DVec3;
use tracing::trace;

use crate::constants::{DEGENERATE_LENGTH_SQ, MAX_REFINE_ITERATIONS, PROBE_FRACTION};
use crate::error::RefineFailure;
use crate::field::{FieldSession, ScalarField};

/// Refinement parameters that stay fixed across many points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefineConfig {
  /// Level to snap onto.
  pub target: f64,

  /// Accepted `|f(p) - target|`.
  pub tolerance: f64,

  /// Give up when the error exceeds this bound. Zero or negative disables
  /// the check.
  pub max_allowed_error: f64,
}

impl Default for RefineConfig {
  fn default() -> Self {
    Self {
      target: 0.0,
      tolerance: 1e-9,
      max_allowed_error: 0.0,
    }
  }
}

impl RefineConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_target(mut self, target: f64) -> Self {
    self.target = target;
    self
  }

  pub fn with_tolerance(mut self, tolerance: f64) -> Self {
    self.tolerance = tolerance;
    self
  }

  pub fn with_max_allowed_error(mut self, bound: f64) -> Self {
    self.max_allowed_error = bound;
    self
  }

  /// Refine `point` with these parameters. See [`refine`].
  pub fn refine<F: ScalarField + ?Sized>(
    &self,
    session: &FieldSession<'_, F>,
    point: &mut DVec3,
    cube_scale: f64,
  ) -> Result<usize, RefineFailure> {
    refine(
      session,
      point,
      cube_scale,
      self.target,
      self.tolerance,
      self.max_allowed_error,
    )
  }
}

/// Move `point` onto the `target` level set of the session's field.
///
/// Returns the number of Newton steps taken. `point` is written only on
/// success; on failure it keeps its input value.
pub fn refine<F: ScalarField + ?Sized>(
  session: &FieldSession<'_, F>,
  point: &mut DVec3,
  cube_scale: f64,
  target: f64,
  tolerance: f64,
  max_allowed_error: f64,
) -> Result<usize, RefineFailure> {
  let epsilon = cube_scale.abs() * PROBE_FRACTION;
  let mut p = *point;
  let mut baseline = f64::INFINITY;

  for iteration in 0..MAX_REFINE_ITERATIONS {
    let value = session.value(p);
    let error = (value - target).abs();
    if error <= tolerance {
      trace!(iterations = iteration, error, "refined");
      *point = p;
      return Ok(iteration);
    }

    if iteration == 0 {
      baseline = error;
    }
    if max_allowed_error > 0.0 && error > max_allowed_error {
      return Err(RefineFailure::ErrorBoundExceeded {
        error,
        bound: max_allowed_error,
      });
    }

    let gradient = session.gradient(p);
    let length_sq = gradient.length_squared();
    if !(length_sq > DEGENERATE_LENGTH_SQ) || !length_sq.is_finite() {
      return Err(RefineFailure::FlatGradient);
    }
    let normal = gradient / length_sq.sqrt();

    let probe = session.value(p + normal * epsilon);
    let slope = value - probe;
    if slope == 0.0 || !slope.is_finite() {
      return Err(RefineFailure::FlatGradient);
    }

    if error > baseline {
      return Err(RefineFailure::Diverging {
        error,
        initial: baseline,
      });
    }

    p += normal * (epsilon * (value - target) / slope);
    p = session.bounds().clamp_inside(p, epsilon);
  }

  Err(RefineFailure::IterationLimit(MAX_REFINE_ITERATIONS))
}

#[cfg(test)]
#[path = "refine_test.rs"]
mod refine_test;
