//! Curve tracing on an implicit surface.
//!
//! A trace starts at a surface point and repeatedly steps along a
//! [`TracePolicy`] direction, snapping each new point back onto the surface
//! with [`refine`]. Two traces from the same seed, one per direction, are
//! chained into a [`Stroke`]; [`generate_strokes`] does that for many seeds
//! spread over a polygonized surface.
//!
//! ```text
//!   seed ──► direction(p) ──► p + step·dir ──► refine ──► record
//!     ▲                                                     │
//!     └──────────────── until length reached ◄──────────────┘
//!
//!   stroke = reverse(backward) ++ forward[1..]
//!            ●───●───●───◉───●───●───●
//!                      seed
//! ```

mod coverage;
mod policy;
mod strokes;

pub use coverage::{AreaWeightedCoverage, PointCoverage};
pub use policy::TracePolicy;
pub use strokes::{generate_strokes, StrokeConfig, StrokePolicy};

use glam::DVec3;

use crate::error::RefineFailure;
use crate::field::{FieldSession, ScalarField};
use crate::refine::refine;

/// Which way the first step goes from the seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceDirection {
  Forward,
  Backward,
}

impl TraceDirection {
  #[inline]
  pub fn sign(self) -> f64 {
    match self {
      TraceDirection::Forward => 1.0,
      TraceDirection::Backward => -1.0,
    }
  }
}

/// Why a trace stopped. None of these are errors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TraceEnd {
  /// Requested length covered.
  LengthReached,

  /// The policy gave no direction at the last point.
  NoDirection,

  /// The next step would leave the field's domain.
  LeftDomain,

  /// The next point could not be snapped onto the surface.
  RefineFailed(RefineFailure),

  /// A constant-axis trace drifted past the allowed deviation.
  AxisDeviation,

  /// The configured step is zero, negative or not finite.
  InvalidStep,
}

/// Points recorded by one directional trace, seed first.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
  pub points: Vec<DVec3>,
  pub length: f64,
  pub end: TraceEnd,
}

/// Open curve through a seed, built from a backward and a forward trace.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
  pub points: Vec<DVec3>,

  /// Index of the seed in `points`.
  pub seed_index: usize,
}

impl Stroke {
  pub fn seed(&self) -> DVec3 {
    self.points[self.seed_index]
  }

  /// Polyline length.
  pub fn length(&self) -> f64 {
    self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
  }
}

/// Tracing parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceConfig {
  /// Distance advanced per step before refinement.
  pub step: f64,

  /// Level set the trace stays on.
  pub threshold: f64,

  /// Refinement tolerance on `|f(p) - threshold|`.
  pub tolerance: f64,

  /// Refinement gives up beyond this field error. Zero disables the bound.
  pub max_allowed_error: f64,

  /// Largest allowed drift of the axis coordinate for
  /// [`TracePolicy::ConstantAxis`].
  pub axis_deviation: f64,

  /// Probe distance for the silhouette policies.
  pub probe_offset: f64,
}

impl Default for TraceConfig {
  fn default() -> Self {
    Self {
      step: 0.02,
      threshold: 0.0,
      tolerance: 1e-9,
      max_allowed_error: 1.0,
      axis_deviation: 0.01,
      probe_offset: 1e-4,
    }
  }
}

impl TraceConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_step(mut self, step: f64) -> Self {
    self.step = step;
    self
  }

  pub fn with_threshold(mut self, threshold: f64) -> Self {
    self.threshold = threshold;
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

  pub fn with_axis_deviation(mut self, deviation: f64) -> Self {
    self.axis_deviation = deviation;
    self
  }

  pub fn with_probe_offset(mut self, offset: f64) -> Self {
    self.probe_offset = offset;
    self
  }
}

/// Trace from `seed` along `policy` for up to `length`.
///
/// The seed is always the first point. A `length` of zero (or less) returns
/// just the seed, as does a step that is not positive and finite.
pub fn trace<F: ScalarField + ?Sized>(
  session: &FieldSession<'_, F>,
  seed: DVec3,
  policy: &TracePolicy,
  direction: TraceDirection,
  length: f64,
  config: &TraceConfig,
) -> Trace {
  let mut points = vec![seed];
  let mut p = seed;
  let mut travelled = 0.0;
  let mut previous: Option<DVec3> = None;

  let end = loop {
    if travelled >= length {
      break TraceEnd::LengthReached;
    }
    if !(config.step > 0.0 && config.step.is_finite()) {
      break TraceEnd::InvalidStep;
    }

    let Some(mut dir) = policy.direction(session, p, config.probe_offset) else {
      break TraceEnd::NoDirection;
    };
    match previous {
      Some(prev) if dir.dot(prev) < 0.0 => dir = -dir,
      Some(_) => {}
      None => dir *= direction.sign(),
    }

    let mut next = p + dir * config.step;
    if !session.contains(next) {
      break TraceEnd::LeftDomain;
    }
    if let Err(failure) = refine(
      session,
      &mut next,
      config.step,
      config.threshold,
      config.tolerance,
      config.max_allowed_error,
    ) {
      break TraceEnd::RefineFailed(failure);
    }

    if let TracePolicy::ConstantAxis(axis) = policy {
      let i = axis.index();
      if (next[i] - seed[i]).abs() > config.axis_deviation {
        break TraceEnd::AxisDeviation;
      }
    }

    points.push(next);
    travelled += config.step;
    previous = Some(dir);
    p = next;
  };

  tracing::trace!(
    session = session.id().raw(),
    ?direction,
    points = points.len(),
    ?end,
    "trace finished"
  );
  Trace {
    points,
    length: travelled,
    end,
  }
}

/// Join a forward and a backward trace from the same seed into one curve.
///
/// The backward half is reversed so the curve runs through the seed once.
/// Returns `None` when fewer than two points remain.
pub fn chain(forward: Trace, backward: Trace) -> Option<Stroke> {
  let seed_index = backward.points.len().checked_sub(1)?;
  let mut points = backward.points;
  points.reverse();
  points.extend(forward.points.into_iter().skip(1));

  (points.len() >= 2).then_some(Stroke { points, seed_index })
}

/// Trace both ways from `seed` and chain the halves.
///
/// Each half covers `length / 2`, so the stroke spans about `length`.
pub fn trace_stroke<F: ScalarField + ?Sized>(
  session: &FieldSession<'_, F>,
  seed: DVec3,
  policy: &TracePolicy,
  length: f64,
  config: &TraceConfig,
) -> Option<Stroke> {
  let half = 0.5 * length;
  let forward = trace(session, seed, policy, TraceDirection::Forward, half, config);
  let backward = trace(session, seed, policy, TraceDirection::Backward, half, config);
  chain(forward, backward)
}
