//! Stroke coverage: many strokes spread over a polygonized surface.
//!
//! ```text
//!   MeshOutput ──► PointCoverage ──► seeds
//!                                      │  outside domain → dropped
//!                                      ▼
//!                                   refine  ── failure → dropped
//!                                      │
//!                                      ▼
//!                       target length (random or view-weighted)
//!                                      │
//!                                      ▼
//!                     trace_stroke per policy (1 or 2 strokes)
//! ```

use glam::DVec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::{smallvec, SmallVec};
use tracing::{debug, info_span};

use super::coverage::PointCoverage;
use super::policy::{unit, TracePolicy};
use super::{trace_stroke, Stroke, TraceConfig};
use crate::field::{Axis, FieldSession, ScalarField};
use crate::refine::refine;
use crate::types::MeshOutput;

/// Which direction fields to trace from each seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrokePolicy {
  #[default]
  MaxCurvature,
  MinCurvature,
  /// One stroke along each principal direction.
  BothCurvatures,
  ConstantAxis(Axis),
  Silhouette,
  SilhouetteOrthogonal,
  /// One silhouette stroke and one orthogonal stroke.
  SilhouetteAndOrthogonal,
}

impl StrokePolicy {
  /// Trace policies run from every seed, in output order.
  pub fn trace_policies(self, view: DVec3) -> SmallVec<[TracePolicy; 2]> {
    match self {
      StrokePolicy::MaxCurvature => smallvec![TracePolicy::MaxCurvature],
      StrokePolicy::MinCurvature => smallvec![TracePolicy::MinCurvature],
      StrokePolicy::BothCurvatures => {
        smallvec![TracePolicy::MaxCurvature, TracePolicy::MinCurvature]
      }
      StrokePolicy::ConstantAxis(axis) => smallvec![TracePolicy::ConstantAxis(axis)],
      StrokePolicy::Silhouette => smallvec![TracePolicy::Silhouette { view }],
      StrokePolicy::SilhouetteOrthogonal => smallvec![TracePolicy::SilhouetteOrthogonal { view }],
      StrokePolicy::SilhouetteAndOrthogonal => smallvec![
        TracePolicy::Silhouette { view },
        TracePolicy::SilhouetteOrthogonal { view }
      ],
    }
  }

  /// True if stroke length is weighted by the view angle.
  pub fn is_silhouette(self) -> bool {
    matches!(
      self,
      StrokePolicy::Silhouette
        | StrokePolicy::SilhouetteOrthogonal
        | StrokePolicy::SilhouetteAndOrthogonal
    )
  }
}

/// Configuration for [`generate_strokes`].
#[derive(Clone, Debug)]
pub struct StrokeConfig {
  /// Number of seed points requested from the coverage service.
  pub count: usize,

  pub policy: StrokePolicy,

  /// Shortest target stroke length (still raised to `2 * step`).
  pub min_length: f64,

  /// Longest target stroke length.
  pub max_length: f64,

  /// Exponent shaping the length distribution between the bounds.
  pub length_power: f64,

  /// View vector for the silhouette policies.
  pub view: DVec3,

  /// Seed for the length generator.
  pub seed: u64,

  /// Step, threshold and refinement settings for each trace.
  pub trace: TraceConfig,
}

impl Default for StrokeConfig {
  fn default() -> Self {
    Self {
      count: 100,
      policy: StrokePolicy::default(),
      min_length: 0.1,
      max_length: 0.5,
      length_power: 1.0,
      view: DVec3::Z,
      seed: 0,
      trace: TraceConfig::default(),
    }
  }
}

impl StrokeConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_count(mut self, count: usize) -> Self {
    self.count = count;
    self
  }

  pub fn with_policy(mut self, policy: StrokePolicy) -> Self {
    self.policy = policy;
    self
  }

  pub fn with_lengths(mut self, min_length: f64, max_length: f64) -> Self {
    self.min_length = min_length;
    self.max_length = max_length;
    self
  }

  pub fn with_length_power(mut self, power: f64) -> Self {
    self.length_power = power;
    self
  }

  pub fn with_view(mut self, view: DVec3) -> Self {
    self.view = view;
    self
  }

  pub fn with_seed(mut self, seed: u64) -> Self {
    self.seed = seed;
    self
  }

  pub fn with_step(mut self, step: f64) -> Self {
    self.trace.step = step;
    self
  }

  pub fn with_threshold(mut self, threshold: f64) -> Self {
    self.trace.threshold = threshold;
    self
  }

  pub fn with_trace_config(mut self, trace: TraceConfig) -> Self {
    self.trace = trace;
    self
  }

  /// Stroke length for a weight in `[0, 1]`, never below two steps.
  fn length_for(&self, weight: f64) -> f64 {
    let shaped = weight.clamp(0.0, 1.0).powf(self.length_power);
    let length = self.min_length + (self.max_length - self.min_length) * shaped;
    length.max(2.0 * self.trace.step)
  }
}

/// Cover the surface of `mesh` with strokes traced on the session's field.
///
/// Seeds outside the field's domain, seeds that do not refine onto the
/// surface, and strokes with fewer than two points are dropped, so the result
/// may hold fewer strokes than requested.
pub fn generate_strokes<F, C>(
  session: &FieldSession<'_, F>,
  mesh: &MeshOutput,
  coverage: &mut C,
  config: &StrokeConfig,
) -> Vec<Stroke>
where
  F: ScalarField + ?Sized,
  C: PointCoverage + ?Sized,
{
  let _span = info_span!(
    "generate_strokes",
    session = session.id().raw(),
    count = config.count,
    policy = ?config.policy
  )
  .entered();

  let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
  let policies = config.policy.trace_policies(config.view);
  let view = unit(config.view).unwrap_or(DVec3::Z);
  let trace = &config.trace;

  let seeds = coverage.distribute(mesh, config.count);
  let mut outside = 0usize;
  let mut unrefined = 0usize;
  let mut short = 0usize;
  let mut strokes = Vec::with_capacity(seeds.len() * policies.len());

  for seed in seeds {
    if !session.contains(seed) {
      outside += 1;
      continue;
    }
    let mut p = seed;
    if refine(
      session,
      &mut p,
      trace.step,
      trace.threshold,
      trace.tolerance,
      trace.max_allowed_error,
    )
    .is_err()
    {
      unrefined += 1;
      continue;
    }

    let weight = if config.policy.is_silhouette() {
      let facing = unit(session.gradient(p)).map_or(1.0, |n| n.dot(view).abs());
      1.0 - facing
    } else {
      rng.random::<f64>()
    };
    let length = config.length_for(weight);

    for policy in &policies {
      match trace_stroke(session, p, policy, length, trace) {
        Some(stroke) => strokes.push(stroke),
        None => short += 1,
      }
    }
  }

  debug!(
    strokes = strokes.len(),
    outside, unrefined, short, "stroke generation complete"
  );
  strokes
}

#[cfg(test)]
#[path = "strokes_test.rs"]
mod strokes_test;
