//! Direction fields a trace can follow.

use glam::DVec3;

use crate::constants::DEGENERATE_LENGTH_SQ;
use crate::field::{Axis, FieldSession, ScalarField};

/// Unit tangent direction chosen at each trace step.
///
/// Directions are sign-ambiguous; the tracer aligns each one with the
/// previous step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TracePolicy {
  /// Along the principal direction of larger curvature magnitude.
  MaxCurvature,

  /// Along the principal direction of smaller curvature magnitude.
  MinCurvature,

  /// Along `gradient × axis`, keeping the axis coordinate near the seed's.
  ConstantAxis(Axis),

  /// Along `E = n × D`, where `D = view × n`: the tangent in the plane of
  /// normal and view, oriented by how `n · view` changes along it. Falls back
  /// to `D` where that change vanishes.
  Silhouette { view: DVec3 },

  /// Along the tangent-plane gradient of `n · view`.
  SilhouetteOrthogonal { view: DVec3 },
}

impl TracePolicy {
  /// Direction at `p`, or `None` where the field gives no usable tangent.
  ///
  /// `probe_offset` is the central-difference step for the silhouette
  /// policies.
  pub fn direction<F: ScalarField + ?Sized>(
    &self,
    session: &FieldSession<'_, F>,
    p: DVec3,
    probe_offset: f64,
  ) -> Option<DVec3> {
    match *self {
      TracePolicy::MaxCurvature => session.principal_curvatures(p).map(|k| k.max_direction()),
      TracePolicy::MinCurvature => session.principal_curvatures(p).map(|k| k.min_direction()),
      TracePolicy::ConstantAxis(axis) => unit(session.gradient(p).cross(axis.unit())),
      TracePolicy::Silhouette { view } => {
        let frame = SilhouetteFrame::at(session, p, view, probe_offset)?;
        Some(unit(frame.e * frame.change.dot(frame.e)).unwrap_or(frame.d))
      }
      TracePolicy::SilhouetteOrthogonal { view } => {
        let frame = SilhouetteFrame::at(session, p, view, probe_offset)?;
        unit(frame.change)
      }
    }
  }

  pub fn is_silhouette(&self) -> bool {
    matches!(
      self,
      TracePolicy::Silhouette { .. } | TracePolicy::SilhouetteOrthogonal { .. }
    )
  }
}

/// Tangent frame and the tangent-plane gradient of `n · view` at a point.
struct SilhouetteFrame {
  d: DVec3,
  e: DVec3,
  change: DVec3,
}

impl SilhouetteFrame {
  fn at<F: ScalarField + ?Sized>(
    session: &FieldSession<'_, F>,
    p: DVec3,
    view: DVec3,
    h: f64,
  ) -> Option<Self> {
    let view = unit(view)?;
    let normal = unit(session.gradient(p))?;
    // D vanishes where the normal faces the viewer head-on.
    let d = unit(view.cross(normal))?;
    let e = unit(normal.cross(d))?;

    let cosine = |q: DVec3| unit(session.gradient(q)).map(|n| n.dot(view));
    let slope = |dir: DVec3| -> Option<f64> {
      let ahead = cosine(p + dir * h)?;
      let behind = cosine(p - dir * h)?;
      Some((ahead - behind) / (2.0 * h))
    };

    let change = d * slope(d)? + e * slope(e)?;
    Some(Self { d, e, change })
  }
}

/// Normalize, rejecting degenerate and non-finite vectors.
#[inline]
pub(crate) fn unit(v: DVec3) -> Option<DVec3> {
  let length_sq = v.length_squared();
  (length_sq > DEGENERATE_LENGTH_SQ && length_sq.is_finite()).then(|| v / length_sq.sqrt())
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
