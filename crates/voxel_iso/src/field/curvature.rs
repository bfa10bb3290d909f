//! Principal curvatures of implicit surfaces.
//!
//! For a level set of `f`, the shape operator at a point is the Hessian of `f`
//! restricted to the tangent plane and divided by `|∇f|`. In an orthonormal
//! tangent basis `(t1, t2)` that restriction is a symmetric 2×2 matrix whose
//! eigenpairs are the principal curvatures and directions.

use glam::{DMat3, DVec3};

use crate::constants::DEGENERATE_LENGTH_SQ;

/// Principal curvatures and their tangent directions at a surface point.
///
/// `k1 >= k2` algebraically. Directions are unit length, tangent to the
/// surface and mutually orthogonal. Curvature sign is relative to the
/// gradient direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrincipalCurvatures {
  pub k1: f64,
  pub k2: f64,
  pub dir1: DVec3,
  pub dir2: DVec3,
}

impl PrincipalCurvatures {
  /// Build from gradient and Hessian. `None` when the gradient vanishes.
  pub fn from_derivatives(gradient: DVec3, hessian: &DMat3) -> Option<Self> {
    let len_sq = gradient.length_squared();
    if len_sq < DEGENERATE_LENGTH_SQ || !len_sq.is_finite() {
      return None;
    }
    let len = len_sq.sqrt();
    let normal = gradient / len;

    let t1 = normal.any_orthonormal_vector();
    let t2 = normal.cross(t1);

    let a = t1.dot(hessian.mul_vec3(t1)) / len;
    let b = t1.dot(hessian.mul_vec3(t2)) / len;
    let c = t2.dot(hessian.mul_vec3(t2)) / len;

    let mean = 0.5 * (a + c);
    let half_diff = 0.5 * (a - c);
    let radius = (half_diff * half_diff + b * b).sqrt();
    let k1 = mean + radius;
    let k2 = mean - radius;

    // Eigenvector of [[a, b], [b, c]] for k1, picking the better-conditioned
    // of the two equivalent row forms.
    let (u, v) = if b.abs() <= f64::EPSILON * (a.abs() + c.abs()).max(1.0) {
      if a >= c {
        (1.0, 0.0)
      } else {
        (0.0, 1.0)
      }
    } else if half_diff >= 0.0 {
      (k1 - c, b)
    } else {
      (b, k1 - a)
    };

    let dir1 = (t1 * u + t2 * v).normalize_or_zero();
    if dir1 == DVec3::ZERO {
      return None;
    }
    let dir2 = normal.cross(dir1);

    Some(Self { k1, k2, dir1, dir2 })
  }

  /// Direction of the curvature with the larger magnitude.
  pub fn max_direction(&self) -> DVec3 {
    if self.k1.abs() >= self.k2.abs() {
      self.dir1
    } else {
      self.dir2
    }
  }

  /// Direction of the curvature with the smaller magnitude.
  pub fn min_direction(&self) -> DVec3 {
    if self.k1.abs() >= self.k2.abs() {
      self.dir2
    } else {
      self.dir1
    }
  }

  /// Largest curvature magnitude.
  pub fn max_magnitude(&self) -> f64 {
    self.k1.abs().max(self.k2.abs())
  }
}

#[cfg(test)]
#[path = "curvature_test.rs"]
mod curvature_test;
