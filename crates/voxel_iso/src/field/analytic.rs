//! Closed-form reference fields.
//!
//! Deterministic shapes that are easy to verify: the level set at 0 of each
//! field is the named surface. They are used by tests, benches and as
//! stand-ins for a volume evaluation layer.

use glam::{DMat3, DVec3};

use super::{Axis, ScalarField};
use crate::types::Bounds;

/// Squared-distance sphere: `|p - center|² - radius²`.
#[derive(Clone, Debug)]
pub struct SphereField {
  pub center: DVec3,
  pub radius: f64,
  pub bounds: Bounds,
}

impl SphereField {
  /// Sphere at the origin, with a domain padded 50% beyond the radius.
  pub fn new(radius: f64) -> Self {
    Self {
      center: DVec3::ZERO,
      radius,
      bounds: Bounds::centered(radius * 1.5),
    }
  }

  pub fn with_center(mut self, center: DVec3) -> Self {
    let shift = center - self.center;
    self.bounds = Bounds::new(self.bounds.min + shift, self.bounds.max + shift);
    self.center = center;
    self
  }

  pub fn with_bounds(mut self, bounds: Bounds) -> Self {
    self.bounds = bounds;
    self
  }
}

impl ScalarField for SphereField {
  fn value(&self, p: DVec3) -> f64 {
    (p - self.center).length_squared() - self.radius * self.radius
  }

  fn bounds(&self) -> Bounds {
    self.bounds
  }

  fn partial(&self, axis: Axis, p: DVec3) -> f64 {
    2.0 * (p - self.center)[axis.index()]
  }

  fn hessian(&self, _p: DVec3) -> DMat3 {
    DMat3::IDENTITY * 2.0
  }
}

/// Plane field: `normal · p - offset`.
///
/// The normal is not required to be unit length; the field then grows
/// proportionally faster.
#[derive(Clone, Debug)]
pub struct PlaneField {
  pub normal: DVec3,
  pub offset: f64,
  pub bounds: Bounds,
}

impl PlaneField {
  pub fn new(normal: DVec3, offset: f64, bounds: Bounds) -> Self {
    Self {
      normal,
      offset,
      bounds,
    }
  }
}

impl ScalarField for PlaneField {
  fn value(&self, p: DVec3) -> f64 {
    self.normal.dot(p) - self.offset
  }

  fn bounds(&self) -> Bounds {
    self.bounds
  }

  fn partial(&self, axis: Axis, _p: DVec3) -> f64 {
    self.normal[axis.index()]
  }

  fn hessian(&self, _p: DVec3) -> DMat3 {
    DMat3::ZERO
  }
}

/// Ring torus around the Y axis: `(√(x² + z²) - R)² + y² - r²`.
#[derive(Clone, Debug)]
pub struct TorusField {
  pub major_radius: f64,
  pub minor_radius: f64,
  pub bounds: Bounds,
}

impl TorusField {
  pub fn new(major_radius: f64, minor_radius: f64) -> Self {
    let pad = 1.25;
    let reach = (major_radius + minor_radius) * pad;
    Self {
      major_radius,
      minor_radius,
      bounds: Bounds::new(
        DVec3::new(-reach, -minor_radius * pad * 2.0, -reach),
        DVec3::new(reach, minor_radius * pad * 2.0, reach),
      ),
    }
  }
}

impl ScalarField for TorusField {
  fn value(&self, p: DVec3) -> f64 {
    let q = (p.x * p.x + p.z * p.z).sqrt() - self.major_radius;
    q * q + p.y * p.y - self.minor_radius * self.minor_radius
  }

  fn bounds(&self) -> Bounds {
    self.bounds
  }

  fn partial(&self, axis: Axis, p: DVec3) -> f64 {
    let rho = (p.x * p.x + p.z * p.z).sqrt();
    if rho < f64::EPSILON {
      // On the axis the radial derivative is undefined; use the limit along +X.
      return match axis {
        Axis::X => -2.0 * self.major_radius,
        Axis::Y => 2.0 * p.y,
        Axis::Z => 0.0,
      };
    }
    let radial = 2.0 * (rho - self.major_radius) / rho;
    match axis {
      Axis::X => radial * p.x,
      Axis::Y => 2.0 * p.y,
      Axis::Z => radial * p.z,
    }
  }
}

/// Field backed by a closure.
pub struct FnField<F> {
  function: F,
  bounds: Bounds,
}

impl<F: Fn(DVec3) -> f64> FnField<F> {
  pub fn new(bounds: Bounds, function: F) -> Self {
    Self { function, bounds }
  }
}

impl<F: Fn(DVec3) -> f64> ScalarField for FnField<F> {
  fn value(&self, p: DVec3) -> f64 {
    (self.function)(p)
  }

  fn bounds(&self) -> Bounds {
    self.bounds
  }
}

#[cfg(test)]
#[path = "analytic_test.rs"]
mod analytic_test;
