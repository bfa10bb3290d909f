//! Scalar field abstraction.
//!
//! A [`ScalarField`] is anything that can be evaluated at a point inside a
//! bounded domain. Polygonization only needs values; refinement and tracing
//! also need the three partial derivatives and, for curvature-aligned strokes,
//! the principal curvatures of the level set through a point.
//!
//! Every derivative query has a finite-difference default, so a field only
//! has to implement [`ScalarField::value`] and [`ScalarField::bounds`].
//! Fields with closed-form derivatives override the defaults.
//!
//! ```text
//!   value(p) ─────────┬──► partial(axis, p)   central differences
//!                     │
//!                     └──► gradient(p) ──► hessian(p)   differences of the gradient
//!                                              │
//!                                              ▼
//!                          principal_curvatures(p)  tangent-plane shape operator
//! ```

mod analytic;
mod curvature;
mod grid;
mod session;

pub use analytic::{FnField, PlaneField, SphereField, TorusField};
pub use curvature::PrincipalCurvatures;
pub use grid::ScalarGrid;
pub use session::{FieldSession, SessionId};

use glam::{DMat3, DVec3};

use crate::constants::DIFFERENCE_STEP;
use crate::types::Bounds;

/// Coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
  X,
  Y,
  Z,
}

impl Axis {
  pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

  #[inline]
  pub fn index(self) -> usize {
    match self {
      Axis::X => 0,
      Axis::Y => 1,
      Axis::Z => 2,
    }
  }

  #[inline]
  pub fn unit(self) -> DVec3 {
    match self {
      Axis::X => DVec3::X,
      Axis::Y => DVec3::Y,
      Axis::Z => DVec3::Z,
    }
  }
}

/// A scalar function over a bounded 3D domain.
pub trait ScalarField {
  /// Field value at `p`.
  fn value(&self, p: DVec3) -> f64;

  /// Domain the field is defined on.
  fn bounds(&self) -> Bounds;

  /// Partial derivative along `axis` at `p`.
  fn partial(&self, axis: Axis, p: DVec3) -> f64 {
    let h = difference_step(&self.bounds());
    let offset = axis.unit() * h;
    (self.value(p + offset) - self.value(p - offset)) / (2.0 * h)
  }

  /// Gradient assembled from the three partial derivatives.
  fn gradient(&self, p: DVec3) -> DVec3 {
    DVec3::new(
      self.partial(Axis::X, p),
      self.partial(Axis::Y, p),
      self.partial(Axis::Z, p),
    )
  }

  /// Second derivatives, symmetrized.
  fn hessian(&self, p: DVec3) -> DMat3 {
    let h = 10.0 * difference_step(&self.bounds());
    let cols: [DVec3; 3] = std::array::from_fn(|i| {
      let offset = Axis::ALL[i].unit() * h;
      (self.gradient(p + offset) - self.gradient(p - offset)) / (2.0 * h)
    });
    let m = DMat3::from_cols(cols[0], cols[1], cols[2]);
    (m + m.transpose()) * 0.5
  }

  /// Principal curvatures of the level set through `p`.
  ///
  /// `None` where the gradient vanishes.
  fn principal_curvatures(&self, p: DVec3) -> Option<PrincipalCurvatures> {
    PrincipalCurvatures::from_derivatives(self.gradient(p), &self.hessian(p))
  }
}

impl<F: ScalarField + ?Sized> ScalarField for &F {
  fn value(&self, p: DVec3) -> f64 {
    (**self).value(p)
  }

  fn bounds(&self) -> Bounds {
    (**self).bounds()
  }

  fn partial(&self, axis: Axis, p: DVec3) -> f64 {
    (**self).partial(axis, p)
  }

  fn gradient(&self, p: DVec3) -> DVec3 {
    (**self).gradient(p)
  }

  fn hessian(&self, p: DVec3) -> DMat3 {
    (**self).hessian(p)
  }

  fn principal_curvatures(&self, p: DVec3) -> Option<PrincipalCurvatures> {
    (**self).principal_curvatures(p)
  }
}

impl ScalarField for Box<dyn ScalarField> {
  fn value(&self, p: DVec3) -> f64 {
    (**self).value(p)
  }

  fn bounds(&self) -> Bounds {
    (**self).bounds()
  }

  fn partial(&self, axis: Axis, p: DVec3) -> f64 {
    (**self).partial(axis, p)
  }

  fn gradient(&self, p: DVec3) -> DVec3 {
    (**self).gradient(p)
  }

  fn hessian(&self, p: DVec3) -> DMat3 {
    (**self).hessian(p)
  }

  fn principal_curvatures(&self, p: DVec3) -> Option<PrincipalCurvatures> {
    (**self).principal_curvatures(p)
  }
}

/// Finite-difference step for a domain, scaled to its size.
#[inline]
pub fn difference_step(bounds: &Bounds) -> f64 {
  DIFFERENCE_STEP * bounds.diagonal().max(1.0)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
