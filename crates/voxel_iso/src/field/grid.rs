//! Sampled scalar grid.
//!
//! Values are stored row-major with X slowest and Z fastest, matching
//! [`coord_to_index`]. Sample `(x, y, z)` sits at
//! `origin + [x, y, z] * spacing`. Between samples the grid evaluates by
//! trilinear interpolation, so it can back a [`FieldSession`] as well as a
//! cube sweep.
//!
//! [`FieldSession`]: super::FieldSession

use glam::DVec3;

use super::ScalarField;
use crate::constants::coord_to_index;
use crate::error::{GridError, GridResult};
use crate::types::Bounds;

/// Regular 3D lattice of scalar samples.
#[derive(Clone, Debug)]
pub struct ScalarGrid {
  dims: [usize; 3],
  origin: DVec3,
  spacing: DVec3,
  values: Vec<f64>,
}

impl ScalarGrid {
  /// Wrap a sample buffer.
  pub fn new(
    dims: [usize; 3],
    origin: DVec3,
    spacing: DVec3,
    values: Vec<f64>,
  ) -> GridResult<Self> {
    for (axis, &samples) in dims.iter().enumerate() {
      if samples < 2 {
        return Err(GridError::TooFewSamples { axis, samples });
      }
    }
    if !spacing.is_finite() || spacing.min_element() <= 0.0 {
      return Err(GridError::InvalidSpacing(spacing.to_array()));
    }
    let expected = dims[0] * dims[1] * dims[2];
    if values.len() != expected {
      return Err(GridError::SampleCountMismatch {
        expected,
        actual: values.len(),
      });
    }
    Ok(Self {
      dims,
      origin,
      spacing,
      values,
    })
  }

  /// Sample `field` over its own bounds with `dims` samples per axis.
  pub fn from_field<F: ScalarField + ?Sized>(field: &F, dims: [usize; 3]) -> GridResult<Self> {
    for (axis, &samples) in dims.iter().enumerate() {
      if samples < 2 {
        return Err(GridError::TooFewSamples { axis, samples });
      }
    }
    let bounds = field.bounds();
    let spacing = bounds.size() / DVec3::new(
      (dims[0] - 1) as f64,
      (dims[1] - 1) as f64,
      (dims[2] - 1) as f64,
    );

    let mut values = Vec::with_capacity(dims[0] * dims[1] * dims[2]);
    for x in 0..dims[0] {
      for y in 0..dims[1] {
        for z in 0..dims[2] {
          let p = bounds.min + DVec3::new(x as f64, y as f64, z as f64) * spacing;
          values.push(field.value(p));
        }
      }
    }

    Self::new(dims, bounds.min, spacing, values)
  }

  pub fn dims(&self) -> [usize; 3] {
    self.dims
  }

  pub fn origin(&self) -> DVec3 {
    self.origin
  }

  pub fn spacing(&self) -> DVec3 {
    self.spacing
  }

  pub fn values(&self) -> &[f64] {
    &self.values
  }

  /// Raw sample at lattice coordinates.
  #[inline]
  pub fn sample(&self, x: usize, y: usize, z: usize) -> f64 {
    self.values[coord_to_index(x, y, z, self.dims)]
  }

  /// Position of a lattice sample.
  #[inline]
  pub fn sample_position(&self, x: usize, y: usize, z: usize) -> DVec3 {
    self.origin + DVec3::new(x as f64, y as f64, z as f64) * self.spacing
  }

  /// Lattice gradient at a sample: central differences inside, one-sided at
  /// the borders.
  pub fn sample_gradient(&self, x: usize, y: usize, z: usize) -> DVec3 {
    let coord = [x, y, z];
    DVec3::from_array(std::array::from_fn(|axis| {
      let lo = coord[axis].saturating_sub(1);
      let hi = (coord[axis] + 1).min(self.dims[axis] - 1);
      let mut a = coord;
      let mut b = coord;
      a[axis] = lo;
      b[axis] = hi;
      let span = (hi - lo) as f64 * self.spacing[axis];
      (self.sample(b[0], b[1], b[2]) - self.sample(a[0], a[1], a[2])) / span
    }))
  }
}

impl ScalarField for ScalarGrid {
  fn value(&self, p: DVec3) -> f64 {
    let local = (p - self.origin) / self.spacing;
    let mut base = [0usize; 3];
    let mut t = [0.0f64; 3];
    for axis in 0..3 {
      let max_cell = (self.dims[axis] - 2) as f64;
      let l = local[axis].clamp(0.0, max_cell + 1.0);
      let cell = l.floor().min(max_cell);
      base[axis] = cell as usize;
      t[axis] = l - cell;
    }

    let [x, y, z] = base;
    let c = |dx: usize, dy: usize, dz: usize| self.sample(x + dx, y + dy, z + dz);
    let lerp = |a: f64, b: f64, t: f64| a + (b - a) * t;

    let c00 = lerp(c(0, 0, 0), c(1, 0, 0), t[0]);
    let c10 = lerp(c(0, 1, 0), c(1, 1, 0), t[0]);
    let c01 = lerp(c(0, 0, 1), c(1, 0, 1), t[0]);
    let c11 = lerp(c(0, 1, 1), c(1, 1, 1), t[0]);
    let c0 = lerp(c00, c10, t[1]);
    let c1 = lerp(c01, c11, t[1]);
    lerp(c0, c1, t[2])
  }

  fn bounds(&self) -> Bounds {
    let extent = DVec3::new(
      (self.dims[0] - 1) as f64,
      (self.dims[1] - 1) as f64,
      (self.dims[2] - 1) as f64,
    ) * self.spacing;
    Bounds::new(self.origin, self.origin + extent)
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
