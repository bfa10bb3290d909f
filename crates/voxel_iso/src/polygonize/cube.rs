//! Cube samples and the row-major sweeps that produce them.

use glam::DVec3;

use crate::constants::{index_to_coord, CORNER_COUNT, CORNER_OFFSETS};
use crate::edge_table::corner_position;
use crate::error::{GridError, GridResult};
use crate::field::{ScalarField, ScalarGrid};
use crate::types::Bounds;

/// Scalar samples at the 8 corners of one cube.
///
/// Corner `i` follows the binary ZYX layout of
/// [`CORNER_OFFSETS`](crate::constants::CORNER_OFFSETS).
#[derive(Clone, Debug, PartialEq)]
pub struct CubeSample {
  pub values: [f64; CORNER_COUNT],
  pub positions: [DVec3; CORNER_COUNT],
  pub gradients: Option<[DVec3; CORNER_COUNT]>,
}

impl CubeSample {
  /// Cube at `origin` with per-axis edge lengths `size`.
  pub fn new(origin: DVec3, size: DVec3, values: [f64; CORNER_COUNT]) -> Self {
    Self {
      values,
      positions: std::array::from_fn(|i| origin + corner_offset(i) * size),
      gradients: None,
    }
  }

  pub fn with_gradients(mut self, gradients: [DVec3; CORNER_COUNT]) -> Self {
    self.gradients = Some(gradients);
    self
  }

  /// Evaluate `field` at the corners of a cube.
  pub fn from_field<F: ScalarField + ?Sized>(
    field: &F,
    origin: DVec3,
    size: DVec3,
    with_gradients: bool,
  ) -> Self {
    let positions: [DVec3; CORNER_COUNT] =
      std::array::from_fn(|i| origin + corner_offset(i) * size);
    Self {
      values: positions.map(|p| field.value(p)),
      gradients: with_gradients.then(|| positions.map(|p| field.gradient(p))),
      positions,
    }
  }

  /// Edge lengths of the cube.
  pub fn size(&self) -> DVec3 {
    self.positions[7] - self.positions[0]
  }
}

#[inline]
fn corner_offset(corner: usize) -> DVec3 {
  DVec3::from_array(corner_position(corner as u8))
}

/// Row-major cursor over a 3D block of cells (X slowest, Z fastest).
#[derive(Clone, Debug)]
struct CellCursor {
  counts: [usize; 3],
  next: usize,
}

impl CellCursor {
  fn new(counts: [usize; 3]) -> Self {
    Self { counts, next: 0 }
  }

  fn total(&self) -> usize {
    self.counts[0] * self.counts[1] * self.counts[2]
  }

  fn remaining(&self) -> usize {
    self.total() - self.next
  }

  fn advance(&mut self) -> Option<[usize; 3]> {
    if self.next >= self.total() {
      return None;
    }
    let (x, y, z) = index_to_coord(self.next, self.counts);
    self.next += 1;
    Some([x, y, z])
  }
}

/// Sweep over the cubes of a [`ScalarGrid`] at a fixed sample stride.
///
/// With stride `s`, cube `(i, j, k)` spans samples `i*s ..= i*s + s` on each
/// axis; trailing samples that do not fill a whole cube are skipped.
#[derive(Clone, Debug)]
pub struct GridCubes<'a> {
  grid: &'a ScalarGrid,
  stride: usize,
  with_gradients: bool,
  cursor: CellCursor,
}

impl<'a> GridCubes<'a> {
  pub fn new(grid: &'a ScalarGrid, stride: usize) -> GridResult<Self> {
    if stride == 0 {
      return Err(GridError::ZeroStride);
    }
    let dims = grid.dims();
    let counts = dims.map(|d| (d - 1) / stride);
    Ok(Self {
      grid,
      stride,
      with_gradients: false,
      cursor: CellCursor::new(counts),
    })
  }

  /// Attach lattice gradients to every cube (enables polygon normals).
  pub fn with_gradients(mut self, enabled: bool) -> Self {
    self.with_gradients = enabled;
    self
  }
}

impl Iterator for GridCubes<'_> {
  type Item = CubeSample;

  fn next(&mut self) -> Option<CubeSample> {
    let [cx, cy, cz] = self.cursor.advance()?;
    let s = self.stride;
    let corner = |i: usize| {
      let [ox, oy, oz] = CORNER_OFFSETS[i];
      (
        (cx + ox as usize) * s,
        (cy + oy as usize) * s,
        (cz + oz as usize) * s,
      )
    };

    let values = std::array::from_fn(|i| {
      let (x, y, z) = corner(i);
      self.grid.sample(x, y, z)
    });
    let positions = std::array::from_fn(|i| {
      let (x, y, z) = corner(i);
      self.grid.sample_position(x, y, z)
    });
    let gradients = self.with_gradients.then(|| {
      std::array::from_fn(|i| {
        let (x, y, z) = corner(i);
        self.grid.sample_gradient(x, y, z)
      })
    });

    Some(CubeSample {
      values,
      positions,
      gradients,
    })
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.cursor.remaining();
    (remaining, Some(remaining))
  }
}

impl ExactSizeIterator for GridCubes<'_> {}

/// Sweep over an analytic field's domain split into `resolution` cubes per
/// axis. Corner gradients come from the field by default.
pub struct FieldCubes<'a, F: ScalarField + ?Sized> {
  field: &'a F,
  bounds: Bounds,
  cube_size: DVec3,
  with_gradients: bool,
  cursor: CellCursor,
}

impl<'a, F: ScalarField + ?Sized> FieldCubes<'a, F> {
  pub fn new(field: &'a F, resolution: [usize; 3]) -> Self {
    Self::over(field, field.bounds(), resolution)
  }

  /// Sweep an explicit region instead of the field's own bounds.
  pub fn over(field: &'a F, bounds: Bounds, resolution: [usize; 3]) -> Self {
    let resolution = resolution.map(|r| r.max(1));
    let cube_size = bounds.size()
      / DVec3::new(
        resolution[0] as f64,
        resolution[1] as f64,
        resolution[2] as f64,
      );
    Self {
      field,
      bounds,
      cube_size,
      with_gradients: true,
      cursor: CellCursor::new(resolution),
    }
  }

  pub fn with_gradients(mut self, enabled: bool) -> Self {
    self.with_gradients = enabled;
    self
  }

  pub fn cube_size(&self) -> DVec3 {
    self.cube_size
  }
}

impl<F: ScalarField + ?Sized> Iterator for FieldCubes<'_, F> {
  type Item = CubeSample;

  fn next(&mut self) -> Option<CubeSample> {
    let [x, y, z] = self.cursor.advance()?;
    let origin = self.bounds.min + DVec3::new(x as f64, y as f64, z as f64) * self.cube_size;
    Some(CubeSample::from_field(
      self.field,
      origin,
      self.cube_size,
      self.with_gradients,
    ))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.cursor.remaining();
    (remaining, Some(remaining))
  }
}

impl<F: ScalarField + ?Sized> ExactSizeIterator for FieldCubes<'_, F> {}

#[cfg(test)]
#[path = "cube_test.rs"]
mod cube_test;
