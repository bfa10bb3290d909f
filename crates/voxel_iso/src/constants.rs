//! Numeric constants shared by polygonization, refinement and tracing.
//!
//! # Coordinate System
//!
//! ```text
//!         +Y
//!          │
//!          │
//!          │
//!          └───────── +X
//!         /
//!        /
//!       +Z
//!
//! Cube corner indices (binary: ZYX):
//!   0 = (0,0,0)    4 = (0,0,1)
//!   1 = (1,0,0)    5 = (1,0,1)
//!   2 = (0,1,0)    6 = (0,1,1)
//!   3 = (1,1,0)    7 = (1,1,1)
//! ```
//!
//! # Cube Limits
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  12 edges  → at most 12 crossings per cube                   │
//! │   6 faces  → at most 2 segments per face, 12 per cube        │
//! │  polygon   → at most 12 distinct vertices + closing repeat   │
//! └──────────────────────────────────────────────────────────────┘
//! ```

/// Number of corners of a cube.
pub const CORNER_COUNT: usize = 8;

/// Number of edges of a cube.
pub const EDGE_COUNT: usize = 12;

/// Number of faces of a cube.
pub const FACE_COUNT: usize = 6;

/// Upper bound on segments one cube can contribute (2 per face).
pub const MAX_SEGMENTS: usize = 2 * FACE_COUNT;

/// Upper bound on stored polygon vertices: one per crossed edge, plus the
/// repeated first vertex that closes the ring.
pub const MAX_POLYGON_VERTICES: usize = EDGE_COUNT + 1;

/// Distance under which two polygon endpoints are considered the same point.
pub const WELD_EPSILON: f64 = 1e-9;

/// Hard cap on Newton iterations in the surface point refiner.
pub const MAX_REFINE_ITERATIONS: usize = 20;

/// Refiner probe distance as a fraction of the cube scale.
pub const PROBE_FRACTION: f64 = 1e-4;

/// Relative step used by finite-difference derivatives.
pub const DIFFERENCE_STEP: f64 = 1e-5;

/// Squared length under which a direction vector is treated as degenerate.
pub const DEGENERATE_LENGTH_SQ: f64 = 1e-24;

/// Unit-cube corner offsets.
///
/// Corner layout (binary: ZYX):
/// - 0 = (0,0,0)
/// - 1 = (1,0,0)
/// - 2 = (0,1,0)
/// - 3 = (1,1,0)
/// - 4 = (0,0,1)
/// - 5 = (1,0,1)
/// - 6 = (0,1,1)
/// - 7 = (1,1,1)
pub const CORNER_OFFSETS: [[u8; 3]; CORNER_COUNT] = [
  [0, 0, 0],
  [1, 0, 0],
  [0, 1, 0],
  [1, 1, 0],
  [0, 0, 1],
  [1, 0, 1],
  [0, 1, 1],
  [1, 1, 1],
];

/// Convert 3D grid coordinates to a row-major linear index (X slowest, Z
/// fastest).
#[inline(always)]
pub const fn coord_to_index(x: usize, y: usize, z: usize, dims: [usize; 3]) -> usize {
  (x * dims[1] + y) * dims[2] + z
}

/// Convert a row-major linear index back to 3D grid coordinates.
#[inline(always)]
pub const fn index_to_coord(idx: usize, dims: [usize; 3]) -> (usize, usize, usize) {
  let z = idx % dims[2];
  let y = (idx / dims[2]) % dims[1];
  let x = idx / (dims[1] * dims[2]);
  (x, y, z)
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
