//! Fixed cube topology: edges, faces and the edge crossing table.
//!
//! # Cube Topology
//!
//! ```text
//!       6──────7         Corners (binary ZYX):
//!      /│     /│           0=(0,0,0)  1=(1,0,0)  2=(0,1,0)  3=(1,1,0)
//!     4─┼────5 │           4=(0,0,1)  5=(1,0,1)  6=(0,1,1)  7=(1,1,1)
//!     │ 2────┼─3
//!     │/     │/          +Y
//!     0──────1            │  +Z
//!                         │ /
//!                         └───+X
//! ```
//!
//! # Edge Layout
//!
//! ```text
//! 12 edges total (4 per axis):
//!
//! X-axis edges (parallel to X):
//!   Edge 0:  [0,1] at Y=0, Z=0 (bottom-back)
//!   Edge 5:  [2,3] at Y=1, Z=0 (top-back)
//!   Edge 8:  [4,5] at Y=0, Z=1 (bottom-front)
//!   Edge 11: [6,7] at Y=1, Z=1 (top-front)
//!
//! Y-axis edges (parallel to Y):
//!   Edge 1:  [0,2] at X=0, Z=0 (left-back)
//!   Edge 3:  [1,3] at X=1, Z=0 (right-back)
//!   Edge 9:  [4,6] at X=0, Z=1 (left-front)
//!   Edge 10: [5,7] at X=1, Z=1 (right-front)
//!
//! Z-axis edges (parallel to Z):
//!   Edge 2:  [0,4] at X=0, Y=0 (bottom-left)
//!   Edge 4:  [1,5] at X=1, Y=0 (bottom-right)
//!   Edge 6:  [2,6] at X=0, Y=1 (top-left)
//!   Edge 7:  [3,7] at X=1, Y=1 (top-right)
//! ```
//!
//! # Face Layout
//!
//! Each face lists its 4 edges in ring order, so consecutive entries share a
//! corner. Every edge belongs to exactly two faces, which is what makes the
//! per-face segments chain into closed loops.
//!
//! ```text
//! Face  Plane  Edges (ring)
//! ────  ─────  ────────────
//!   0   X=0    1, 6, 9, 2
//!   1   X=1    3, 7, 10, 4
//!   2   Y=0    0, 4, 8, 2
//!   3   Y=1    5, 7, 11, 6
//!   4   Z=0    0, 3, 5, 1
//!   5   Z=1    8, 10, 11, 9
//! ```
//!
//! # Edge Table Usage
//!
//! Given a corner mask (bit set when the corner value is at or above the
//! threshold), `EDGE_TABLE[corner_mask]` is a 12-bit edge mask. Each set bit
//! marks an edge whose endpoints straddle the threshold.

use crate::constants::{CORNER_COUNT, EDGE_COUNT, FACE_COUNT};

/// Edge endpoint corner indices.
pub const EDGE_CORNERS: [[u8; 2]; EDGE_COUNT] = [
  [0, 1], // Edge 0:  X axis at Y=0, Z=0
  [0, 2], // Edge 1:  Y axis at X=0, Z=0
  [0, 4], // Edge 2:  Z axis at X=0, Y=0
  [1, 3], // Edge 3:  Y axis at X=1, Z=0
  [1, 5], // Edge 4:  Z axis at X=1, Y=0
  [2, 3], // Edge 5:  X axis at Y=1, Z=0
  [2, 6], // Edge 6:  Z axis at X=0, Y=1
  [3, 7], // Edge 7:  Z axis at X=1, Y=1
  [4, 5], // Edge 8:  X axis at Y=0, Z=1
  [4, 6], // Edge 9:  Y axis at X=0, Z=1
  [5, 7], // Edge 10: Y axis at X=1, Z=1
  [6, 7], // Edge 11: X axis at Y=1, Z=1
];

/// Edges bounding each face, in ring order.
pub const FACE_EDGES: [[u8; 4]; FACE_COUNT] = [
  [1, 6, 9, 2],   // X=0
  [3, 7, 10, 4],  // X=1
  [0, 4, 8, 2],   // Y=0
  [5, 7, 11, 6],  // Y=1
  [0, 3, 5, 1],   // Z=0
  [8, 10, 11, 9], // Z=1
];

/// Precomputed edge table.
/// Index: 8-bit corner mask (which corners are at or above the threshold)
/// Value: 12-bit edge mask (which edges have crossings)
pub const EDGE_TABLE: [u16; 256] = generate_edge_table();

/// Generate the edge table at compile time.
const fn generate_edge_table() -> [u16; 256] {
  let mut table = [0u16; 256];
  let mut corner_mask = 0usize;

  while corner_mask < 256 {
    let mut edge_mask = 0u16;
    let mut edge = 0;

    while edge < EDGE_COUNT {
      let c0 = EDGE_CORNERS[edge][0] as usize;
      let c1 = EDGE_CORNERS[edge][1] as usize;

      let high0 = (corner_mask >> c0) & 1;
      let high1 = (corner_mask >> c1) & 1;

      if high0 != high1 {
        edge_mask |= 1 << edge;
      }

      edge += 1;
    }

    table[corner_mask] = edge_mask;
    corner_mask += 1;
  }

  table
}

/// Build the corner mask for a threshold: bit `i` is set when
/// `values[i] >= threshold`.
///
/// NaN values never compare as high, so they classify as below threshold.
#[inline]
pub fn corner_mask(values: &[f64; CORNER_COUNT], threshold: f64) -> u8 {
  values
    .iter()
    .enumerate()
    .fold(0u8, |mask, (i, &v)| if v >= threshold { mask | (1 << i) } else { mask })
}

/// Get corner position within unit cube.
#[inline(always)]
pub const fn corner_position(corner: u8) -> [f64; 3] {
  [
    (corner & 1) as f64,
    ((corner >> 1) & 1) as f64,
    ((corner >> 2) & 1) as f64,
  ]
}

#[cfg(test)]
#[path = "edge_table_test.rs"]
mod edge_table_test;
