//! Edge intersection: where the threshold crosses each cube edge.
//!
//! ```text
//!   low corner (v < threshold)        high corner (v >= threshold)
//!        ●──────────────────×──────────────●
//!        p_low              │              p_high
//!                           └─ p_low + t (p_high - p_low)
//!                              t = (v_low - threshold) / (v_low - v_high)
//! ```
//!
//! Interpolation always runs from the low endpoint to the high one, so an
//! edge evaluated as (A, B) or (B, A) lands on the same bits.

use glam::DVec3;

use crate::constants::EDGE_COUNT;
use crate::edge_table::{corner_mask, EDGE_CORNERS, EDGE_TABLE};
use crate::polygonize::CubeSample;

/// A threshold crossing on one cube edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeCrossing {
  /// Interpolated crossing point.
  pub position: DVec3,

  /// Interpolated unit normal, when the cube carries gradients.
  pub normal: Option<DVec3>,

  /// Corner of this edge whose value is at or above the threshold.
  pub high_corner: u8,
}

/// One end of an edge, as seen by [`intersect_edge`].
#[derive(Clone, Copy, Debug)]
pub struct EdgeEndpoint {
  pub corner: u8,
  pub position: DVec3,
  pub value: f64,
  pub gradient: Option<DVec3>,
}

impl EdgeEndpoint {
  fn from_cube(cube: &CubeSample, corner: u8) -> Self {
    let i = corner as usize;
    Self {
      corner,
      position: cube.positions[i],
      value: cube.values[i],
      gradient: cube.gradients.as_ref().map(|g| g[i]),
    }
  }
}

/// Intersect one edge with the threshold.
///
/// `None` unless exactly one endpoint is at or above the threshold.
pub fn intersect_edge(a: EdgeEndpoint, b: EdgeEndpoint, threshold: f64) -> Option<EdgeCrossing> {
  let a_high = a.value >= threshold;
  let b_high = b.value >= threshold;
  if a_high == b_high {
    return None;
  }
  let (low, high) = if a_high { (b, a) } else { (a, b) };

  let t = (low.value - threshold) / (low.value - high.value);
  // Non-finite samples leave no usable ratio; fall back to the midpoint.
  let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };

  let position = low.position + (high.position - low.position) * t;
  let normal = match (low.gradient, high.gradient) {
    (Some(g_low), Some(g_high)) => Some((g_low + (g_high - g_low) * t).normalize_or(DVec3::Y)),
    _ => None,
  };

  Some(EdgeCrossing {
    position,
    normal,
    high_corner: high.corner,
  })
}

/// Crossings for all 12 edges of one cube.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeIntersections {
  /// Crossing per edge, indexed like [`EDGE_CORNERS`].
  pub edges: [Option<EdgeCrossing>; EDGE_COUNT],

  /// Bit `i` set when edge `i` is crossed.
  pub edge_mask: u16,
}

impl CubeIntersections {
  /// True if any edge crosses the threshold.
  #[inline]
  pub fn any_crossing(&self) -> bool {
    self.edge_mask != 0
  }

  /// Number of crossed edges.
  #[inline]
  pub fn crossing_count(&self) -> u32 {
    self.edge_mask.count_ones()
  }
}

/// Find every edge crossing of a cube.
pub fn intersect_cube(cube: &CubeSample, threshold: f64) -> CubeIntersections {
  let mask = corner_mask(&cube.values, threshold);
  let edge_mask = EDGE_TABLE[mask as usize];

  let mut edges = [None; EDGE_COUNT];
  if edge_mask != 0 {
    for (edge, &[c0, c1]) in EDGE_CORNERS.iter().enumerate() {
      if edge_mask & (1 << edge) == 0 {
        continue;
      }
      edges[edge] = intersect_edge(
        EdgeEndpoint::from_cube(cube, c0),
        EdgeEndpoint::from_cube(cube, c1),
        threshold,
      );
    }
  }

  CubeIntersections { edges, edge_mask }
}

#[cfg(test)]
#[path = "intersect_test.rs"]
mod intersect_test;
