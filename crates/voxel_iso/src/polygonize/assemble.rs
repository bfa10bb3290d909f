//! Polygon assembly: chain a cube's segments into closed loops.
//!
//! Degenerate segments go first. A loop is grown from any remaining segment
//! by repeatedly pulling the segment whose endpoint sits on the open end, and
//! is done when the new end lands back on the start. A cube cut by several
//! sheets yields several loops.

use smallvec::smallvec;

use super::faces::{Segment, SegmentPool};
use super::intersect::EdgeCrossing;
use crate::error::{PolygonizeError, PolygonizeResult};
use crate::types::{Polygon, PolygonRing};

/// Chain segments into closed polygons.
///
/// Fails with [`PolygonizeError::OpenPolygon`] when a loop cannot be closed;
/// deciding what that means for the cube is up to the caller. Loops with fewer
/// than 3 distinct vertices are discarded.
pub(crate) fn assemble(mut pool: SegmentPool, epsilon: f64) -> PolygonizeResult<Vec<Polygon>> {
  pool.retain(|s| s.length() > epsilon);

  let mut polygons = Vec::new();
  while !pool.is_empty() {
    let seed = pool.remove(0);
    let polygon = grow_loop(seed, &mut pool, epsilon)?;
    if polygon.vertex_count() >= 3 {
      polygons.push(polygon);
    }
  }
  Ok(polygons)
}

/// Grow one loop starting from `seed`, consuming segments from `pool`.
fn grow_loop(seed: Segment, pool: &mut SegmentPool, epsilon: f64) -> PolygonizeResult<Polygon> {
  let start = seed.a.position;
  let mut positions: PolygonRing = smallvec![seed.a.position, seed.b.position];
  let mut normals: Option<PolygonRing> = seed
    .a
    .normal
    .zip(seed.b.normal)
    .map(|(na, nb)| smallvec![na, nb]);
  let mut open_end = seed.b.position;

  loop {
    if positions.len() > 2 && open_end.distance(start) <= epsilon {
      break;
    }

    let next = pool.iter().position(|s| {
      s.a.position.distance(open_end) <= epsilon || s.b.position.distance(open_end) <= epsilon
    });
    let Some(index) = next else {
      return Err(PolygonizeError::OpenPolygon {
        vertices: positions.len(),
      });
    };

    let segment = pool.swap_remove(index);
    let far: EdgeCrossing = if segment.a.position.distance(open_end) <= epsilon {
      segment.b
    } else {
      segment.a
    };

    positions.push(far.position);
    normals = match (normals, far.normal) {
      (Some(mut n), Some(far_normal)) => {
        n.push(far_normal);
        Some(n)
      }
      _ => None,
    };
    open_end = far.position;
  }

  // Snap the closing vertex onto the start so the ring is exactly closed.
  if let Some(last) = positions.last_mut() {
    *last = start;
  }
  if let Some(n) = normals.as_mut() {
    let first = n[0];
    if let Some(last) = n.last_mut() {
      *last = first;
    }
  }

  Ok(Polygon { positions, normals })
}

#[cfg(test)]
#[path = "assemble_test.rs"]
mod assemble_test;
