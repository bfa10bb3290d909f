//! Face edge pairing: turn the crossings on each cube face into segments.
//!
//! A face is a 4-edge ring. The number of crossed edges on a ring is even for
//! any consistent corner classification:
//!
//! ```text
//!  0 crossings        2 crossings          4 crossings (saddle)
//!  ○────────○         ●────×───○           ●────×────○
//!  │        │         │     ╲  │           │ ╲      │
//!  │        │         │      ╲ │           ×  ╲    ╱×
//!  │        │         │       ╲│           │   ╲  ╱ │
//!  ○────────○         ●────────×           ○────×───●
//!                                           pair by shared high corner
//! ```
//!
//! On a saddle the two edges adjacent to the same high corner are joined, so
//! the high corners end up separated on that face. Both cubes sharing the face
//! see the same corners and make the same choice.

use smallvec::SmallVec;

use super::intersect::{CubeIntersections, EdgeCrossing};
use crate::constants::{FACE_COUNT, MAX_SEGMENTS};
use crate::edge_table::FACE_EDGES;
use crate::error::{PolygonizeError, PolygonizeResult};

/// A face-interior line between two edge crossings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Segment {
  pub a: EdgeCrossing,
  pub b: EdgeCrossing,
}

impl Segment {
  #[inline]
  pub fn length(&self) -> f64 {
    self.a.position.distance(self.b.position)
  }
}

/// Segments for one cube, at most two per face.
pub(crate) type SegmentPool = SmallVec<[Segment; MAX_SEGMENTS]>;

/// Pair the crossed edges of one face, appending 0-2 segments to `out`.
pub(crate) fn pair_face(
  face: usize,
  hits: &CubeIntersections,
  out: &mut SegmentPool,
) -> PolygonizeResult<()> {
  let crossed: SmallVec<[EdgeCrossing; 4]> = FACE_EDGES[face]
    .iter()
    .filter_map(|&edge| hits.edges[edge as usize])
    .collect();

  match crossed.len() {
    0 => Ok(()),
    2 => {
      out.push(Segment {
        a: crossed[0],
        b: crossed[1],
      });
      Ok(())
    }
    4 => pair_saddle(face, &crossed, out),
    crossings => Err(PolygonizeError::InconsistentFace { face, crossings }),
  }
}

/// Resolve a 4-crossing face by matching high corners.
fn pair_saddle(
  face: usize,
  crossed: &[EdgeCrossing],
  out: &mut SegmentPool,
) -> PolygonizeResult<()> {
  for i in 0..4 {
    for j in (i + 1)..4 {
      if crossed[i].high_corner != crossed[j].high_corner {
        continue;
      }
      let mut rest = (0..4).filter(|&k| k != i && k != j);
      let (Some(k), Some(l)) = (rest.next(), rest.next()) else {
        break;
      };
      if crossed[k].high_corner != crossed[l].high_corner {
        break;
      }
      out.push(Segment {
        a: crossed[i],
        b: crossed[j],
      });
      out.push(Segment {
        a: crossed[k],
        b: crossed[l],
      });
      return Ok(());
    }
  }
  Err(PolygonizeError::UnresolvedSaddle { face })
}

/// Pair every face of a cube.
pub(crate) fn pair_faces(hits: &CubeIntersections) -> PolygonizeResult<SegmentPool> {
  let mut segments = SegmentPool::new();
  for face in 0..FACE_COUNT {
    pair_face(face, hits, &mut segments)?;
  }
  Ok(segments)
}

#[cfg(test)]
#[path = "faces_test.rs"]
mod faces_test;
