use glam::DVec3;

use super::*;
use crate::constants::WELD_EPSILON;
use crate::polygonize::faces::pair_faces;
use crate::polygonize::intersect::intersect_cube;
use crate::polygonize::CubeSample;

fn seg(a: DVec3, b: DVec3) -> Segment {
  let c = |position| EdgeCrossing {
    position,
    normal: None,
    high_corner: 0,
  };
  Segment { a: c(a), b: c(b) }
}

fn seg_with_normals(a: DVec3, b: DVec3) -> Segment {
  let c = |position: DVec3| EdgeCrossing {
    position,
    normal: Some(position.normalize_or(DVec3::Y)),
    high_corner: 0,
  };
  Segment { a: c(a), b: c(b) }
}

#[test]
fn test_triangle_from_unordered_segments() {
  let (x, y, z) = (DVec3::X, DVec3::Y, DVec3::Z);
  // Out of order and with mixed orientation
  let pool: SegmentPool = [seg(x, y), seg(x, z), seg(y, z)].into_iter().collect();
  let polygons = assemble(pool, WELD_EPSILON).expect("closes");

  assert_eq!(polygons.len(), 1);
  let p = &polygons[0];
  assert_eq!(p.vertex_count(), 3);
  assert_eq!(p.positions.len(), 4);
  assert_eq!(p.positions[0], p.positions[3]);
  for v in [x, y, z] {
    assert!(p.positions.contains(&v));
  }
  assert!(p.normals.is_none());
}

#[test]
fn test_endpoints_match_within_epsilon() {
  let jitter = DVec3::splat(1e-12);
  let pool: SegmentPool = [
    seg(DVec3::ZERO, DVec3::X),
    seg(DVec3::X + jitter, DVec3::ONE),
    seg(DVec3::ONE - jitter, DVec3::Y),
    seg(DVec3::Y, DVec3::ZERO + jitter),
  ]
  .into_iter()
  .collect();
  let polygons = assemble(pool, WELD_EPSILON).expect("closes");
  assert_eq!(polygons.len(), 1);
  assert_eq!(polygons[0].vertex_count(), 4);
  assert!(polygons[0].is_closed(0.0));
}

#[test]
fn test_two_loops_in_one_pool() {
  let hits = intersect_cube(
    &CubeSample::new(
      DVec3::ZERO,
      DVec3::ONE,
      [1.0, -1.0, -1.0, 1.0, -1.0, -1.0, -1.0, -1.0],
    ),
    0.0,
  );
  let segments = pair_faces(&hits).expect("consistent");
  let polygons = assemble(segments, WELD_EPSILON).expect("closes");

  assert_eq!(polygons.len(), 2);
  for p in &polygons {
    assert_eq!(p.vertex_count(), 3);
  }
}

#[test]
fn test_degenerate_segments_are_dropped() {
  let (x, y, z) = (DVec3::X, DVec3::Y, DVec3::Z);
  let pool: SegmentPool = [seg(x, y), seg(z, z), seg(y, z), seg(z, x)]
    .into_iter()
    .collect();
  let polygons = assemble(pool, WELD_EPSILON).expect("closes");
  assert_eq!(polygons.len(), 1);
  assert_eq!(polygons[0].vertex_count(), 3);
}

#[test]
fn test_open_chain_is_an_error() {
  let pool: SegmentPool = [seg(DVec3::ZERO, DVec3::X), seg(DVec3::X, DVec3::Y)]
    .into_iter()
    .collect();
  let err = assemble(pool, WELD_EPSILON).expect_err("cannot close");
  assert!(matches!(err, PolygonizeError::OpenPolygon { vertices: 3 }));
}

#[test]
fn test_two_vertex_loop_is_discarded() {
  // A -> B -> A closes with only 2 distinct vertices
  let pool: SegmentPool = [seg(DVec3::ZERO, DVec3::X), seg(DVec3::X, DVec3::ZERO)]
    .into_iter()
    .collect();
  let polygons = assemble(pool, WELD_EPSILON).expect("closes");
  assert!(polygons.is_empty());
}

#[test]
fn test_normals_follow_positions() {
  let (x, y, z) = (DVec3::X, DVec3::Y, DVec3::Z);
  let pool: SegmentPool = [
    seg_with_normals(x, y),
    seg_with_normals(z, y),
    seg_with_normals(z, x),
  ]
  .into_iter()
  .collect();
  let polygons = assemble(pool, WELD_EPSILON).expect("closes");
  let p = &polygons[0];
  let normals = p.normals.as_ref().expect("all segments carry normals");
  assert_eq!(normals.len(), p.positions.len());
  for (pos, n) in p.positions.iter().zip(normals) {
    assert!((pos.normalize() - *n).length() < 1e-12);
  }
}

#[test]
fn test_missing_normal_drops_all_normals() {
  let (x, y, z) = (DVec3::X, DVec3::Y, DVec3::Z);
  let pool: SegmentPool = [seg_with_normals(x, y), seg(y, z), seg_with_normals(z, x)]
    .into_iter()
    .collect();
  let polygons = assemble(pool, WELD_EPSILON).expect("closes");
  assert!(polygons[0].normals.is_none());
}
