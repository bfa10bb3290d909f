use smallvec::smallvec;

use super::*;

fn square(closed: bool) -> Polygon {
  let mut positions: PolygonRing = smallvec![
    DVec3::new(0.0, 0.0, 0.0),
    DVec3::new(1.0, 0.0, 0.0),
    DVec3::new(1.0, 1.0, 0.0),
    DVec3::new(0.0, 1.0, 0.0),
  ];
  if closed {
    positions.push(positions[0]);
  }
  Polygon {
    positions,
    normals: None,
  }
}

#[test]
fn test_polygon_counts_distinct_vertices() {
  let poly = square(true);
  assert_eq!(poly.vertex_count(), 4);
  assert_eq!(poly.distinct_positions().len(), 4);
  assert!(poly.is_closed(1e-12));
  assert!(!square(false).is_closed(1e-12));
}

#[test]
fn test_newell_normal_of_ccw_square_points_up() {
  let n = square(true).newell_normal().normalize();
  assert!((n - DVec3::Z).length() < 1e-12, "normal {n:?}");
}

#[test]
fn test_bounds_contains_is_inclusive() {
  let b = Bounds::centered(1.0);
  assert!(b.contains(DVec3::ZERO));
  assert!(b.contains(DVec3::splat(1.0)));
  assert!(!b.contains(DVec3::new(1.0001, 0.0, 0.0)));
  assert!(!b.contains(DVec3::new(f64::NAN, 0.0, 0.0)));
}

#[test]
fn test_bounds_clamp_inside_nudges_off_boundary() {
  let b = Bounds::centered(1.0);
  let p = b.clamp_inside(DVec3::new(5.0, -5.0, 0.25), 0.01);
  assert!((p - DVec3::new(0.99, -0.99, 0.25)).length() < 1e-12, "{p:?}");
}

#[test]
fn test_bounds_clamp_inside_collapses_thin_axes() {
  let b = Bounds::new(DVec3::new(0.0, 0.0, 0.0), DVec3::new(1.0, 1.0, 0.001));
  let p = b.clamp_inside(DVec3::new(0.5, 0.5, 3.0), 0.01);
  assert!((p.z - 0.0005).abs() < 1e-12);
}

#[test]
fn test_push_polygon_fans_triangles() {
  let mut mesh = MeshOutput::new();
  mesh.push_polygon(&square(true));

  assert_eq!(mesh.vertices.len(), 4);
  assert_eq!(mesh.triangle_count(), 2);
  assert!((0..3).all(|i| mesh.bounds.min[i] <= mesh.bounds.max[i]));
  for v in &mesh.vertices {
    assert_eq!(v.normal, [0.0, 0.0, 1.0]);
  }
}

#[test]
fn test_push_polygon_winding_follows_vertex_normals() {
  let mut poly = square(true);
  poly.normals = Some(smallvec![DVec3::NEG_Z; 5]);

  let mut mesh = MeshOutput::new();
  mesh.push_polygon(&poly);

  let [a, b, c] = mesh.triangle(0);
  let n = (b - a).cross(c - a);
  assert!(n.z < 0.0, "winding should face -Z, got {n:?}");
}

#[test]
fn test_push_polygon_skips_degenerate() {
  let poly = Polygon {
    positions: smallvec![DVec3::ZERO, DVec3::X, DVec3::ZERO],
    normals: None,
  };
  let mut mesh = MeshOutput::new();
  mesh.push_polygon(&poly);
  assert!(mesh.is_empty());
}

#[test]
fn test_mesh_clear() {
  let mut mesh = MeshOutput::new();
  mesh.push_polygon(&square(true));
  mesh.clear();
  assert!(mesh.is_empty());
  assert_eq!(mesh.triangle_count(), 0);
  assert_eq!(mesh.bounds.min, [f32::INFINITY; 3]);
  assert_eq!(mesh.bounds.max, [f32::NEG_INFINITY; 3]);
}

#[test]
fn test_polygonize_config_builders() {
  let config = PolygonizeConfig::new()
    .with_weld_epsilon(1e-6)
    .with_open_polygon_policy(OpenPolygonPolicy::Error)
    .with_invalid_cube_policy(InvalidCubePolicy::Abort);

  assert_eq!(config.weld_epsilon, 1e-6);
  assert_eq!(config.open_polygon_policy, OpenPolygonPolicy::Error);
  assert_eq!(config.invalid_cube_policy, InvalidCubePolicy::Abort);
}
