use super::*;
use crate::field::{SphereField, TorusField};
use crate::polygonize::polygonize_field;
use crate::trace::AreaWeightedCoverage;
use crate::types::{Bounds, PolygonizeConfig};

fn torus_mesh(torus: &TorusField) -> MeshOutput {
  let (mesh, _) =
    polygonize_field(torus, [32, 12, 32], 0.0, &PolygonizeConfig::default()).expect("valid torus");
  mesh
}

fn sphere_mesh(sphere: &SphereField) -> MeshOutput {
  let (mesh, _) = polygonize_field(sphere, [16, 16, 16], 0.0, &PolygonizeConfig::default())
    .expect("valid sphere");
  mesh
}

fn base_config() -> StrokeConfig {
  StrokeConfig::new()
    .with_count(12)
    .with_lengths(0.1, 0.3)
    .with_step(0.02)
    .with_seed(5)
}

#[test]
fn test_curvature_strokes_stay_on_surface() {
  let torus = TorusField::new(1.0, 0.3);
  let mesh = torus_mesh(&torus);
  let session = FieldSession::new(&torus);
  let mut coverage = AreaWeightedCoverage::new(11);

  let strokes = generate_strokes(&session, &mesh, &mut coverage, &base_config());
  assert_eq!(strokes.len(), 12);
  for stroke in &strokes {
    assert!(stroke.points.len() >= 2);
    for p in &stroke.points {
      assert!(torus.value(*p).abs() <= 1e-6, "{p:?} off the torus");
    }
  }
}

#[test]
fn test_both_curvatures_emit_two_strokes_per_seed() {
  let torus = TorusField::new(1.0, 0.3);
  let mesh = torus_mesh(&torus);
  let session = FieldSession::new(&torus);
  let config = base_config().with_policy(StrokePolicy::BothCurvatures);

  let strokes = generate_strokes(&session, &mesh, &mut AreaWeightedCoverage::new(11), &config);
  assert_eq!(strokes.len(), 24);
  // Consecutive pairs share their seed
  for pair in strokes.chunks(2) {
    assert_eq!(pair[0].seed(), pair[1].seed());
  }
}

#[test]
fn test_generation_is_deterministic() {
  let torus = TorusField::new(1.0, 0.3);
  let mesh = torus_mesh(&torus);
  let session = FieldSession::new(&torus);
  let config = base_config();

  let a = generate_strokes(&session, &mesh, &mut AreaWeightedCoverage::new(3), &config);
  let b = generate_strokes(&session, &mesh, &mut AreaWeightedCoverage::new(3), &config);
  assert_eq!(a, b);
}

#[test]
fn test_seeds_outside_domain_are_dropped() {
  let mesh = sphere_mesh(&SphereField::new(1.0));
  // Same surface, but a domain that stops short of it
  let clipped = SphereField::new(1.0).with_bounds(Bounds::centered(0.5));
  let session = FieldSession::new(&clipped);

  let strokes = generate_strokes(
    &session,
    &mesh,
    &mut AreaWeightedCoverage::new(1),
    &base_config(),
  );
  assert!(strokes.is_empty());
}

#[test]
fn test_silhouette_strokes_on_sphere() {
  let sphere = SphereField::new(1.0);
  let mesh = sphere_mesh(&sphere);
  let session = FieldSession::new(&sphere);
  let config = base_config()
    .with_policy(StrokePolicy::SilhouetteAndOrthogonal)
    .with_view(DVec3::Z);

  let strokes = generate_strokes(&session, &mesh, &mut AreaWeightedCoverage::new(9), &config);
  assert!(!strokes.is_empty());
  assert!(strokes.len() <= 24);
  for stroke in &strokes {
    for p in &stroke.points {
      assert!(sphere.value(*p).abs() <= 1e-6);
    }
  }
}

#[test]
fn test_constant_axis_strokes() {
  let sphere = SphereField::new(1.0);
  let mesh = sphere_mesh(&sphere);
  let session = FieldSession::new(&sphere);
  let config = base_config().with_policy(StrokePolicy::ConstantAxis(Axis::Y));

  let strokes = generate_strokes(&session, &mesh, &mut AreaWeightedCoverage::new(4), &config);
  for stroke in &strokes {
    let y = stroke.seed().y;
    for p in &stroke.points {
      assert!((p.y - y).abs() <= config.trace.axis_deviation);
    }
  }
}

#[test]
fn test_zero_step_generates_nothing() {
  let torus = TorusField::new(1.0, 0.3);
  let mesh = torus_mesh(&torus);
  let session = FieldSession::new(&torus);
  let config = base_config().with_step(0.0);

  let strokes = generate_strokes(&session, &mesh, &mut AreaWeightedCoverage::new(2), &config);
  assert!(strokes.is_empty());
}

#[test]
fn test_length_never_below_two_steps() {
  let config = StrokeConfig::new().with_lengths(0.0, 0.01).with_step(0.05);
  assert_eq!(config.length_for(0.0), 0.1);
  assert_eq!(config.length_for(1.0), 0.1);

  let config = StrokeConfig::new().with_lengths(0.2, 1.0).with_step(0.01);
  assert_eq!(config.length_for(0.0), 0.2);
  assert_eq!(config.length_for(1.0), 1.0);
}

#[test]
fn test_length_power_shapes_distribution() {
  let config = StrokeConfig::new()
    .with_lengths(0.0, 1.0)
    .with_length_power(2.0)
    .with_step(0.001);
  assert!((config.length_for(0.5) - 0.25).abs() < 1e-12);
}

#[test]
fn test_policy_expansion() {
  let view = DVec3::X;
  assert_eq!(StrokePolicy::MaxCurvature.trace_policies(view).len(), 1);
  assert_eq!(StrokePolicy::BothCurvatures.trace_policies(view).len(), 2);
  assert_eq!(
    StrokePolicy::SilhouetteAndOrthogonal.trace_policies(view).as_slice(),
    &[
      TracePolicy::Silhouette { view },
      TracePolicy::SilhouetteOrthogonal { view }
    ]
  );
  assert!(StrokePolicy::Silhouette.is_silhouette());
  assert!(!StrokePolicy::ConstantAxis(Axis::Z).is_silhouette());
}
