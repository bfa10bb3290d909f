use super::*;

fn approx_eq(a: DVec3, b: DVec3, epsilon: f64) -> bool {
  (a - b).abs().max_element() < epsilon
}

#[test]
fn test_sphere_value_sign() {
  let sphere = SphereField::new(2.0);
  assert!(sphere.value(DVec3::ZERO) < 0.0);
  assert_eq!(sphere.value(DVec3::new(2.0, 0.0, 0.0)), 0.0);
  assert!(sphere.value(DVec3::splat(2.0)) > 0.0);
}

#[test]
fn test_sphere_with_center_moves_bounds() {
  let sphere = SphereField::new(1.0).with_center(DVec3::new(5.0, 0.0, 0.0));
  assert_eq!(sphere.bounds().center(), DVec3::new(5.0, 0.0, 0.0));
  assert_eq!(sphere.value(DVec3::new(6.0, 0.0, 0.0)), 0.0);
}

#[test]
fn test_analytic_gradient_matches_finite_differences() {
  let sphere = SphereField::new(1.5).with_center(DVec3::new(0.1, -0.2, 0.3));
  let numeric = FnField::new(sphere.bounds(), |p| sphere.value(p));
  let torus = TorusField::new(1.0, 0.35);
  let torus_numeric = FnField::new(torus.bounds(), |p| torus.value(p));

  let points = [
    DVec3::new(0.7, 0.2, -0.4),
    DVec3::new(-1.1, 0.05, 0.3),
    DVec3::new(0.2, -0.3, 1.2),
  ];
  for p in points {
    let a = sphere.gradient(p);
    let b = numeric.gradient(p);
    assert!(approx_eq(a, b, 1e-6), "sphere at {p:?}: {a:?} vs {b:?}");

    let a = torus.gradient(p);
    let b = torus_numeric.gradient(p);
    assert!(approx_eq(a, b, 1e-6), "torus at {p:?}: {a:?} vs {b:?}");
  }
}

#[test]
fn test_plane_gradient_is_normal() {
  let plane = PlaneField::new(DVec3::new(1.0, 1.0, 1.0), 1.0, Bounds::centered(2.0));
  assert_eq!(plane.gradient(DVec3::new(0.3, -0.7, 1.9)), DVec3::ONE);
  assert_eq!(plane.value(DVec3::new(1.0, 0.0, 0.0)), 0.0);
  assert!(plane.principal_curvatures(DVec3::X).is_some_and(|pc| pc.max_magnitude() < 1e-12));
}

#[test]
fn test_torus_outer_equator_curvatures() {
  let (major, minor) = (1.0, 0.35);
  let torus = TorusField::new(major, minor);
  let p = DVec3::new(major + minor, 0.0, 0.0);
  assert!(torus.value(p).abs() < 1e-12);

  let pc = torus.principal_curvatures(p).expect("regular point");
  assert!((pc.k1 - 1.0 / minor).abs() < 1e-4, "k1 = {}", pc.k1);
  assert!((pc.k2 - 1.0 / (major + minor)).abs() < 1e-4, "k2 = {}", pc.k2);
  // Tube circle runs along Y here, the ring along Z
  assert!(pc.max_direction().dot(DVec3::Y).abs() > 0.999);
  assert!(pc.min_direction().dot(DVec3::Z).abs() > 0.999);
}

#[test]
fn test_boxed_field_delegates() {
  let boxed: Box<dyn ScalarField> = Box::new(SphereField::new(1.0));
  assert_eq!(boxed.value(DVec3::X), 0.0);
  assert_eq!(boxed.gradient(DVec3::X), DVec3::new(2.0, 0.0, 0.0));
}
