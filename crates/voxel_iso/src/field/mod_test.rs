use super::*;

#[test]
fn test_axis_unit_and_index_agree() {
  for axis in Axis::ALL {
    assert_eq!(axis.unit()[axis.index()], 1.0);
    assert_eq!(axis.unit().length(), 1.0);
  }
}

#[test]
fn test_default_gradient_of_quadratic() {
  let field = FnField::new(Bounds::centered(2.0), |p: DVec3| p.x * p.x + 3.0 * p.y - p.z * p.y);
  let p = DVec3::new(0.5, -1.0, 0.25);
  let g = field.gradient(p);
  let expected = DVec3::new(1.0, 3.0 - 0.25, 1.0);
  assert!((g - expected).length() < 1e-8, "{g:?}");
}

#[test]
fn test_default_hessian_is_symmetric() {
  let field = FnField::new(Bounds::centered(2.0), |p: DVec3| p.x * p.y + p.z * p.z * p.x);
  let h = field.hessian(DVec3::new(0.3, 0.2, -0.4));
  let expected = DMat3::from_cols(
    DVec3::new(0.0, 1.0, -0.8),
    DVec3::new(1.0, 0.0, 0.0),
    DVec3::new(-0.8, 0.0, 0.6),
  );
  assert!(h.abs_diff_eq(expected, 1e-5), "{h:?}");
  assert!(h.abs_diff_eq(h.transpose(), 1e-15));
}

#[test]
fn test_default_curvature_on_sampled_sphere() {
  let r = 1.2;
  let field = FnField::new(Bounds::centered(2.0), move |p: DVec3| p.length_squared() - r * r);
  let pc = field.principal_curvatures(DVec3::new(0.0, r, 0.0)).expect("regular point");
  assert!((pc.k1 - 1.0 / r).abs() < 1e-4);
  assert!((pc.k2 - 1.0 / r).abs() < 1e-4);
}

#[test]
fn test_difference_step_scales_with_domain() {
  let small = difference_step(&Bounds::centered(0.01));
  let large = difference_step(&Bounds::centered(100.0));
  assert_eq!(small, DIFFERENCE_STEP);
  assert!(large > small * 100.0);
}
