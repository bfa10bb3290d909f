//! Stroke tracing benchmarks on a torus.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use voxel_iso::{
  generate_strokes, polygonize_field, AreaWeightedCoverage, FieldSession, PolygonizeConfig,
  StrokeConfig, StrokePolicy, TorusField,
};

fn bench_stroke_policies(c: &mut Criterion) {
  let mut group = c.benchmark_group("generate_strokes");
  let torus = TorusField::new(1.0, 0.3);
  let mesh = match polygonize_field(&torus, [40, 16, 40], 0.0, &PolygonizeConfig::default()) {
    Ok((mesh, _)) => mesh,
    Err(err) => panic!("torus polygonization failed: {err}"),
  };

  let policies = [
    ("max_curvature", StrokePolicy::MaxCurvature),
    ("both_curvatures", StrokePolicy::BothCurvatures),
    ("silhouette", StrokePolicy::SilhouetteAndOrthogonal),
  ];

  for (name, policy) in policies {
    let config = StrokeConfig::new()
      .with_count(64)
      .with_policy(policy)
      .with_lengths(0.2, 0.6)
      .with_step(0.02);

    group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
      b.iter(|| {
        let session = FieldSession::new(&torus);
        let mut coverage = AreaWeightedCoverage::new(config.seed);
        black_box(generate_strokes(&session, &mesh, &mut coverage, config))
      })
    });
  }

  group.finish();
}

criterion_group!(benches, bench_stroke_policies);
criterion_main!(benches);
