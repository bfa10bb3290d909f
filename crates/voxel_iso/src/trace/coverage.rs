//! Seed point distribution over a triangle mesh.

use glam::DVec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::MeshOutput;

/// Spreads points over a polygonized surface.
pub trait PointCoverage {
  /// Up to `count` points on the surface of `mesh`.
  fn distribute(&mut self, mesh: &MeshOutput, count: usize) -> Vec<DVec3>;
}

/// Stratified area-weighted sampler.
///
/// The total surface area is split into `count` equal strata and one point
/// is drawn per stratum, so points are spread evenly rather than clumped.
/// Output is fully determined by the seed.
#[derive(Clone, Debug)]
pub struct AreaWeightedCoverage {
  rng: ChaCha8Rng,
}

impl AreaWeightedCoverage {
  pub fn new(seed: u64) -> Self {
    Self {
      rng: ChaCha8Rng::seed_from_u64(seed),
    }
  }
}

impl PointCoverage for AreaWeightedCoverage {
  fn distribute(&mut self, mesh: &MeshOutput, count: usize) -> Vec<DVec3> {
    let triangles: Vec<[DVec3; 3]> = (0..mesh.triangle_count()).map(|i| mesh.triangle(i)).collect();

    let mut cumulative = Vec::with_capacity(triangles.len());
    let mut total = 0.0;
    for [a, b, c] in &triangles {
      total += 0.5 * (*b - *a).cross(*c - *a).length();
      cumulative.push(total);
    }
    if count == 0 || !(total > 0.0) {
      return Vec::new();
    }

    (0..count)
      .map(|i| {
        let target = (i as f64 + self.rng.random::<f64>()) / count as f64 * total;
        let index = cumulative
          .partition_point(|&area| area < target)
          .min(triangles.len() - 1);
        let [a, b, c] = triangles[index];

        let mut u: f64 = self.rng.random();
        let mut v: f64 = self.rng.random();
        if u + v > 1.0 {
          u = 1.0 - u;
          v = 1.0 - v;
        }
        a + (b - a) * u + (c - a) * v
      })
      .collect()
  }
}

#[cfg(test)]
#[path = "coverage_test.rs"]
mod coverage_test;
