//! Core data types for polygonization output and configuration.

use glam::DVec3;
use smallvec::SmallVec;

use crate::constants::{MAX_POLYGON_VERTICES, WELD_EPSILON};

/// Inline storage for one polygon ring.
pub type PolygonRing = SmallVec<[DVec3; MAX_POLYGON_VERTICES]>;

/// Closed polygon produced from a single cube.
///
/// The ring is stored closed: the first position is repeated as the last one.
/// `normals`, when present, runs parallel to `positions`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
  pub positions: PolygonRing,
  pub normals: Option<PolygonRing>,
}

impl Polygon {
  /// Number of distinct vertices (the closing repeat is not counted).
  pub fn vertex_count(&self) -> usize {
    self.positions.len().saturating_sub(1)
  }

  /// Distinct positions, without the closing repeat.
  pub fn distinct_positions(&self) -> &[DVec3] {
    &self.positions[..self.vertex_count()]
  }

  /// Distinct normals, without the closing repeat.
  pub fn distinct_normals(&self) -> Option<&[DVec3]> {
    let count = self.vertex_count();
    self.normals.as_ref().map(|n| &n[..count])
  }

  /// True if the ring's last vertex lies on its first.
  pub fn is_closed(&self, epsilon: f64) -> bool {
    match (self.positions.first(), self.positions.last()) {
      (Some(first), Some(last)) if self.positions.len() > 1 => first.distance(*last) <= epsilon,
      _ => false,
    }
  }

  /// Polygon normal by Newell's method (unnormalized, zero when degenerate).
  pub fn newell_normal(&self) -> DVec3 {
    self
      .positions
      .windows(2)
      .fold(DVec3::ZERO, |acc, w| {
        let (a, b) = (w[0], w[1]);
        acc
          + DVec3::new(
            (a.y - b.y) * (a.z + b.z),
            (a.z - b.z) * (a.x + b.x),
            (a.x - b.x) * (a.y + b.y),
          )
      })
  }
}

/// Axis-aligned domain box in field coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
  pub min: DVec3,
  pub max: DVec3,
}

impl Bounds {
  pub fn new(min: DVec3, max: DVec3) -> Self {
    Self { min, max }
  }

  /// Cube of half-extent `half` around the origin.
  pub fn centered(half: f64) -> Self {
    Self::new(DVec3::splat(-half), DVec3::splat(half))
  }

  #[inline]
  pub fn size(&self) -> DVec3 {
    self.max - self.min
  }

  #[inline]
  pub fn center(&self) -> DVec3 {
    (self.min + self.max) * 0.5
  }

  /// Inclusive containment test. NaN coordinates are outside.
  #[inline]
  pub fn contains(&self, p: DVec3) -> bool {
    p.cmpge(self.min).all() && p.cmple(self.max).all()
  }

  /// Clamp `p` into the box shrunk by `inset` on every side.
  ///
  /// Axes narrower than `2 * inset` collapse to their midpoint.
  pub fn clamp_inside(&self, p: DVec3, inset: f64) -> DVec3 {
    let lo = self.min + DVec3::splat(inset);
    let hi = self.max - DVec3::splat(inset);
    let center = self.center();
    DVec3::from_array(std::array::from_fn(|i| {
      if lo[i] > hi[i] {
        center[i]
      } else {
        p[i].clamp(lo[i], hi[i])
      }
    }))
  }

  /// Length of the box diagonal.
  pub fn diagonal(&self) -> f64 {
    self.size().length()
  }
}

/// Output vertex for triangle meshes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
  /// Vertex position in field coordinates.
  pub position: [f32; 3],

  /// Surface normal (unit vector).
  pub normal: [f32; 3],
}

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Indexed triangle mesh built from polygons.
#[derive(Default, Clone, Debug)]
pub struct MeshOutput {
  /// Output vertices with positions and normals.
  pub vertices: Vec<Vertex>,

  /// Triangle indices (3 indices per triangle).
  pub indices: Vec<u32>,

  /// Bounding box encompassing all vertices.
  pub bounds: MinMaxAABB,
}

impl MeshOutput {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.indices.clear();
    self.bounds = MinMaxAABB::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Corner positions of triangle `i` in f64.
  pub fn triangle(&self, i: usize) -> [DVec3; 3] {
    std::array::from_fn(|k| {
      let p = self.vertices[self.indices[i * 3 + k] as usize].position;
      DVec3::new(p[0] as f64, p[1] as f64, p[2] as f64)
    })
  }

  /// Fan-triangulate a closed polygon into the mesh.
  ///
  /// With per-vertex normals the winding is flipped to agree with them;
  /// otherwise the polygon's own normal is written to every vertex.
  pub fn push_polygon(&mut self, polygon: &Polygon) {
    let positions = polygon.distinct_positions();
    if positions.len() < 3 {
      return;
    }

    let face_normal = polygon.newell_normal().normalize_or_zero();
    let normals = polygon.distinct_normals();
    let flip = normals
      .map(|n| n.iter().copied().sum::<DVec3>().dot(face_normal) < 0.0)
      .unwrap_or(false);

    let base = self.vertices.len() as u32;
    for (i, p) in positions.iter().enumerate() {
      let normal = normals.map(|n| n[i]).unwrap_or(face_normal);
      let position = p.as_vec3().to_array();
      self.vertices.push(Vertex {
        position,
        normal: normal.as_vec3().to_array(),
      });
      self.bounds.encapsulate(position);
    }

    for i in 1..(positions.len() as u32 - 1) {
      if flip {
        self.indices.extend_from_slice(&[base, base + i + 1, base + i]);
      } else {
        self.indices.extend_from_slice(&[base, base + i, base + i + 1]);
      }
    }
  }
}

/// What to do when a cube's segments do not chain into closed loops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpenPolygonPolicy {
  /// Emit nothing for the cube and keep going.
  #[default]
  DropCube,

  /// Report [`PolygonizeError::OpenPolygon`](crate::error::PolygonizeError).
  Error,
}

/// What a sweep does with a cube whose face configuration is invalid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InvalidCubePolicy {
  /// Log, count and skip the cube.
  #[default]
  Skip,

  /// Stop the sweep and return the error.
  Abort,
}

/// Configuration for polygonization.
#[derive(Clone, Debug)]
pub struct PolygonizeConfig {
  /// Distance under which segment endpoints are joined, and under which a
  /// segment counts as degenerate.
  pub weld_epsilon: f64,

  /// Handling of segment sets that do not close.
  pub open_polygon_policy: OpenPolygonPolicy,

  /// Handling of inconsistent faces during a sweep.
  pub invalid_cube_policy: InvalidCubePolicy,
}

impl Default for PolygonizeConfig {
  fn default() -> Self {
    Self {
      weld_epsilon: WELD_EPSILON,
      open_polygon_policy: OpenPolygonPolicy::default(),
      invalid_cube_policy: InvalidCubePolicy::default(),
    }
  }
}

impl PolygonizeConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_weld_epsilon(mut self, epsilon: f64) -> Self {
    self.weld_epsilon = epsilon;
    self
  }

  pub fn with_open_polygon_policy(mut self, policy: OpenPolygonPolicy) -> Self {
    self.open_polygon_policy = policy;
    self
  }

  pub fn with_invalid_cube_policy(mut self, policy: InvalidCubePolicy) -> Self {
    self.invalid_cube_policy = policy;
    self
  }
}

/// Counters for one sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepStats {
  /// Cubes pulled from the source.
  pub cubes: usize,

  /// Cubes with at least one crossed edge.
  pub crossed_cubes: usize,

  /// Polygons handed to the sink.
  pub polygons: usize,

  /// Cubes dropped because a loop did not close.
  pub open_cubes: usize,

  /// Cubes skipped because of an inconsistent face.
  pub invalid_cubes: usize,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
