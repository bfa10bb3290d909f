//! Edge-intersection polygonization of a scalar field.
//!
//! Each cube is handled on its own: no case table of triangle layouts, only
//! the per-edge crossings, a per-face pairing rule and a chaining step. Every
//! cube yields zero or more closed polygons.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  CubeSample stream       - GridCubes / FieldCubes / any iter    │
//! │  threshold: f64          - iso-value                            │
//! │  PolygonizeConfig        - weld epsilon, error policies         │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 PHASE 1: Edge Intersection (intersect)          │
//! │    Corner mask from values >= threshold                         │
//! │    Edge mask from EDGE_TABLE, early-out if empty                │
//! │    Interpolate position (+ normal) low -> high per edge         │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 PHASE 2: Face Pairing (faces)                   │
//! │    6 faces x 4-edge ring                                        │
//! │    0 -> none, 2 -> one segment, 4 -> pair by high corner        │
//! │    1 or 3 -> InconsistentFace                                   │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 PHASE 3: Assembly (assemble)                    │
//! │    Drop degenerate segments                                     │
//! │    Chain endpoints within weld epsilon into closed rings        │
//! │    Open ring -> OpenPolygonPolicy                               │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  MeshSink::accept(Polygon) per closed ring                      │
//! │  SweepStats              - cube / polygon / skip counters       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod assemble;
mod cube;
mod faces;
mod intersect;

pub use cube::{CubeSample, FieldCubes, GridCubes};
pub use intersect::{intersect_cube, intersect_edge, CubeIntersections, EdgeCrossing, EdgeEndpoint};

use tracing::{debug, warn};

use crate::error::{PolygonizeError, PolygonizeResult};
use crate::field::ScalarField;
use crate::types::{
  InvalidCubePolicy, MeshOutput, OpenPolygonPolicy, Polygon, PolygonizeConfig, SweepStats,
};

/// Receiver for the polygons of a sweep.
pub trait MeshSink {
  fn accept(&mut self, polygon: Polygon);
}

impl MeshSink for Vec<Polygon> {
  fn accept(&mut self, polygon: Polygon) {
    self.push(polygon);
  }
}

impl MeshSink for MeshOutput {
  fn accept(&mut self, polygon: Polygon) {
    self.push_polygon(&polygon);
  }
}

impl<S: MeshSink + ?Sized> MeshSink for &mut S {
  fn accept(&mut self, polygon: Polygon) {
    (**self).accept(polygon);
  }
}

/// Pair and chain the crossings of one cube, without applying any policy.
fn polygons_from_hits(hits: &CubeIntersections, epsilon: f64) -> PolygonizeResult<Vec<Polygon>> {
  if !hits.any_crossing() {
    return Ok(Vec::new());
  }
  let segments = faces::pair_faces(hits)?;
  assemble::assemble(segments, epsilon)
}

/// Polygonize a single cube.
///
/// Under [`OpenPolygonPolicy::DropCube`] a cube whose segments do not close
/// yields no polygons instead of an error.
pub fn polygonize_cube(
  cube: &CubeSample,
  threshold: f64,
  config: &PolygonizeConfig,
) -> PolygonizeResult<Vec<Polygon>> {
  let hits = intersect_cube(cube, threshold);
  match polygons_from_hits(&hits, config.weld_epsilon) {
    Err(PolygonizeError::OpenPolygon { .. })
      if config.open_polygon_policy == OpenPolygonPolicy::DropCube =>
    {
      Ok(Vec::new())
    }
    result => result,
  }
}

/// Polygonize every cube of `cubes`, handing each polygon to `sink`.
///
/// Invalid cubes (and open rings under [`OpenPolygonPolicy::Error`]) go
/// through [`InvalidCubePolicy`]: skipped with a warning, or returned as the
/// sweep's error. Polygons already delivered stay in the sink.
#[tracing::instrument(skip_all, name = "polygonize::sweep", fields(threshold = threshold))]
pub fn sweep<I, S>(
  cubes: I,
  threshold: f64,
  config: &PolygonizeConfig,
  sink: &mut S,
) -> PolygonizeResult<SweepStats>
where
  I: IntoIterator<Item = CubeSample>,
  S: MeshSink + ?Sized,
{
  let mut stats = SweepStats::default();

  for (index, cube) in cubes.into_iter().enumerate() {
    stats.cubes += 1;

    let hits = intersect_cube(&cube, threshold);
    if !hits.any_crossing() {
      continue;
    }
    stats.crossed_cubes += 1;

    let polygons = match polygons_from_hits(&hits, config.weld_epsilon) {
      Ok(polygons) => polygons,
      Err(PolygonizeError::OpenPolygon { vertices })
        if config.open_polygon_policy == OpenPolygonPolicy::DropCube =>
      {
        debug!(cube = index, vertices, "dropping cube with open polygon");
        stats.open_cubes += 1;
        continue;
      }
      Err(err) => match config.invalid_cube_policy {
        InvalidCubePolicy::Skip => {
          warn!(cube = index, origin = ?cube.positions[0], %err, "skipping invalid cube");
          stats.invalid_cubes += 1;
          continue;
        }
        InvalidCubePolicy::Abort => return Err(err),
      },
    };

    stats.polygons += polygons.len();
    for polygon in polygons {
      sink.accept(polygon);
    }
  }

  debug!(
    cubes = stats.cubes,
    crossed = stats.crossed_cubes,
    polygons = stats.polygons,
    open = stats.open_cubes,
    invalid = stats.invalid_cubes,
    "sweep complete"
  );
  Ok(stats)
}

/// Polygonize an analytic field over its bounds into a triangle mesh.
///
/// `resolution` is the number of cubes per axis. Corner gradients are taken
/// from the field, so every vertex carries a surface normal.
pub fn polygonize_field<F: ScalarField + ?Sized>(
  field: &F,
  resolution: [usize; 3],
  threshold: f64,
  config: &PolygonizeConfig,
) -> PolygonizeResult<(MeshOutput, SweepStats)> {
  let mut mesh = MeshOutput::new();
  let stats = sweep(FieldCubes::new(field, resolution), threshold, config, &mut mesh)?;
  Ok((mesh, stats))
}
