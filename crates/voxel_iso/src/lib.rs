//! voxel_iso - Iso-surface polygonization and on-surface stroke tracing
//!
//! This crate turns a scalar field (a sampled grid or an analytic function)
//! into a polygon mesh at a chosen threshold, and traces piecewise-linear
//! curves that stay on that implicit surface while following a chosen
//! direction field.
//!
//! # Features
//!
//! - **Edge-intersection polygonization**: per-cube edge crossings, face
//!   pairing with saddle resolution by shared high corner, and chaining into
//!   closed polygons (no triangle case table)
//! - **Surface point refinement**: Newton steps along the gradient with a
//!   cube-scaled probe, clamped inside the field's domain
//! - **Curve tracing**: principal curvature, constant axis and silhouette
//!   direction fields, chained into two-sided strokes
//! - **Stroke coverage**: seeded, area-weighted stroke placement over a
//!   polygonized surface
//!
//! # Example
//!
//! ```ignore
//! use voxel_iso::{
//!   generate_strokes, polygonize_field, AreaWeightedCoverage, FieldSession, PolygonizeConfig,
//!   SphereField, StrokeConfig, StrokePolicy,
//! };
//!
//! let sphere = SphereField::new(1.0);
//!
//! // Extract the surface
//! let (mesh, stats) = polygonize_field(&sphere, [32, 32, 32], 0.0, &PolygonizeConfig::default())?;
//! println!("{} polygons, {} triangles", stats.polygons, mesh.triangle_count());
//!
//! // Cover it with strokes
//! let session = FieldSession::new(&sphere);
//! let config = StrokeConfig::new()
//!   .with_count(200)
//!   .with_policy(StrokePolicy::SilhouetteAndOrthogonal);
//! let strokes = generate_strokes(&session, &mesh, &mut AreaWeightedCoverage::new(7), &config);
//! ```

pub mod constants;
pub mod edge_table;
pub mod error;
pub mod field;
pub mod polygonize;
pub mod refine;
pub mod trace;
pub mod types;

// Re-export commonly used items
pub use constants::{coord_to_index, index_to_coord, CORNER_OFFSETS};
pub use edge_table::{EDGE_CORNERS, EDGE_TABLE, FACE_EDGES};
pub use error::{GridError, PolygonizeError, PolygonizeResult, RefineFailure};
pub use field::{
  Axis, FieldSession, FnField, PlaneField, PrincipalCurvatures, ScalarField, ScalarGrid,
  SessionId, SphereField, TorusField,
};
pub use polygonize::{
  polygonize_cube, polygonize_field, sweep, CubeSample, FieldCubes, GridCubes, MeshSink,
};
pub use refine::{refine, RefineConfig};
pub use trace::{
  chain, generate_strokes, trace, trace_stroke, AreaWeightedCoverage, PointCoverage, Stroke,
  StrokeConfig, StrokePolicy, Trace, TraceConfig, TraceDirection, TraceEnd, TracePolicy,
};
pub use types::{
  Bounds, InvalidCubePolicy, MeshOutput, MinMaxAABB, OpenPolygonPolicy, Polygon,
  PolygonizeConfig, SweepStats, Vertex,
};
