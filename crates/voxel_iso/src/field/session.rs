//! FieldSession - scoped handle on the field used for refinement and tracing.
//!
//! A session bundles a field, its derivative evaluators and its domain
//! bounds for a batch of refinement or tracing calls. It opens on
//! construction and closes when dropped. Sessions borrow their field
//! immutably, so independent sessions never interfere.

use std::sync::atomic::{AtomicU64, Ordering};

use glam::DVec3;

use super::{Axis, PrincipalCurvatures, ScalarField};
use crate::types::Bounds;

// =============================================================================
// SessionId - unique identifier
// =============================================================================

/// Atomic counter for generating unique SessionIds.
static SESSION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque session identifier, used to correlate log output.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SessionId(u64);

impl SessionId {
  fn next() -> Self {
    Self(SESSION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
  }

  /// Get the raw ID value.
  pub fn raw(&self) -> u64 {
    self.0
  }
}

// =============================================================================
// FieldSession
// =============================================================================

/// Field plus cached domain bounds for one batch of surface queries.
pub struct FieldSession<'a, F: ScalarField + ?Sized> {
  id: SessionId,
  field: &'a F,
  bounds: Bounds,
}

impl<'a, F: ScalarField + ?Sized> FieldSession<'a, F> {
  /// Open a session over `field`.
  pub fn new(field: &'a F) -> Self {
    let id = SessionId::next();
    let bounds = field.bounds();
    tracing::debug!(
      session = id.raw(),
      min = ?bounds.min,
      max = ?bounds.max,
      "field session opened"
    );
    Self { id, field, bounds }
  }

  pub fn id(&self) -> SessionId {
    self.id
  }

  pub fn field(&self) -> &'a F {
    self.field
  }

  pub fn bounds(&self) -> &Bounds {
    &self.bounds
  }

  #[inline]
  pub fn contains(&self, p: DVec3) -> bool {
    self.bounds.contains(p)
  }

  #[inline]
  pub fn value(&self, p: DVec3) -> f64 {
    self.field.value(p)
  }

  #[inline]
  pub fn partial(&self, axis: Axis, p: DVec3) -> f64 {
    self.field.partial(axis, p)
  }

  #[inline]
  pub fn gradient(&self, p: DVec3) -> DVec3 {
    self.field.gradient(p)
  }

  #[inline]
  pub fn principal_curvatures(&self, p: DVec3) -> Option<PrincipalCurvatures> {
    self.field.principal_curvatures(p)
  }
}

impl<F: ScalarField + ?Sized> Drop for FieldSession<'_, F> {
  fn drop(&mut self) {
    tracing::debug!(session = self.id.raw(), "field session closed");
  }
}
