//! Errors from stage operations.

use thiserror::Error;

/// The one failure mode of the controller: an unresolved surface id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    /// No surface registered under the given id.
    #[error("surface not found: {0}")]
    SurfaceNotFound(String),
}
