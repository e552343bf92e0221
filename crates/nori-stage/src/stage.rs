//! Registry of surfaces keyed by stable id.

use std::collections::BTreeMap;

use nori_core::StageError;

use crate::surface::Surface;

/// The animated demo box.
pub const ANIMATION_BOX: &str = "animation-box";
/// The two-sided flip card.
pub const FLIP_CARD: &str = "flip-card";
/// The modal overlay.
pub const MODAL_OVERLAY: &str = "modal-overlay";
/// The loading spinner.
pub const SPINNER: &str = "spinner";
/// The root surface; carries the theme tag and the scroll-lock style.
pub const BODY: &str = "body";

/// All surfaces of the demo, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Stage {
    surfaces: BTreeMap<String, Surface>,
}

impl Stage {
    /// An empty stage with no surfaces registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// A stage with the demo's well-known surfaces registered.
    pub fn with_defaults() -> Self {
        let mut stage = Self::new();
        for id in [ANIMATION_BOX, FLIP_CARD, MODAL_OVERLAY, SPINNER, BODY] {
            stage.register(id);
        }
        stage
    }

    /// Register a surface under `id`, if not already present.
    pub fn register(&mut self, id: &str) {
        self.surfaces.entry(id.to_string()).or_default();
    }

    /// Look up a surface.
    pub fn surface(&self, id: &str) -> Result<&Surface, StageError> {
        self.surfaces
            .get(id)
            .ok_or_else(|| StageError::SurfaceNotFound(id.to_string()))
    }

    /// Look up a surface for mutation.
    pub fn surface_mut(&mut self, id: &str) -> Result<&mut Surface, StageError> {
        self.surfaces
            .get_mut(id)
            .ok_or_else(|| StageError::SurfaceNotFound(id.to_string()))
    }

    /// Registered surface ids, in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.surfaces.keys().map(String::as_str)
    }
}
