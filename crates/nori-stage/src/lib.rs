//! Surface state and deterministic scheduling for the nori playground.
//!
//! This crate owns the transient visual state of the demo: each surface's
//! active tags and inline styles, the scheduler that replaces fire-and-forget
//! timers with an inspectable command queue, and the controller that exposes
//! the user-facing operations (trigger, flip, modal, spinner, theme,
//! choreography).

mod controller;
mod scheduler;
mod stage;
mod surface;

pub use controller::{
    Controller, DEFAULT_TRANSITION_MS, FLIPPED_TAG, MODAL_SHOW_TAG, SPINNER_ACTIVE_TAG,
};
pub use scheduler::{Command, Scheduler};
pub use stage::{ANIMATION_BOX, BODY, FLIP_CARD, MODAL_OVERLAY, SPINNER, Stage};
pub use surface::Surface;
