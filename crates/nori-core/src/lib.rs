//! Shared types for the nori animation playground.
//!
//! This crate holds the plain data types used across the workspace: the
//! known animation kinds and their durations, theme tags, the fixed color
//! palette, the counter cell, and the small pure-function utilities the
//! demo exposes.

pub mod animation;
pub mod counter;
pub mod error;
pub mod math;
pub mod palette;
pub mod text;
pub mod theme;

pub use animation::{AnimationKind, TRIGGER_DELAY_MS, duration_ms};
pub use counter::Counter;
pub use error::StageError;
pub use theme::Theme;
