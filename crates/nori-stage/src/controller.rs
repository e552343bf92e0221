//! The animation/UI-state controller.
//!
//! Owns the stage, the command scheduler, and a millisecond clock, and
//! exposes the user-facing operations of the demo. Every operation is a
//! synchronous entry with (at most) deferred effects; nothing blocks.

use nori_core::StageError;
use nori_core::animation::{AnimationKind, TRIGGER_DELAY_MS, duration_ms};
use nori_core::palette::PALETTE;
use nori_core::theme::{THEME_PREFIX, is_theme_tag, theme_tag};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::scheduler::{Command, Scheduler};
use crate::stage::{ANIMATION_BOX, BODY, MODAL_OVERLAY, Stage};

/// Tag marking the flip card's flipped side.
pub const FLIPPED_TAG: &str = "flipped";
/// Tag marking the modal overlay as visible.
pub const MODAL_SHOW_TAG: &str = "show";
/// Tag marking the spinner as running.
pub const SPINNER_ACTIVE_TAG: &str = "active";

/// Default transition length for dynamic styles.
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Per-surface animation lifecycle: Idle, then 50ms Pending after a
/// trigger, then Active for the tag's duration, then Idle again. A new
/// trigger preempts straight back to Idle via the immediate reset, but
/// already-scheduled removals still fire (see [`Scheduler`]).
#[derive(Debug)]
pub struct Controller {
    stage: Stage,
    scheduler: Scheduler,
    now_ms: u64,
    rng: StdRng,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// A controller over the demo's default surfaces, with an OS-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A controller with a fixed RNG seed, for reproducible color picks.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            stage: Stage::with_defaults(),
            scheduler: Scheduler::new(),
            now_ms: 0,
            rng,
        }
    }

    /// The current clock, in milliseconds since the controller was created.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Read access to the surfaces, for rendering.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Mutable access to the surfaces.
    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    /// Advance the clock by `delta_ms`, executing every command that
    /// comes due along the way.
    pub fn tick(&mut self, delta_ms: u64) -> Result<(), StageError> {
        self.advance_to(self.now_ms + delta_ms)
    }

    /// Advance the clock to an absolute time. Commands execute in fire-time
    /// order; a command may schedule further commands (the choreography
    /// does), and those run too if they come due before `target_ms`.
    pub fn advance_to(&mut self, target_ms: u64) -> Result<(), StageError> {
        while let Some(due) = self.scheduler.next_due() {
            if due > target_ms {
                break;
            }
            self.now_ms = self.now_ms.max(due);
            for command in self.scheduler.drain_due(self.now_ms) {
                self.execute(command)?;
            }
        }
        self.now_ms = self.now_ms.max(target_ms);
        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<(), StageError> {
        match command {
            Command::AddTag { surface, tag } => {
                self.stage.surface_mut(&surface)?.add_tag(&tag);
            }
            Command::RemoveTag { surface, tag } => {
                self.stage.surface_mut(&surface)?.remove_tag(&tag);
            }
            Command::Trigger { surface, tag } => {
                self.trigger_animation(&surface, &tag)?;
            }
        }
        Ok(())
    }

    /// Remove all known animation tags from a surface. Idempotent.
    pub fn reset_animations(&mut self, surface: &str) -> Result<(), StageError> {
        let surface = self.stage.surface_mut(surface)?;
        for kind in AnimationKind::ALL {
            surface.remove_tag(kind.tag());
        }
        Ok(())
    }

    /// Reset, then apply `tag` after a 50ms pending delay and remove it
    /// again `duration_ms(tag)` later.
    ///
    /// Overlapping triggers on one surface preempt each other only through
    /// the immediate reset; the earlier trigger's scheduled add and remove
    /// still fire. This matches the original demo's timer race.
    pub fn trigger_animation(&mut self, surface: &str, tag: &str) -> Result<(), StageError> {
        self.reset_animations(surface)?;
        let apply_at = self.now_ms + TRIGGER_DELAY_MS;
        self.scheduler.schedule(
            apply_at,
            Command::AddTag {
                surface: surface.to_string(),
                tag: tag.to_string(),
            },
        );
        self.scheduler.schedule(
            apply_at + duration_ms(tag),
            Command::RemoveTag {
                surface: surface.to_string(),
                tag: tag.to_string(),
            },
        );
        Ok(())
    }

    /// Toggle the flip state and return whether the card is now flipped.
    pub fn flip_card(&mut self, surface: &str) -> Result<bool, StageError> {
        Ok(self.stage.surface_mut(surface)?.toggle_tag(FLIPPED_TAG))
    }

    /// Show the modal overlay and lock body scrolling.
    pub fn show_modal(&mut self) -> Result<(), StageError> {
        self.stage.surface_mut(MODAL_OVERLAY)?.add_tag(MODAL_SHOW_TAG);
        self.stage.surface_mut(BODY)?.set_style("overflow", "hidden");
        Ok(())
    }

    /// Hide the modal overlay and restore body scrolling.
    pub fn hide_modal(&mut self) -> Result<(), StageError> {
        self.stage
            .surface_mut(MODAL_OVERLAY)?
            .remove_tag(MODAL_SHOW_TAG);
        self.stage.surface_mut(BODY)?.set_style("overflow", "auto");
        Ok(())
    }

    /// Whether the modal overlay is currently shown.
    pub fn modal_shown(&self) -> bool {
        self.stage
            .surface(MODAL_OVERLAY)
            .map(|s| s.has_tag(MODAL_SHOW_TAG))
            .unwrap_or(false)
    }

    /// Toggle the spinner and return whether it is now active.
    pub fn toggle_spinner(&mut self, surface: &str) -> Result<bool, StageError> {
        Ok(self
            .stage
            .surface_mut(surface)?
            .toggle_tag(SPINNER_ACTIVE_TAG))
    }

    /// Apply `theme-{name}` to the root surface, dropping any other theme
    /// tag first, and return the applied name.
    ///
    /// Any name is accepted; unknown themes simply render unthemed. Removal
    /// is by prefix rather than a fixed list, so the one-active-theme
    /// invariant holds even after an unknown theme was set.
    pub fn set_theme(&mut self, name: &str) -> Result<String, StageError> {
        let body = self.stage.surface_mut(BODY)?;
        let stale: Vec<String> = body
            .tags()
            .filter(|tag| is_theme_tag(tag))
            .map(str::to_string)
            .collect();
        for tag in stale {
            body.remove_tag(&tag);
        }
        body.add_tag(&theme_tag(name));
        Ok(name.to_string())
    }

    /// The root surface's active theme name, if any.
    pub fn current_theme(&self) -> Option<&str> {
        self.stage
            .surface(BODY)
            .ok()?
            .tags()
            .find(|tag| is_theme_tag(tag))
            .and_then(|tag| tag.strip_prefix(THEME_PREFIX))
    }

    /// The fixed bounce / spin / glow choreography on the animation box:
    /// bounce now, spin at +1000ms, glow at +2000ms.
    pub fn perform_complex_animation(&mut self) -> Result<(), StageError> {
        self.trigger_animation(ANIMATION_BOX, AnimationKind::Bounce.tag())?;
        for (offset, kind) in [(1000, AnimationKind::Spin), (2000, AnimationKind::Glow)] {
            self.scheduler.schedule(
                self.now_ms + offset,
                Command::Trigger {
                    surface: ANIMATION_BOX.to_string(),
                    tag: kind.tag().to_string(),
                },
            );
        }
        Ok(())
    }

    /// Set a transition on `property`, then the property itself.
    /// An absent surface is a silent no-op, unlike every other operation.
    pub fn create_dynamic_style(
        &mut self,
        surface: &str,
        property: &str,
        value: &str,
        transition_ms: u64,
    ) {
        if let Ok(surface) = self.stage.surface_mut(surface) {
            surface.set_style("transition", &format!("{property} {transition_ms}ms ease"));
            surface.set_style(property, value);
        }
    }

    /// One uniform pick from the fixed palette.
    pub fn random_color(&mut self) -> &'static str {
        PALETTE[self.rng.random_range(0..PALETTE.len())]
    }

    /// Two independent palette picks (repeats allowed) applied to the
    /// surface as a 45° two-stop gradient background.
    pub fn randomize_box_color(&mut self, surface: &str) -> (&'static str, &'static str) {
        let first = self.random_color();
        let second = self.random_color();
        let gradient = format!("linear-gradient(45deg, {first}, {second})");
        self.create_dynamic_style(surface, "background", &gradient, DEFAULT_TRANSITION_MS);
        (first, second)
    }
}
