//! Deterministic replacement for fire-and-forget timers.
//!
//! The original demo chained `setTimeout` callbacks; here every deferred
//! effect is a [`Command`] in an inspectable queue keyed by fire time, so
//! tests can drive the clock instead of sleeping. There is deliberately no
//! cancellation: once scheduled, a command fires even if the surface state
//! has changed underneath it, matching the demo's overlapping-trigger
//! behavior.

/// A deferred state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Apply a tag to a surface.
    AddTag { surface: String, tag: String },
    /// Remove a tag from a surface.
    RemoveTag { surface: String, tag: String },
    /// Run a full trigger-animation (reset, then delayed add/remove).
    /// Used by the choreography to defer whole triggers.
    Trigger { surface: String, tag: String },
}

#[derive(Debug, Clone)]
struct Entry {
    fire_at_ms: u64,
    seq: u64,
    command: Command,
}

/// An ordered queue of pending commands.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `command` to fire at the given absolute time.
    /// Commands due at the same instant fire in scheduling order.
    pub fn schedule(&mut self, fire_at_ms: u64, command: Command) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            fire_at_ms,
            seq,
            command,
        });
    }

    /// Remove and return every command due at or before `now_ms`,
    /// ordered by fire time, then scheduling order.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<Command> {
        let mut due: Vec<Entry> = Vec::new();
        self.entries.retain(|entry| {
            if entry.fire_at_ms <= now_ms {
                due.push(entry.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|entry| (entry.fire_at_ms, entry.seq));
        due.into_iter().map(|entry| entry.command).collect()
    }

    /// The earliest pending fire time, if anything is queued.
    pub fn next_due(&self) -> Option<u64> {
        self.entries.iter().map(|entry| entry.fire_at_ms).min()
    }

    /// Number of commands still queued.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(surface: &str, tag: &str) -> Command {
        Command::AddTag {
            surface: surface.to_string(),
            tag: tag.to_string(),
        }
    }

    #[test]
    fn test_drain_respects_fire_time() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(100, add("box", "late"));
        scheduler.schedule(50, add("box", "early"));

        assert_eq!(scheduler.drain_due(49), vec![]);
        assert_eq!(scheduler.drain_due(50), vec![add("box", "early")]);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.drain_due(200), vec![add("box", "late")]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_same_instant_fires_in_schedule_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(10, add("box", "first"));
        scheduler.schedule(10, add("box", "second"));
        assert_eq!(
            scheduler.drain_due(10),
            vec![add("box", "first"), add("box", "second")]
        );
    }

    #[test]
    fn test_next_due() {
        let mut scheduler = Scheduler::new();
        assert_eq!(scheduler.next_due(), None);
        scheduler.schedule(70, add("box", "a"));
        scheduler.schedule(30, add("box", "b"));
        assert_eq!(scheduler.next_due(), Some(30));
    }
}
