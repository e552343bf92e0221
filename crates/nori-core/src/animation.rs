//! Known animation kinds and their durations.

/// Delay in milliseconds between a trigger and the tag being applied.
pub const TRIGGER_DELAY_MS: u64 = 50;

/// Duration used for animation tags outside the known set.
pub const DEFAULT_DURATION_MS: u64 = 1000;

/// The four animation tags the playground knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    Bounce,
    Spin,
    Shake,
    Glow,
}

impl AnimationKind {
    /// All known kinds, in display order.
    pub const ALL: [AnimationKind; 4] = [
        AnimationKind::Bounce,
        AnimationKind::Spin,
        AnimationKind::Shake,
        AnimationKind::Glow,
    ];

    /// The tag this kind applies to a surface.
    pub fn tag(self) -> &'static str {
        match self {
            AnimationKind::Bounce => "bounce",
            AnimationKind::Spin => "spin",
            AnimationKind::Shake => "shake",
            AnimationKind::Glow => "glow",
        }
    }

    /// Look up a kind by its tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// How long the tag stays applied once active.
    pub fn duration_ms(self) -> u64 {
        match self {
            AnimationKind::Bounce => 800,
            AnimationKind::Spin => 1000,
            AnimationKind::Shake => 600,
            AnimationKind::Glow => 2000,
        }
    }
}

/// Duration in milliseconds for an animation tag.
/// Unknown tags fall back to [`DEFAULT_DURATION_MS`].
pub fn duration_ms(tag: &str) -> u64 {
    AnimationKind::from_tag(tag)
        .map(AnimationKind::duration_ms)
        .unwrap_or(DEFAULT_DURATION_MS)
}
