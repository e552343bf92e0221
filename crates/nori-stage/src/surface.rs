//! A single addressable UI surface: its tags and inline styles.

use std::collections::{BTreeMap, BTreeSet};

/// The visible state of one surface.
///
/// Tags are named boolean markers (the class names of the original demo);
/// styles are inline property overrides. Both use ordered maps so iteration
/// and test assertions are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surface {
    tags: BTreeSet<String>,
    styles: BTreeMap<String, String>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a tag. Applying an already-present tag is a no-op.
    pub fn add_tag(&mut self, tag: &str) {
        self.tags.insert(tag.to_string());
    }

    /// Remove a tag. Removing an absent tag is a no-op.
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.remove(tag);
    }

    /// Toggle a tag and return whether it is present afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.tags.remove(tag) {
            false
        } else {
            self.tags.insert(tag.to_string());
            true
        }
    }

    /// Whether the tag is currently applied.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// The currently-applied tags, in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Set an inline style property.
    pub fn set_style(&mut self, property: &str, value: &str) {
        self.styles.insert(property.to_string(), value.to_string());
    }

    /// Look up an inline style property.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_returns_resulting_state() {
        let mut surface = Surface::new();
        assert!(surface.toggle_tag("flipped"));
        assert!(surface.has_tag("flipped"));
        assert!(!surface.toggle_tag("flipped"));
        assert!(!surface.has_tag("flipped"));
    }

    #[test]
    fn test_add_and_remove_are_idempotent() {
        let mut surface = Surface::new();
        surface.add_tag("bounce");
        surface.add_tag("bounce");
        assert_eq!(surface.tags().count(), 1);
        surface.remove_tag("bounce");
        surface.remove_tag("bounce");
        assert_eq!(surface.tags().count(), 0);
    }

    #[test]
    fn test_styles_overwrite() {
        let mut surface = Surface::new();
        surface.set_style("overflow", "hidden");
        surface.set_style("overflow", "auto");
        assert_eq!(surface.style("overflow"), Some("auto"));
        assert_eq!(surface.style("background"), None);
    }
}
