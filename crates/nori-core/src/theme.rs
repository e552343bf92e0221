//! Theme tags applied to the root surface.

/// Prefix shared by every theme tag.
pub const THEME_PREFIX: &str = "theme-";

/// The builtin themes the binary cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Colorful,
}

impl Theme {
    /// The bare theme name, without the tag prefix.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Colorful => "colorful",
        }
    }

    /// Look up a builtin theme by its bare name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "colorful" => Some(Theme::Colorful),
            _ => None,
        }
    }

    /// Cycle to the next builtin theme.
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Colorful,
            Theme::Colorful => Theme::Light,
        }
    }
}

/// Build the surface tag for a theme name, e.g. `dark` -> `theme-dark`.
pub fn theme_tag(name: &str) -> String {
    format!("{THEME_PREFIX}{name}")
}

/// Whether a tag marks a theme.
pub fn is_theme_tag(tag: &str) -> bool {
    tag.starts_with(THEME_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cycle() {
        assert_eq!(Theme::Light.next(), Theme::Dark);
        assert_eq!(Theme::Dark.next(), Theme::Colorful);
        assert_eq!(Theme::Colorful.next(), Theme::Light);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_name("sunset"), None);
    }

    #[test]
    fn test_theme_tag() {
        assert_eq!(theme_tag("dark"), "theme-dark");
        assert!(is_theme_tag("theme-dark"));
        assert!(is_theme_tag("theme-anything"));
        assert!(!is_theme_tag("bounce"));
    }
}
