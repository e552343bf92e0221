//! The fixed color palette used for randomized box backgrounds.

/// Ten hex colors, matching the demo stylesheet's accent set.
pub const PALETTE: [&str; 10] = [
    "#667eea", "#764ba2", "#ff6b6b", "#feca57", "#48bb78", "#38a169", "#a8e6cf", "#88d8c0",
    "#ff9ff3", "#f368e0",
];

/// Parse a `#rrggbb` hex color into an RGB triple.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    // Length alone is not enough: the fixed-offset slices below assume
    // single-byte characters.
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_parses() {
        for hex in PALETTE {
            assert!(parse_hex(hex).is_some(), "unparseable entry: {hex}");
        }
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#667eea"), Some((0x66, 0x7e, 0xea)));
        assert_eq!(parse_hex("667eea"), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_parse_hex_rejects_multibyte_input() {
        // Six bytes but not six ASCII digits; must not panic on slicing
        assert_eq!(parse_hex("#a££b"), None);
        assert_eq!(parse_hex("#ééé"), None);
    }
}
