//! # Theme Configuration
//!
//! Centralized color configuration for the Hope for Orphans app. All visual
//! styling should use these constants to keep the warm-amber palette
//! consistent across screens.

use eframe::egui::Color32;

/// Palette constants
pub mod colors {
    use super::Color32;

    /// Warm amber primary
    pub const PRIMARY: Color32 = Color32::from_rgb(217, 119, 6);
    pub const PRIMARY_DARK: Color32 = Color32::from_rgb(180, 83, 9);
    pub const SECONDARY: Color32 = Color32::from_rgb(245, 158, 11);

    /// Very light warm cream page background
    pub const BACKGROUND: Color32 = Color32::from_rgb(255, 251, 235);
    pub const SURFACE: Color32 = Color32::WHITE;

    /// Dark brown body text
    pub const TEXT: Color32 = Color32::from_rgb(69, 26, 3);
    pub const TEXT_LIGHT: Color32 = Color32::from_rgb(120, 53, 15);

    pub const BORDER: Color32 = Color32::from_rgb(253, 230, 138);
    pub const WHITE: Color32 = Color32::WHITE;
    pub const SUCCESS: Color32 = Color32::from_rgb(5, 150, 105);

    /// Tinted section backgrounds
    pub const PAGE_HERO: Color32 = Color32::from_rgb(255, 237, 213);
    pub const SEARCH_TINT: Color32 = Color32::from_rgb(255, 247, 237);
    pub const NEED_BADGE: Color32 = Color32::from_rgb(254, 243, 199);

    /// Neutral input border
    pub const INPUT_BORDER: Color32 = Color32::from_rgb(229, 231, 235);
}

/// Parse an "#RRGGBB" token from the catalog into a colour.
/// Malformed tokens fall back to the primary accent.
pub fn hex_color(token: &str) -> Color32 {
    let hex = token.trim_start_matches('#');
    if hex.len() != 6 {
        return colors::PRIMARY;
    }

    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Color32::from_rgb(r, g, b),
        _ => colors::PRIMARY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parses_catalog_tokens() {
        assert_eq!(hex_color("#EA580C"), Color32::from_rgb(234, 88, 12));
        assert_eq!(hex_color("#059669"), Color32::from_rgb(5, 150, 105));
    }

    #[test]
    fn test_malformed_tokens_fall_back_to_primary() {
        assert_eq!(hex_color(""), colors::PRIMARY);
        assert_eq!(hex_color("#FFF"), colors::PRIMARY);
        assert_eq!(hex_color("#GGGGGG"), colors::PRIMARY);
    }
}
