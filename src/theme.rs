//! Page colors
//! Purple and pink defaults, overridable from the `[theme]` config table

use ratatui::style::Color;

use crate::config::ThemeOverrides;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,        // Title, active tab, key hints
    pub accent_bright: Color, // Generated name, highlights
    pub heart: Color,         // Like button and badge
    pub text: Color,          // Primary text
    pub text_dim: Color,      // Captions, descriptions
    pub border: Color,        // Inactive borders
    pub toast: Color,         // Status line notifications
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(168, 85, 247),
            accent_bright: Color::Rgb(216, 180, 254),
            heart: Color::Rgb(236, 72, 153),
            text: Color::Rgb(229, 231, 235),
            text_dim: Color::Rgb(156, 163, 175),
            border: Color::Rgb(107, 114, 128),
            toast: Color::Rgb(250, 179, 135),
        }
    }
}

impl Theme {
    /// Defaults with any valid overrides applied
    pub fn load(overrides: &ThemeOverrides) -> Self {
        let mut theme = Self::default();

        let apply = |slot: &mut Color, value: &Option<String>, key: &str| {
            if let Some(raw) = value {
                match Self::parse_hex_color(raw) {
                    Some(color) => *slot = color,
                    None => tracing::warn!("Ignoring invalid theme color {} = {:?}", key, raw),
                }
            }
        };

        apply(&mut theme.accent, &overrides.accent, "accent");
        apply(&mut theme.heart, &overrides.heart, "heart");
        apply(&mut theme.text, &overrides.text, "text");
        apply(&mut theme.text_dim, &overrides.text_dim, "text_dim");
        apply(&mut theme.border, &overrides.border, "border");

        theme
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');
        if !s.is_ascii() {
            return None;
        }

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        } else {
            None
        }
    }
}
