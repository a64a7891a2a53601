//! Color themes for the gallery UI.
//!
//! The theme is resolved from the configured mode on every frame, so
//! switching the OS appearance while in Auto mode takes effect without
//! a restart.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic colors used by the gallery widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Section titles, focused borders, the app name
    pub primary: Color,
    /// The hovered card, cursor rows, key hints
    pub accent: Color,
    /// Active filter checkmarks
    pub success: Color,
    /// Error line in the status bar, favorite heart
    pub error: Color,

    /// Card titles and regular copy
    pub text: Color,
    /// Descriptions and technology entries
    pub text_secondary: Color,
    /// Counts, hints, unfocused borders
    pub text_muted: Color,

    /// Fill behind every widget
    pub background: Color,
    /// Disabled controls (e.g. reset with nothing to reset)
    pub inactive: Color,
}

impl Theme {
    /// Picks dark or light based on the OS appearance.
    ///
    /// Falls back to dark when detection is unavailable, which is the
    /// safer default for terminals.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the theme for a configured mode preference.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Palette for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Magenta,
            accent: Color::Cyan,
            success: Color::Green,
            error: Color::Red,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            inactive: Color::DarkGray,
        }
    }

    /// Palette for light terminal backgrounds.
    ///
    /// Accents are darkened so they stay readable on white.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(110, 30, 140),
            accent: Color::Rgb(0, 110, 140),
            success: Color::Rgb(0, 120, 0),
            error: Color::Rgb(180, 30, 30),

            text: Color::Black,
            text_secondary: Color::Rgb(70, 70, 70),
            text_muted: Color::Rgb(130, 130, 130),

            background: Color::White,
            inactive: Color::Rgb(190, 190, 190),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_palette_contrast() {
        let theme = Theme::dark();
        assert_eq!(theme.text, Color::White);
        assert_eq!(theme.background, Color::Black);
    }

    #[test]
    fn test_light_palette_contrast() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
        // Light mode never uses the bright terminal cyan
        assert_ne!(theme.accent, Color::Cyan);
    }

    #[test]
    fn test_explicit_modes_ignore_os() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }
}
