//! Theme color definitions for the UI

use crate::config::Theme;
use ratatui::style::Color;

/// Complete color palette for the UI
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// Main background
    pub bg: Color,
    /// Primary foreground text
    pub fg: Color,
    /// Dimmed/secondary text
    pub dim: Color,
    /// Accent color (captured key names, dialog titles)
    pub accent: Color,
    /// Toolbar background
    pub toolbar_bg: Color,
    /// Log view background
    pub log_bg: Color,
    /// Borders around the log view and modal boxes
    pub border: Color,
}

impl ThemeColors {
    /// Create a color palette for the given theme variant
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    /// Dark theme - default color scheme
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(220, 220, 220),
            dim: Color::Rgb(130, 130, 140),
            accent: Color::Rgb(80, 200, 220),
            toolbar_bg: Color::Rgb(51, 51, 51),
            log_bg: Color::Rgb(37, 37, 38),
            border: Color::Rgb(90, 90, 110),
        }
    }

    /// Light theme - high contrast for bright terminals
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(245, 245, 248),
            fg: Color::Rgb(30, 30, 40),
            dim: Color::Rgb(130, 130, 150),
            accent: Color::Rgb(0, 130, 160),
            toolbar_bg: Color::Rgb(220, 220, 228),
            log_bg: Color::Rgb(235, 235, 240),
            border: Color::Rgb(150, 150, 170),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_theme_creates_palette() {
        let colors = ThemeColors::dark();
        assert_eq!(colors.bg, Color::Rgb(30, 30, 30));
        assert_eq!(colors.log_bg, Color::Rgb(37, 37, 38));
    }

    #[test]
    fn from_theme_selects_correct_palette() {
        let dark = ThemeColors::from_theme(Theme::Dark);
        let light = ThemeColors::from_theme(Theme::Light);
        assert_ne!(dark.bg, light.bg);
    }
}
