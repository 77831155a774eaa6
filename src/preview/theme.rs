//! Color theme for the preview host using ratatui colors
//!
//! This module maps the abstract color tokens carried by widget
//! descriptions onto concrete terminal colors, using ratatui's color
//! system directly to avoid unnecessary abstractions.

use crate::render::ColorToken;
use ratatui::style::Color;

/// Color palette for drawing widget previews.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetTheme {
    /// Regular text and healthy amounts
    pub normal: Color,

    /// Warning emphasis for low or overspent budgets
    pub warning: Color,

    /// Progress bars and highlights outside the warning state
    pub accent: Color,

    /// Widget frame borders
    pub border: Color,

    /// Secondary text: subtitles and captions
    pub caption: Color,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,
}

impl Default for WidgetTheme {
    /// Default palette close to the deployed widget colors
    fn default() -> Self {
        Self {
            normal: Color::White,
            warning: Color::Red,
            accent: Color::Blue,
            border: Color::DarkGray,
            caption: Color::Gray,
            status_bg: Color::Blue,
            status_fg: Color::White,
        }
    }
}

impl WidgetTheme {
    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            normal: Color::White,
            warning: Color::White,
            accent: Color::White,
            border: Color::White,
            caption: Color::White,
            status_bg: Color::Black,
            status_fg: Color::White,
        }
    }

    /// Terminal color for an abstract token.
    pub fn color_for(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Normal => self.normal,
            ColorToken::Warning => self.warning,
            ColorToken::Accent => self.accent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = WidgetTheme::default();
        assert_eq!(theme.warning, Color::Red);
        assert_eq!(theme.accent, Color::Blue);
        assert_eq!(theme.status_fg, Color::White);
        assert_eq!(theme.status_bg, Color::Blue);
    }

    #[test]
    fn test_monochrome_theme() {
        let theme = WidgetTheme::monochrome();
        assert_eq!(theme.warning, Color::White);
        assert_eq!(theme.accent, Color::White);
        assert_eq!(theme.status_bg, Color::Black);
    }

    #[test]
    fn test_color_for_tokens() {
        let theme = WidgetTheme::default();
        assert_eq!(theme.color_for(ColorToken::Normal), theme.normal);
        assert_eq!(theme.color_for(ColorToken::Warning), theme.warning);
        assert_eq!(theme.color_for(ColorToken::Accent), theme.accent);
    }
}
