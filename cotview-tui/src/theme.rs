//! Gold-on-dark theme tokens for the COT dashboard.
//!
//! # Color Palette
//! - **Background**: deep charcoal (base layer)
//! - **Accent**: metallic gold (open interest, titles, borders)
//! - **Positive**: green (rising nets, positive weekly changes)
//! - **Negative**: red (falling nets, negative weekly changes)
//! - **Commercial**: steel blue (commercial trader series)
//! - **Muted**: dimmed gold (below-average bars, secondary marks)

use cotview_core::data::DataOrigin;
use ratatui::style::Color;

/// Theme for the COT dashboard.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Deep charcoal background (primary surface)
    pub background: Color,
    /// Metallic gold accent (open interest, focus, borders)
    pub accent: Color,
    /// Dimmed gold (below-average open-interest bars)
    pub accent_dim: Color,
    /// Green (positive changes, long positions)
    pub positive: Color,
    /// Red (negative changes, short positions)
    pub negative: Color,
    /// Steel blue (commercial trader series)
    pub commercial: Color,
    /// Cool purple (commercial short bars)
    pub neutral: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::gold()
    }
}

impl Theme {
    /// Create the default gold dashboard theme.
    pub fn gold() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(212, 175, 55),
            accent_dim: Color::Rgb(184, 149, 47),
            positive: Color::Rgb(34, 197, 94),
            negative: Color::Rgb(239, 68, 68),
            commercial: Color::Rgb(59, 130, 246),
            neutral: Color::Rgb(147, 112, 219),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Color for a weekly change (positive = green, negative = red, flat = gray).
    pub fn change_color(&self, value: i64) -> Color {
        match value {
            v if v > 0 => self.positive,
            v if v < 0 => self.negative,
            _ => self.text_secondary,
        }
    }

    /// Color for an open-interest bar relative to the sequence mean.
    pub fn oi_color(&self, above_average: bool) -> Color {
        if above_average {
            self.accent
        } else {
            self.accent_dim
        }
    }

    /// Color for the data-origin tag in the status bar.
    pub fn origin_color(&self, origin: DataOrigin) -> Color {
        match origin {
            DataOrigin::Remote => self.positive,
            DataOrigin::File => self.commercial,
            DataOrigin::Sample => self.accent_dim,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::Rgb(212, 175, 55));
        assert_eq!(theme.background, Color::Rgb(18, 18, 20));
    }

    #[test]
    fn test_change_color() {
        let theme = Theme::default();
        assert_eq!(theme.change_color(12_543), theme.positive);
        assert_eq!(theme.change_color(-15_234), theme.negative);
        assert_eq!(theme.change_color(0), theme.text_secondary);
    }

    #[test]
    fn test_oi_color() {
        let theme = Theme::default();
        assert_eq!(theme.oi_color(true), theme.accent);
        assert_eq!(theme.oi_color(false), theme.accent_dim);
    }

    #[test]
    fn test_origin_color() {
        let theme = Theme::default();
        assert_eq!(theme.origin_color(DataOrigin::Remote), theme.positive);
        assert_eq!(theme.origin_color(DataOrigin::Sample), theme.accent_dim);
    }
}
