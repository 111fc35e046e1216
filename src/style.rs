//! Chart theming.

use serde::{Deserialize, Serialize};

use crate::colormap::Colormap;
use crate::render::{Color, LineStyle, TextStyle};

/// Visual theme shared by 2D and 3D charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Grid line stroke.
    pub grid: LineStyle,
    /// Axis line stroke.
    pub axes: LineStyle,
    /// Tick mark stroke.
    pub ticks: LineStyle,
    /// Tick label and title text.
    pub labels: TextStyle,
    /// Legend marker diameter in pixels.
    pub legend_marker_size: f32,
    /// Vertical distance between legend rows in pixels.
    pub legend_row_spacing: f32,
    /// Number of grid steps across the unit axis.
    pub grid_divisions: usize,
    /// Tick length in normalized units.
    pub tick_length: f32,
    /// Colorbar palette.
    pub colormap: Colormap,
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::light()
    }

    /// Silver grid, black axes and 16px labels on a light background.
    pub fn light() -> Self {
        Self {
            grid: LineStyle::new(Color::SILVER, 1.0),
            axes: LineStyle::new(Color::BLACK, 1.5),
            ticks: LineStyle::new(Color::BLACK, 1.5),
            labels: TextStyle::new(Color::BLACK, 16.0),
            legend_marker_size: 10.0,
            legend_row_spacing: 20.0,
            grid_divisions: 5,
            tick_length: 0.05,
            colormap: Colormap::Jet,
        }
    }

    /// Light strokes and text for dark backgrounds.
    pub fn dark() -> Self {
        let fg = Color::from_rgb8(220, 220, 220);
        Self {
            grid: LineStyle::new(Color::from_rgb8(70, 70, 70), 1.0),
            axes: LineStyle::new(fg, 1.5),
            ticks: LineStyle::new(fg, 1.5),
            labels: TextStyle::new(fg, 16.0),
            ..Self::light()
        }
    }

    /// Normalized grid step.
    pub fn grid_step(&self) -> f32 {
        1.0 / self.grid_divisions.max(1) as f32
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_step_is_one_fifth() {
        let theme = Theme::default();
        assert!((theme.grid_step() - 0.2).abs() < 1e-6);
        let zero = Theme {
            grid_divisions: 0,
            ..Theme::default()
        };
        assert_eq!(zero.grid_step(), 1.0);
    }

    #[test]
    fn theme_json_round_trip() {
        let theme = Theme::dark();
        let json = serde_json::to_string(&theme).expect("serialize");
        let back: Theme = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, theme);
    }

    #[test]
    fn partial_theme_fills_defaults() {
        let theme: Theme =
            serde_json::from_str(r#"{"grid_divisions": 4, "colormap": "Hot"}"#).expect("deserialize");
        assert_eq!(theme.grid_divisions, 4);
        assert_eq!(theme.colormap, Colormap::Hot);
        assert_eq!(theme.labels, Theme::light().labels);
        assert_eq!(theme.legend_row_spacing, 20.0);
    }
}
