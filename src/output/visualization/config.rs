//! Plot configuration shared across visualization modules
//!
//! One configuration drives both the contour figure and the per-time-step
//! frames, so a batch renders every file with the same look.

use plotters::prelude::*;

use super::colormap::Colormap;
use crate::physics::Field;

/// Matplotlib's `'g'` shade, darker than pure green
const DARK_GREEN: RGBColor = RGBColor(0, 128, 0);

/// Configuration for customizing plots
///
/// # Example
///
/// ```rust,ignore
/// use shocktube_plot::output::visualization::PlotConfig;
///
/// let config = PlotConfig::default()
///     .contour_size(1800, 1200)
///     .contour_levels(20)
///     .without_grid();
/// ```
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Contour figure size in pixels (default: 1200 × 800)
    pub contour_size: (u32, u32),

    /// Per-time-step figure size in pixels (default: 1200 × 900)
    pub frame_size: (u32, u32),

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Colormap of the filled contours (default: rainbow)
    pub colormap: Colormap,

    /// Number of filled contour bands (default: 10)
    pub contour_levels: usize,

    /// Axis label font size (default: 22)
    pub label_font_size: u32,

    /// Tick label font size (default: 14)
    pub tick_font_size: u32,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines on frames (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            contour_size: (1200, 800),
            frame_size: (1200, 900),
            background: WHITE,
            colormap: Colormap::Rainbow,
            contour_levels: 10,
            label_font_size: 22,
            tick_font_size: 14,
            line_width: 2,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Builder pattern: set contour figure size
    pub fn contour_size(mut self, width: u32, height: u32) -> Self {
        self.contour_size = (width, height);
        self
    }

    /// Builder pattern: set frame size
    pub fn frame_size(mut self, width: u32, height: u32) -> Self {
        self.frame_size = (width, height);
        self
    }

    /// Builder pattern: set number of contour bands (at least 1)
    pub fn contour_levels(mut self, levels: usize) -> Self {
        self.contour_levels = levels.max(1);
        self
    }

    /// Builder pattern: set colormap
    pub fn colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }

    /// Builder pattern: hide grid lines
    pub fn without_grid(mut self) -> Self {
        self.show_grid = false;
        self
    }

    /// Font of axis descriptions
    pub(crate) fn label_font(&self) -> (&'static str, i32) {
        ("sans-serif", self.label_font_size as i32)
    }

    /// Font of tick labels
    pub(crate) fn tick_font(&self) -> (&'static str, i32) {
        ("sans-serif", self.tick_font_size as i32)
    }

    /// Line color of a field on per-time-step frames
    pub(crate) fn line_color(&self, field: Field) -> RGBColor {
        match field {
            Field::Density => BLACK,
            Field::Velocity => RED,
            Field::Pressure => BLUE,
            Field::Energy => DARK_GREEN,
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.contour_size, (1200, 800));
        assert_eq!(config.frame_size, (1200, 900));
        assert_eq!(config.contour_levels, 10);
        assert!(config.show_grid);
    }

    #[test]
    fn test_builder() {
        let config = PlotConfig::default()
            .contour_size(400, 300)
            .frame_size(200, 100)
            .contour_levels(0)
            .without_grid();
        assert_eq!(config.contour_size, (400, 300));
        assert_eq!(config.frame_size, (200, 100));
        assert_eq!(config.contour_levels, 1);
        assert!(!config.show_grid);
    }

    #[test]
    fn test_line_colors() {
        let config = PlotConfig::default();
        assert_eq!(config.line_color(Field::Density), BLACK);
        assert_eq!(config.line_color(Field::Velocity), RED);
        assert_eq!(config.line_color(Field::Pressure), BLUE);
        assert_eq!(config.line_color(Field::Energy), DARK_GREEN);
    }
}
