//! Colormaps and filled-contour levels

use plotters::prelude::RGBColor;

use crate::physics::FieldBounds;

/// Scalar-to-color map over the unit interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    /// Violet → blue → green → yellow → red
    ///
    /// r = |2s − ½|, g = sin(πs), b = cos(πs/2)
    Rainbow,

    /// Black → white
    Grayscale,
}

impl Colormap {
    /// Color at position `s` in [0, 1] (clamped)
    pub fn color_at(&self, s: f64) -> RGBColor {
        let s = if s.is_nan() { 0.0 } else { s.clamp(0.0, 1.0) };
        let to_byte = |c: f64| (255.0 * c.clamp(0.0, 1.0)).round() as u8;

        match self {
            Colormap::Rainbow => {
                let r = (2.0 * s - 0.5).abs();
                let g = (std::f64::consts::PI * s).sin();
                let b = (std::f64::consts::FRAC_PI_2 * s).cos();
                RGBColor(to_byte(r), to_byte(g), to_byte(b))
            }
            Colormap::Grayscale => {
                let v = to_byte(s);
                RGBColor(v, v, v)
            }
        }
    }
}

/// Evenly spaced band edges spanning a field's range
///
/// A filled contour plot with `n` bands paints each value with the color of
/// the band it falls in; band `k` uses colormap position `k / (n − 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourLevels {
    edges: Vec<f64>,
}

impl ContourLevels {
    pub fn new(bounds: FieldBounds, bands: usize) -> Self {
        let bands = bands.max(1);
        let (lo, hi) = bounds.axis_range();
        let step = (hi - lo) / bands as f64;
        let edges = (0..=bands).map(|k| lo + k as f64 * step).collect();
        Self { edges }
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn bands(&self) -> usize {
        self.edges.len() - 1
    }

    /// Index of the band containing `value`, `None` for NaN
    ///
    /// Values outside the range fall into the first or last band.
    pub fn band_of(&self, value: f64) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        let inner = &self.edges[1..self.edges.len() - 1];
        Some(inner.partition_point(|&edge| edge <= value))
    }

    pub fn band_color(&self, band: usize, colormap: Colormap) -> RGBColor {
        let n = self.bands();
        let s = if n == 1 { 0.5 } else { band as f64 / (n - 1) as f64 };
        colormap.color_at(s)
    }

    pub fn color_of(&self, value: f64, colormap: Colormap) -> Option<RGBColor> {
        self.band_of(value).map(|band| self.band_color(band, colormap))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
