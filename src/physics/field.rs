//! Field identifiers and value ranges
//!
//! - `Field`: type-safe identifier for the four plotted quantities
//! - `FieldBounds`: global min/max of a field over the whole (time, space) grid

use nalgebra::DMatrix;

// =================================================================================================
// Fields (Type-safe Identifiers)
// =================================================================================================

/// Quantities carried by a shock-tube result
///
/// Density, velocity and pressure are read from the result file,
/// energy is derived from them (see [`IdealGas`](super::IdealGas)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Density ρ
    Density,

    /// Velocity u
    Velocity,

    /// Pressure p
    Pressure,

    /// Specific total energy E (derived)
    Energy,
}

impl Field {
    /// Panel order of the 2×2 contour figure (row by row)
    pub const CONTOUR_ORDER: [Field; 4] = [
        Field::Pressure,
        Field::Velocity,
        Field::Density,
        Field::Energy,
    ];

    /// Panel order of the stacked per-time-step figure (top to bottom)
    pub const FRAME_ORDER: [Field; 4] = [
        Field::Density,
        Field::Velocity,
        Field::Pressure,
        Field::Energy,
    ];

    /// Entry name inside a result file, `None` for derived fields
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Field::Density => Some("rho"),
            Field::Velocity => Some("u"),
            Field::Pressure => Some("p"),
            Field::Energy => None,
        }
    }

    /// Short axis symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Field::Density => "rho",
            Field::Velocity => "U",
            Field::Pressure => "p",
            Field::Energy => "E",
        }
    }

    /// Long axis label used on contour panels
    pub fn label(&self) -> &'static str {
        match self {
            Field::Density => "rho",
            Field::Velocity => "Normalized u-velocity",
            Field::Pressure => "Normalized Pressure",
            Field::Energy => "E",
        }
    }
}

// =================================================================================================
// Bounds
// =================================================================================================

/// Global value range of a field
///
/// Per-time-step plots use the same bounds for every frame so that
/// successive images are visually comparable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
}

impl FieldBounds {
    /// Min/max over all finite entries of a matrix
    ///
    /// Returns `None` if the matrix holds no finite value.
    pub fn of(values: &DMatrix<f64>) -> Option<Self> {
        Self::of_slice(values.as_slice())
    }

    /// Min/max over all finite entries of a slice
    pub fn of_slice(values: &[f64]) -> Option<Self> {
        values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some(Self { min: v, max: v }),
                Some(b) => Some(Self {
                    min: b.min.min(v),
                    max: b.max.max(v),
                }),
            })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Chart range, widened when the field is constant
    ///
    /// Plotting backends need a non-empty range; a constant field is
    /// centred in a band of ±5 % of its magnitude (±0.5 around zero).
    pub fn axis_range(&self) -> (f64, f64) {
        let scale = self.min.abs().max(self.max.abs());
        if self.span() > f64::EPSILON * scale.max(1.0) {
            return (self.min, self.max);
        }

        let half = if scale > 0.0 { 0.05 * scale } else { 0.5 };
        (self.min - half, self.max + half)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_global() {
        let m = DMatrix::from_row_slice(2, 3, &[1.0, 5.0, 2.0, -3.0, 0.0, 4.0]);
        let b = FieldBounds::of(&m).unwrap();
        assert_eq!(b.min, -3.0);
        assert_eq!(b.max, 5.0);
    }

    #[test]
    fn test_bounds_skip_non_finite() {
        let b = FieldBounds::of_slice(&[f64::NAN, 2.0, f64::INFINITY, 1.0]).unwrap();
        assert_eq!(b, FieldBounds { min: 1.0, max: 2.0 });
        assert!(FieldBounds::of_slice(&[f64::NAN]).is_none());
        assert!(FieldBounds::of_slice(&[]).is_none());
    }

    #[test]
    fn test_axis_range_constant_field() {
        let b = FieldBounds { min: 2.0, max: 2.0 };
        let (lo, hi) = b.axis_range();
        assert!(lo < 2.0 && hi > 2.0);

        let zero = FieldBounds { min: 0.0, max: 0.0 };
        assert_eq!(zero.axis_range(), (-0.5, 0.5));

        let regular = FieldBounds { min: 0.1, max: 1.0 };
        assert_eq!(regular.axis_range(), (0.1, 1.0));
    }

    #[test]
    fn test_file_keys() {
        assert_eq!(Field::Density.key(), Some("rho"));
        assert_eq!(Field::Velocity.key(), Some("u"));
        assert_eq!(Field::Pressure.key(), Some("p"));
        assert_eq!(Field::Energy.key(), None);
    }
}
