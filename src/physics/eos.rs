//! Ideal-gas equation of state
//!
//! Specific total energy is the sum of internal and kinetic energy per unit mass:
//!
//! $$E = \frac{p}{(\gamma - 1)\,\rho} + \frac{u^2}{2}$$

use nalgebra::DMatrix;
use thiserror::Error;

/// Adiabatic index of a diatomic ideal gas
pub const DEFAULT_GAMMA: f64 = 1.4;

/// Errors raised while deriving energy
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DerivationError {
    #[error("adiabatic index must be finite and greater than 1, got {0}")]
    InvalidGamma(f64),

    #[error("{field} has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        field: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("zero density at time index {time_index}, space index {space_index}")]
    ZeroDensity {
        time_index: usize,
        space_index: usize,
    },

    #[error("non-finite energy {value} at time index {time_index}, space index {space_index}")]
    NonFinite {
        time_index: usize,
        space_index: usize,
        value: f64,
    },
}

/// Ideal gas with a fixed adiabatic index γ
///
/// # Example
///
/// ```rust
/// use shocktube_plot::physics::IdealGas;
///
/// let gas = IdealGas::default();
/// assert!((gas.specific_total_energy(1.0, 0.0, 1.0) - 2.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealGas {
    gamma: f64,
}

impl Default for IdealGas {
    fn default() -> Self {
        Self { gamma: DEFAULT_GAMMA }
    }
}

impl IdealGas {
    /// Create a gas with a custom adiabatic index (γ > 1)
    pub fn new(gamma: f64) -> Result<Self, DerivationError> {
        if !gamma.is_finite() || gamma <= 1.0 {
            return Err(DerivationError::InvalidGamma(gamma));
        }
        Ok(Self { gamma })
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Pointwise specific total energy
    ///
    /// No guard here: ρ = 0 yields ±∞ or NaN. Use [`derive_energy`](Self::derive_energy)
    /// for checked evaluation over a grid.
    pub fn specific_total_energy(&self, pressure: f64, velocity: f64, density: f64) -> f64 {
        pressure / ((self.gamma - 1.0) * density) + 0.5 * velocity * velocity
    }

    /// Elementwise energy over a (nt × nx) grid
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if `velocity` or `density` differ in shape from `pressure`
    /// - `ZeroDensity` at the first point where ρ = 0
    /// - `NonFinite` if any other input produces NaN or ∞
    pub fn derive_energy(
        &self,
        pressure: &DMatrix<f64>,
        velocity: &DMatrix<f64>,
        density: &DMatrix<f64>,
    ) -> Result<DMatrix<f64>, DerivationError> {
        let shape = pressure.shape();
        for (field, matrix) in [("velocity", velocity), ("density", density)] {
            if matrix.shape() != shape {
                return Err(DerivationError::ShapeMismatch {
                    field,
                    expected: shape,
                    found: matrix.shape(),
                });
            }
        }

        let (nt, nx) = shape;
        let mut energy = DMatrix::zeros(nt, nx);

        for i in 0..nt {
            for j in 0..nx {
                let rho = density[(i, j)];
                if rho == 0.0 {
                    return Err(DerivationError::ZeroDensity {
                        time_index: i,
                        space_index: j,
                    });
                }

                let value = self.specific_total_energy(pressure[(i, j)], velocity[(i, j)], rho);
                if !value.is_finite() {
                    return Err(DerivationError::NonFinite {
                        time_index: i,
                        space_index: j,
                        value,
                    });
                }
                energy[(i, j)] = value;
            }
        }

        Ok(energy)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
