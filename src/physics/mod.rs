//! Shock-tube physics
//!
//! The only physics needed to plot a shock-tube result is the ideal-gas
//! equation of state, used to derive the specific total energy from the
//! stored primitive fields (ρ, u, p).
//!
//! # Example
//!
//! ```rust
//! use nalgebra::DMatrix;
//! use shocktube_plot::physics::IdealGas;
//!
//! let p = DMatrix::from_element(2, 4, 1.0);
//! let u = DMatrix::zeros(2, 4);
//! let rho = DMatrix::from_element(2, 4, 1.0);
//!
//! let energy = IdealGas::default().derive_energy(&p, &u, &rho).unwrap();
//! assert_eq!(energy.shape(), (2, 4));
//! ```

pub mod eos;
pub mod field;

pub use eos::{DerivationError, IdealGas, DEFAULT_GAMMA};
pub use field::{Field, FieldBounds};
