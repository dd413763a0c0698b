//! shocktube-plot: diagnostic plots for 1-D shock-tube results
//!
//! Reads precomputed compressible Euler shock-tube results (time, space,
//! density, velocity, pressure) from MATLAB `.mat` files, derives the
//! specific total energy of an ideal gas, and renders:
//!
//! - a 2×2 filled contour map of p, u, ρ and E over the (x, t) grid,
//! - one stacked line plot of ρ, u, p and E against x per time sample.
//!
//! # Architecture
//!
//! ```text
//! input    → load and reshape fields (nt × nx)
//! physics  → ideal-gas energy
//! output   → contour figure and per-time-step frames
//! pipeline → batch driver over a directory of result files
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use shocktube_plot::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = load_result_file("Sod_Shock_Tube.mat".as_ref())?;
//! let energy = data.derive_energy(&IdealGas::default())?;
//!
//! plot_contours(&data, &energy, &contour_file_name(&data.name), None)?;
//! plot_time_steps(&data, &energy, "ml_plots".as_ref(), None)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`input`]: Result file discovery and loading
//! - [`physics`]: Equation of state and field identifiers
//! - [`output`]: Result visualization
//! - [`pipeline`]: Batch processing

pub mod input;
pub mod output;
pub mod physics;
pub mod pipeline;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use shocktube_plot::prelude::*;
    //! ```
    pub use crate::input::{discover_result_files,
                           load_result_file,
                           ShockTubeData};
    pub use crate::output::{contour_file_name,
                            frame_file_name,
                            plot_contours,
                            plot_time_steps,
                            PlotConfig};
    pub use crate::physics::{Field,
                             FieldBounds,
                             IdealGas};
    pub use crate::pipeline::{run_batch,
                              BatchConfig,
                              BatchReport,
                              FailurePolicy};
}
