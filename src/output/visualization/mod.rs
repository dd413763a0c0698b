//! Visualization of shock-tube results
//!
//! This module renders results using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **colormap**: Colormaps and filled-contour levels
//! - **contour**: 2×2 filled contour maps over (x, t)
//! - **frames**: Stacked per-time-step line plots
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use shocktube_plot::output::visualization::{
//!     contour_file_name, plot_contours, plot_time_steps, PlotConfig,
//! };
//!
//! let energy = data.derive_energy(&IdealGas::default())?;
//!
//! plot_contours(&data, &energy, &contour_file_name(&data.name), None)?;
//! let frames = plot_time_steps(&data, &energy, "ml_plots".as_ref(), None)?;
//! ```
//!
//! # Which Figure
//!
//! | Use Case | Module | Function |
//! |----------|--------|----------|
//! | Whole run at a glance | `contour` | `plot_contours` |
//! | One time step | `frames` | `plot_frame` |
//! | Every time step | `frames` | `plot_time_steps` |

pub mod colormap;
pub mod config;
pub mod contour;
pub mod frames;

pub use colormap::{Colormap, ContourLevels};
pub use config::PlotConfig;

pub use contour::{contour_file_name, plot_contours};
pub use frames::{frame_file_name, plot_frame, plot_time_steps, Frame, FrameBounds};
