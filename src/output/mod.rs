//! Output module for shock-tube results
//!
//! Results are turned into PNG (or SVG) figures with `plotters`:
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! └── visualization/      ← Plots and graphics
//!     ├── mod.rs
//!     ├── config.rs
//!     ├── colormap.rs
//!     ├── contour.rs
//!     └── frames.rs
//! ```
//!
//! Rendering functions pick the backend from the output extension:
//! `.svg` gives a vector image, anything else a bitmap.

pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{
    contour_file_name,
    frame_file_name,
    plot_contours,
    plot_time_steps,
    PlotConfig,
};
