//! Filled contour maps over the full (time, space) grid
//!
//! One figure per run: a 2×2 grid of panels (p, u, ρ, E), each painted on
//! the (x, t) mesh with its own color scale and colorbar.
//!
//! # Usage
//!
//! ```rust,ignore
//! use shocktube_plot::output::visualization::{plot_contours, contour_file_name};
//!
//! let energy = data.derive_energy(&IdealGas::default())?;
//! plot_contours(&data, &energy, &contour_file_name(&data.name), None)?;
//! ```

use nalgebra::DMatrix;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;

use super::colormap::ContourLevels;
use super::config::PlotConfig;
use crate::input::ShockTubeData;
use crate::physics::{Field, FieldBounds};

/// Width of the colorbar strip beside each panel, in pixels
const COLORBAR_WIDTH: u32 = 90;

/// Image name of a run's contour figure
pub fn contour_file_name(prefix: &str) -> String {
    format!("{}-contour_plots.png", prefix)
}

/// Render the 2×2 contour figure of a run
///
/// # Arguments
///
/// * `data`        — Loaded run (time, space, ρ, u, p)
/// * `energy`      — Derived energy, same shape as the fields
/// * `output_path` — Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      — Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` if `energy` does not match the field shape, a field has no
/// finite value, or the backend cannot write to `output_path`.
pub fn plot_contours(
    data: &ShockTubeData,
    energy: &DMatrix<f64>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if energy.shape() != data.pressure.shape() {
        return Err(format!(
            "energy has shape {:?}, fields have {:?}",
            energy.shape(),
            data.pressure.shape()
        )
        .into());
    }

    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, config.contour_size);
            plot_contours_impl(backend, data, energy, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, config.contour_size);
            plot_contours_impl(backend, data, energy, config)
        }
    }
}

/// Implementation for contour plotting with concrete backend
fn plot_contours_impl<DB: DrawingBackend>(
    backend: DB,
    data: &ShockTubeData,
    energy: &DMatrix<f64>,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let panels = root.split_evenly((2, 2));

    for (panel, field) in panels.iter().zip(Field::CONTOUR_ORDER) {
        let values = data.field(field).unwrap_or(energy);
        draw_panel(panel, field, values, &data.space, &data.time, config)?;
    }

    root.present()?;
    Ok(())
}

/// One filled-contour panel plus its colorbar
fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    field: Field,
    values: &DMatrix<f64>,
    space: &[f64],
    time: &[f64],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let bounds = FieldBounds::of(values)
        .ok_or_else(|| format!("{} has no finite values", field.symbol()))?;
    let levels = ContourLevels::new(bounds, config.contour_levels);
    let colormap = config.colormap;

    let x_edges = cell_edges(space);
    let t_edges = cell_edges(time);
    let x_range = edge_range(&x_edges);
    let t_range = edge_range(&t_edges);

    let (width, _) = area.dim_in_pixel();
    let split = width.saturating_sub(COLORBAR_WIDTH) as i32;
    let (plot_area, bar_area) = area.split_horizontally(split);

    let mut chart = ChartBuilder::on(&plot_area)
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.0..x_range.1, t_range.0..t_range.1)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .y_desc(field.label())
        .axis_desc_style(config.label_font())
        .label_style(config.tick_font())
        .x_label_formatter(&|x| format!("{:.2}", x))
        .y_label_formatter(&|t| format!("{:.2}", t))
        .draw()?;

    let (x_edges, t_edges, levels) = (&x_edges, &t_edges, &levels);
    chart.draw_series((0..time.len()).flat_map(move |i| {
        (0..space.len()).filter_map(move |j| {
            let color = levels.color_of(values[(i, j)], colormap)?;
            Some(Rectangle::new(
                [(x_edges[j], t_edges[i]), (x_edges[j + 1], t_edges[i + 1])],
                color.filled(),
            ))
        })
    }))?;

    draw_colorbar(&bar_area, levels, config)
}

/// Vertical colorbar, one rectangle per contour band
fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    levels: &ContourLevels,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let edges = levels.edges();
    let (lo, hi) = (edges[0], edges[edges.len() - 1]);

    let mut bar = ChartBuilder::on(area)
        .margin_top(10)
        .margin_bottom(45)
        .margin_right(5)
        .right_y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, lo..hi)?;

    bar.configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_labels(levels.bands() + 1)
        .label_style(config.tick_font())
        .y_label_formatter(&|v| format!("{:.3}", v))
        .draw()?;

    bar.draw_series(edges.windows(2).enumerate().map(|(band, pair)| {
        Rectangle::new(
            [(0.0, pair[0]), (1.0, pair[1])],
            levels.band_color(band, config.colormap).filled(),
        )
    }))?;

    Ok(())
}

/// Cell boundaries around sample coordinates
///
/// Interior edges sit halfway between neighbours, the outer edges mirror the
/// first and last half-spacing. A single sample gets a unit-wide cell.
pub(crate) fn cell_edges(coords: &[f64]) -> Vec<f64> {
    match coords.len() {
        0 => Vec::new(),
        1 => vec![coords[0] - 0.5, coords[0] + 0.5],
        n => {
            let mut edges = Vec::with_capacity(n + 1);
            edges.push(coords[0] - 0.5 * (coords[1] - coords[0]));
            edges.extend(coords.windows(2).map(|w| 0.5 * (w[0] + w[1])));
            edges.push(coords[n - 1] + 0.5 * (coords[n - 1] - coords[n - 2]));
            edges
        }
    }
}

/// Sorted, non-empty axis range covering all edges
fn edge_range(edges: &[f64]) -> (f64, f64) {
    FieldBounds::of_slice(edges)
        .map(|b| b.axis_range())
        .unwrap_or((0.0, 1.0))
}

// =================================================================================================
// Tests
// =================================================================================================
