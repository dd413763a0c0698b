//! Per-time-step line plots
//!
//! For every time sample `t[i]` a figure with four stacked panels
//! (ρ, u, p, E against x) is written as `<prefix>-shocktube_t=<t:.4>.png`.
//!
//! Every panel uses the field's global min/max over the whole run as its
//! y-range, so successive frames share the same axes and can be compared
//! or stitched into an animation.
//!
//! Each frame is drawn on a canvas created for that frame alone. With the
//! `parallel` feature the frames of a run are rendered concurrently.

use nalgebra::DMatrix;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::PlotConfig;
use crate::input::ShockTubeData;
use crate::physics::{Field, FieldBounds};

/// Image name of the frame at time `time`
pub fn frame_file_name(prefix: &str, time: f64) -> String {
    format!("{}-shocktube_t={:.4}.png", prefix, time)
}

// =================================================================================================
// Frame data
// =================================================================================================

/// Global y-range of each plotted field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameBounds {
    pub density: FieldBounds,
    pub velocity: FieldBounds,
    pub pressure: FieldBounds,
    pub energy: FieldBounds,
}

impl FrameBounds {
    /// Min/max of every field across all time steps
    pub fn compute(data: &ShockTubeData, energy: &DMatrix<f64>) -> Result<Self, String> {
        let of = |field: Field| {
            FieldBounds::of(data.field(field).unwrap_or(energy))
                .ok_or_else(|| format!("{} has no finite values", field.symbol()))
        };

        Ok(Self {
            density: of(Field::Density)?,
            velocity: of(Field::Velocity)?,
            pressure: of(Field::Pressure)?,
            energy: of(Field::Energy)?,
        })
    }

    pub fn get(&self, field: Field) -> FieldBounds {
        match field {
            Field::Density => self.density,
            Field::Velocity => self.velocity,
            Field::Pressure => self.pressure,
            Field::Energy => self.energy,
        }
    }
}

/// Values of a single time step
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub time: f64,
    pub space: &'a [f64],
    rows: Vec<(Field, Vec<f64>)>,
}

impl<'a> Frame<'a> {
    /// Row `index` of every field, `None` past the last time step
    pub fn at(data: &'a ShockTubeData, energy: &DMatrix<f64>, index: usize) -> Option<Self> {
        if index >= data.nt() || index >= energy.nrows() {
            return None;
        }

        let rows = Field::FRAME_ORDER
            .iter()
            .map(|&field| {
                let matrix = data.field(field).unwrap_or(energy);
                (field, matrix.row(index).iter().copied().collect())
            })
            .collect();

        Some(Self {
            time: data.time[index],
            space: &data.space,
            rows,
        })
    }

    pub fn values(&self, field: Field) -> &[f64] {
        self.rows
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_slice())
            .unwrap_or(&[])
    }
}

// =================================================================================================
// Public API
// =================================================================================================

/// Render one frame
///
/// # Arguments
///
/// * `frame`       — Values at one time step
/// * `bounds`      — Global y-ranges, shared by all frames of the run
/// * `output_path` — Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      — Optional plot configuration; `None` uses defaults
pub fn plot_frame(
    frame: &Frame,
    bounds: &FrameBounds,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    let ext = Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let canvas = SVGBackend::new(output_path, config.frame_size).into_drawing_area();
            render_frame(canvas, frame, bounds, config)
        }
        _ => {
            let canvas = BitMapBackend::new(output_path, config.frame_size).into_drawing_area();
            render_frame(canvas, frame, bounds, config)
        }
    }
}

/// Render every time step of a run into `output_dir`
///
/// Returns the written paths in time order. Existing files are overwritten.
///
/// # Errors
///
/// Returns `Err` if `energy` does not match the field shape, a field has no
/// finite value, or a frame cannot be written.
pub fn plot_time_steps(
    data: &ShockTubeData,
    energy: &DMatrix<f64>,
    output_dir: &Path,
    config: Option<&PlotConfig>,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
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
    let bounds = FrameBounds::compute(data, energy)?;

    let paths: Vec<PathBuf> = data
        .time
        .iter()
        .map(|&t| output_dir.join(frame_file_name(&data.name, t)))
        .collect();

    let render_step = |index: usize, path: &Path| -> Result<(), String> {
        let frame = Frame::at(data, energy, index)
            .ok_or_else(|| format!("no time step {}", index))?;
        let path = path
            .to_str()
            .ok_or_else(|| format!("non UTF-8 path {}", path.display()))?;
        plot_frame(&frame, &bounds, path, Some(config)).map_err(|e| format!("{}: {}", path, e))
    };

    #[cfg(not(feature = "parallel"))]
    for (index, path) in paths.iter().enumerate() {
        render_step(index, path)?;
    }

    #[cfg(feature = "parallel")]
    paths
        .par_iter()
        .enumerate()
        .try_for_each(|(index, path)| render_step(index, path))?;

    Ok(paths)
}

// =================================================================================================
// Private Plot Implementation
// =================================================================================================

/// Draw the four stacked panels of a frame on its canvas
fn render_frame<DB: DrawingBackend>(
    canvas: DrawingArea<DB, Shift>,
    frame: &Frame,
    bounds: &FrameBounds,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    canvas.fill(&config.background)?;

    let (x_lo, x_hi) = FieldBounds::of_slice(frame.space)
        .map(|b| b.axis_range())
        .unwrap_or((0.0, 1.0));

    let y_formatter = |v: &f64| format!("{:.2}", v);
    let panels = canvas.split_evenly((Field::FRAME_ORDER.len(), 1));
    let bottom = panels.len() - 1;

    for (k, (panel, field)) in panels.iter().zip(Field::FRAME_ORDER).enumerate() {
        let is_bottom = k == bottom;
        let (y_lo, y_hi) = bounds.get(field).axis_range();

        let mut chart = ChartBuilder::on(panel)
            .margin(8)
            .margin_left(20)
            .x_label_area_size(if is_bottom { 40 } else { 0 })
            .y_label_area_size(80)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

        let mut mesh = chart.configure_mesh();
        mesh.y_desc(field.symbol())
            .axis_desc_style(config.label_font())
            .label_style(config.tick_font())
            .y_labels(5)
            .y_label_formatter(&y_formatter);
        // x ticks and label only on the bottom panel
        if is_bottom {
            mesh.x_desc("x");
        }
        if !config.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        chart.draw_series(LineSeries::new(
            frame
                .space
                .iter()
                .zip(frame.values(field))
                .filter(|(_, v)| v.is_finite())
                .map(|(x, v)| (*x, *v)),
            ShapeStyle::from(&config.line_color(field)).stroke_width(config.line_width),
        ))?;
    }

    canvas.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
