//! Batch processing of result files
//!
//! For each result file found in the input directory, in order:
//!
//! ```text
//! load → derive energy → contour figure → per-time-step frames
//! ```
//!
//! The frame directory is created once, before any file is read, so an
//! empty batch still leaves an (empty) output directory behind.
//!
//! # Example
//!
//! ```rust,ignore
//! use shocktube_plot::pipeline::{run_batch, BatchConfig, FailurePolicy};
//!
//! let config = BatchConfig::in_directory("runs").failure_policy(FailurePolicy::Continue);
//! let report = run_batch(&config)?;
//! println!("{} files plotted", report.processed.len());
//! ```

use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::input::{discover_result_files, load_result_file, LoadError, RESULT_EXTENSION};
use crate::output::visualization::{contour_file_name, plot_contours, plot_time_steps, PlotConfig};
use crate::physics::{DerivationError, IdealGas};

/// Name of the per-time-step frame directory
pub const FRAME_DIR: &str = "ml_plots";

// =================================================================================================
// Configuration
// =================================================================================================

/// What to do when one file of a batch fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the batch at the first failing file
    #[default]
    Abort,

    /// Log the failure and move on to the next file
    Continue,
}

/// Batch configuration
///
/// The default reproduces the fixed behaviour of the command-line tool:
/// read `*.mat` from the working directory, write contour figures there and
/// frames to `ml_plots/`, γ = 1.4, stop at the first error.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory scanned for result files (default: ".")
    pub input_dir: PathBuf,

    /// Result file extension (default: "mat")
    pub extension: String,

    /// Directory of contour figures (default: ".")
    pub contour_dir: PathBuf,

    /// Directory of per-time-step frames (default: "ml_plots")
    pub output_dir: PathBuf,

    /// Equation of state used to derive energy
    pub gas: IdealGas,

    pub plot: PlotConfig,

    pub failure_policy: FailurePolicy,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::in_directory(".")
    }
}

impl BatchConfig {
    /// Read from and write next to `dir`, frames in `dir/ml_plots`
    pub fn in_directory(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            extension: RESULT_EXTENSION.to_string(),
            contour_dir: dir.clone(),
            output_dir: dir.join(FRAME_DIR),
            input_dir: dir,
            gas: IdealGas::default(),
            plot: PlotConfig::default(),
            failure_policy: FailurePolicy::default(),
        }
    }

    /// Builder pattern: set equation of state
    pub fn gas(mut self, gas: IdealGas) -> Self {
        self.gas = gas;
        self
    }

    /// Builder pattern: set plot configuration
    pub fn plot(mut self, plot: PlotConfig) -> Self {
        self.plot = plot;
        self
    }

    /// Builder pattern: set failure policy
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

// =================================================================================================
// Results and errors
// =================================================================================================

/// Images written for one result file
#[derive(Debug, Clone)]
pub struct FileReport {
    pub source: PathBuf,
    pub contour: PathBuf,
    pub frames: Vec<PathBuf>,
}

/// Outcome of a batch
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub processed: Vec<FileReport>,

    /// Files skipped under [`FailurePolicy::Continue`], with the reason
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn frame_count(&self) -> usize {
        self.processed.iter().map(|r| r.frames.len()).sum()
    }
}

/// Failure while processing a single file
#[derive(Debug, Error)]
pub enum FileError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Derive(#[from] DerivationError),

    #[error("rendering failed: {0}")]
    Render(String),
}

/// Failure of a whole batch
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("cannot create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot scan {} for result files: {source}", .path.display())]
    Discover {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        source: FileError,
    },
}

// =================================================================================================
// Processing
// =================================================================================================

/// Process every result file of the input directory
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport, BatchError> {
    fs::create_dir_all(&config.output_dir).map_err(|source| BatchError::OutputDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let files = discover_result_files(&config.input_dir, &config.extension).map_err(|source| {
        BatchError::Discover {
            path: config.input_dir.clone(),
            source,
        }
    })?;

    if files.is_empty() {
        warn!(
            "no *.{} files in {}",
            config.extension,
            config.input_dir.display()
        );
    }

    let mut report = BatchReport::default();

    for path in files {
        match process_file(&path, config) {
            Ok(file_report) => report.processed.push(file_report),
            Err(source) => match config.failure_policy {
                FailurePolicy::Abort => return Err(BatchError::File { path, source }),
                FailurePolicy::Continue => {
                    error!("{}: {}", path.display(), source);
                    report.failed.push((path, source.to_string()));
                }
            },
        }
    }

    Ok(report)
}

/// Load, derive and render a single result file
///
/// The contour figure goes to `config.contour_dir`, frames to
/// `config.output_dir`, which must already exist.
pub fn process_file(path: &Path, config: &BatchConfig) -> Result<FileReport, FileError> {
    let data = load_result_file(path)?;
    info!("{} loaded", path.display());

    let energy = data.derive_energy(&config.gas)?;

    let contour = config.contour_dir.join(contour_file_name(&data.name));
    let contour_path = contour
        .to_str()
        .ok_or_else(|| FileError::Render(format!("non UTF-8 path {}", contour.display())))?;
    plot_contours(&data, &energy, contour_path, Some(&config.plot))
        .map_err(|e| FileError::Render(e.to_string()))?;

    let frames = plot_time_steps(&data, &energy, &config.output_dir, Some(&config.plot))
        .map_err(|e| FileError::Render(e.to_string()))?;

    info!(
        "{}: {} × {} grid, {} frames written",
        data.name,
        data.nt(),
        data.nx(),
        frames.len()
    );

    Ok(FileReport {
        source: path.to_path_buf(),
        contour,
        frames,
    })
}

// =================================================================================================
// Tests
// =================================================================================================
