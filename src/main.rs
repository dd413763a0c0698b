//! Plot every shock-tube result in the working directory
//!
//! Reads each `*.mat` file of the current directory and writes
//! `<name>-contour_plots.png` next to it plus one
//! `ml_plots/<name>-shocktube_t=<t>.png` frame per time sample.
//! Takes no arguments.

use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

use shocktube_plot::pipeline::{run_batch, BatchConfig};

fn main() {
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Info).init() {
        eprintln!("logger setup failed: {}", e);
    }

    let config = BatchConfig::default();

    match run_batch(&config) {
        Ok(report) => info!(
            "{} file(s) plotted, {} frame(s) in {}",
            report.processed.len(),
            report.frame_count(),
            config.output_dir.display()
        ),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
