// File: crates/liftplot/src/run.rs
// Summary: End-to-end run: load the log, rank exercises, write every chart.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::plots::{plot_exercises, plot_rep_histogram, PlotSettings};
use crate::ranking::top_exercises;
use crate::record::load_records;

/// Files written by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub plot_dir: PathBuf,
    pub exercise_plots: Vec<PathBuf>,
    pub histograms: Vec<PathBuf>,
}

/// Create `dir` (and parents) unless it already exists.
pub fn ensure_plot_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::file_access(dir, e))
}

/// Chart the log at `input`. The ranking listing and the final
/// `Saved plots to ...` line go to `out`; any failure aborts the run.
pub fn run<W: Write>(input: &Path, config: &Config, out: &mut W) -> Result<RunSummary> {
    let stdout_err = |e| Error::file_access("<stdout>", e);

    let records = load_records(input, &config.load_options())?;
    info!(records = records.len(), input = %input.display(), "loaded workout log");

    ensure_plot_dir(&config.plot_dir)?;

    let names = top_exercises(&records, config.top_n, out).map_err(stdout_err)?;
    let settings = PlotSettings::from_config(config);
    let exercise_plots = plot_exercises(&records, &names, &config.plot_dir, &settings)?;
    info!(count = exercise_plots.len(), "wrote exercise plots");

    let histograms = vec![
        plot_rep_histogram(&records, &config.plot_dir, false, &settings)?,
        plot_rep_histogram(&records, &config.plot_dir, true, &settings)?,
    ];

    writeln!(out, "Saved plots to {}", config.plot_dir.display()).map_err(stdout_err)?;
    Ok(RunSummary { plot_dir: config.plot_dir.clone(), exercise_plots, histograms })
}
