// File: crates/liftplot/src/plots.rs
// Summary: Figure builders for per-exercise progress charts and rep histograms,
// plus writing them into the plot directory.

use std::fs;
use std::path::{Path, PathBuf};

use liftplot_chart::dates::date_to_x;
use liftplot_chart::{
    Axis, Chart, Figure, FigureSize, RenderOptions, ScaleKind, Series, TickLocator, DEFAULT_DPI,
};
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::histogram::{RepHistogram, DEFAULT_MAX_REPS, DEFAULT_MIN_REPS};
use crate::record::Record;
use crate::session::sessions_for;

pub const VOLUME_LABEL: &str = "Volume per session / kg";
pub const MAX_WEIGHT_LABEL: &str = "Max weight per session / kg";

/// Rendering knobs shared by every plot in a run.
#[derive(Clone, Debug)]
pub struct PlotSettings {
    pub dpi: u32,
    pub render: RenderOptions,
    pub min_reps: u32,
    pub max_reps: u32,
}

impl PlotSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            dpi: config.dpi,
            render: config.render_options(),
            min_reps: config.histogram.min_reps,
            max_reps: config.histogram.max_reps,
        }
    }
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            render: RenderOptions::default(),
            min_reps: DEFAULT_MIN_REPS,
            max_reps: DEFAULT_MAX_REPS,
        }
    }
}

/// `Bent-over Row (Barbell)` -> `Bent-over_Row_Barbell.png`
pub fn plot_file_name(exercise: &str) -> String {
    format!("{}.png", exercise.replace(' ', "_").replace(['(', ')'], ""))
}

pub fn histogram_file_name(use_log: bool) -> &'static str {
    if use_log { "num_reps_log.png" } else { "num_reps.png" }
}

/// Two stacked scatter panels over a shared date axis: session volume on
/// top, heaviest set below.
pub fn exercise_figure(records: &[Record], exercise: &str, settings: &PlotSettings) -> Figure {
    let sessions = sessions_for(records, exercise);
    debug!(exercise, sessions = sessions.len(), "aggregated sessions");

    let mut volume = Chart::new();
    volume.x_axis = Axis::dates("");
    volume.y_axis = Axis::new(VOLUME_LABEL, 0.0, 1.0);
    volume.add_series(Series::scatter(sessions.iter().map(|s| (date_to_x(s.date), s.volume)).collect()));

    let mut max_weight = Chart::new();
    max_weight.x_axis = Axis::dates("Date");
    max_weight.y_axis = Axis::new(MAX_WEIGHT_LABEL, 0.0, 1.0);
    max_weight.add_series(Series::scatter(sessions.iter().map(|s| (date_to_x(s.date), s.max_weight)).collect()));

    let mut fig = Figure::new(FigureSize::new(6.0, 6.0, settings.dpi)).with_title(exercise).sharing_x();
    fig.add_panel(volume);
    fig.add_panel(max_weight);
    fig.autoscale();
    fig
}

/// Bar histogram of sets per rep count, optionally on a log10 count axis.
pub fn rep_histogram_figure(hist: &RepHistogram, use_log: bool, settings: &PlotSettings) -> Figure {
    let ticks = hist.domain().map(f64::from).collect();
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("Reps", 0.0, 1.0).with_locator(TickLocator::Fixed(ticks));
    chart.y_axis = if use_log {
        Axis::new("log(Sets)", 1.0, 10.0).with_kind(ScaleKind::Log10)
    } else {
        Axis::new("Sets", 0.0, 1.0)
    };
    chart.add_series(Series::histogram(hist.bins()).with_baseline(0.0));

    let mut fig = Figure::new(FigureSize::new(4.0, 3.0, settings.dpi));
    fig.add_panel(chart);
    fig.autoscale();
    fig
}

/// Render the progress chart for `exercise` to `<plot_dir>/<sanitised name>.png`.
pub fn plot_exercise(records: &[Record], exercise: &str, plot_dir: &Path, settings: &PlotSettings) -> Result<PathBuf> {
    let path = plot_dir.join(plot_file_name(exercise));
    write_png(&exercise_figure(records, exercise, settings), &path, settings)?;
    Ok(path)
}

pub fn plot_exercises(records: &[Record], exercises: &[String], plot_dir: &Path, settings: &PlotSettings) -> Result<Vec<PathBuf>> {
    exercises.iter().map(|name| plot_exercise(records, name, plot_dir, settings)).collect()
}

/// Render the rep histogram to `num_reps.png` (or `num_reps_log.png`).
pub fn plot_rep_histogram(records: &[Record], plot_dir: &Path, use_log: bool, settings: &PlotSettings) -> Result<PathBuf> {
    let hist = RepHistogram::from_records(records, settings.min_reps, settings.max_reps);
    debug!(in_domain = hist.total(), total = records.len(), use_log, "binned reps");
    let path = plot_dir.join(histogram_file_name(use_log));
    write_png(&rep_histogram_figure(&hist, use_log, settings), &path, settings)?;
    Ok(path)
}

fn write_png(figure: &Figure, path: &Path, settings: &PlotSettings) -> Result<()> {
    let bytes = figure.render_to_png_bytes(&settings.render).map_err(Error::Render)?;
    fs::write(path, bytes).map_err(|e| Error::file_access(path, e))?;
    debug!(path = %path.display(), "wrote plot");
    Ok(())
}
