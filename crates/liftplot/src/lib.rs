// File: crates/liftplot/src/lib.rs
// Summary: Workout log charting library; loading, ranking, session aggregation,
// rep histograms and the chart files built from them.

pub mod config;
pub mod error;
pub mod histogram;
pub mod plots;
pub mod ranking;
pub mod record;
pub mod run;
pub mod session;

pub use config::Config;
pub use error::{Error, Result};
pub use histogram::RepHistogram;
pub use plots::{plot_exercise, plot_file_name, plot_rep_histogram, PlotSettings};
pub use ranking::{top_exercises, ExerciseRanking, RankedExercise};
pub use record::{load_records, parse_records, LoadOptions, Record};
pub use run::{ensure_plot_dir, run, RunSummary};
pub use session::{sessions_for, SessionAggregate};
