// File: crates/liftplot/tests/plots_tests.rs
// Purpose: Chart files for exercises and rep histograms: names, sizes, overwrite, failures.

use chrono::NaiveDate;
use liftplot::plots::{exercise_figure, plot_exercises, rep_histogram_figure, MAX_WEIGHT_LABEL, VOLUME_LABEL};
use liftplot::{plot_exercise, plot_rep_histogram, Error, PlotSettings, Record, RepHistogram};
use liftplot_chart::ScaleKind;

fn log() -> Vec<Record> {
    let d = |m: u32, day: u32| NaiveDate::from_ymd_opt(2021, m, day).unwrap();
    vec![
        Record::new(d(1, 4), "Bent-over Row (Barbell)", 60.0, 8),
        Record::new(d(1, 4), "Bent-over Row (Barbell)", 65.0, 6),
        Record::new(d(2, 10), "Bent-over Row (Barbell)", 70.0, 5),
        Record::new(d(3, 15), "Bent-over Row (Barbell)", 72.5, 5),
        Record::new(d(1, 5), "Squat", 100.0, 5),
        Record::new(d(1, 5), "Squat", 100.0, 15),
        Record::new(d(1, 5), "Squat", 100.0, 3),
        Record::new(d(1, 5), "Squat", 100.0, 16),
    ]
}

fn small() -> PlotSettings {
    PlotSettings { dpi: 50, ..PlotSettings::default() }
}

#[test]
fn exercise_plot_is_written_under_sanitised_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = plot_exercise(&log(), "Bent-over Row (Barbell)", dir.path(), &PlotSettings::default()).unwrap();
    assert_eq!(path, dir.path().join("Bent-over_Row_Barbell.png"));

    let img = image::open(&path).expect("decode png");
    // 6in x 6in at 150 dpi
    assert_eq!((img.width(), img.height()), (900, 900));
}

#[test]
fn exercise_figure_layout() {
    let fig = exercise_figure(&log(), "Bent-over Row (Barbell)", &small());
    assert_eq!(fig.title.as_deref(), Some("Bent-over Row (Barbell)"));
    assert_eq!(fig.panels.len(), 2);
    assert_eq!(fig.panels[0].y_axis.label, VOLUME_LABEL);
    assert_eq!(fig.panels[1].y_axis.label, MAX_WEIGHT_LABEL);
    assert_eq!(fig.panels[1].x_axis.label, "Date");
    assert!(fig.panels[0].x_axis.is_date());

    // Three sessions; Jan 4 sums two sets.
    let volume = &fig.panels[0].series[0].data_xy;
    let max_weight = &fig.panels[1].series[0].data_xy;
    assert_eq!(volume.len(), 3);
    assert_eq!(volume[0].1, 60.0 * 8.0 + 65.0 * 6.0);
    assert_eq!(max_weight[0].1, 65.0);
    assert_eq!(max_weight[2].1, 72.5);
}

#[test]
fn rendering_twice_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let names = vec!["Squat".to_string()];
    plot_exercises(&log(), &names, dir.path(), &small()).unwrap();
    plot_exercises(&log(), &names, dir.path(), &small()).unwrap();
    let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(files.len(), 1);
}

#[test]
fn missing_plot_dir_is_file_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let gone = dir.path().join("not-here");
    let err = plot_exercise(&log(), "Squat", &gone, &small()).unwrap_err();
    assert!(matches!(err, Error::FileAccess { .. }), "got {err:?}");
    let err = plot_rep_histogram(&log(), &gone, false, &small()).unwrap_err();
    assert!(matches!(err, Error::FileAccess { .. }), "got {err:?}");
}

#[test]
fn histogram_files() {
    let dir = tempfile::tempdir().unwrap();
    let linear = plot_rep_histogram(&log(), dir.path(), false, &PlotSettings::default()).unwrap();
    let log_scale = plot_rep_histogram(&log(), dir.path(), true, &PlotSettings::default()).unwrap();
    assert_eq!(linear.file_name().unwrap(), "num_reps.png");
    assert_eq!(log_scale.file_name().unwrap(), "num_reps_log.png");
    let img = image::open(&linear).unwrap();
    assert_eq!((img.width(), img.height()), (600, 450));
}

#[test]
fn histogram_bins_respect_domain_edges() {
    let hist = RepHistogram::from_records(&log(), 5, 16);
    // reps: 8, 6, 5, 5, 5, 15 counted; 3 and 16 excluded
    assert_eq!(hist.total(), 6);
    assert_eq!(hist.count_for(5), Some(3));
    assert_eq!(hist.count_for(15), Some(1));
    assert_eq!(hist.count_for(16), None);
    assert_eq!(hist.count_for(3), None);

    let fig = rep_histogram_figure(&hist, true, &small());
    let chart = &fig.panels[0];
    assert_eq!(chart.y_axis.kind, ScaleKind::Log10);
    assert_eq!(chart.y_axis.label, "log(Sets)");
    assert_eq!(chart.x_axis.label, "Reps");
    assert_eq!(chart.series[0].bins.len(), 11);

    let fig = rep_histogram_figure(&hist, false, &small());
    assert_eq!(fig.panels[0].y_axis.kind, ScaleKind::Linear);
    assert_eq!(fig.panels[0].y_axis.label, "Sets");
}
