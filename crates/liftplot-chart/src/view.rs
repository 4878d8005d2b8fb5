// File: crates/liftplot-chart/src/view.rs
// Visible ranges derived from series data (autoscale with margins).

use crate::axis::ScaleKind;
use crate::series::SeriesType;
use crate::Chart;

/// Fraction of the data span added on each side.
pub const MARGIN: f64 = 0.05;

/// Date axes showing a single day are widened to this many days.
const MIN_DATE_SPAN: f64 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    pub fn from_chart(chart: &Chart) -> Self {
        let y_log = chart.y_axis.kind == ScaleKind::Log10;
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut baseline: Option<f64> = None;
        let keep_y = |y: f64| y.is_finite() && (!y_log || y > 0.0);

        for s in &chart.series {
            match s.series_type {
                SeriesType::Scatter => {
                    for &(x, y) in &s.data_xy {
                        if !x.is_finite() || !keep_y(y) { continue; }
                        x_min = x_min.min(x);
                        x_max = x_max.max(x);
                        y_min = y_min.min(y);
                        y_max = y_max.max(y);
                    }
                }
                SeriesType::Histogram => {
                    for b in &s.bins {
                        x_min = x_min.min(b.left);
                        x_max = x_max.max(b.right);
                        if keep_y(b.count) {
                            y_min = y_min.min(b.count);
                            y_max = y_max.max(b.count);
                        }
                    }
                    if !y_log {
                        let b = s.baseline_value();
                        baseline = Some(baseline.map_or(b, |cur: f64| cur.min(b)));
                    }
                }
            }
        }

        let (x_min, x_max) = if x_min.is_finite() && x_max.is_finite() {
            let min_span = if chart.x_axis.is_date() { MIN_DATE_SPAN } else { 0.0 };
            pad_linear(x_min, x_max, min_span)
        } else {
            (chart.x_axis.min, chart.x_axis.max)
        };

        if let Some(b) = baseline {
            y_min = y_min.min(b);
            y_max = y_max.max(b);
        }
        let (y_min, y_max) = if !(y_min.is_finite() && y_max.is_finite()) {
            if y_log { (1.0, 10.0) } else { (0.0, 1.0) }
        } else if y_log {
            pad_log(y_min, y_max)
        } else {
            let (lo, hi) = pad_linear(y_min, y_max, 0.0);
            // Bars stand on the baseline: no margin below it.
            match baseline {
                Some(b) if b <= y_min => (b, hi),
                _ => (lo, hi),
            }
        };

        Self { x_min, x_max, y_min, y_max }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}

fn pad_linear(lo: f64, hi: f64, min_span: f64) -> (f64, f64) {
    let span = hi - lo;
    if span < min_span.max(1e-9) {
        let mid = 0.5 * (lo + hi);
        let half = if min_span > 0.0 {
            0.5 * min_span
        } else if mid != 0.0 {
            mid.abs() * MARGIN
        } else {
            0.5
        };
        return (mid - half, mid + half);
    }
    let m = span * MARGIN;
    (lo - m, hi + m)
}

fn pad_log(lo: f64, hi: f64) -> (f64, f64) {
    let (a, b) = (lo.log10(), hi.log10());
    let pad = ((b - a) * MARGIN).max(0.15);
    (10f64.powf(a - pad), 10f64.powf(b + pad))
}
