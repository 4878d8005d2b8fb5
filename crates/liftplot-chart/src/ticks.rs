// File: crates/liftplot-chart/src/ticks.rs
// Summary: Tick layout helpers (round-number, decade, fixed and calendar ticks).

use crate::axis::{Axis, ScaleKind, TickLocator};
use crate::dates;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Ticks for one axis plus optional offset text (e.g. "2021-Mar").
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickSet {
    pub ticks: Vec<Tick>,
    pub offset: Option<String>,
}

pub fn locate(axis: &Axis) -> TickSet {
    let (lo, hi) = if axis.min <= axis.max { (axis.min, axis.max) } else { (axis.max, axis.min) };
    match &axis.locator {
        TickLocator::Dates { min_ticks, max_ticks } => {
            let found = dates::auto_date_ticks(lo, hi, *min_ticks, *max_ticks);
            let ticks = found
                .dates
                .iter()
                .map(|d| Tick { value: dates::date_to_x(*d), label: dates::concise_label(found.step, *d) })
                .collect();
            TickSet { ticks, offset: dates::concise_offset(&found) }
        }
        TickLocator::Fixed(values) => {
            let step = min_gap(values);
            let ticks = values
                .iter()
                .filter(|v| **v >= lo - 1e-9 && **v <= hi + 1e-9)
                .map(|&v| Tick { value: v, label: format_number(v, step) })
                .collect();
            TickSet { ticks, offset: None }
        }
        TickLocator::Auto => match axis.kind {
            ScaleKind::Linear => {
                let step = nice_step(hi - lo, 5);
                let ticks = nice_ticks(lo, hi, 5)
                    .into_iter()
                    .map(|v| Tick { value: v, label: format_number(v, step) })
                    .collect();
                TickSet { ticks, offset: None }
            }
            ScaleKind::Log10 => {
                let ticks = log_ticks(lo, hi)
                    .into_iter()
                    .map(|v| Tick { value: v, label: format_log(v) })
                    .collect();
                TickSet { ticks, offset: None }
            }
        },
    }
}

/// Round step (1, 2, 2.5 or 5 times a power of ten) giving roughly `target` intervals.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !(span.is_finite() && span > 0.0) {
        return 1.0;
    }
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let mult = [1.0, 2.0, 2.5, 5.0, 10.0].into_iter().find(|m| norm <= *m).unwrap_or(10.0);
    mult * mag
}

/// Multiples of a nice step inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max < min {
        return Vec::new();
    }
    if max == min {
        return vec![min];
    }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|i| {
            let v = i as f64 * step;
            if v == 0.0 { 0.0 } else { v }
        })
        .collect()
}

/// Powers of ten inside `[min, max]`; narrow ranges fall back to 1-2-5 sub-decades.
pub fn log_ticks(min: f64, max: f64) -> Vec<f64> {
    if !(min > 0.0 && max >= min && max.is_finite()) {
        return Vec::new();
    }
    let lo = min.log10().floor() as i32;
    let hi = max.log10().ceil() as i32;
    let in_range = |v: f64| v >= min * (1.0 - 1e-9) && v <= max * (1.0 + 1e-9);
    let decades: Vec<f64> = (lo..=hi).map(|k| 10f64.powi(k)).filter(|v| in_range(*v)).collect();
    if decades.len() >= 2 {
        return decades;
    }
    (lo..=hi)
        .flat_map(|k| [1.0, 2.0, 5.0].into_iter().map(move |m| m * 10f64.powi(k)))
        .filter(|v| in_range(*v))
        .collect()
}

/// Format with just enough decimals to distinguish ticks `step` apart.
pub fn format_number(v: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        let mut d = (-step.log10().floor()).max(0.0) as usize;
        // 2.5 x 10^k needs one more digit than its magnitude suggests
        if ((step / 10f64.powi(-(d as i32))).fract() - 0.5).abs() < 1e-6 {
            d += 1;
        }
        d.min(6)
    } else {
        0
    };
    format!("{:.*}", decimals, v)
}

pub fn format_log(v: f64) -> String {
    let k = v.log10();
    if (k - k.round()).abs() < 1e-9 && (0.0..=6.0).contains(&k.round()) {
        format!("{}", 10i64.pow(k.round() as u32))
    } else if (k - k.round()).abs() < 1e-9 {
        format!("1e{}", k.round() as i32)
    } else if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format_number(v, v)
    }
}

fn min_gap(values: &[f64]) -> f64 {
    values
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .filter(|g| *g > 0.0)
        .fold(f64::INFINITY, f64::min)
        .min(1.0)
}
