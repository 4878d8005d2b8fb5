// File: crates/liftplot-chart/src/scale.rs
// Summary: Data-to-pixel transforms for linear and log10 axes.

use crate::axis::{Axis, ScaleKind};

/// Maps a data interval onto a pixel interval. `px_start` corresponds to
/// `vmin`; for vertical axes pass the bottom edge as `px_start`.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    pub px_start: f32,
    pub px_end: f32,
    pub vmin: f64,
    pub vmax: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl AxisScale {
    pub fn new_linear(px_start: f32, px_end: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { px_start, px_end, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn new_log10(px_start: f32, px_end: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        let log_min = vmin.log10();
        let log_max = vmax.log10();
        Self { px_start, px_end, vmin, vmax, log: true, log_min, log_max }
    }

    pub fn for_axis(axis: &Axis, px_start: f32, px_end: f32) -> Self {
        match axis.kind {
            ScaleKind::Linear => Self::new_linear(px_start, px_end, axis.min, axis.max),
            ScaleKind::Log10 => Self::new_log10(px_start, px_end, axis.min, axis.max),
        }
    }

    /// Fraction of the axis covered at `v`; 0 at `vmin`, 1 at `vmax`.
    #[inline]
    pub fn fraction(&self, v: f64) -> f64 {
        if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            (v.max(1e-12).log10() - self.log_min) / span
        } else {
            let span = (self.vmax - self.vmin).max(1e-12);
            (v - self.vmin) / span
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.px_start + self.fraction(v) as f32 * (self.px_end - self.px_start)
    }

    /// True when `v` lies inside the axis range (inclusive, small tolerance).
    pub fn contains(&self, v: f64) -> bool {
        let f = self.fraction(v);
        (-1e-9..=1.0 + 1e-9).contains(&f)
    }
}
