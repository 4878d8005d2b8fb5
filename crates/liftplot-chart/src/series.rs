// File: crates/liftplot-chart/src/series.rs
// Summary: Series model for scatter points and histogram bins.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Scatter,   // (x, y) filled markers
    Histogram, // [left, right) bars rising from the baseline
}

/// One histogram bar: half-open interval `[left, right)` and its height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bin {
    pub left: f64,
    pub right: f64,
    pub count: f64,
}

impl Bin {
    /// Try to construct a bin enforcing `left < right` and a finite, non-negative count.
    pub fn try_new(left: f64, right: f64, count: f64) -> Result<Self, &'static str> {
        if !(left < right) { return Err("bin left edge must be below right edge"); }
        if !(count.is_finite() && count >= 0.0) { return Err("bin count must be finite and non-negative"); }
        Ok(Self { left, right, count })
    }

    pub fn center(&self) -> f64 { 0.5 * (self.left + self.right) }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>, // used by Scatter
    pub bins: Vec<Bin>,           // used by Histogram
    pub baseline: Option<f64>,    // used by Histogram (origin)
    /// Marker radius in points.
    pub marker_radius: f32,
}

impl Series {
    pub fn scatter(points: Vec<(f64, f64)>) -> Self {
        Self { series_type: SeriesType::Scatter, data_xy: points, bins: Vec::new(), baseline: None, marker_radius: 3.0 }
    }

    pub fn histogram(bins: Vec<Bin>) -> Self {
        Self { series_type: SeriesType::Histogram, data_xy: Vec::new(), bins, baseline: None, marker_radius: 0.0 }
    }

    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Get baseline value or default (0.0) when not set.
    pub fn baseline_value(&self) -> f64 { self.baseline.unwrap_or(0.0) }

    pub fn is_empty(&self) -> bool {
        match self.series_type {
            SeriesType::Scatter => self.data_xy.is_empty(),
            SeriesType::Histogram => self.bins.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_invariants() {
        assert!(Bin::try_new(4.5, 5.5, 3.0).is_ok());
        assert!(Bin::try_new(5.5, 4.5, 3.0).is_err());
        assert!(Bin::try_new(4.5, 5.5, -1.0).is_err());
        assert_eq!(Bin::try_new(4.5, 5.5, 0.0).unwrap().center(), 5.0);
    }
}
