// File: crates/liftplot-chart/src/axis.rs
// Summary: Axis model with labels, ranges, scale kind and tick placement.

use crate::ticks::{self, TickSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

/// How tick positions and labels are chosen for an axis.
#[derive(Clone, Debug, PartialEq)]
pub enum TickLocator {
    /// Round-number ticks (decades on log axes).
    Auto,
    /// Calendar ticks; axis values are days from the common era
    /// (see [`crate::dates::date_to_x`]).
    Dates { min_ticks: usize, max_ticks: usize },
    /// Exactly these positions, labelled as numbers.
    Fixed(Vec<f64>),
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    pub locator: TickLocator,
    /// When false, ticks are drawn without labels (inner panels of a shared axis).
    pub tick_labels: bool,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            kind: ScaleKind::Linear,
            locator: TickLocator::Auto,
            tick_labels: true,
        }
    }

    /// Date axis with automatic calendar ticks (3 to 7 of them).
    pub fn dates(label: impl Into<String>) -> Self {
        Self::new(label, 0.0, 1.0).with_locator(TickLocator::Dates { min_ticks: 3, max_ticks: 7 })
    }

    pub fn with_kind(mut self, kind: ScaleKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_locator(mut self, locator: TickLocator) -> Self {
        self.locator = locator;
        self
    }

    pub fn is_date(&self) -> bool {
        matches!(self.locator, TickLocator::Dates { .. })
    }

    /// Tick positions and labels for the current range.
    pub fn ticks(&self) -> TickSet {
        ticks::locate(self)
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new("", 0.0, 1.0)
    }
}
