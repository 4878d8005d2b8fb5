// File: crates/liftplot-chart/src/types.rs
// Summary: Shared types and constants (figure sizes, resolution, margins).

/// Default output resolution in dots per inch.
pub const DEFAULT_DPI: u32 = 150;

/// Typographic points per inch; fonts and margins are specified in points.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Physical figure size plus the resolution it is rasterised at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: u32,
}

impl FigureSize {
    pub const fn new(width_in: f32, height_in: f32, dpi: u32) -> Self {
        Self { width_in, height_in, dpi }
    }

    /// Surface size in whole pixels (at least 1x1).
    pub fn pixels(&self) -> (i32, i32) {
        let w = (self.width_in * self.dpi as f32).round().max(1.0) as i32;
        let h = (self.height_in * self.dpi as f32).round().max(1.0) as i32;
        (w, h)
    }

    /// Pixels per typographic point at this resolution.
    pub fn px_per_pt(&self) -> f32 {
        self.dpi as f32 / POINTS_PER_INCH
    }
}

/// Margins around a plot area, in points.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Convert to pixels with the given points-to-pixels factor.
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(self.left * factor, self.right * factor, self.top * factor, self.bottom * factor)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(64.0, 14.0, 6.0, 22.0)
    }
}
