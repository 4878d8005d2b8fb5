// File: crates/liftplot-chart/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and panel layout.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    /// Shrink by pixel insets, never inverting the rectangle.
    pub fn inset(&self, px: &Insets) -> Self {
        let left = self.left + px.left;
        let top = self.top + px.top;
        let right = (self.right - px.right).max(left + 1.0);
        let bottom = (self.bottom - px.bottom).max(top + 1.0);
        Self { left, top, right, bottom }
    }

    /// Split into `n` equal rows separated by `gap` pixels.
    pub fn split_rows(&self, n: usize, gap: f32) -> Vec<RectF> {
        if n == 0 { return Vec::new(); }
        let total_gap = gap * (n - 1) as f32;
        let row_h = ((self.height() - total_gap) / n as f32).max(1.0);
        (0..n)
            .map(|i| {
                let top = self.top + i as f32 * (row_h + gap);
                Self::from_ltrb(self.left, top, self.right, top + row_h)
            })
            .collect()
    }

    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}
