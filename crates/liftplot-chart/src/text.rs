// File: crates/liftplot-chart/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; anchored and rotated labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Placement of a label relative to its anchor along one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
}

impl Align {
    fn offset(self, extent: f32) -> f32 {
        match self {
            Align::Start => 0.0,
            Align::Center => extent * 0.5,
            Align::End => extent,
        }
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` so that the anchor `(x, y)` sits at the given alignment of its box.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        color: skia::Color,
        (h, v): (Align, Align),
    ) {
        let p = self.layout(text, size, color);
        let left = x - h.offset(p.longest_line());
        let top = y - v.offset(p.height());
        p.paint(canvas, (left, top));
    }

    /// Draw `text` rotated a quarter turn counter-clockwise, centered on `(x, y)`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, (x, y): (f32, f32), size: f32, color: skia::Color) {
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-90.0, None);
        self.draw(canvas, text, (0.0, 0.0), size, color, (Align::Center, Align::Center));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
