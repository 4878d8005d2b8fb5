// File: crates/liftplot-chart/src/figure.rs
// Summary: Figures of vertically stacked panels and the headless PNG
// rendering pipeline (Skia CPU raster surface, PNG encoding via `image`).

use std::path::Path;

use anyhow::{Context, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use skia_safe as skia;

use crate::chart::{draw_chart, Chart, RenderContext};
use crate::geometry::RectF;
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::types::FigureSize;

// Points.
const TITLE_FONT: f32 = 12.0;
const OUTER_PAD: f32 = 6.0;
const PANEL_GAP: f32 = 10.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Skip all text (useful for pixel comparisons across platforms).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::light(), draw_labels: true }
    }
}

pub struct Figure {
    pub size: FigureSize,
    pub title: Option<String>,
    pub panels: Vec<Chart>,
    /// Panels share one x range; only the bottom panel labels its ticks.
    pub share_x: bool,
}

impl Figure {
    pub fn new(size: FigureSize) -> Self {
        Self { size, title: None, panels: Vec::new(), share_x: false }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn sharing_x(mut self) -> Self {
        self.share_x = true;
        self
    }

    pub fn add_panel(&mut self, chart: Chart) {
        self.panels.push(chart);
    }

    /// Fit every panel to its data, then unify x ranges when shared.
    pub fn autoscale(&mut self) {
        for panel in &mut self.panels {
            panel.autoscale_axes();
        }
        if !self.share_x || self.panels.len() < 2 {
            return;
        }
        let with_data = || self.panels.iter().filter(|p| p.series.iter().any(|s| !s.is_empty()));
        let x_min = with_data().map(|p| p.x_axis.min).fold(f64::INFINITY, f64::min);
        let x_max = with_data().map(|p| p.x_axis.max).fold(f64::NEG_INFINITY, f64::max);
        if !(x_min.is_finite() && x_max.is_finite()) {
            return;
        }
        let last = self.panels.len() - 1;
        for (i, panel) in self.panels.iter_mut().enumerate() {
            panel.x_axis.min = x_min;
            panel.x_axis.max = x_max;
            panel.x_axis.tick_labels = i == last;
        }
    }

    /// Render into a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = self.size.pixels();
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        {
            let shaper = TextShaper::new();
            let ctx = RenderContext {
                canvas: surface.canvas(),
                shaper: &shaper,
                theme: &opts.theme,
                scale: self.size.px_per_pt(),
                draw_labels: opts.draw_labels,
            };
            self.draw(&ctx, w as f32, h as f32);
        }

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back raster surface");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(&pixels, w, h, ExtendedColorType::Rgba8)
            .context("encode PNG failed")?;
        Ok(out)
    }

    /// Render the figure to a PNG at `output_png_path`, replacing any existing
    /// file. The parent directory must already exist.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote figure");
        Ok(())
    }

    fn draw(&self, ctx: &RenderContext, w: f32, h: f32) {
        ctx.canvas.clear(ctx.theme.background);

        let mut top = ctx.px(OUTER_PAD);
        if let Some(title) = &self.title {
            if ctx.draw_labels {
                ctx.shaper.draw(
                    ctx.canvas,
                    title,
                    (0.5 * w, top),
                    ctx.px(TITLE_FONT),
                    ctx.theme.title,
                    (Align::Center, Align::Start),
                );
            }
            top += ctx.px(TITLE_FONT * 1.4);
        }

        let content = RectF::from_ltrb(0.0, top, w, h - ctx.px(OUTER_PAD));
        for (panel, cell) in self.panels.iter().zip(content.split_rows(self.panels.len(), ctx.px(PANEL_GAP))) {
            draw_chart(ctx, panel, cell);
        }
    }
}
