// File: crates/liftplot-chart/src/chart.rs
// Summary: Single-panel chart (axes + series) and the Skia drawing routines for it.

use skia_safe as skia;

use crate::geometry::RectF;
use crate::scale::AxisScale;
use crate::series::{Series, SeriesType};
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::ticks::TickSet;
use crate::types::Insets;
use crate::view::ViewState;
use crate::Axis;

// Sizes below are in points.
const TICK_FONT: f32 = 8.0;
const LABEL_FONT: f32 = 10.0;
const TICK_LEN: f32 = 3.5;
const TICK_PAD: f32 = 2.0;
const SPINE_WIDTH: f32 = 0.8;
const GRID_WIDTH: f32 = 0.5;

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default(),
            y_axis: Axis::default(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the data (see [`ViewState::from_chart`]).
    pub fn autoscale_axes(&mut self) {
        ViewState::from_chart(self).apply_to_chart(self);
    }

    /// Margins, in points, between the panel cell and its plot area.
    pub fn insets(&self) -> Insets {
        let mut insets = Insets::default();
        if !self.x_axis.tick_labels {
            insets.bottom = TICK_LEN + TICK_PAD;
        }
        if !self.x_axis.label.is_empty() {
            insets.bottom += LABEL_FONT * 1.6;
        }
        insets
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

/// Drawing state for one render call. Built fresh by every render and never
/// stored, so no chart ever observes another's canvas or fonts.
pub struct RenderContext<'a> {
    pub canvas: &'a skia::Canvas,
    pub shaper: &'a TextShaper,
    pub theme: &'a Theme,
    /// Pixels per point.
    pub scale: f32,
    pub draw_labels: bool,
}

impl RenderContext<'_> {
    pub fn px(&self, pt: f32) -> f32 {
        pt * self.scale
    }

    fn fill(&self, color: skia::Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color);
        paint
    }

    fn stroke(&self, color: skia::Color, width_pt: f32) -> skia::Paint {
        let mut paint = self.fill(color);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(self.px(width_pt));
        paint
    }
}

/// Draw `chart` into the panel cell `area`.
pub fn draw_chart(ctx: &RenderContext, chart: &Chart, area: RectF) {
    let plot = area.inset(&chart.insets().scaled(ctx.scale));
    let xs = AxisScale::for_axis(&chart.x_axis, plot.left, plot.right);
    let ys = AxisScale::for_axis(&chart.y_axis, plot.bottom, plot.top);
    let x_ticks = chart.x_axis.ticks();
    let y_ticks = chart.y_axis.ticks();

    ctx.canvas.draw_rect(plot.to_skia(), &ctx.fill(ctx.theme.plot_background));
    draw_grid(ctx, plot, &xs, &ys, &x_ticks, &y_ticks);

    ctx.canvas.save();
    ctx.canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
    for s in &chart.series {
        match s.series_type {
            SeriesType::Scatter => draw_scatter_series(ctx, &xs, &ys, s),
            SeriesType::Histogram => draw_histogram_series(ctx, &xs, &ys, s),
        }
    }
    ctx.canvas.restore();

    draw_axes(ctx, chart, area, plot, &xs, &ys, &x_ticks, &y_ticks);
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(ctx: &RenderContext, plot: RectF, xs: &AxisScale, ys: &AxisScale, x: &TickSet, y: &TickSet) {
    let paint = ctx.stroke(ctx.theme.grid, GRID_WIDTH);
    // verticals
    for t in x.ticks.iter().filter(|t| xs.contains(t.value)) {
        let px = xs.to_px(t.value);
        ctx.canvas.draw_line((px, plot.top), (px, plot.bottom), &paint);
    }
    // horizontals
    for t in y.ticks.iter().filter(|t| ys.contains(t.value)) {
        let py = ys.to_px(t.value);
        ctx.canvas.draw_line((plot.left, py), (plot.right, py), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_axes(
    ctx: &RenderContext,
    chart: &Chart,
    area: RectF,
    plot: RectF,
    xs: &AxisScale,
    ys: &AxisScale,
    x_ticks: &TickSet,
    y_ticks: &TickSet,
) {
    let spine = ctx.stroke(ctx.theme.axis_line, SPINE_WIDTH);
    ctx.canvas.draw_rect(plot.to_skia(), &spine);

    let tick_paint = ctx.stroke(ctx.theme.tick, SPINE_WIDTH);
    let tick_len = ctx.px(TICK_LEN);
    let label_gap = ctx.px(TICK_LEN + TICK_PAD);
    let tick_font = ctx.px(TICK_FONT);
    let label_font = ctx.px(LABEL_FONT);

    for t in x_ticks.ticks.iter().filter(|t| xs.contains(t.value)) {
        let px = xs.to_px(t.value);
        ctx.canvas.draw_line((px, plot.bottom), (px, plot.bottom + tick_len), &tick_paint);
        if ctx.draw_labels && chart.x_axis.tick_labels {
            ctx.shaper.draw(
                ctx.canvas,
                &t.label,
                (px, plot.bottom + label_gap),
                tick_font,
                ctx.theme.axis_label,
                (Align::Center, Align::Start),
            );
        }
    }
    for t in y_ticks.ticks.iter().filter(|t| ys.contains(t.value)) {
        let py = ys.to_px(t.value);
        ctx.canvas.draw_line((plot.left - tick_len, py), (plot.left, py), &tick_paint);
        if ctx.draw_labels && chart.y_axis.tick_labels {
            ctx.shaper.draw(
                ctx.canvas,
                &t.label,
                (plot.left - label_gap, py),
                tick_font,
                ctx.theme.axis_label,
                (Align::End, Align::Center),
            );
        }
    }

    if !ctx.draw_labels {
        return;
    }

    let row_below_ticks = plot.bottom + label_gap + tick_font * 1.3;
    if chart.x_axis.tick_labels {
        if let Some(offset) = &x_ticks.offset {
            ctx.shaper.draw(
                ctx.canvas,
                offset,
                (plot.right, row_below_ticks),
                tick_font,
                ctx.theme.axis_label,
                (Align::End, Align::Start),
            );
        }
    }
    if !chart.x_axis.label.is_empty() {
        let y = if chart.x_axis.tick_labels { row_below_ticks } else { plot.bottom + label_gap };
        ctx.shaper.draw(
            ctx.canvas,
            &chart.x_axis.label,
            (0.5 * (plot.left + plot.right), y),
            label_font,
            ctx.theme.axis_label,
            (Align::Center, Align::Start),
        );
    }
    if !chart.y_axis.label.is_empty() {
        let x = area.left + label_font * 0.9;
        ctx.shaper.draw_vertical(
            ctx.canvas,
            &chart.y_axis.label,
            (x, 0.5 * (plot.top + plot.bottom)),
            label_font,
            ctx.theme.axis_label,
        );
    }
}

fn draw_scatter_series(ctx: &RenderContext, xs: &AxisScale, ys: &AxisScale, series: &Series) {
    let paint = ctx.fill(ctx.theme.marker);
    let radius = ctx.px(series.marker_radius).max(1.0);
    for &(x, y) in &series.data_xy {
        if !x.is_finite() || !y.is_finite() || (ys.log && y <= 0.0) {
            continue;
        }
        ctx.canvas.draw_circle((xs.to_px(x), ys.to_px(y)), radius, &paint);
    }
}

fn draw_histogram_series(ctx: &RenderContext, xs: &AxisScale, ys: &AxisScale, series: &Series) {
    let body = ctx.fill(ctx.theme.histogram);
    let edge = ctx.stroke(ctx.theme.histogram_edge, GRID_WIDTH);
    // Log axes have no zero; bars rise from the bottom of the visible range.
    let base = if ys.log { ys.vmin } else { series.baseline_value() };
    for b in &series.bins {
        if b.count <= 0.0 || (ys.log && b.count < ys.vmin) {
            continue;
        }
        let (y0, y1) = (ys.to_px(base), ys.to_px(b.count));
        let rect = skia::Rect::from_ltrb(xs.to_px(b.left), y0.min(y1), xs.to_px(b.right), y0.max(y1));
        ctx.canvas.draw_rect(rect, &body);
        ctx.canvas.draw_rect(rect, &edge);
    }
}
