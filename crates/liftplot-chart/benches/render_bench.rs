use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use liftplot_chart::{Axis, Chart, Figure, FigureSize, RenderOptions, Series};

fn build_figure(n: usize) -> Figure {
    let start = 737_000.0;
    let volume: Vec<(f64, f64)> = (0..n).map(|i| (start + i as f64 * 3.0, 800.0 + (i as f64 * 0.1).sin() * 200.0)).collect();
    let weight: Vec<(f64, f64)> = volume.iter().map(|&(x, y)| (x, y / 8.0)).collect();

    let mut top = Chart::new();
    top.x_axis = Axis::dates("");
    top.y_axis = Axis::new("Volume", 0.0, 1.0);
    top.add_series(Series::scatter(volume));
    let mut bottom = Chart::new();
    bottom.x_axis = Axis::dates("Date");
    bottom.y_axis = Axis::new("Max weight", 0.0, 1.0);
    bottom.add_series(Series::scatter(weight));

    let mut fig = Figure::new(FigureSize::new(6.0, 6.0, 150)).with_title("Bench").sharing_x();
    fig.add_panel(top);
    fig.add_panel(bottom);
    fig.autoscale();
    fig
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[100usize, 2_000usize] {
        group.bench_function(format!("sessions_{n}"), |b| {
            let fig = build_figure(n);
            let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let bytes = fig.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
