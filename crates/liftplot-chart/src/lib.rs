// File: crates/liftplot-chart/src/lib.rs
// Summary: Chart library entry point; exports figure construction and PNG rendering.

pub mod axis;
pub mod chart;
pub mod dates;
pub mod figure;
pub mod geometry;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;
pub mod view;

pub use axis::{Axis, ScaleKind, TickLocator};
pub use chart::Chart;
pub use figure::{Figure, RenderOptions};
pub use series::{Bin, Series, SeriesType};
pub use theme::Theme;
pub use types::{FigureSize, DEFAULT_DPI};
pub use view::ViewState;
