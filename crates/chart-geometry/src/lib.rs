// File: crates/chart-geometry/src/lib.rs
// Summary: Core library entry point; exports the geometry engines, chart composition and drawing surface API.

pub mod axis;
pub mod bar;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod line;
pub mod pie;
pub mod scale;
pub mod series;
pub mod spline;
pub mod style;
pub mod surface;
pub mod theme;
pub mod types;

pub use axis::{axis_tick_values, draw_axes};
pub use bar::{draw_bar_chart, layout_bars, BarLayout, BarShape};
pub use chart::{Chart, ChartConfig, ChartFrame, ChartKind};
pub use error::{ChartError, Result};
pub use geometry::{data_to_pixel, data_to_pixel_transposed, origin};
pub use grid::grid_line_positions;
pub use line::{draw_line_chart, line_path, LinePath};
pub use pie::{draw_pie_chart, sweep_angles, PieStyle};
pub use scale::{ChartScale, Orientation};
pub use series::{BarSeries, BarStyle, CurveType, DataPoint, KeySet, Legend, LegendShape, LineSeries, PieSeries};
pub use spline::{ControlPoints, DegeneratePolicy, SplineCarry, SplineOptions};
pub use style::{AxisStyle, FontStyle, GridStyle, LegendConfig, LegendPosition, LineStyle};
pub use surface::{Brush, DrawingSurface, PaintStyle, Path, PathCommand, Primitive, Recorder, Stroke, TextAlign, TextStyle};
pub use theme::Theme;
pub use types::{Color, Insets, Point, Rect, Size};
