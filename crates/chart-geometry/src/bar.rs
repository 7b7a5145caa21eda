// File: crates/chart-geometry/src/bar.rs
// Summary: Bar layout engine for grouped and stacked, vertical and horizontal bar charts.
// Notes:
// - Stacking accumulators live in `layout_bars` and die with the call.
// - Horizontal layouts put key 0 nearest the X axis and grow bars rightward from x = 0.

use std::fmt::Display;

use crate::axis::{draw_axes, tick_count};
use crate::error::Result;
use crate::grid::draw_grids;
use crate::scale::{ChartScale, Orientation};
use crate::series::{check_values, max_len, max_value, stacked_max_value, BarSeries, BarStyle, KeySet};
use crate::style::{AxisStyle, GridStyle};
use crate::surface::{Brush, DrawingSurface, PaintStyle, Path};
use crate::types::{Color, Point, Rect, Size};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BarLayout {
    #[default]
    Vertical,
    VerticalStacked,
    Horizontal,
    HorizontalStacked,
}

impl BarLayout {
    pub fn is_stacked(self) -> bool {
        matches!(self, BarLayout::VerticalStacked | BarLayout::HorizontalStacked)
    }

    pub fn orientation(self) -> Orientation {
        match self {
            BarLayout::Vertical | BarLayout::VerticalStacked => Orientation::Vertical,
            BarLayout::Horizontal | BarLayout::HorizontalStacked => Orientation::Horizontal,
        }
    }
}

/// Per-corner radii in screen terms.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Corners {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl Corners {
    pub fn is_square(&self) -> bool {
        self.top_left == 0.0 && self.top_right == 0.0 && self.bottom_right == 0.0 && self.bottom_left == 0.0
    }
}

/// One bar (or stacked segment) ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct BarShape {
    pub series_index: usize,
    pub key_index: usize,
    pub rect: Rect,
    pub corners: Corners,
    pub color: Color,
    pub style: BarStyle,
}

impl BarShape {
    /// Rounded-rect outline, clockwise from the top edge.
    pub fn path(&self) -> Path {
        let Rect { left, top, right, bottom } = self.rect;
        let c = self.corners;
        let mut path = Path::new();
        path.move_to(Point::new(left + c.top_left, top));
        path.line_to(Point::new(right - c.top_right, top));
        if c.top_right > 0.0 {
            path.quad_to(Point::new(right, top), Point::new(right, top + c.top_right));
        }
        path.line_to(Point::new(right, bottom - c.bottom_right));
        if c.bottom_right > 0.0 {
            path.quad_to(Point::new(right, bottom), Point::new(right - c.bottom_right, bottom));
        }
        path.line_to(Point::new(left + c.bottom_left, bottom));
        if c.bottom_left > 0.0 {
            path.quad_to(Point::new(left, bottom), Point::new(left, bottom - c.bottom_left));
        }
        path.line_to(Point::new(left, top + c.top_left));
        if c.top_left > 0.0 {
            path.quad_to(Point::new(left, top), Point::new(left + c.top_left, top));
        }
        path.close();
        path
    }

    /// Extent along the value axis.
    pub fn length(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Vertical => self.rect.height(),
            Orientation::Horizontal => self.rect.width(),
        }
    }

    fn paint_style(&self) -> PaintStyle {
        match self.style {
            BarStyle::Fill => PaintStyle::Fill,
            BarStyle::Stroke { width } => PaintStyle::Stroke(width),
        }
    }
}

/// Offset of series `index` of `count` from the key column center.
pub fn group_offset(index: usize, count: usize, bar_width: f32) -> f32 {
    let half = (count / 2) as f32;
    let i = index as f32;
    if count % 2 == 0 {
        (i - half) * bar_width
    } else {
        (i - half) * bar_width - bar_width / 2.0
    }
}

/// Scale context for one bar render: grouped charts scale to the largest value,
/// stacked charts to the sum of per-series maxima. NaN, infinite or negative values
/// are rejected with [`ChartError::InvalidRange`](crate::error::ChartError::InvalidRange).
pub fn bar_scale<K: PartialEq + Clone>(
    series: &[BarSeries<K>],
    layout: BarLayout,
    size: Size,
    keys: &KeySet<K>,
) -> Result<ChartScale> {
    check_values(series)?;
    let bar_width = series.iter().map(|s| s.width).fold(0.0, f32::max);
    let (max_val, columns) = if layout.is_stacked() {
        (stacked_max_value(series), 1)
    } else {
        (max_value(series), series.len())
    };
    let padding = ((columns / 2) as f32 + 1.0) * bar_width;
    let scale = ChartScale::new(
        size,
        layout.orientation(),
        keys.len(),
        max_len(series),
        ChartScale::value_ceiling(max_val),
        padding,
    )?;
    tracing::debug!(
        ?layout,
        key_count = scale.key_count,
        max_len = scale.max_len,
        max_val = scale.max_val,
        key_gap = scale.key_gap(),
        "bar scale"
    );
    Ok(scale)
}

/// Lay out every bar of every series. Empty input yields no shapes.
pub fn layout_bars<K: PartialEq + Clone>(
    series: &[BarSeries<K>],
    layout: BarLayout,
    scale: &ChartScale,
    keys: &KeySet<K>,
) -> Vec<BarShape> {
    if layout.is_stacked() {
        layout_stacked(series, scale, keys)
    } else {
        layout_grouped(series, scale, keys)
    }
}

fn layout_grouped<K: PartialEq + Clone>(
    series: &[BarSeries<K>],
    scale: &ChartScale,
    keys: &KeySet<K>,
) -> Vec<BarShape> {
    let n = series.len();
    let mut shapes = Vec::new();
    for (si, s) in series.iter().enumerate() {
        let w = s.width;
        let deduct = group_offset(si, n, w);
        for p in &s.data {
            let Some(ki) = keys.locate(&p.key, si) else {
                continue;
            };
            let center = scale.key_position(ki);
            let length = scale.value_length(p.value);
            let r = s.radius.min(w / 2.0).min(length).max(0.0);
            let (rect, corners) = match scale.orientation {
                Orientation::Vertical => {
                    let left = center + deduct;
                    (
                        Rect::from_ltrb(left, scale.size.height - length, left + w, scale.size.height),
                        Corners { top_left: r, top_right: r, ..Corners::default() },
                    )
                }
                Orientation::Horizontal => {
                    let top = center + deduct;
                    (
                        Rect::from_ltrb(0.0, top, length, top + w),
                        Corners { top_right: r, bottom_right: r, ..Corners::default() },
                    )
                }
            };
            shapes.push(BarShape {
                series_index: si,
                key_index: ki,
                rect,
                corners,
                color: s.color_at(ki),
                style: s.style,
            });
        }
    }
    shapes
}

fn layout_stacked<K: PartialEq + Clone>(
    series: &[BarSeries<K>],
    scale: &ChartScale,
    keys: &KeySet<K>,
) -> Vec<BarShape> {
    // First and last series touching each key get the rounded ends.
    let mut first = vec![None; keys.len()];
    let mut last = vec![None; keys.len()];
    for (si, s) in series.iter().enumerate() {
        for p in &s.data {
            if let Some(ki) = keys.position(&p.key) {
                first[ki].get_or_insert(si);
                last[ki] = Some(si);
            }
        }
    }

    let mut stacked = vec![0.0f32; keys.len()];
    let mut shapes = Vec::new();
    for (si, s) in series.iter().enumerate() {
        let w = s.width;
        for p in &s.data {
            let Some(ki) = keys.locate(&p.key, si) else {
                continue;
            };
            let center = scale.key_position(ki);
            let length = scale.value_length(p.value);
            let start = stacked[ki];
            stacked[ki] += length;

            let round_start = first[ki] == Some(si);
            let round_end = last[ki] == Some(si);
            let limit = if round_start && round_end { length / 2.0 } else { length };
            let r = s.radius.min(w / 2.0).min(limit).max(0.0);
            let (rs, re) = (if round_start { r } else { 0.0 }, if round_end { r } else { 0.0 });

            let (rect, corners) = match scale.orientation {
                Orientation::Vertical => {
                    let bottom = scale.size.height - start;
                    (
                        Rect::from_ltrb(center - w / 2.0, bottom - length, center + w / 2.0, bottom),
                        Corners { top_left: re, top_right: re, bottom_right: rs, bottom_left: rs },
                    )
                }
                Orientation::Horizontal => (
                    Rect::from_ltrb(start, center - w / 2.0, start + length, center + w / 2.0),
                    Corners { top_left: rs, top_right: re, bottom_right: re, bottom_left: rs },
                ),
            };
            shapes.push(BarShape {
                series_index: si,
                key_index: ki,
                rect,
                corners,
                color: s.color_at(ki),
                style: s.style,
            });
        }
    }
    shapes
}

/// Issue the draw calls for laid-out bars.
pub fn draw_bars<S: DrawingSurface>(surface: &mut S, shapes: &[BarShape]) {
    for shape in shapes {
        let style = shape.paint_style();
        if shape.corners.is_square() {
            surface.draw_rect(shape.rect.top_left(), shape.rect.size(), shape.color, style);
        } else {
            surface.draw_path(&shape.path(), &Brush::Solid(shape.color), style);
        }
    }
}

/// Full bar chart body in plot-local space: grid, bars, then axes.
///
/// An empty series list draws nothing.
pub fn draw_bar_chart<K, S>(
    surface: &mut S,
    series: &[BarSeries<K>],
    layout: BarLayout,
    size: Size,
    axis: &AxisStyle,
    grid: &GridStyle,
) -> Result<()>
where
    K: PartialEq + Clone + Display,
    S: DrawingSurface,
{
    if series.is_empty() {
        return Ok(());
    }
    let keys = KeySet::merged(series);
    let scale = bar_scale(series, layout, size, &keys)?;
    let ticks = tick_count(axis, scale.max_len);

    draw_grids(surface, &scale, grid, ticks);
    let shapes = layout_bars(series, layout, &scale, &keys);
    tracing::trace!(bars = shapes.len(), "bar layout");
    draw_bars(surface, &shapes);
    draw_axes(surface, &scale, axis, &keys, ticks)
}
