// File: crates/chart-geometry/src/line.rs
// Summary: Line and area layout: straight or spline paths, area closure, markers.

use std::fmt::Display;

use crate::axis::{draw_axes, tick_count};
use crate::error::{ChartError, Result};
use crate::geometry::origin;
use crate::grid::draw_grids;
use crate::scale::{ChartScale, Orientation};
use crate::series::{max_len, max_value, CurveType, KeySet, LineSeries};
use crate::spline::{SplineCarry, SplineOptions};
use crate::style::{AxisStyle, GridStyle};
use crate::surface::{Brush, DrawingSurface, PaintStyle, Path};
use crate::types::{Point, Size, AREA_FILL_ALPHA, MARKER_RADIUS};

/// Geometry of one line series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinePath {
    /// Origin, then every data point in order.
    pub stroke: Path,
    /// `stroke` closed down to the baseline at the last point's X (area curves only).
    pub area: Option<Path>,
    /// Screen positions of the data points, for markers.
    pub points: Vec<Point>,
}

/// Scale context for a line render. Lines need no key-axis padding.
pub fn line_scale<K: PartialEq + Clone>(
    series: &[LineSeries<K>],
    size: Size,
    keys: &KeySet<K>,
) -> Result<ChartScale> {
    let scale = ChartScale::new(
        size,
        Orientation::Vertical,
        keys.len(),
        max_len(series),
        ChartScale::value_ceiling(max_value(series)),
        0.0,
    )?;
    tracing::debug!(
        key_count = scale.key_count,
        max_val = scale.max_val,
        key_gap = scale.key_gap(),
        "line scale"
    );
    Ok(scale)
}

/// Build the path for one series. The path starts at the axis origin; smooth curves
/// run one spline carry across the whole series.
pub fn line_path<K: PartialEq + Clone>(
    series_index: usize,
    series: &LineSeries<K>,
    scale: &ChartScale,
    keys: &KeySet<K>,
    spline: &SplineOptions,
) -> Result<LinePath> {
    let mut points = Vec::with_capacity(series.data.len());
    for p in &series.data {
        let Some(ki) = keys.locate(&p.key, series_index) else {
            continue;
        };
        points.push(scale.point(ki, p)?);
    }
    if points.is_empty() {
        return Ok(LinePath::default());
    }

    let start = origin(scale.size);
    let mut stroke = Path::new();
    stroke.move_to(start);

    if series.curve.is_smooth() {
        let mut carry = SplineCarry::new();
        for (i, &p1) in points.iter().enumerate() {
            let p0 = if i == 0 { start } else { points[i - 1] };
            let p2 = points.get(i + 1).copied().unwrap_or(p1);
            let cp = carry.control_points(p0, p1, p2, i == 0, spline)?;
            stroke.cubic_to(cp.first, cp.second, p1);
        }
    } else {
        for &p in &points {
            stroke.line_to(p);
        }
    }

    if !stroke.is_finite() {
        return Err(ChartError::DegenerateGeometry("line path has non-finite coordinates".into()));
    }

    let area = match series.curve {
        CurveType::Area { .. } => {
            let mut area = stroke.clone();
            if let Some(last) = points.last() {
                area.line_to(Point::new(last.x, scale.size.height));
            }
            area.close();
            Some(area)
        }
        _ => None,
    };

    Ok(LinePath { stroke, area, points })
}

/// Draw one series: area fill first, then the stroke, then markers.
pub fn draw_line_series<K: PartialEq + Clone, S: DrawingSurface>(
    surface: &mut S,
    series_index: usize,
    series: &LineSeries<K>,
    scale: &ChartScale,
    keys: &KeySet<K>,
    spline: &SplineOptions,
) -> Result<()> {
    let geom = line_path(series_index, series, scale, keys, spline)?;
    if geom.stroke.is_empty() {
        return Ok(());
    }
    let brush = Brush::horizontal(&series.colors, 0.0, scale.size.width);

    if let Some(area) = &geom.area {
        surface.draw_path(area, &brush.with_alpha(AREA_FILL_ALPHA), PaintStyle::Fill);
    }
    surface.draw_path(&geom.stroke, &brush, PaintStyle::Stroke(series.width));

    if series.show_markers {
        let fill = series.marker_fill();
        for &p in &geom.points {
            surface.draw_circle(p, MARKER_RADIUS, fill);
        }
    }
    Ok(())
}

/// Full line chart body in plot-local space: grid, series in order, then axes.
pub fn draw_line_chart<K, S>(
    surface: &mut S,
    series: &[LineSeries<K>],
    size: Size,
    axis: &AxisStyle,
    grid: &GridStyle,
    spline: &SplineOptions,
) -> Result<()>
where
    K: PartialEq + Clone + Display,
    S: DrawingSurface,
{
    if series.is_empty() {
        return Ok(());
    }
    let keys = KeySet::merged(series);
    let scale = line_scale(series, size, &keys)?;
    let ticks = tick_count(axis, scale.max_len);

    draw_grids(surface, &scale, grid, ticks);
    for (i, s) in series.iter().enumerate() {
        draw_line_series(surface, i, s, &scale, &keys, spline)?;
    }
    draw_axes(surface, &scale, axis, &keys, ticks)
}
