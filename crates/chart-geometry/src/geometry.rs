// File: crates/chart-geometry/src/geometry.rs
// Summary: Coordinate helpers for pixel math (origin, data-to-pixel mapping).
//
// All engines work in plot-local screen space: (0,0) is the top-left of the plot area
// and Y grows downward. The value axis is flipped exactly once, here, so that larger
// values land at smaller Y.

use crate::error::{ChartError, Result};
use crate::series::DataPoint;
use crate::types::{Point, Size};

/// Pixel that represents data value zero at key offset zero: the bottom-left corner.
#[inline]
pub fn origin(size: Size) -> Point {
    Point::new(0.0, size.height)
}

/// Map a point whose key runs along X.
///
/// `x = (index + 1) * key_gap`, `y = extent - value / max_val * extent`.
pub fn data_to_pixel<K>(
    index: usize,
    point: &DataPoint<K>,
    key_gap: f32,
    max_val: f32,
    extent: f32,
) -> Result<Point> {
    check_scale(max_val)?;
    Ok(Point::new(
        (index + 1) as f32 * key_gap,
        extent - (point.value / max_val) * extent,
    ))
}

/// Map a point whose key runs along Y (horizontal layouts).
///
/// `x` is the value measured as distance from the right edge
/// (`extent - value / max_val * extent`) and `y` is the key offset
/// `(index + 1) * key_gap` measured up from the value axis.
pub fn data_to_pixel_transposed<K>(
    index: usize,
    point: &DataPoint<K>,
    key_gap: f32,
    max_val: f32,
    extent: f32,
) -> Result<Point> {
    check_scale(max_val)?;
    Ok(Point::new(
        extent - (point.value / max_val) * extent,
        (index + 1) as f32 * key_gap,
    ))
}

pub(crate) fn check_scale(max_val: f32) -> Result<()> {
    if max_val > 0.0 && max_val.is_finite() {
        Ok(())
    } else {
        Err(ChartError::NonPositiveScale(max_val))
    }
}
