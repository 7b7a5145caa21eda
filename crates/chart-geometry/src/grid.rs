// File: crates/chart-geometry/src/grid.rs
// Summary: Grid line layout helpers and grid drawing.

use crate::scale::{ChartScale, Orientation};
use crate::style::GridStyle;
use crate::surface::{DrawingSurface, Stroke};
use crate::types::Point;

/// `count` evenly spaced offsets across `extent - end_padding`, excluding 0.
pub fn grid_line_positions(count: usize, extent: f32, end_padding: f32) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    let step = (extent - end_padding).max(0.0) / count as f32;
    (1..=count).map(|i| step * i as f32).collect()
}

/// Horizontal lines follow value ticks and vertical lines follow key columns
/// (swapped for horizontal layouts).
pub fn draw_grids<S: DrawingSurface>(
    surface: &mut S,
    scale: &ChartScale,
    style: &GridStyle,
    tick_count: usize,
) {
    let size = scale.size;
    let (h_count, h_pad, v_count, v_pad) = match scale.orientation {
        Orientation::Vertical => (tick_count, 0.0, scale.key_count, scale.key_end_padding),
        Orientation::Horizontal => (scale.key_count, scale.key_end_padding, tick_count, 0.0),
    };

    if style.horizontal.visible {
        let stroke = Stroke::from(&style.horizontal);
        for y in grid_line_positions(h_count, size.height, h_pad) {
            let y = size.height - y;
            surface.draw_line(Point::new(0.0, y), Point::new(size.width, y), &stroke);
        }
    }
    if style.vertical.visible {
        let stroke = Stroke::from(&style.vertical);
        for x in grid_line_positions(v_count, size.width, v_pad) {
            surface.draw_line(Point::new(x, 0.0), Point::new(x, size.height), &stroke);
        }
    }
}
