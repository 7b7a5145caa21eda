// File: crates/chart-geometry/src/axis.rs
// Summary: Axis tick values, axis lines and tick label placement.

use std::fmt::Display;

use crate::error::{ChartError, Result};
use crate::geometry::origin;
use crate::scale::{ChartScale, Orientation};
use crate::series::KeySet;
use crate::style::{AxisStyle, FontStyle};
use crate::surface::{DrawingSurface, Stroke, TextAlign, TextStyle};
use crate::types::{Point, KEY_LABEL_GAP, VALUE_LABEL_X};

/// Evenly spaced ascending tick values `max_val / tick_count * i` for `i = 1..=tick_count`.
///
/// The last value is exactly `max_val`.
pub fn axis_tick_values(max_val: f32, tick_count: usize) -> Result<Vec<f32>> {
    if !(max_val > 0.0 && max_val.is_finite()) {
        return Err(ChartError::InvalidRange(format!("max value must be > 0, got {max_val}")));
    }
    if tick_count <= 1 {
        return Err(ChartError::InvalidRange(format!("tick count must be > 1, got {tick_count}")));
    }
    let per_tick = max_val / tick_count as f32;
    let mut ticks: Vec<f32> = (1..=tick_count).map(|i| per_tick * i as f32).collect();
    ticks[tick_count - 1] = max_val;
    Ok(ticks)
}

/// Tick count for the value axis: the configured override or the longest series, at least 2.
pub fn tick_count(style: &AxisStyle, max_len: usize) -> usize {
    style.tick_count.unwrap_or(max_len).max(2)
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub position: Point,
    pub style: TextStyle,
}

fn text_style(font: &FontStyle, align: TextAlign) -> TextStyle {
    TextStyle { size: font.size, color: font.color, bold: font.bold, align }
}

/// Tick labels for both axes.
///
/// Labels under the X axis are centered on their column, `font + 10px` below it.
/// Labels beside the Y axis are right-aligned at `x = -20` and centered on their grid line.
/// Horizontal layouts put keys on the Y side and values on the X side.
pub fn axis_labels<K: Display>(
    scale: &ChartScale,
    style: &AxisStyle,
    keys: &KeySet<K>,
    tick_count: usize,
) -> Result<Vec<AxisLabel>> {
    let size = scale.size;
    let values: Vec<String> = axis_tick_values(scale.max_val, tick_count)?
        .into_iter()
        .map(|v| (v as i64).to_string())
        .collect();
    let keys = keys.labels();
    let key_gap = scale.key_gap();
    let value_gap = scale.value_extent() / tick_count as f32;

    let (x_texts, x_gap, x_font, y_texts, y_gap, y_font) = match scale.orientation {
        Orientation::Vertical => (&keys, key_gap, &style.key_font, &values, value_gap, &style.value_font),
        Orientation::Horizontal => (&values, value_gap, &style.value_font, &keys, key_gap, &style.key_font),
    };

    let mut out = Vec::with_capacity(x_texts.len() + y_texts.len());
    if style.x.visible {
        let ts = text_style(x_font, TextAlign::Center);
        let y = size.height + x_font.size + KEY_LABEL_GAP;
        for (i, text) in x_texts.iter().enumerate() {
            out.push(AxisLabel {
                text: text.clone(),
                position: Point::new((i + 1) as f32 * x_gap, y),
                style: ts,
            });
        }
    }
    if style.y.visible {
        let ts = text_style(y_font, TextAlign::Right);
        for (i, text) in y_texts.iter().enumerate() {
            out.push(AxisLabel {
                text: text.clone(),
                position: Point::new(
                    VALUE_LABEL_X,
                    size.height - (i + 1) as f32 * y_gap + y_font.size / 2.0,
                ),
                style: ts,
            });
        }
    }
    Ok(out)
}

/// Draw the X and Y axis lines from the origin, then their tick labels.
pub fn draw_axes<K: Display, S: DrawingSurface>(
    surface: &mut S,
    scale: &ChartScale,
    style: &AxisStyle,
    keys: &KeySet<K>,
    tick_count: usize,
) -> Result<()> {
    let size = scale.size;
    let start = origin(size);

    if style.x.visible {
        surface.draw_line(start, Point::new(size.width, start.y), &Stroke::from(&style.x));
    }
    if style.y.visible {
        surface.draw_line(start, Point::new(0.0, 0.0), &Stroke::from(&style.y));
    }
    if !style.x.visible && !style.y.visible {
        return Ok(());
    }

    for label in axis_labels(scale, style, keys, tick_count)? {
        surface.draw_text(&label.text, label.position, &label.style);
    }
    Ok(())
}
