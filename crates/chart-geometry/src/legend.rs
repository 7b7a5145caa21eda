// File: crates/chart-geometry/src/legend.rs
// Summary: Legend entries, size estimation and drawing.

use crate::series::{LegendShape, SeriesData};
use crate::style::{LegendConfig, LegendPosition};
use crate::surface::{DrawingSurface, PaintStyle, TextAlign, TextStyle};
use crate::types::{Color, Point, Rect, Size};

/// Space between a legend marker and its label.
pub const MARKER_TEXT_GAP: f32 = 5.0;
/// Space between consecutive legend entries.
pub const ENTRY_SPACING: f32 = 10.0;
/// Average glyph advance as a fraction of the font size.
const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Rough text width used for layout before a real shaper is involved.
pub fn estimate_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * CHAR_WIDTH_FACTOR
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub text: String,
    pub color: Color,
    pub shape: LegendShape,
}

pub fn legend_entries<K, S: SeriesData<K>>(series: &[S]) -> Vec<LegendEntry> {
    series
        .iter()
        .map(|s| LegendEntry {
            text: s.legend().text.clone(),
            color: s.primary_color(),
            shape: s.legend().shape,
        })
        .collect()
}

fn entry_width(entry: &LegendEntry, config: &LegendConfig) -> f32 {
    config.marker_size + MARKER_TEXT_GAP + estimate_text_width(&entry.text, config.font.size)
}

fn row_height(config: &LegendConfig) -> f32 {
    config.marker_size.max(config.font.size)
}

/// Space the legend needs: one row for top/bottom positions, one column for left/right.
pub fn legend_extent(entries: &[LegendEntry], config: &LegendConfig) -> Size {
    let Some(position) = config.position else {
        return Size::default();
    };
    if entries.is_empty() {
        return Size::default();
    }
    let n = entries.len() as f32;
    if position.is_horizontal() {
        let width: f32 = entries.iter().map(|e| entry_width(e, config)).sum::<f32>()
            + ENTRY_SPACING * (n - 1.0);
        Size::new(width, row_height(config))
    } else {
        let width = entries.iter().map(|e| entry_width(e, config)).fold(0.0, f32::max);
        Size::new(width, row_height(config) * n + ENTRY_SPACING * (n - 1.0))
    }
}

/// Draw the legend inside `bounds`, aligned according to its position.
pub fn draw_legend<S: DrawingSurface>(
    surface: &mut S,
    entries: &[LegendEntry],
    config: &LegendConfig,
    bounds: Rect,
) {
    let Some(position) = config.position else {
        return;
    };
    let extent = legend_extent(entries, config);
    if extent.is_empty() {
        return;
    }

    let left = match position {
        LegendPosition::TopLeft | LegendPosition::BottomLeft | LegendPosition::Left => bounds.left,
        LegendPosition::TopRight | LegendPosition::BottomRight | LegendPosition::Right => {
            bounds.right - extent.width
        }
        LegendPosition::Top | LegendPosition::Bottom => bounds.center().x - extent.width / 2.0,
    };
    let top = bounds.center().y - extent.height / 2.0;

    let row = row_height(config);
    let text = TextStyle {
        size: config.font.size,
        color: config.font.color,
        bold: config.font.bold,
        align: TextAlign::Left,
    };
    let mut cursor = Point::new(left, top);
    for entry in entries {
        let mid_y = cursor.y + row / 2.0;
        let m = config.marker_size;
        match entry.shape {
            LegendShape::Circle => {
                surface.draw_circle(Point::new(cursor.x + m / 2.0, mid_y), m / 2.0, entry.color)
            }
            LegendShape::Rectangle => surface.draw_rect(
                Point::new(cursor.x, mid_y - m / 2.0),
                Size::new(m, m),
                entry.color,
                PaintStyle::Fill,
            ),
        }
        // Baseline sits a little below the row middle.
        let baseline = mid_y + config.font.size * 0.35;
        surface.draw_text(&entry.text, Point::new(cursor.x + m + MARKER_TEXT_GAP, baseline), &text);

        if position.is_horizontal() {
            cursor.x += entry_width(entry, config) + ENTRY_SPACING;
        } else {
            cursor.y += row + ENTRY_SPACING;
        }
    }
}
