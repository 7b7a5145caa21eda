// File: crates/chart-geometry/src/pie.rs
// Summary: Pie angle partitioning and pie/doughnut drawing.

use crate::error::{ChartError, Result};
use crate::series::{PieSeries, SeriesData};
use crate::style::FontStyle;
use crate::surface::{DrawingSurface, TextAlign, TextStyle};
use crate::types::{Color, Point, Rect, Size};

/// Share of 360 degrees for each value, in input order. Every value must be finite
/// and non-negative, and the total must be positive.
pub fn sweep_angles(values: &[f32]) -> Result<Vec<f32>> {
    if values.is_empty() {
        return Err(ChartError::InvalidRange("sweep angles need at least one value".into()));
    }
    if let Some(v) = values.iter().find(|v| !(v.is_finite() && **v >= 0.0)) {
        return Err(ChartError::InvalidRange(format!("slice value {v} must be finite and non-negative")));
    }
    let total: f32 = values.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return Err(ChartError::InvalidRange(format!("values must sum to > 0, got {total}")));
    }
    Ok(values.iter().map(|v| v / total * 360.0).collect())
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PieStyle {
    #[default]
    Pie,
    /// Full pie with the inner half punched out by an oval of `hole` color.
    Doughnut { hole: Color },
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub series_index: usize,
    pub value: f32,
    pub start_angle: f32,
    pub sweep_angle: f32,
    pub color: Color,
}

impl PieSlice {
    pub fn mid_angle(&self) -> f32 {
        self.start_angle + self.sweep_angle / 2.0
    }
}

/// Consecutive slices starting at 0 degrees, each starting where the previous ended.
pub fn layout_pie<K>(series: &[PieSeries<K>]) -> Result<Vec<PieSlice>> {
    let values: Vec<f32> = series.iter().map(|s| s.data.value).collect();
    let sweeps = sweep_angles(&values)?;
    let mut start = 0.0f32;
    Ok(series
        .iter()
        .zip(sweeps)
        .enumerate()
        .map(|(i, (s, sweep))| {
            let slice = PieSlice {
                series_index: i,
                value: s.data.value,
                start_angle: start,
                sweep_angle: sweep,
                color: s.primary_color(),
            };
            start += sweep;
            slice
        })
        .collect())
}

/// Where a slice label goes: on the mid-angle ray at `radius_frac` of each semi-axis.
pub fn slice_label_anchor(bounds: Rect, slice: &PieSlice, radius_frac: f32) -> Point {
    let c = bounds.center();
    let theta = slice.mid_angle().to_radians();
    Point::new(
        c.x + theta.cos() * bounds.width() / 2.0 * radius_frac,
        c.y + theta.sin() * bounds.height() / 2.0 * radius_frac,
    )
}

/// Draw every slice as a filled arc over the whole canvas, then punch the doughnut hole.
///
/// An empty series list draws nothing.
pub fn draw_pie_chart<K, S: DrawingSurface>(
    surface: &mut S,
    series: &[PieSeries<K>],
    size: Size,
    style: PieStyle,
    label_font: Option<&FontStyle>,
) -> Result<()> {
    if series.is_empty() {
        return Ok(());
    }
    let slices = layout_pie(series)?;
    let bounds = Rect::from_ltrb(0.0, 0.0, size.width, size.height);
    tracing::debug!(slices = slices.len(), "pie layout");

    for slice in &slices {
        surface.draw_arc(bounds, slice.start_angle, slice.sweep_angle, slice.color, true);
    }

    let label_radius = match style {
        PieStyle::Pie => 0.6,
        PieStyle::Doughnut { hole } => {
            surface.draw_oval(
                Point::new(size.width / 4.0, size.height / 4.0),
                Size::new(size.width / 2.0, size.height / 2.0),
                hole,
            );
            0.75
        }
    };

    if let Some(font) = label_font {
        let ts = TextStyle { size: font.size, color: font.color, bold: font.bold, align: TextAlign::Center };
        for slice in &slices {
            let anchor = slice_label_anchor(bounds, slice, label_radius);
            let text = format_value(slice.value);
            surface.draw_text(&text, anchor.offset(0.0, font.size / 2.0), &ts);
        }
    }
    Ok(())
}

fn format_value(v: f32) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}
