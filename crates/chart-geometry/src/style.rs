// File: crates/chart-geometry/src/style.rs
// Summary: Style configuration for axes, grids, fonts and legends.

use crate::types::{Color, AXIS_FONT_SIZE};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontStyle {
    pub size: f32,
    pub color: Color,
    pub bold: bool,
}

impl FontStyle {
    pub const fn new(size: f32) -> Self {
        Self { size, color: Color::BLACK, bold: false }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::new(AXIS_FONT_SIZE)
    }
}

/// Visibility and stroke of one axis line or one set of grid lines.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub visible: bool,
    pub color: Color,
    pub stroke_width: f32,
    /// On/off intervals in pixels; `None` draws a solid line.
    pub dash: Option<Vec<f32>>,
}

impl LineStyle {
    pub fn hidden() -> Self {
        Self { visible: false, ..Self::default() }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_dash(mut self, intervals: Vec<f32>) -> Self {
        self.dash = Some(intervals);
        self
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { visible: true, color: Color::GRAY, stroke_width: 1.0, dash: None }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisStyle {
    pub x: LineStyle,
    pub y: LineStyle,
    /// Font of the labels on the value axis.
    pub value_font: FontStyle,
    /// Font of the labels on the key axis.
    pub key_font: FontStyle,
    /// Overrides the number of value ticks (default: max series length, at least 2).
    pub tick_count: Option<usize>,
}

impl AxisStyle {
    pub fn hidden() -> Self {
        Self { x: LineStyle::hidden(), y: LineStyle::hidden(), ..Self::default() }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridStyle {
    pub horizontal: LineStyle,
    pub vertical: LineStyle,
}

impl GridStyle {
    pub fn hidden() -> Self {
        Self { horizontal: LineStyle::hidden(), vertical: LineStyle::hidden() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
    TopLeft,
    TopRight,
    Bottom,
    BottomLeft,
    BottomRight,
    Left,
    Right,
}

impl LegendPosition {
    pub fn is_horizontal(self) -> bool {
        !matches!(self, LegendPosition::Left | LegendPosition::Right)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendConfig {
    /// `None` hides the legend.
    pub position: Option<LegendPosition>,
    pub font: FontStyle,
    pub marker_size: f32,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self { position: None, font: FontStyle::new(14.0), marker_size: 10.0 }
    }
}

impl LegendConfig {
    pub fn at(position: LegendPosition) -> Self {
        Self { position: Some(position), ..Self::default() }
    }
}
