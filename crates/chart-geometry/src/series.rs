// File: crates/chart-geometry/src/series.rs
// Summary: Series model for bar, line and pie charts plus the merged key set.
// Notes:
// - Series are immutable input per render pass; nothing here caches scale state.
// - `key` only needs equality and `Display`; ordering on the key axis is first-seen order.

use std::fmt;

use crate::error::{ChartError, Result};
use crate::types::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint<K> {
    pub key: K,
    pub value: f32,
}

impl<K> DataPoint<K> {
    pub fn new(key: K, value: f32) -> Self {
        Self { key, value }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendShape {
    #[default]
    Circle,
    Rectangle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub text: String,
    pub shape: LegendShape,
}

impl Legend {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), shape: LegendShape::Circle }
    }

    pub fn with_shape(mut self, shape: LegendShape) -> Self {
        self.shape = shape;
        self
    }
}

impl From<&str> for Legend {
    fn from(text: &str) -> Self {
        Legend::new(text)
    }
}

/// Whether bars are painted solid or outlined.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BarStyle {
    #[default]
    Fill,
    Stroke { width: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarSeries<K> {
    pub data: Vec<DataPoint<K>>,
    /// Cycled per key index; empty falls back to black.
    pub colors: Vec<Color>,
    pub width: f32,
    pub radius: f32,
    pub style: BarStyle,
    pub legend: Legend,
}

impl<K> BarSeries<K> {
    pub fn new(data: Vec<DataPoint<K>>, legend: impl Into<Legend>) -> Self {
        Self {
            data,
            colors: vec![Color::BLACK],
            width: 20.0,
            radius: 0.0,
            style: BarStyle::Fill,
            legend: legend.into(),
        }
    }

    pub fn with_color(self, color: Color) -> Self {
        self.with_colors(vec![color])
    }

    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width.max(0.0);
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius.max(0.0);
        self
    }

    pub fn with_style(mut self, style: BarStyle) -> Self {
        self.style = style;
        self
    }

    /// Color of the bar at `key_index`.
    pub fn color_at(&self, key_index: usize) -> Color {
        if self.colors.is_empty() {
            return Color::BLACK;
        }
        self.colors[key_index % self.colors.len()]
    }
}

/// How a line series connects its points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CurveType {
    #[default]
    Straight,
    Smooth,
    /// Line closed down to the baseline and filled; `smooth` selects Bezier segments.
    Area { smooth: bool },
}

impl CurveType {
    pub fn is_smooth(self) -> bool {
        matches!(self, CurveType::Smooth | CurveType::Area { smooth: true })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries<K> {
    pub data: Vec<DataPoint<K>>,
    pub curve: CurveType,
    /// One color strokes solid; two or more form a horizontal gradient.
    pub colors: Vec<Color>,
    pub width: f32,
    pub show_markers: bool,
    /// Marker fill; `None` uses the first series color.
    pub marker_color: Option<Color>,
    pub legend: Legend,
}

impl<K> LineSeries<K> {
    pub fn new(data: Vec<DataPoint<K>>, legend: impl Into<Legend>) -> Self {
        Self {
            data,
            curve: CurveType::Straight,
            colors: vec![Color::BLACK],
            width: 5.0,
            show_markers: false,
            marker_color: None,
            legend: legend.into(),
        }
    }

    pub fn with_curve(mut self, curve: CurveType) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_color(self, color: Color) -> Self {
        self.with_colors(vec![color])
    }

    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width.max(0.0);
        self
    }

    pub fn with_markers(mut self, color: Option<Color>) -> Self {
        self.show_markers = true;
        self.marker_color = color;
        self
    }

    pub fn marker_fill(&self) -> Color {
        self.marker_color.unwrap_or_else(|| primary(&self.colors))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSeries<K> {
    pub data: DataPoint<K>,
    pub colors: Vec<Color>,
    pub legend: Legend,
}

impl<K> PieSeries<K> {
    pub fn new(data: DataPoint<K>, legend: impl Into<Legend>) -> Self {
        Self { data, colors: vec![Color::BLACK], legend: legend.into() }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.colors = vec![color];
        self
    }
}

fn primary(colors: &[Color]) -> Color {
    colors.first().copied().unwrap_or(Color::BLACK)
}

/// Common read access used by scale computation and legends.
pub trait SeriesData<K> {
    fn points(&self) -> &[DataPoint<K>];
    fn legend(&self) -> &Legend;
    fn primary_color(&self) -> Color;

    /// Largest value in this series, 0 when empty.
    fn max_value(&self) -> f32 {
        self.points().iter().map(|p| p.value).fold(0.0, f32::max)
    }
}

impl<K> SeriesData<K> for BarSeries<K> {
    fn points(&self) -> &[DataPoint<K>] {
        &self.data
    }

    fn legend(&self) -> &Legend {
        &self.legend
    }

    fn primary_color(&self) -> Color {
        primary(&self.colors)
    }
}

impl<K> SeriesData<K> for LineSeries<K> {
    fn points(&self) -> &[DataPoint<K>] {
        &self.data
    }

    fn legend(&self) -> &Legend {
        &self.legend
    }

    fn primary_color(&self) -> Color {
        primary(&self.colors)
    }
}

impl<K> SeriesData<K> for PieSeries<K> {
    fn points(&self) -> &[DataPoint<K>] {
        std::slice::from_ref(&self.data)
    }

    fn legend(&self) -> &Legend {
        &self.legend
    }

    fn primary_color(&self) -> Color {
        primary(&self.colors)
    }
}

/// Union of all keys across a chart's series, in first-seen order.
#[derive(Clone, Debug, PartialEq)]
pub struct KeySet<K> {
    keys: Vec<K>,
}

impl<K: PartialEq + Clone> KeySet<K> {
    pub fn merged<S: SeriesData<K>>(series: &[S]) -> Self {
        let mut keys: Vec<K> = Vec::new();
        for s in series {
            for p in s.points() {
                if !keys.contains(&p.key) {
                    keys.push(p.key.clone());
                }
            }
        }
        Self { keys }
    }

    pub fn position(&self, key: &K) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// `position` for keys that must be present. A miss is a construction bug: it
    /// asserts in debug builds and logs a warning otherwise.
    pub(crate) fn locate(&self, key: &K, series_index: usize) -> Option<usize> {
        let found = self.position(key);
        debug_assert!(found.is_some(), "series {series_index} has a key outside the merged key set");
        if found.is_none() {
            tracing::warn!(series_index, "skipping point whose key is missing from the key set");
        }
        found
    }
}

impl<K> KeySet<K> {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.keys.iter()
    }
}

impl<K: fmt::Display> KeySet<K> {
    pub fn labels(&self) -> Vec<String> {
        self.keys.iter().map(|k| k.to_string()).collect()
    }
}

/// Longest series length across `series`.
pub fn max_len<K, S: SeriesData<K>>(series: &[S]) -> usize {
    series.iter().map(|s| s.points().len()).max().unwrap_or(0)
}

/// Largest value across all series (grouped layouts).
pub fn max_value<K, S: SeriesData<K>>(series: &[S]) -> f32 {
    series.iter().map(|s| s.max_value()).fold(0.0, f32::max)
}

/// Reject values that cannot become geometry: NaN, infinities and negatives.
pub fn check_values<K, S: SeriesData<K>>(series: &[S]) -> Result<()> {
    for (i, s) in series.iter().enumerate() {
        if let Some(p) = s.points().iter().find(|p| !(p.value.is_finite() && p.value >= 0.0)) {
            return Err(ChartError::InvalidRange(format!(
                "series {i} has value {}, values must be finite and non-negative",
                p.value
            )));
        }
    }
    Ok(())
}

/// Sum of per-series maxima (stacked layouts accumulate).
pub fn stacked_max_value<K, S: SeriesData<K>>(series: &[S]) -> f32 {
    series.iter().map(|s| s.max_value()).sum()
}
