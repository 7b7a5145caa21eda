// File: crates/chart-geometry/src/chart.rs
// Summary: Chart composition: frames title, legend and axis names around the plot, then draws the body.

use std::fmt::Display;

use crate::bar::{draw_bar_chart, BarLayout};
use crate::error::Result;
use crate::legend::{draw_legend, estimate_text_width, legend_entries, legend_extent, LegendEntry, ENTRY_SPACING};
use crate::line::draw_line_chart;
use crate::pie::{draw_pie_chart, PieStyle};
use crate::scale::Orientation;
use crate::series::{max_value, stacked_max_value, BarSeries, KeySet, LineSeries, PieSeries};
use crate::spline::SplineOptions;
use crate::style::{AxisStyle, FontStyle, GridStyle, LegendConfig, LegendPosition};
use crate::surface::{DrawingSurface, Primitive, Recorder, TextAlign, TextStyle, Translated};
use crate::theme::Theme;
use crate::types::{Insets, Point, Rect, Size};

/// Gap kept between the plot and the canvas edge on sides without labels.
const PLOT_EDGE: f32 = 10.0;
/// Room between the value labels' right edge and the plot.
const VALUE_LABEL_ROOM: f32 = 20.0;

/// Everything about a chart except its data.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub title: Option<String>,
    pub title_font: FontStyle,
    pub x_axis_name: Option<String>,
    pub y_axis_name: Option<String>,
    pub axis_name_font: FontStyle,
    pub axis: AxisStyle,
    pub grid: GridStyle,
    pub legend: LegendConfig,
    pub spline: SplineOptions,
    /// Font for pie slice values; `None` hides them.
    pub pie_labels: Option<FontStyle>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: None,
            title_font: FontStyle::new(40.0).bold(),
            x_axis_name: None,
            y_axis_name: None,
            axis_name_font: FontStyle::new(24.0),
            axis: AxisStyle::default(),
            grid: GridStyle::default(),
            legend: LegendConfig::default(),
            spline: SplineOptions::default(),
            pie_labels: None,
        }
    }
}

impl ChartConfig {
    /// Defaults recolored for `theme`.
    pub fn themed(theme: &Theme) -> Self {
        let mut cfg = Self::default();
        cfg.title_font = cfg.title_font.with_color(theme.title);
        cfg.axis_name_font = cfg.axis_name_font.with_color(theme.axis_label);
        cfg.axis = theme.axis_style();
        cfg.grid = theme.grid_style();
        cfg.legend.font = cfg.legend.font.with_color(theme.axis_label);
        cfg
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_axis_names(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_axis_name = Some(x.into());
        self.y_axis_name = Some(y.into());
        self
    }

    pub fn with_legend(mut self, position: LegendPosition) -> Self {
        self.legend.position = Some(position);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartKind<K> {
    Bar { series: Vec<BarSeries<K>>, layout: BarLayout },
    Line { series: Vec<LineSeries<K>> },
    Pie { series: Vec<PieSeries<K>>, style: PieStyle },
}

/// Regions of the canvas assigned by [`Chart::frame`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartFrame {
    pub title: Option<Rect>,
    pub legend: Option<Rect>,
    pub x_axis_name: Option<Rect>,
    pub y_axis_name: Option<Rect>,
    pub plot: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart<K> {
    pub kind: ChartKind<K>,
    pub config: ChartConfig,
}

impl<K: PartialEq + Clone + Display> Chart<K> {
    pub fn bar(series: Vec<BarSeries<K>>, layout: BarLayout) -> Self {
        Self { kind: ChartKind::Bar { series, layout }, config: ChartConfig::default() }
    }

    pub fn line(series: Vec<LineSeries<K>>) -> Self {
        Self { kind: ChartKind::Line { series }, config: ChartConfig::default() }
    }

    pub fn pie(series: Vec<PieSeries<K>>, style: PieStyle) -> Self {
        Self { kind: ChartKind::Pie { series, style }, config: ChartConfig::default() }
    }

    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        match &self.kind {
            ChartKind::Bar { series, .. } => legend_entries(series),
            ChartKind::Line { series } => legend_entries(series),
            ChartKind::Pie { series, .. } => legend_entries(series),
        }
    }

    /// Split a canvas of `size` into title, legend, axis-name and plot regions.
    pub fn frame(&self, size: Size) -> ChartFrame {
        let cfg = &self.config;
        let mut area = Rect::from_ltrb(0.0, 0.0, size.width, size.height);
        let mut frame = ChartFrame::default();

        if cfg.title.is_some() {
            let band = cfg.title_font.size * 1.5;
            frame.title = Some(Rect::from_ltrb(area.left, area.top, area.right, area.top + band));
            area.top += band;
        }

        let extent = legend_extent(&self.legend_entries(), &cfg.legend);
        if let (Some(position), false) = (cfg.legend.position, extent.is_empty()) {
            let rect = match position {
                LegendPosition::Top | LegendPosition::TopLeft | LegendPosition::TopRight => {
                    let r = Rect::from_ltrb(area.left, area.top, area.right, area.top + extent.height + ENTRY_SPACING);
                    area.top = r.bottom;
                    r
                }
                LegendPosition::Bottom | LegendPosition::BottomLeft | LegendPosition::BottomRight => {
                    let r = Rect::from_ltrb(area.left, area.bottom - extent.height - ENTRY_SPACING, area.right, area.bottom);
                    area.bottom = r.top;
                    r
                }
                LegendPosition::Left => {
                    let r = Rect::from_ltrb(area.left, area.top, area.left + extent.width + ENTRY_SPACING, area.bottom);
                    area.left = r.right;
                    r
                }
                LegendPosition::Right => {
                    let r = Rect::from_ltrb(area.right - extent.width - ENTRY_SPACING, area.top, area.right, area.bottom);
                    area.right = r.left;
                    r
                }
            };
            frame.legend = Some(rect);
        }

        if !matches!(self.kind, ChartKind::Pie { .. }) {
            let band = cfg.axis_name_font.size * 1.5;
            if cfg.y_axis_name.is_some() {
                frame.y_axis_name = Some(Rect::from_ltrb(area.left, area.top, area.right, area.top + band));
                area.top += band;
            }
            if cfg.x_axis_name.is_some() {
                frame.x_axis_name = Some(Rect::from_ltrb(area.left, area.bottom - band, area.right, area.bottom));
                area.bottom -= band;
            }
        }

        frame.plot = area.inset(&self.plot_insets());
        frame
    }

    fn plot_insets(&self) -> Insets {
        let axis = &self.config.axis;
        match &self.kind {
            ChartKind::Pie { .. } => Insets::uniform(PLOT_EDGE),
            ChartKind::Line { series } => {
                let ceiling = max_value(series);
                value_axis_insets(axis, &value_label(ceiling), axis.key_font.size)
            }
            ChartKind::Bar { series, layout } => {
                let ceiling = if layout.is_stacked() { stacked_max_value(series) } else { max_value(series) };
                match layout.orientation() {
                    Orientation::Vertical => {
                        value_axis_insets(axis, &value_label(ceiling), axis.key_font.size)
                    }
                    Orientation::Horizontal => {
                        let widest = KeySet::merged(series)
                            .labels()
                            .into_iter()
                            .max_by_key(|l| l.chars().count())
                            .unwrap_or_default();
                        key_axis_insets(axis, &widest, axis.value_font.size)
                    }
                }
            }
        }
    }

    /// Draw the whole chart onto `surface`, which covers a canvas of `size`.
    pub fn render<S: DrawingSurface>(&self, surface: &mut S, size: Size) -> Result<()> {
        let cfg = &self.config;
        let frame = self.frame(size);

        if let (Some(title), Some(rect)) = (&cfg.title, frame.title) {
            let style = text_style(&cfg.title_font, TextAlign::Center);
            surface.draw_text(title, Point::new(rect.center().x, rect.top + cfg.title_font.size), &style);
        }
        if let Some(rect) = frame.legend {
            draw_legend(surface, &self.legend_entries(), &cfg.legend, rect);
        }
        if let (Some(name), Some(rect)) = (&cfg.y_axis_name, frame.y_axis_name) {
            let style = text_style(&cfg.axis_name_font, TextAlign::Left);
            surface.draw_text(name, Point::new(rect.left + PLOT_EDGE, rect.top + cfg.axis_name_font.size), &style);
        }
        if let (Some(name), Some(rect)) = (&cfg.x_axis_name, frame.x_axis_name) {
            let style = text_style(&cfg.axis_name_font, TextAlign::Center);
            surface.draw_text(name, Point::new(frame.plot.center().x, rect.top + cfg.axis_name_font.size), &style);
        }

        let plot = frame.plot;
        if plot.size().is_empty() {
            tracing::debug!(width = size.width, height = size.height, "canvas too small for a plot area");
            return Ok(());
        }

        match &self.kind {
            ChartKind::Bar { series, layout } => {
                let mut body = Translated::new(&mut *surface, plot.top_left());
                draw_bar_chart(&mut body, series, *layout, plot.size(), &cfg.axis, &cfg.grid)
            }
            ChartKind::Line { series } => {
                let mut body = Translated::new(&mut *surface, plot.top_left());
                draw_line_chart(&mut body, series, plot.size(), &cfg.axis, &cfg.grid, &cfg.spline)
            }
            ChartKind::Pie { series, style } => {
                // Pies stay round: use the largest centered square.
                let side = plot.width().min(plot.height());
                let corner = Point::new(
                    plot.left + (plot.width() - side) / 2.0,
                    plot.top + (plot.height() - side) / 2.0,
                );
                let mut body = Translated::new(&mut *surface, corner);
                draw_pie_chart(&mut body, series, Size::new(side, side), *style, cfg.pie_labels.as_ref())
            }
        }
    }

    /// Render into a [`Recorder`] and return the primitives in draw order.
    pub fn render_primitives(&self, size: Size) -> Result<Vec<Primitive>> {
        let mut recorder = Recorder::new();
        self.render(&mut recorder, size)?;
        tracing::trace!(primitives = recorder.primitives.len(), "chart recorded");
        Ok(recorder.into_primitives())
    }
}

fn text_style(font: &FontStyle, align: TextAlign) -> TextStyle {
    TextStyle { size: font.size, color: font.color, bold: font.bold, align }
}

fn value_label(ceiling: f32) -> String {
    (ceiling.max(1.0) as i64).to_string()
}

fn value_axis_insets(axis: &AxisStyle, widest_value: &str, key_font: f32) -> Insets {
    Insets::new(
        estimate_text_width(widest_value, axis.value_font.size) + VALUE_LABEL_ROOM,
        PLOT_EDGE,
        PLOT_EDGE,
        key_font + VALUE_LABEL_ROOM,
    )
}

fn key_axis_insets(axis: &AxisStyle, widest_key: &str, value_font: f32) -> Insets {
    Insets::new(
        estimate_text_width(widest_key, axis.key_font.size) + VALUE_LABEL_ROOM,
        PLOT_EDGE,
        PLOT_EDGE,
        value_font + VALUE_LABEL_ROOM,
    )
}
