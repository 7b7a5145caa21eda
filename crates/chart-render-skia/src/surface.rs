// File: crates/chart-render-skia/src/surface.rs
// Summary: `DrawingSurface` over a Skia canvas.

use chart_geometry::surface::PathCommand;
use chart_geometry::{Brush, Color, DrawingSurface, PaintStyle, Path, Point, Rect, Size, Stroke, TextStyle};
use skia_safe as skia;

use crate::text::TextShaper;

pub(crate) fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn skia_rect(top_left: Point, size: Size) -> skia::Rect {
    skia::Rect::from_xywh(top_left.x, top_left.y, size.width, size.height)
}

fn skia_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => { out.move_to((p.x, p.y)); }
            PathCommand::LineTo(p) => { out.line_to((p.x, p.y)); }
            PathCommand::QuadTo(c, p) => { out.quad_to((c.x, c.y), (p.x, p.y)); }
            PathCommand::CubicTo(c1, c2, p) => { out.cubic_to((c1.x, c1.y), (c2.x, c2.y), (p.x, p.y)); }
            PathCommand::Close => { out.close(); }
        }
    }
    out
}

fn base_paint(style: PaintStyle) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    match style {
        PaintStyle::Fill => {
            paint.set_style(skia::paint::Style::Fill);
        }
        PaintStyle::Stroke(width) => {
            paint.set_style(skia::paint::Style::Stroke);
            paint.set_stroke_width(width);
        }
    }
    paint
}

fn fill(color: Color) -> skia::Paint {
    let mut paint = base_paint(PaintStyle::Fill);
    paint.set_color(to_skia(color));
    paint
}

/// Paints chart primitives onto a borrowed canvas.
pub struct SkiaCanvas<'a> {
    canvas: &'a skia::Canvas,
    text: &'a TextShaper,
    draw_labels: bool,
}

impl<'a> SkiaCanvas<'a> {
    pub fn new(canvas: &'a skia::Canvas, text: &'a TextShaper) -> Self {
        Self { canvas, text, draw_labels: true }
    }

    /// Skip text entirely (font rendering varies across platforms).
    pub fn without_labels(mut self) -> Self {
        self.draw_labels = false;
        self
    }
}

impl DrawingSurface for SkiaCanvas<'_> {
    fn draw_line(&mut self, start: Point, end: Point, stroke: &Stroke) {
        let mut paint = base_paint(PaintStyle::Stroke(stroke.width));
        paint.set_color(to_skia(stroke.color));
        if let Some(intervals) = &stroke.dash {
            paint.set_path_effect(skia::PathEffect::dash(intervals, 0.0));
        }
        self.canvas.draw_line((start.x, start.y), (end.x, end.y), &paint);
    }

    fn draw_rect(&mut self, top_left: Point, size: Size, color: Color, style: PaintStyle) {
        let mut paint = base_paint(style);
        paint.set_color(to_skia(color));
        self.canvas.draw_rect(skia_rect(top_left, size), &paint);
    }

    fn draw_path(&mut self, path: &Path, brush: &Brush, style: PaintStyle) {
        let mut paint = base_paint(style);
        match brush {
            Brush::Solid(c) => {
                paint.set_color(to_skia(*c));
            }
            Brush::HorizontalGradient { colors, start_x, end_x } => {
                let stops: Vec<skia::Color> = colors.iter().copied().map(to_skia).collect();
                let shader = skia::Shader::linear_gradient(
                    ((*start_x, 0.0), (*end_x, 0.0)),
                    &stops[..],
                    None,
                    skia::TileMode::Clamp,
                    None,
                    None,
                );
                match shader {
                    Some(shader) => {
                        paint.set_shader(shader);
                    }
                    None => {
                        tracing::debug!(stops = stops.len(), "gradient rejected, painting first stop");
                        paint.set_color(stops.first().copied().unwrap_or(skia::Color::BLACK));
                    }
                }
            }
        }
        self.canvas.draw_path(&skia_path(path), &paint);
    }

    fn draw_arc(&mut self, bounds: Rect, start_angle: f32, sweep_angle: f32, color: Color, filled: bool) {
        let mut paint = fill(color);
        if !filled {
            paint.set_style(skia::paint::Style::Stroke);
        }
        let oval = skia::Rect::from_ltrb(bounds.left, bounds.top, bounds.right, bounds.bottom);
        self.canvas.draw_arc(oval, start_angle, sweep_angle, filled, &paint);
    }

    fn draw_oval(&mut self, top_left: Point, size: Size, color: Color) {
        self.canvas.draw_oval(skia_rect(top_left, size), &fill(color));
    }

    fn draw_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.canvas.draw_circle((center.x, center.y), radius, &fill(color));
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        if !self.draw_labels {
            return;
        }
        self.text.draw(
            self.canvas,
            text,
            position.x,
            position.y,
            style.size,
            to_skia(style.color),
            style.bold,
            style.align,
        );
    }
}
