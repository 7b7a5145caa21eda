// File: crates/chart-geometry/src/surface.rs
// Summary: Drawing-surface abstraction, path model, and the recording/translating adapters.

use crate::style::LineStyle;
use crate::types::{Color, Point, Rect, Size};

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub dash: Option<Vec<f32>>,
}

impl From<&LineStyle> for Stroke {
    fn from(style: &LineStyle) -> Self {
        Self { color: style.color, width: style.stroke_width, dash: style.dash.clone() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintStyle {
    Fill,
    Stroke(f32),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Colors spread evenly between `start_x` and `end_x`.
    HorizontalGradient { colors: Vec<Color>, start_x: f32, end_x: f32 },
}

impl Brush {
    /// A single color becomes a two-stop gradient of itself; an empty list paints black.
    pub fn horizontal(colors: &[Color], start_x: f32, end_x: f32) -> Self {
        let colors = match colors {
            [] => return Brush::Solid(Color::BLACK),
            [c] => vec![*c, *c],
            many => many.to_vec(),
        };
        Brush::HorizontalGradient { colors, start_x, end_x }
    }

    pub fn with_alpha(&self, factor: f32) -> Self {
        match self {
            Brush::Solid(c) => Brush::Solid(c.with_alpha(factor)),
            Brush::HorizontalGradient { colors, start_x, end_x } => Brush::HorizontalGradient {
                colors: colors.iter().map(|c| c.with_alpha(factor)).collect(),
                start_x: *start_x,
                end_x: *end_x,
            },
        }
    }

    fn translate(&self, dx: f32) -> Self {
        match self {
            Brush::Solid(c) => Brush::Solid(*c),
            Brush::HorizontalGradient { colors, start_x, end_x } => Brush::HorizontalGradient {
                colors: colors.clone(),
                start_x: start_x + dx,
                end_x: end_x + dx,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub bold: bool,
    pub align: TextAlign,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo(Point, Point),
    CubicTo(Point, Point, Point),
    Close,
}

impl PathCommand {
    fn map_points(self, f: impl Fn(Point) -> Point) -> Self {
        match self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(f(p)),
            PathCommand::LineTo(p) => PathCommand::LineTo(f(p)),
            PathCommand::QuadTo(c, p) => PathCommand::QuadTo(f(c), f(p)),
            PathCommand::CubicTo(c1, c2, p) => PathCommand::CubicTo(f(c1), f(c2), f(p)),
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// Backend-neutral vector path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self { Self::default() }

    pub fn move_to(&mut self, p: Point) { self.commands.push(PathCommand::MoveTo(p)); }
    pub fn line_to(&mut self, p: Point) { self.commands.push(PathCommand::LineTo(p)); }
    pub fn quad_to(&mut self, ctrl: Point, p: Point) { self.commands.push(PathCommand::QuadTo(ctrl, p)); }
    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.commands.push(PathCommand::CubicTo(c1, c2, p));
    }
    pub fn close(&mut self) { self.commands.push(PathCommand::Close); }

    pub fn commands(&self) -> &[PathCommand] { &self.commands }
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// End point of the last drawing command.
    pub fn last_point(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(|c| match *c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::QuadTo(_, p) | PathCommand::CubicTo(_, _, p) => Some(p),
            PathCommand::Close => None,
        })
    }

    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|c| match *c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p.is_finite(),
            PathCommand::QuadTo(c, p) => c.is_finite() && p.is_finite(),
            PathCommand::CubicTo(c1, c2, p) => c1.is_finite() && c2.is_finite() && p.is_finite(),
            PathCommand::Close => true,
        })
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self { commands: self.commands.iter().map(|c| c.map_points(|p| p.offset(dx, dy))).collect() }
    }
}

/// Primitive operations the geometry layer issues; implemented by rendering backends.
pub trait DrawingSurface {
    fn draw_line(&mut self, start: Point, end: Point, stroke: &Stroke);
    fn draw_rect(&mut self, top_left: Point, size: Size, color: Color, style: PaintStyle);
    fn draw_path(&mut self, path: &Path, brush: &Brush, style: PaintStyle);
    /// Angles in degrees, 0 at 3 o'clock, positive sweep clockwise on screen.
    fn draw_arc(&mut self, bounds: Rect, start_angle: f32, sweep_angle: f32, color: Color, filled: bool);
    fn draw_oval(&mut self, top_left: Point, size: Size, color: Color);
    fn draw_circle(&mut self, center: Point, radius: f32, color: Color);
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn draw_line(&mut self, start: Point, end: Point, stroke: &Stroke) {
        (**self).draw_line(start, end, stroke)
    }
    fn draw_rect(&mut self, top_left: Point, size: Size, color: Color, style: PaintStyle) {
        (**self).draw_rect(top_left, size, color, style)
    }
    fn draw_path(&mut self, path: &Path, brush: &Brush, style: PaintStyle) {
        (**self).draw_path(path, brush, style)
    }
    fn draw_arc(&mut self, bounds: Rect, start_angle: f32, sweep_angle: f32, color: Color, filled: bool) {
        (**self).draw_arc(bounds, start_angle, sweep_angle, color, filled)
    }
    fn draw_oval(&mut self, top_left: Point, size: Size, color: Color) {
        (**self).draw_oval(top_left, size, color)
    }
    fn draw_circle(&mut self, center: Point, radius: f32, color: Color) {
        (**self).draw_circle(center, radius, color)
    }
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        (**self).draw_text(text, position, style)
    }
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line { start: Point, end: Point, stroke: Stroke },
    Rect { top_left: Point, size: Size, color: Color, style: PaintStyle },
    Path { path: Path, brush: Brush, style: PaintStyle },
    Arc { bounds: Rect, start_angle: f32, sweep_angle: f32, color: Color, filled: bool },
    Oval { top_left: Point, size: Size, color: Color },
    Circle { center: Point, radius: f32, color: Color },
    Text { text: String, position: Point, style: TextStyle },
}

/// Surface that stores every call instead of painting it.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub primitives: Vec<Primitive>,
}

impl Recorder {
    pub fn new() -> Self { Self::default() }

    pub fn into_primitives(self) -> Vec<Primitive> { self.primitives }
}

impl DrawingSurface for Recorder {
    fn draw_line(&mut self, start: Point, end: Point, stroke: &Stroke) {
        self.primitives.push(Primitive::Line { start, end, stroke: stroke.clone() });
    }
    fn draw_rect(&mut self, top_left: Point, size: Size, color: Color, style: PaintStyle) {
        self.primitives.push(Primitive::Rect { top_left, size, color, style });
    }
    fn draw_path(&mut self, path: &Path, brush: &Brush, style: PaintStyle) {
        self.primitives.push(Primitive::Path { path: path.clone(), brush: brush.clone(), style });
    }
    fn draw_arc(&mut self, bounds: Rect, start_angle: f32, sweep_angle: f32, color: Color, filled: bool) {
        self.primitives.push(Primitive::Arc { bounds, start_angle, sweep_angle, color, filled });
    }
    fn draw_oval(&mut self, top_left: Point, size: Size, color: Color) {
        self.primitives.push(Primitive::Oval { top_left, size, color });
    }
    fn draw_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.primitives.push(Primitive::Circle { center, radius, color });
    }
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.primitives.push(Primitive::Text { text: text.to_string(), position, style: *style });
    }
}

/// Shifts every primitive by a fixed offset, so engines can draw relative to their own origin.
pub struct Translated<S> {
    inner: S,
    dx: f32,
    dy: f32,
}

impl<S: DrawingSurface> Translated<S> {
    pub fn new(inner: S, origin: Point) -> Self {
        Self { inner, dx: origin.x, dy: origin.y }
    }

    fn shift(&self, p: Point) -> Point { p.offset(self.dx, self.dy) }
}

impl<S: DrawingSurface> DrawingSurface for Translated<S> {
    fn draw_line(&mut self, start: Point, end: Point, stroke: &Stroke) {
        let (s, e) = (self.shift(start), self.shift(end));
        self.inner.draw_line(s, e, stroke)
    }
    fn draw_rect(&mut self, top_left: Point, size: Size, color: Color, style: PaintStyle) {
        let p = self.shift(top_left);
        self.inner.draw_rect(p, size, color, style)
    }
    fn draw_path(&mut self, path: &Path, brush: &Brush, style: PaintStyle) {
        let moved = path.translated(self.dx, self.dy);
        let brush = brush.translate(self.dx);
        self.inner.draw_path(&moved, &brush, style)
    }
    fn draw_arc(&mut self, bounds: Rect, start_angle: f32, sweep_angle: f32, color: Color, filled: bool) {
        let b = Rect::from_point_size(self.shift(bounds.top_left()), bounds.size());
        self.inner.draw_arc(b, start_angle, sweep_angle, color, filled)
    }
    fn draw_oval(&mut self, top_left: Point, size: Size, color: Color) {
        let p = self.shift(top_left);
        self.inner.draw_oval(p, size, color)
    }
    fn draw_circle(&mut self, center: Point, radius: f32, color: Color) {
        let c = self.shift(center);
        self.inner.draw_circle(c, radius, color)
    }
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        let p = self.shift(position);
        self.inner.draw_text(text, p, style)
    }
}
