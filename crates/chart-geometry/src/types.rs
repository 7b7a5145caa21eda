// File: crates/chart-geometry/src/types.rs
// Summary: Shared value types and constants (points, sizes, rects, colors, paddings).

/// Axis label font size in pixels.
pub const AXIS_FONT_SIZE: f32 = 32.0;
/// Gap between the X axis and the baseline of the key labels under it.
pub const KEY_LABEL_GAP: f32 = 10.0;
/// Horizontal offset of right-aligned value labels from the plot's left edge.
pub const VALUE_LABEL_X: f32 = -20.0;
/// Radius of per-point line markers.
pub const MARKER_RADIUS: f32 = 10.0;
/// Alpha multiplier applied to area fills.
pub const AREA_FILL_ALPHA: f32 = 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Axis-aligned rectangle in screen space (top-left origin).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn from_point_size(top_left: Point, size: Size) -> Self {
        Self {
            left: top_left.x,
            top: top_left.y,
            right: top_left.x + size.width,
            bottom: top_left.y + size.height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }

    /// Shrink by per-side insets, never producing a negative extent.
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left;
        let top = self.top + insets.top;
        Self {
            left,
            top,
            right: (self.right - insets.right).max(left),
            bottom: (self.bottom - insets.bottom).max(top),
        }
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }

    pub const fn uniform(v: f32) -> Self {
        Self { left: v, right: v, top: v, bottom: v }
    }

    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 {
        self.top + self.bottom
    }
}

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);
    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);
    pub const GRAY: Color = Color::from_argb(255, 0x88, 0x88, 0x88);
    pub const GREEN: Color = Color::from_argb(255, 0x00, 0xff, 0x00);
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Scale the alpha channel by `factor` (clamped to 0..=1).
    pub fn with_alpha(self, factor: f32) -> Self {
        let a = (self.a as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }
}
