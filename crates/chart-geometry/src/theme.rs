// File: crates/chart-geometry/src/theme.rs
// Summary: Color themes: background, axis/grid/label colors and a series palette.

use crate::style::{AxisStyle, GridStyle, LineStyle};
use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub title: Color,
    /// Series colors, assigned round-robin.
    pub palette: [Color; 6],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            grid: Color::from_rgb(40, 40, 45),
            axis_line: Color::from_rgb(180, 180, 190),
            axis_label: Color::from_rgb(235, 235, 245),
            title: Color::from_rgb(245, 245, 250),
            palette: [
                Color::from_rgb(64, 160, 255),
                Color::from_rgb(40, 200, 120),
                Color::from_rgb(255, 196, 64),
                Color::from_rgb(220, 80, 80),
                Color::from_rgb(170, 110, 240),
                Color::from_rgb(60, 210, 210),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_rgb(250, 250, 252),
            grid: Color::from_rgb(230, 230, 235),
            axis_line: Color::from_rgb(60, 60, 70),
            axis_label: Color::from_rgb(20, 20, 30),
            title: Color::from_rgb(10, 10, 20),
            palette: [
                Color::from_rgb(32, 120, 200),
                Color::from_rgb(20, 160, 90),
                Color::from_rgb(230, 150, 20),
                Color::from_rgb(200, 60, 60),
                Color::from_rgb(130, 80, 200),
                Color::from_rgb(20, 160, 170),
            ],
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Color::from_rgb(0x00, 0x2b, 0x36), // base03
            grid: Color::from_rgb(0x07, 0x36, 0x42),       // base02
            axis_line: Color::from_rgb(0x93, 0xa1, 0xa1),  // base1
            axis_label: Color::from_rgb(0xee, 0xe8, 0xd5), // base2
            title: Color::from_rgb(0xfd, 0xf6, 0xe3),      // base3
            palette: SOLARIZED_ACCENTS,
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Color::from_rgb(0xfd, 0xf6, 0xe3), // base3
            grid: Color::from_rgb(0xee, 0xe8, 0xd5),       // base2
            axis_line: Color::from_rgb(0x65, 0x7b, 0x83),  // base00
            axis_label: Color::from_rgb(0x00, 0x2b, 0x36), // base03
            title: Color::from_rgb(0x07, 0x36, 0x42),      // base02
            palette: SOLARIZED_ACCENTS,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::BLACK,
            grid: Color::from_rgb(0x22, 0x22, 0x22),
            axis_line: Color::WHITE,
            axis_label: Color::WHITE,
            title: Color::WHITE,
            palette: [
                Color::from_rgb(0x00, 0xff, 0xff),
                Color::from_rgb(0x00, 0xff, 0x00),
                Color::from_rgb(0xff, 0xff, 0x00),
                Color::from_rgb(0xff, 0x00, 0xff),
                Color::from_rgb(0xff, 0x80, 0x00),
                Color::from_rgb(0xff, 0x00, 0x00),
            ],
        }
    }

    /// Palette color for series `index`.
    pub fn series_color(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }

    /// Axis style in this theme's colors.
    pub fn axis_style(&self) -> AxisStyle {
        let mut style = AxisStyle::default();
        style.x = LineStyle::default().with_color(self.axis_line);
        style.y = LineStyle::default().with_color(self.axis_line);
        style.value_font = style.value_font.with_color(self.axis_label);
        style.key_font = style.key_font.with_color(self.axis_label);
        style
    }

    /// Dashed grid in this theme's grid color.
    pub fn grid_style(&self) -> GridStyle {
        let line = LineStyle::default().with_color(self.grid).with_dash(vec![10.0, 10.0]);
        GridStyle { horizontal: line.clone(), vertical: line }
    }
}

const SOLARIZED_ACCENTS: [Color; 6] = [
    Color::from_rgb(0x26, 0x8b, 0xd2), // blue
    Color::from_rgb(0x2a, 0xa1, 0x98), // cyan
    Color::from_rgb(0xb5, 0x89, 0x00), // yellow
    Color::from_rgb(0xdc, 0x32, 0x2f), // red
    Color::from_rgb(0x6c, 0x71, 0xc4), // violet
    Color::from_rgb(0xcb, 0x4b, 0x16), // orange
];

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive_and_falls_back() {
        assert_eq!(find("Solarized-Dark").name, "solarized-dark");
        assert_eq!(find("no-such-theme").name, "light");
    }

    #[test]
    fn palette_wraps() {
        let t = Theme::dark();
        assert_eq!(t.series_color(0), t.series_color(6));
    }
}
