// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer crate: CPU raster surfaces, text shaping, PNG/RGBA export for chart-geometry charts.

pub mod render;
pub mod surface;
pub mod text;

pub use render::{RenderExt, RenderOptions, HEIGHT, WIDTH};
pub use surface::SkiaCanvas;
pub use text::TextShaper;
