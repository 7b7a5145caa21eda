// File: crates/chart-render-skia/src/render.rs
// Summary: Headless chart rendering to PNG files, PNG bytes and RGBA8 buffers using Skia CPU raster surfaces.

use std::fmt::Display;

use anyhow::{Context, Result};
use chart_geometry::{Chart, Color, Size};
use skia_safe as skia;

use crate::surface::{to_skia, SkiaCanvas};
use crate::text::TextShaper;

pub const WIDTH: i32 = 1024;
pub const HEIGHT: i32 = 640;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: Color,
    /// Draw titles, legends and tick labels.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: Color::WHITE,
            draw_labels: true,
        }
    }
}

/// Skia output for any chart.
pub trait RenderExt {
    /// Render to a PNG at `output_png_path`, creating parent directories.
    fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()>;
    /// Render and return encoded PNG bytes.
    fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>>;
    /// Render and return `(pixels, width, height, row_bytes)`; pixels are unpremultiplied RGBA8.
    fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)>;
}

fn rasterize<K: PartialEq + Clone + Display>(chart: &Chart<K>, opts: &RenderOptions) -> Result<skia::Surface> {
    if opts.width <= 0 || opts.height <= 0 {
        anyhow::bail!("invalid canvas size {}x{}", opts.width, opts.height);
    }
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let shaper = TextShaper::new();
    {
        let canvas = surface.canvas();
        canvas.clear(to_skia(opts.background));
        let mut target = SkiaCanvas::new(canvas, &shaper);
        if !opts.draw_labels {
            target = target.without_labels();
        }
        chart
            .render(&mut target, Size::new(opts.width as f32, opts.height as f32))
            .context("chart layout failed")?;
    }
    Ok(surface)
}

fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

impl<K: PartialEq + Clone + Display> RenderExt for Chart<K> {
    fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }

    fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = rasterize(self, opts)?;
        encode_png(&mut surface)
    }

    fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = rasterize(self, opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }
}
