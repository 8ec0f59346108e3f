// File: crates/chart-core/src/skia_surface.rs
// Summary: Skia CPU raster implementation of `Surface`, with RGBA readback and PNG export.

use anyhow::{Context, Result};
use image::ImageEncoder;
use skia_safe as skia;

use crate::error::ChartError;
use crate::surface::{Surface, TextAlign};
use crate::text::TextShaper;

/// Raster target sized in logical pixels times a device pixel ratio.
pub struct SkiaSurface {
    surface: skia::Surface,
    logical: (f32, f32),
    dpr: f32,
    text: TextShaper,
}

fn raster(logical_width: f32, logical_height: f32, dpr: f32) -> Result<skia::Surface, ChartError> {
    if !(dpr.is_finite() && dpr > 0.0) {
        return Err(ChartError::Surface(format!("device pixel ratio must be positive, got {dpr}")));
    }
    let w = (logical_width * dpr).round() as i32;
    let h = (logical_height * dpr).round() as i32;
    if w <= 0 || h <= 0 {
        return Err(ChartError::Surface(format!("surface has no extent ({w}x{h} px)")));
    }
    skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| ChartError::Surface(format!("failed to create {w}x{h} raster surface")))
}

impl SkiaSurface {
    pub fn new(logical_width: f32, logical_height: f32, dpr: f32) -> Result<Self, ChartError> {
        let surface = raster(logical_width, logical_height, dpr)?;
        Ok(Self { surface, logical: (logical_width, logical_height), dpr, text: TextShaper::new() })
    }

    /// Reallocate the backing raster for a new size or pixel ratio. Contents are discarded.
    pub fn resize(&mut self, logical_width: f32, logical_height: f32, dpr: f32) -> Result<(), ChartError> {
        self.surface = raster(logical_width, logical_height, dpr)?;
        self.logical = (logical_width, logical_height);
        self.dpr = dpr;
        Ok(())
    }

    /// Read back the frame as unpremultiplied RGBA8.
    /// Returns (pixels, width, height, row_bytes).
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.surface.width(), self.surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut px = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut px, row_bytes, (0, 0)) {
            anyhow::bail!("reading {w}x{h} pixels from raster surface failed");
        }
        Ok((px, w as u32, h as u32, row_bytes))
    }

    /// Encode the current frame as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let (px, w, h, _) = self.to_rgba8()?;
        let mut out = Vec::new();
        image::codecs::png::PngEncoder::new(&mut out)
            .write_image(&px, w, h, image::ExtendedColorType::Rgba8)
            .context("encode PNG failed")?;
        Ok(out)
    }

    pub fn save_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

impl Surface for SkiaSurface {
    fn pixel_size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.dpr
    }

    fn logical_size(&self) -> (f32, f32) {
        self.logical
    }

    fn clear(&mut self, color: skia::Color) {
        let canvas = self.surface.canvas();
        canvas.reset_matrix();
        canvas.clear(color);
    }

    fn set_scale(&mut self, scale: f32) {
        let canvas = self.surface.canvas();
        canvas.reset_matrix();
        canvas.scale((scale, scale));
    }

    fn stroke_line(&mut self, from: skia::Point, to: skia::Point, width: f32, color: skia::Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_stroke_cap(skia::paint::Cap::Round);
        paint.set_color(color);
        self.surface.canvas().draw_line(from, to, &paint);
    }

    fn fill_rect(&mut self, rect: skia::Rect, color: skia::Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color);
        self.surface.canvas().draw_rect(rect, &paint);
    }

    fn fill_circle(&mut self, center: skia::Point, radius: f32, color: skia::Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color);
        self.surface.canvas().draw_circle(center, radius, &paint);
    }

    fn fill_text(&mut self, text: &str, at: skia::Point, size: f32, align: TextAlign, color: skia::Color) {
        let canvas = self.surface.canvas();
        self.text.draw_aligned(canvas, text, at.x, at.y, size, align, color);
    }
}
