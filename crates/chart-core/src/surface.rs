// File: crates/chart-core/src/surface.rs
// Summary: Drawing-surface seam used by the engine; renderer backends implement `Surface`.

use skia_safe as skia;

/// Horizontal anchoring of a text run relative to its x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// A 2-D raster target the engine can draw one frame into.
///
/// Coordinates passed to the drawing calls are logical pixels; `set_scale`
/// establishes the logical -> physical transform for the rest of the frame.
pub trait Surface {
    /// Physical size in device pixels.
    fn pixel_size(&self) -> (i32, i32);

    /// Physical pixels per logical pixel.
    fn device_pixel_ratio(&self) -> f32;

    /// Size in logical pixels (physical size divided by the pixel ratio).
    fn logical_size(&self) -> (f32, f32) {
        let (w, h) = self.pixel_size();
        let dpr = self.device_pixel_ratio();
        if dpr > 0.0 { (w as f32 / dpr, h as f32 / dpr) } else { (0.0, 0.0) }
    }

    /// Overwrite every pixel with `color`.
    fn clear(&mut self, color: skia::Color);

    /// Reset the transform, then scale uniformly by `scale`.
    fn set_scale(&mut self, scale: f32);

    fn stroke_line(&mut self, from: skia::Point, to: skia::Point, width: f32, color: skia::Color);

    fn fill_rect(&mut self, rect: skia::Rect, color: skia::Color);

    fn fill_circle(&mut self, center: skia::Point, radius: f32, color: skia::Color);

    /// Draw `text` with its baseline at `at.y`, anchored at `at.x` per `align`.
    fn fill_text(&mut self, text: &str, at: skia::Point, size: f32, align: TextAlign, color: skia::Color);
}
