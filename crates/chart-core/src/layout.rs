// File: crates/chart-core/src/layout.rs
// Summary: Plot rectangle derived from the logical surface size and a uniform padding.

/// Default padding reserved around the plot for labels and the legend, in logical pixels.
pub const DEFAULT_PADDING: f32 = 60.0;

/// Plot rectangle in logical pixels.
/// Contract: `plot_width > 0` and `plot_height > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub plot_width: f32,
    pub plot_height: f32,
    /// Logical surface height; category labels hang off the bottom edge.
    pub surface_height: f32,
}

impl Layout {
    pub fn left(&self) -> f32 { self.origin_x }
    pub fn top(&self) -> f32 { self.origin_y }
    pub fn right(&self) -> f32 { self.origin_x + self.plot_width }
    /// Plot baseline (value axis zero pixel).
    pub fn bottom(&self) -> f32 { self.origin_y + self.plot_height }
}

/// Inset the surface by `padding` on every side.
///
/// Returns `None` when nothing positive is left to plot into.
pub fn compute_layout(surface_width: f32, surface_height: f32, padding: f32) -> Option<Layout> {
    let plot_width = surface_width - 2.0 * padding;
    let plot_height = surface_height - 2.0 * padding;
    if !(plot_width > 0.0 && plot_height > 0.0) {
        return None;
    }
    Some(Layout {
        origin_x: padding,
        origin_y: padding,
        plot_width,
        plot_height,
        surface_height,
    })
}
