// File: crates/chart-core/src/grid.rs
// Summary: Even spacing helper and horizontal reference grid.

use skia_safe as skia;

use crate::layout::Layout;
use crate::surface::Surface;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Screen y of each grid line, plot top first; `intervals + 1` entries.
pub fn grid_positions(layout: &Layout, intervals: usize) -> Vec<f32> {
    linspace(layout.top() as f64, layout.bottom() as f64, intervals.max(1) + 1)
        .into_iter()
        .map(|y| y as f32)
        .collect()
}

pub fn draw_grid<S: Surface + ?Sized>(surface: &mut S, layout: &Layout, intervals: usize, color: skia::Color) {
    for y in grid_positions(layout, intervals) {
        surface.stroke_line(
            skia::Point::new(layout.left(), y),
            skia::Point::new(layout.right(), y),
            1.0,
            color,
        );
    }
}
