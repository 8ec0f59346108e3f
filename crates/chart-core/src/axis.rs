// File: crates/chart-core/src/axis.rs
// Summary: Y-axis tick labels and x-axis category labels.

use skia_safe as skia;

use crate::grid::grid_positions;
use crate::layout::Layout;
use crate::scale::Domain;
use crate::surface::{Surface, TextAlign};

pub const TICK_FONT_SIZE: f32 = 12.0;
pub const LABEL_FONT_SIZE: f32 = 14.0;
/// Gap between the tick text's right edge and the plot's left edge.
const TICK_GAP: f32 = 10.0;
/// Baseline offset so tick text sits vertically centred on its grid line.
const TICK_BASELINE_NUDGE: f32 = 4.0;
/// Category labels sit this far above the surface's bottom edge.
const CATEGORY_BASELINE_OFFSET: f32 = 20.0;

/// Round half toward +inf, then print as an integer.
pub fn format_tick(value: f64, unit: &str) -> String {
    let r = (value + 0.5).floor() as i64;
    format!("{r}{unit}")
}

/// Data values are printed as-is (no trailing `.0` for whole numbers).
pub fn format_value(value: f64, unit: &str) -> String {
    format!("{value}{unit}")
}

/// Tick values paired with their screen y, bottom line (`domain.min`) first.
pub fn y_ticks(layout: &Layout, domain: &Domain, intervals: usize) -> Vec<(f64, f32)> {
    let n = intervals.max(1);
    let mut ys = grid_positions(layout, n);
    ys.reverse();
    ys.into_iter()
        .enumerate()
        .map(|(i, y)| (domain.lerp(i as f64 / n as f64), y))
        .collect()
}

pub fn draw_y_labels<S: Surface + ?Sized>(
    surface: &mut S,
    layout: &Layout,
    domain: &Domain,
    intervals: usize,
    unit: &str,
    color: skia::Color,
) {
    let x = layout.left() - TICK_GAP;
    for (value, y) in y_ticks(layout, domain, intervals) {
        surface.fill_text(
            &format_tick(value, unit),
            skia::Point::new(x, y + TICK_BASELINE_NUDGE),
            TICK_FONT_SIZE,
            TextAlign::Right,
            color,
        );
    }
}

/// Category tag for the data point centred at `x`, below the plot.
pub fn draw_category_label<S: Surface + ?Sized>(
    surface: &mut S,
    layout: &Layout,
    x: f32,
    label: &str,
    color: skia::Color,
) {
    let y = layout.surface_height - CATEGORY_BASELINE_OFFSET;
    surface.fill_text(label, skia::Point::new(x, y), LABEL_FONT_SIZE, TextAlign::Center, color);
}
