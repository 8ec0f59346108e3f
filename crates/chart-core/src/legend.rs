// File: crates/chart-core/src/legend.rs
// Summary: Static AQI legend row (caption + three tier swatches) above the plot.

use skia_safe as skia;

use crate::surface::{Surface, TextAlign};
use crate::theme::Theme;
use crate::zones::color_bands;

pub const LEGEND_CAPTION: &str = "AQI Levels:";
const FONT_SIZE: f32 = 12.0;
const BASELINE_Y: f32 = 30.0;
const SWATCH_TOP: f32 = 20.0;
const SWATCH_SIZE: f32 = 12.0;
const FIRST_SWATCH_OFFSET: f32 = 80.0;
const SWATCH_SPACING: f32 = 140.0;
const SWATCH_TEXT_GAP: f32 = 20.0;

/// Left edge of the `i`-th swatch for a chart padded by `padding`.
pub fn swatch_x(padding: f32, i: usize) -> f32 {
    padding + FIRST_SWATCH_OFFSET + i as f32 * SWATCH_SPACING
}

/// Draw the legend. Independent of the data; only the padding moves it.
pub fn draw_legend<S: Surface + ?Sized>(surface: &mut S, padding: f32, theme: &Theme, draw_labels: bool) {
    if draw_labels {
        surface.fill_text(
            LEGEND_CAPTION,
            skia::Point::new(padding, BASELINE_Y),
            FONT_SIZE,
            TextAlign::Left,
            theme.text,
        );
    }
    for (i, band) in color_bands(theme).iter().enumerate() {
        let x = swatch_x(padding, i);
        surface.fill_rect(
            skia::Rect::from_xywh(x, SWATCH_TOP, SWATCH_SIZE, SWATCH_SIZE),
            theme.tier_color(band.tier),
        );
        if draw_labels {
            surface.fill_text(
                band.tier.label(),
                skia::Point::new(x + SWATCH_TEXT_GAP, BASELINE_Y),
                FONT_SIZE,
                TextAlign::Left,
                theme.text,
            );
        }
    }
}
