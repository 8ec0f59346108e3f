// File: crates/chart-core/src/plot.rs
// Summary: Series renderers: connected line with markers (continuous) and tier-colored bars (categorical).

use skia_safe as skia;

use crate::axis::{draw_category_label, format_value, LABEL_FONT_SIZE};
use crate::layout::Layout;
use crate::scale::{Domain, ValueScale};
use crate::series::Series;
use crate::surface::{Surface, TextAlign};
use crate::theme::Theme;
use crate::zones::{tier_for, Tier};

pub const LINE_WIDTH: f32 = 3.0;
pub const MARKER_RADIUS: f32 = 6.0;
const POINT_LABEL_LIFT: f32 = 15.0;
const BAR_LABEL_LIFT: f32 = 10.0;

/// Everything a series renderer needs besides the data.
pub struct PlotContext<'a> {
    pub layout: &'a Layout,
    pub domain: &'a Domain,
    pub theme: &'a Theme,
    pub unit: &'a str,
    pub draw_labels: bool,
}

/// Screen position of every point of a continuous series.
///
/// Points are spread evenly across the plot width; a single point sits on the left edge.
pub fn line_points(layout: &Layout, domain: &Domain, series: &Series) -> Vec<skia::Point> {
    let scale = ValueScale::new(layout.top(), layout.bottom(), *domain);
    let n = series.len();
    let step = if n > 1 { layout.plot_width / (n - 1) as f32 } else { 0.0 };
    series
        .iter()
        .enumerate()
        .map(|(i, p)| skia::Point::new(layout.left() + i as f32 * step, scale.to_px(p.value())))
        .collect()
}

/// Bar rectangle and tier of every point of a categorical series.
///
/// The plot width is split into one slot per point; each bar takes
/// `width_fraction` of its slot and is centred in it.
pub fn bar_rects(layout: &Layout, domain: &Domain, series: &Series, width_fraction: f32) -> Vec<(skia::Rect, Tier)> {
    let n = series.len();
    if n == 0 {
        return Vec::new();
    }
    let scale = ValueScale::new(layout.top(), layout.bottom(), *domain);
    let slot = layout.plot_width / n as f32;
    let bar_w = slot * width_fraction;
    series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = layout.left() + i as f32 * slot + (slot - bar_w) / 2.0;
            let h = scale.height_of(p.value()).max(0.0);
            let rect = skia::Rect::from_xywh(x, layout.bottom() - h, bar_w, h);
            (rect, tier_for(p.value()))
        })
        .collect()
}

pub fn draw_line_series<S: Surface + ?Sized>(surface: &mut S, ctx: &PlotContext<'_>, series: &Series) {
    let pts = line_points(ctx.layout, ctx.domain, series);

    for pair in pts.windows(2) {
        surface.stroke_line(pair[0], pair[1], LINE_WIDTH, ctx.theme.line_stroke);
    }

    for (pt, dp) in pts.iter().zip(series.iter()) {
        surface.fill_circle(*pt, MARKER_RADIUS, ctx.theme.marker);
        if ctx.draw_labels {
            surface.fill_text(
                &format_value(dp.value(), ctx.unit),
                skia::Point::new(pt.x, pt.y - POINT_LABEL_LIFT),
                LABEL_FONT_SIZE,
                TextAlign::Center,
                ctx.theme.text,
            );
            draw_category_label(surface, ctx.layout, pt.x, dp.label(), ctx.theme.text);
        }
    }
}

pub fn draw_bar_series<S: Surface + ?Sized>(
    surface: &mut S,
    ctx: &PlotContext<'_>,
    series: &Series,
    width_fraction: f32,
) {
    for ((rect, tier), dp) in bar_rects(ctx.layout, ctx.domain, series, width_fraction)
        .into_iter()
        .zip(series.iter())
    {
        surface.fill_rect(rect, ctx.theme.tier_color(tier));
        if ctx.draw_labels {
            let cx = rect.left + rect.width() / 2.0;
            surface.fill_text(
                &format_value(dp.value(), ctx.unit),
                skia::Point::new(cx, rect.top - BAR_LABEL_LIFT),
                LABEL_FONT_SIZE,
                TextAlign::Center,
                ctx.theme.text,
            );
            draw_category_label(surface, ctx.layout, cx, dp.label(), ctx.theme.text);
        }
    }
}
