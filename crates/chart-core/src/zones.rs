// File: crates/chart-core/src/zones.rs
// Summary: AQI threshold tiers, the static band table, and stacked background zones.

use skia_safe as skia;

use crate::layout::Layout;
use crate::scale::Domain;
use crate::surface::Surface;
use crate::theme::Theme;

/// Coloring tier of a categorical value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
}

/// Ascending cut points; a value belongs to the first tier whose bound it does not exceed.
const LADDER: [(f64, Tier); 3] = [
    (50.0, Tier::Good),
    (100.0, Tier::Moderate),
    (150.0, Tier::UnhealthyForSensitive),
];

impl Tier {
    /// Inclusive upper bound, `None` for the open-ended top tier.
    pub fn upper_bound(&self) -> Option<f64> {
        LADDER.iter().find(|(_, t)| t == self).map(|(b, _)| *b)
    }

    /// Legend caption.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Good => "Good (0-50)",
            Tier::Moderate => "Moderate (51-100)",
            Tier::UnhealthyForSensitive => "Unhealthy for Sensitive (101-150)",
            Tier::Unhealthy => "Unhealthy (>150)",
        }
    }
}

/// Resolve the tier of `value`; boundaries belong to the lower tier (50 is Good).
pub fn tier_for(value: f64) -> Tier {
    LADDER
        .iter()
        .find(|(bound, _)| value <= *bound)
        .map(|(_, tier)| *tier)
        .unwrap_or(Tier::Unhealthy)
}

/// One row of the zone table: everything up to `upper_bound` is painted `color`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorBand {
    pub upper_bound: f64,
    pub tier: Tier,
    pub color: skia::Color,
}

/// The fixed band table (ascending bounds), colored for `theme`.
pub fn color_bands(theme: &Theme) -> [ColorBand; 3] {
    LADDER.map(|(upper_bound, tier)| ColorBand { upper_bound, tier, color: theme.zone_color(tier) })
}

/// Paint the stacked bands from the plot baseline upward.
///
/// Each band's height is its bound relative to `domain.max` minus the height
/// already taken by the previous band. Whatever pokes above the plot top is clipped.
pub fn draw_zones<S: Surface + ?Sized>(surface: &mut S, layout: &Layout, domain: &Domain, theme: &Theme) {
    if domain.max <= 0.0 {
        return;
    }
    let h = layout.plot_height as f64;
    let mut consumed = 0.0f32;
    for band in color_bands(theme) {
        let zone_top_height = ((band.upper_bound / domain.max) * h) as f32;
        let height = zone_top_height - consumed;
        consumed = zone_top_height;

        let top = (layout.bottom() - zone_top_height).max(layout.top());
        let bottom = (layout.bottom() - zone_top_height + height).min(layout.bottom());
        if bottom <= top {
            continue;
        }
        let rect = skia::Rect::from_ltrb(layout.left(), top, layout.right(), bottom);
        surface.fill_rect(rect, band.color);
    }
}
