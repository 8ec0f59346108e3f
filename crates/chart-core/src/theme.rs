// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors, including the AQI tier palette.

use skia_safe as skia;

use crate::zones::Tier;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub text: skia::Color,
    pub line_stroke: skia::Color,
    pub marker: skia::Color,
    pub tier_good: skia::Color,
    pub tier_moderate: skia::Color,
    pub tier_sensitive: skia::Color,
    pub tier_unhealthy: skia::Color,
    /// Alpha applied to tier colors when painting background zones.
    pub zone_alpha: u8,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 30, 41, 59),
            grid: skia::Color::from_argb(26, 255, 255, 255), // white @ 10%
            text: skia::Color::from_argb(255, 255, 255, 255),
            line_stroke: skia::Color::from_argb(255, 0x60, 0xa5, 0xfa),
            marker: skia::Color::from_argb(255, 0x3b, 0x82, 0xf6),
            tier_good: skia::Color::from_argb(255, 0x22, 0xc5, 0x5e),
            tier_moderate: skia::Color::from_argb(255, 0xea, 0xb3, 0x08),
            tier_sensitive: skia::Color::from_argb(255, 0xf9, 0x73, 0x16),
            tier_unhealthy: skia::Color::from_argb(255, 0xef, 0x44, 0x44),
            zone_alpha: 51, // 20%
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(26, 0, 0, 0),
            text: skia::Color::from_argb(255, 20, 20, 30),
            line_stroke: skia::Color::from_argb(255, 0x25, 0x63, 0xeb),
            marker: skia::Color::from_argb(255, 0x1d, 0x4e, 0xd8),
            tier_good: skia::Color::from_argb(255, 0x16, 0xa3, 0x4a),
            tier_moderate: skia::Color::from_argb(255, 0xca, 0x8a, 0x04),
            tier_sensitive: skia::Color::from_argb(255, 0xea, 0x58, 0x0c),
            tier_unhealthy: skia::Color::from_argb(255, 0xdc, 0x26, 0x26),
            zone_alpha: 64,
        }
    }

    /// Opaque fill for bars and legend swatches of `tier`.
    pub fn tier_color(&self, tier: Tier) -> skia::Color {
        match tier {
            Tier::Good => self.tier_good,
            Tier::Moderate => self.tier_moderate,
            Tier::UnhealthyForSensitive => self.tier_sensitive,
            Tier::Unhealthy => self.tier_unhealthy,
        }
    }

    /// Translucent fill for the background zone of `tier`.
    pub fn zone_color(&self, tier: Tier) -> skia::Color {
        let c = self.tier_color(tier);
        skia::Color::from_argb(self.zone_alpha, c.r(), c.g(), c.b())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
