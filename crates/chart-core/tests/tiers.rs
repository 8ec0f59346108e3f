// File: crates/chart-core/tests/tiers.rs
// Purpose: Threshold ladder boundaries, band table, and AQI level classification.

use envchart_core::zones::color_bands;
use envchart_core::{tier_for, AqiLevel, Theme, Tier};

#[test]
fn ladder_boundaries_belong_to_lower_tier() {
    assert_eq!(tier_for(0.0), Tier::Good);
    assert_eq!(tier_for(50.0), Tier::Good);
    assert_eq!(tier_for(51.0), Tier::Moderate);
    assert_eq!(tier_for(50.5), Tier::Moderate);
    assert_eq!(tier_for(100.0), Tier::Moderate);
    assert_eq!(tier_for(101.0), Tier::UnhealthyForSensitive);
    assert_eq!(tier_for(150.0), Tier::UnhealthyForSensitive);
    assert_eq!(tier_for(151.0), Tier::Unhealthy);
    assert_eq!(tier_for(400.0), Tier::Unhealthy);
    assert_eq!(tier_for(-10.0), Tier::Good);
}

#[test]
fn band_table_is_ascending_and_translucent() {
    let theme = Theme::dark();
    let bands = color_bands(&theme);
    let bounds: Vec<f64> = bands.iter().map(|b| b.upper_bound).collect();
    assert_eq!(bounds, vec![50.0, 100.0, 150.0]);
    for b in &bands {
        assert_eq!(b.color.a(), theme.zone_alpha);
        assert_eq!(b.color.r(), theme.tier_color(b.tier).r());
    }
    assert_eq!(Tier::Unhealthy.upper_bound(), None);
    assert_eq!(Tier::Moderate.upper_bound(), Some(100.0));
}

#[test]
fn tier_colors_are_distinct() {
    let t = Theme::dark();
    let colors = [
        t.tier_color(Tier::Good),
        t.tier_color(Tier::Moderate),
        t.tier_color(Tier::UnhealthyForSensitive),
        t.tier_color(Tier::Unhealthy),
    ];
    for i in 0..colors.len() {
        for j in (i + 1)..colors.len() {
            assert_ne!(colors[i], colors[j]);
        }
    }
}

#[test]
fn aqi_levels_follow_six_step_ladder() {
    assert_eq!(AqiLevel::classify(50.0), AqiLevel::Good);
    assert_eq!(AqiLevel::classify(65.0), AqiLevel::Moderate);
    assert_eq!(AqiLevel::classify(150.0), AqiLevel::UnhealthyForSensitiveGroups);
    assert_eq!(AqiLevel::classify(200.0), AqiLevel::Unhealthy);
    assert_eq!(AqiLevel::classify(300.0), AqiLevel::VeryUnhealthy);
    assert_eq!(AqiLevel::classify(301.0), AqiLevel::Hazardous);
    assert_eq!(AqiLevel::classify(65.0).name(), "Moderate");
    assert!(AqiLevel::classify(10.0).recommendation().contains("excellent"));
}
