// File: crates/chart-core/tests/config.rs
// Purpose: Config defaults, TOML parsing, validation, and chart-kind parsing.

use envchart_core::config::MAX_GRID_LINES;
use envchart_core::{ChartConfig, ChartEngine, ChartError, ChartKind, Series};

#[test]
fn defaults_match_documented_values() {
    let c = ChartConfig::default();
    assert_eq!(c.padding, 60.0);
    assert_eq!(c.grid_lines, 5);
    assert_eq!(c.bar_width_fraction, 0.5);
    assert!(c.draw_labels);
    assert!(c.validate().is_ok());
}

#[test]
fn toml_uses_camel_case_keys_and_fills_defaults() {
    let c = ChartConfig::from_toml_str("padding = 40.0\ngridLines = 4\nunit = \"°C\"\ntheme = \"light\"\n")
        .expect("valid config");
    assert_eq!(c.padding, 40.0);
    assert_eq!(c.grid_lines, 4);
    assert_eq!(c.bar_width_fraction, 0.5);
    assert_eq!(c.unit, "°C");
    assert_eq!(c.resolved_theme().name, "light");

    let empty = ChartConfig::from_toml_str("").expect("empty is all defaults");
    assert_eq!(empty, ChartConfig::default());
}

#[test]
fn invalid_values_are_rejected() {
    for doc in [
        "gridLines = 0",
        "gridLines = 101",
        "gridLines = 9223372036854775807",
        "barWidthFraction = 0.0",
        "barWidthFraction = 1.5",
        "padding = -1.0",
    ] {
        match ChartConfig::from_toml_str(doc) {
            Err(ChartError::InvalidConfig(_)) => {}
            other => panic!("{doc}: expected InvalidConfig, got {other:?}"),
        }
    }
    assert!(matches!(ChartConfig::from_toml_str("bogus = 1"), Err(ChartError::InvalidConfig(_))));

    let mut c = ChartConfig::default();
    c.grid_lines = 0;
    assert!(ChartEngine::new(c.clone()).is_err());
    c.grid_lines = usize::MAX;
    assert!(matches!(ChartEngine::new(c.clone()), Err(ChartError::InvalidConfig(_))));
    c.grid_lines = MAX_GRID_LINES;
    assert!(ChartEngine::new(c).is_ok());
}

#[test]
fn unknown_theme_falls_back_to_dark() {
    let c = ChartConfig::from_toml_str("theme = \"neon\"").unwrap();
    assert_eq!(c.resolved_theme().name, "dark");
}

#[test]
fn chart_kind_parses_case_insensitively() {
    assert_eq!("continuous".parse::<ChartKind>().unwrap(), ChartKind::Continuous);
    assert_eq!(" Categorical ".parse::<ChartKind>().unwrap(), ChartKind::Categorical);
    assert_eq!("pie".parse::<ChartKind>(), Err(ChartError::InvalidKind("pie".into())));
    assert_eq!(ChartKind::Categorical.to_string(), "categorical");
}

#[test]
fn checked_series_rejects_non_finite_values() {
    let ok = Series::try_from_pairs(vec![("Mon", 1.0), ("Tue", 2.0)]).unwrap();
    assert_eq!(ok.len(), 2);
    assert_eq!(ok.value_range(), Some((1.0, 2.0)));

    let err = Series::try_from_pairs(vec![("Mon", 1.0), ("Tue", f64::NAN)]).unwrap_err();
    assert_eq!(err, ChartError::NonFiniteValue { index: 1, label: "Tue".into() });
}
