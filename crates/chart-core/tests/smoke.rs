// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing PNGs for both chart kinds.

use envchart_core::{ChartConfig, ChartEngine, ChartKind, RenderOptions, Series};

#[test]
fn render_smoke_png() {
    let temps = Series::from_pairs(vec![
        ("Today", 22.0),
        ("Tomorrow", 25.0),
        ("Thursday", 19.0),
        ("Friday", 21.0),
        ("Saturday", 24.0),
    ]);
    let aqi = Series::from_pairs(vec![("Today", 65.0), ("Tomorrow", 45.0), ("Thursday", 85.0)]);

    let eng = ChartEngine::new(ChartConfig::default().with_unit("°C")).unwrap();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke_weather.png");

    eng.render_to_png(&temps, ChartKind::Continuous, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = ChartEngine::default()
        .render_to_png_bytes(&aqi, ChartKind::Categorical, &opts)
        .expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
