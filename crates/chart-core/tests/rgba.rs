// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate the Skia raster surface: buffer shape, determinism, pixel ratio and resize behavior.

use envchart_core::plot::bar_rects;
use envchart_core::{
    compute_domain, compute_layout, ChartConfig, ChartEngine, ChartKind, Series, SkiaSurface, Surface,
};

fn aqi() -> Series {
    Series::from_pairs(vec![
        ("Today", 65.0),
        ("Tomorrow", 45.0),
        ("Thursday", 85.0),
        ("Friday", 55.0),
        ("Saturday", 135.0),
    ])
}

fn quiet_engine() -> ChartEngine {
    let mut cfg = ChartConfig::default();
    cfg.draw_labels = false; // avoid font variance
    ChartEngine::new(cfg).expect("valid config")
}

fn pixel(px: &[u8], row_bytes: usize, x: f32, y: f32) -> [u8; 4] {
    let i = y as usize * row_bytes + x as usize * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

fn rgba(c: skia_safe::Color) -> [u8; 4] {
    [c.r(), c.g(), c.b(), c.a()]
}

#[test]
fn render_rgba8_buffer() {
    let eng = quiet_engine();
    let mut surface = SkiaSurface::new(400.0, 256.0, 1.0).expect("surface");
    eng.render(&mut surface, &aqi(), ChartKind::Categorical);
    let (px, w, h, stride) = surface.to_rgba8().expect("rgba readback");
    assert_eq!((w, h), (400, 256));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left corner is plain background
    assert_eq!(pixel(&px, stride, 0.0, 0.0), rgba(eng.theme().background));
}

#[test]
fn pixel_ratio_scales_the_backing_store() {
    let surface = SkiaSurface::new(400.0, 256.0, 2.0).expect("surface");
    assert_eq!(surface.pixel_size(), (800, 512));
    assert_eq!(surface.logical_size(), (400.0, 256.0));
    assert!(SkiaSurface::new(0.0, 256.0, 1.0).is_err());
    assert!(SkiaSurface::new(400.0, 256.0, 0.0).is_err());
}

#[test]
fn consecutive_renders_are_pixel_identical() {
    let eng = ChartEngine::new(ChartConfig::default().with_unit("°C")).unwrap();
    let temps = Series::from_pairs(vec![("Today", 22.0), ("Tomorrow", 25.0), ("Thursday", 19.0)]);
    let mut surface = SkiaSurface::new(640.0, 256.0, 1.5).expect("surface");

    eng.render(&mut surface, &temps, ChartKind::Continuous);
    let (first, ..) = surface.to_rgba8().unwrap();
    eng.render(&mut surface, &temps, ChartKind::Continuous);
    let (second, ..) = surface.to_rgba8().unwrap();
    assert!(first == second, "second pass drew a different frame");
}

#[test]
fn bar_colors_survive_resize() {
    let eng = quiet_engine();
    let series = aqi();
    let mut surface = SkiaSurface::new(800.0, 256.0, 1.0).expect("surface");

    for (w, h, dpr) in [(800.0f32, 256.0f32, 1.0f32), (520.0, 320.0, 2.0)] {
        surface.resize(w, h, dpr).expect("resize");
        eng.render(&mut surface, &series, ChartKind::Categorical);
        let (px, _, _, stride) = surface.to_rgba8().unwrap();

        let layout = compute_layout(w, h, eng.config().padding).unwrap();
        let domain = compute_domain(&series, ChartKind::Categorical);
        for (rect, tier) in bar_rects(&layout, &domain, &series, 0.5) {
            let cx = (rect.left + rect.width() / 2.0) * dpr;
            let cy = (rect.top + rect.height() / 2.0) * dpr;
            assert_eq!(
                pixel(&px, stride, cx, cy),
                rgba(eng.theme().tier_color(tier)),
                "bar centre at {w}x{h}@{dpr}"
            );
        }
    }
}
