// File: crates/chart-core/src/engine.rs
// Summary: ChartEngine: one synchronous full-redraw pass per call, plus headless PNG helpers.

use anyhow::Result;
use log::{debug, trace};

use crate::axis::draw_y_labels;
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::grid::draw_grid;
use crate::layout::compute_layout;
use crate::legend::draw_legend;
use crate::plot::{draw_bar_series, draw_line_series, PlotContext};
use crate::scale::compute_domain;
use crate::series::{ChartKind, Series};
use crate::skia_surface::SkiaSurface;
use crate::surface::Surface;
use crate::theme::Theme;
use crate::zones::draw_zones;

/// Default logical surface width for headless rendering.
pub const WIDTH: f32 = 800.0;
/// Default logical surface height (the dashboard's chart card height).
pub const HEIGHT: f32 = 256.0;

/// Size of an offscreen surface for the PNG helpers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, dpr: 1.0 }
    }
}

/// Renders a series of either kind with a fixed configuration.
///
/// The engine keeps no per-frame state: every call clears the surface and
/// recomputes layout and domain from scratch.
#[derive(Clone, Debug)]
pub struct ChartEngine {
    config: ChartConfig,
    theme: Theme,
}

impl Default for ChartEngine {
    fn default() -> Self {
        Self { config: ChartConfig::default(), theme: Theme::dark() }
    }
}

impl ChartEngine {
    /// Validate `config` and resolve its theme.
    pub fn new(config: ChartConfig) -> Result<Self, ChartError> {
        config.validate()?;
        let theme = config.resolved_theme();
        Ok(Self { config, theme })
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Draw one complete frame of `series` as a `kind` chart.
    ///
    /// Empty series and zero-extent surfaces are left untouched. A surface too
    /// small for the padding is cleared and nothing else is drawn.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, series: &Series, kind: ChartKind) {
        if series.is_empty() {
            debug!("{kind} chart: empty series, nothing to draw");
            return;
        }
        let (pw, ph) = surface.pixel_size();
        let dpr = surface.device_pixel_ratio();
        if pw <= 0 || ph <= 0 || !(dpr.is_finite() && dpr > 0.0) {
            debug!("{kind} chart: surface has no extent ({pw}x{ph} px @ {dpr}), skipping");
            return;
        }

        surface.clear(self.theme.background);
        surface.set_scale(dpr);

        let (w, h) = surface.logical_size();
        let Some(layout) = compute_layout(w, h, self.config.padding) else {
            debug!("{kind} chart: {w}x{h} surface smaller than padding {}, frame left blank", self.config.padding);
            return;
        };
        let domain = compute_domain(series, kind);
        trace!("{kind} chart: layout {layout:?}, domain {domain:?}, {} points", series.len());

        let cfg = &self.config;
        let ctx = PlotContext {
            layout: &layout,
            domain: &domain,
            theme: &self.theme,
            unit: &cfg.unit,
            draw_labels: cfg.draw_labels,
        };

        // Fixed paint order: grid, zones, series, axis, legend.
        draw_grid(surface, &layout, cfg.grid_lines, self.theme.grid);
        if kind == ChartKind::Categorical {
            draw_zones(surface, &layout, &domain, &self.theme);
        }
        match kind {
            ChartKind::Continuous => draw_line_series(surface, &ctx, series),
            ChartKind::Categorical => draw_bar_series(surface, &ctx, series, cfg.bar_width_fraction),
        }
        if cfg.draw_labels {
            draw_y_labels(surface, &layout, &domain, cfg.grid_lines, &cfg.unit, self.theme.text);
        }
        if kind == ChartKind::Categorical {
            draw_legend(surface, cfg.padding, &self.theme, cfg.draw_labels);
        }
    }

    /// `None` means the data has not arrived yet; nothing is drawn.
    pub fn render_optional<S: Surface + ?Sized>(&self, surface: &mut S, series: Option<&Series>, kind: ChartKind) {
        match series {
            Some(s) => self.render(surface, s, kind),
            None => debug!("{kind} chart: no series yet"),
        }
    }

    /// Like `render`, with the kind given by name. Unknown names fail before
    /// the surface is touched.
    pub fn render_named<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        series: &Series,
        kind: &str,
    ) -> Result<(), ChartError> {
        let kind: ChartKind = kind.parse()?;
        self.render(surface, series, kind);
        Ok(())
    }

    /// Render onto a fresh CPU raster surface and return it for readback.
    pub fn render_offscreen(&self, series: &Series, kind: ChartKind, opts: &RenderOptions) -> Result<SkiaSurface> {
        let mut surface = SkiaSurface::new(opts.width, opts.height, opts.dpr)?;
        surface.clear(self.theme.background);
        self.render(&mut surface, series, kind);
        Ok(surface)
    }

    pub fn render_to_png_bytes(&self, series: &Series, kind: ChartKind, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.render_offscreen(series, kind, opts)?.encode_png()
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        series: &Series,
        kind: ChartKind,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        self.render_offscreen(series, kind, opts)?.save_png(output_png_path)
    }
}
