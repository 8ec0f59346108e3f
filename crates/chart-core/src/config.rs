// File: crates/chart-core/src/config.rs
// Summary: Engine configuration with defaults, TOML loading and validation.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::error::ChartError;
use crate::layout::DEFAULT_PADDING;
use crate::theme::{self, Theme};

pub const DEFAULT_GRID_LINES: usize = 5;
pub const DEFAULT_BAR_WIDTH_FRACTION: f32 = 0.5;
/// Upper bound on `gridLines`; each interval costs a line and a tick label per frame.
pub const MAX_GRID_LINES: usize = 100;

/// Recognized chart options. Every key is optional in TOML.
///
/// ```toml
/// padding = 60
/// gridLines = 5
/// barWidthFraction = 0.5
/// unit = "°C"
/// theme = "dark"
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ChartConfig {
    /// Inset around the plot rectangle, in logical pixels.
    pub padding: f32,
    /// Number of intervals between horizontal grid lines.
    pub grid_lines: usize,
    /// Share of each category slot covered by its bar.
    pub bar_width_fraction: f32,
    /// Suffix appended to value and tick labels.
    pub unit: String,
    /// Text on/off; pixel snapshots turn it off to stay font-independent.
    pub draw_labels: bool,
    /// Theme preset name, see `theme::presets`.
    pub theme: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            grid_lines: DEFAULT_GRID_LINES,
            bar_width_fraction: DEFAULT_BAR_WIDTH_FRACTION,
            unit: String::new(),
            draw_labels: true,
            theme: "dark".to_string(),
        }
    }
}

impl ChartConfig {
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ChartError::InvalidConfig(format!("padding must be a non-negative number, got {}", self.padding)));
        }
        if self.grid_lines == 0 || self.grid_lines > MAX_GRID_LINES {
            return Err(ChartError::InvalidConfig(format!(
                "gridLines must be in 1..={MAX_GRID_LINES}, got {}",
                self.grid_lines
            )));
        }
        if !(self.bar_width_fraction > 0.0 && self.bar_width_fraction <= 1.0) {
            return Err(ChartError::InvalidConfig(format!(
                "barWidthFraction must be in (0, 1], got {}",
                self.bar_width_fraction
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ChartError> {
        let cfg: ChartConfig = toml::from_str(s).map_err(|e| ChartError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).with_context(|| format!("reading config '{}'", path.display()))?;
        let cfg = Self::from_toml_str(&text).with_context(|| format!("parsing config '{}'", path.display()))?;
        Ok(cfg)
    }

    pub fn resolved_theme(&self) -> Theme {
        theme::find(&self.theme)
    }
}
