// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart engine, surfaces and data model.

pub mod aqi;
pub mod axis;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod layout;
pub mod legend;
pub mod plot;
pub mod record;
pub mod scale;
pub mod series;
pub mod skia_surface;
pub mod surface;
pub mod text;
pub mod theme;
pub mod zones;

pub use aqi::AqiLevel;
pub use config::ChartConfig;
pub use engine::{ChartEngine, RenderOptions};
pub use error::ChartError;
pub use layout::{compute_layout, Layout};
pub use record::{DrawCommand, RecordingSurface};
pub use scale::{compute_domain, map_to_pixel, Domain};
pub use series::{ChartKind, DataPoint, Series};
pub use skia_surface::SkiaSurface;
pub use surface::{Surface, TextAlign};
pub use theme::Theme;
pub use text::TextShaper;
pub use zones::{tier_for, ColorBand, Tier};
