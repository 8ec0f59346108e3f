// File: crates/chart-core/src/scale.rs
// Summary: Value domain policy per chart kind and the linear value -> pixel transform.

use crate::series::{ChartKind, Series};

/// Fixed headroom added around continuous extrema, in data units.
pub const CONTINUOUS_PADDING: f64 = 2.0;
/// Categorical domains never end below this ceiling (top of the "moderate" band).
pub const CATEGORICAL_CEILING: f64 = 100.0;
/// Categorical domains never start above this floor.
pub const CATEGORICAL_FLOOR: f64 = 0.0;

/// Value range mapped onto the plot's vertical extent.
/// Contract: `max > min` when built through `Domain::new`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Build a domain, widening it to a unit span if `max <= min`.
    pub fn new(min: f64, max: f64) -> Self {
        if max > min {
            Self { min, max }
        } else {
            Self { min, max: min + 1.0 }
        }
    }

    /// Width of the domain; a collapsed domain counts as 1 so callers can divide by it.
    #[inline]
    pub fn span(&self) -> f64 {
        let s = self.max - self.min;
        if s == 0.0 { 1.0 } else { s }
    }

    /// Value at fraction `t` of the way from `min` to `max`.
    #[inline]
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + t * (self.max - self.min)
    }
}

/// Derive the domain for `series` under the padding rule of `kind`.
pub fn compute_domain(series: &Series, kind: ChartKind) -> Domain {
    match kind {
        ChartKind::Continuous => {
            let (lo, hi) = series.value_range().unwrap_or((0.0, 0.0));
            Domain::new(lo.floor() - CONTINUOUS_PADDING, hi.ceil() + CONTINUOUS_PADDING)
        }
        ChartKind::Categorical => {
            let (lo, hi) = series.value_range().unwrap_or((CATEGORICAL_FLOOR, CATEGORICAL_CEILING));
            Domain::new(lo.min(CATEGORICAL_FLOOR), hi.max(CATEGORICAL_CEILING))
        }
    }
}

/// Linear interpolation of `value` from `domain` into `range = (start, end)`.
#[inline]
pub fn map_to_pixel(value: f64, domain: &Domain, range: (f32, f32)) -> f32 {
    let (start, end) = range;
    start + ((value - domain.min) / domain.span()) as f32 * (end - start)
}

/// Vertical value scale: `domain.min` sits on `bottom_px`, `domain.max` on `top_px`.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub domain: Domain,
}

impl ValueScale {
    pub fn new(top_px: f32, bottom_px: f32, domain: Domain) -> Self {
        Self { top_px, bottom_px, domain }
    }

    /// Distance above the baseline for `v`, in pixels.
    #[inline]
    pub fn height_of(&self, v: f64) -> f32 {
        map_to_pixel(v, &self.domain, (0.0, self.bottom_px - self.top_px))
    }

    /// Screen y for `v` (y grows downward).
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.bottom_px - self.height_of(v)
    }
}
