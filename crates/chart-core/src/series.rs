// File: crates/chart-core/src/series.rs
// Summary: Series model (labeled observations) and the chart-kind discriminator.
// Notes:
// - Points are immutable once built; the engine only ever borrows a series.
// - The unchecked constructors trust the caller; `try_from_pairs` is the
//   checked entry point for data coming from outside.

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

/// Which of the two chart layouts to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Connected line with point markers (temperature).
    Continuous,
    /// Threshold-colored bars over stacked zones (air-quality index).
    Categorical,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Continuous => "continuous",
            ChartKind::Categorical => "categorical",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("continuous") {
            Ok(ChartKind::Continuous)
        } else if t.eq_ignore_ascii_case("categorical") {
            Ok(ChartKind::Categorical)
        } else {
            Err(ChartError::InvalidKind(s.to_string()))
        }
    }
}

/// One labeled observation, e.g. `("Today", 22.0)`.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    label: String,
    value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Ordered observations; index order is chronological order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    pub fn from_pairs<L, I>(pairs: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, f64)>,
    {
        Self { points: pairs.into_iter().map(|(l, v)| DataPoint::new(l, v)).collect() }
    }

    /// Build a series, rejecting NaN and infinite values.
    pub fn try_from_pairs<L, I>(pairs: I) -> Result<Self, ChartError>
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, f64)>,
    {
        let mut points = Vec::new();
        for (index, (label, value)) in pairs.into_iter().enumerate() {
            let label = label.into();
            if !value.is_finite() {
                return Err(ChartError::NonFiniteValue { index, label });
            }
            points.push(DataPoint { label, value });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest and largest value, or `None` for an empty series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut it = self.points.iter().map(DataPoint::value);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
