// File: crates/chart-core/src/error.rs
// Summary: Error type for configuration and call-contract violations.

use thiserror::Error;

/// Errors raised by the chart engine.
///
/// Data conditions (empty series, tiny surfaces, flat domains) are never
/// errors; they degrade the drawing instead. Only contract violations land here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("unknown chart kind '{0}' (expected 'continuous' or 'categorical')")]
    InvalidKind(String),

    #[error("invalid chart configuration: {0}")]
    InvalidConfig(String),

    #[error("non-finite value at index {index} (label '{label}')")]
    NonFiniteValue { index: usize, label: String },

    #[error("drawing surface error: {0}")]
    Surface(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
