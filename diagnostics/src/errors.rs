//! Error types for the diagnostics crate.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticsError {
    #[error("unknown curve name: {0}")]
    UnknownCurve(String),
    #[error(transparent)]
    Curve(#[from] binary_curve::Error),
}
