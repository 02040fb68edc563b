//! Error types for gas relations.

use thiserror::Error;

/// Errors that can occur when evaluating perfect-gas relations.
#[derive(Error, Debug, Clone)]
pub enum GasError {
    #[error("Specific heat ratio must exceed 1, got {value}")]
    InvalidHeatRatio { value: f64 },
}

pub type GasResult<T> = Result<T, GasError>;
