//! Error types for the expansion solver.

use df_core::CoreError;
use df_gas::GasError;
use df_solver::SolverError;
use thiserror::Error;

/// Errors that can occur while setting up or solving an expansion case.
#[derive(Error, Debug)]
pub enum ExpansionError {
    #[error("Invalid parameter: {what} = {value}")]
    InvalidParameter { what: &'static str, value: f64 },

    #[error("Gas relation error: {0}")]
    Gas(#[from] GasError),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("Numeric error: {0}")]
    Numeric(#[from] CoreError),
}

pub type ExpansionResult<T> = Result<T, ExpansionError>;
