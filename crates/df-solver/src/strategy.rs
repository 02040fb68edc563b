//! Root-finding strategy abstraction.
//!
//! Abstracts "solve F(x) = 0 from an initial guess" behind a trait so a
//! caller can substitute Newton, Broyden, or a library solver without
//! touching its own contract.

use crate::error::SolverResult;
use crate::jacobian::{DifferenceScheme, finite_difference_jacobian};
use crate::newton::{NewtonConfig, newton_solve};
use nalgebra::DVector;
use std::cell::Cell;

/// Residual function signature accepted by root finders.
pub type ResidualFn<'a> = &'a dyn Fn(&DVector<f64>) -> SolverResult<DVector<f64>>;

/// Outcome of a root-finding attempt.
#[derive(Clone, Debug)]
pub struct RootReport {
    /// Final iterate
    pub x: DVector<f64>,
    /// Final residual norm
    pub residual_norm: f64,
    /// Number of iterations
    pub iterations: usize,
    /// Residual-function evaluations, Jacobian probes included
    pub evaluations: usize,
    /// Converged flag
    pub converged: bool,
}

/// Strategy for solving a square nonlinear system F(x) = 0.
pub trait RootFinder {
    fn find_root(&self, x0: DVector<f64>, residual: ResidualFn<'_>) -> SolverResult<RootReport>;
}

/// Damped Newton iteration with a forward finite-difference Jacobian.
#[derive(Debug, Clone, Default)]
pub struct NewtonRootFinder {
    pub config: NewtonConfig,
}

impl NewtonRootFinder {
    pub fn new(config: NewtonConfig) -> Self {
        Self { config }
    }
}

impl RootFinder for NewtonRootFinder {
    fn find_root(&self, x0: DVector<f64>, residual: ResidualFn<'_>) -> SolverResult<RootReport> {
        let evaluations = Cell::new(0usize);
        let counted = |x: &DVector<f64>| {
            evaluations.set(evaluations.get() + 1);
            residual(x)
        };
        let jacobian = |x: &DVector<f64>| {
            finite_difference_jacobian(x, &counted, self.config.fd_epsilon, DifferenceScheme::Forward)
        };

        let result = newton_solve(x0, &counted, &jacobian, &self.config)?;
        tracing::debug!(
            iterations = result.iterations,
            evaluations = evaluations.get(),
            residual_norm = result.residual_norm,
            "Newton root finder finished"
        );

        Ok(RootReport {
            x: result.x,
            residual_norm: result.residual_norm,
            iterations: result.iterations,
            evaluations: evaluations.get(),
            converged: result.converged,
        })
    }
}
