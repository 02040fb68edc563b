//! Damped Newton iteration with positivity constraints.

use crate::error::{SolverError, SolverResult};
use nalgebra::DVector;

/// Newton solver configuration.
#[derive(Debug, Clone)]
pub struct NewtonConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance for residual norm
    pub abs_tol: f64,
    /// Relative tolerance against the initial residual norm
    pub rel_tol: f64,
    /// Positivity floor applied to every unknown during line search
    pub min_value: f64,
    /// Line search backtracking factor
    pub line_search_beta: f64,
    /// Maximum line search iterations
    pub max_line_search_iters: usize,
    /// Relative perturbation for finite-difference Jacobians
    pub fd_epsilon: f64,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            abs_tol: 1e-8,
            rel_tol: 1e-8,
            min_value: 1e-9,
            line_search_beta: 0.5,
            max_line_search_iters: 20,
            fd_epsilon: 1e-7,
        }
    }
}

/// Newton iteration result.
#[derive(Clone, Debug)]
pub struct NewtonResult {
    /// Solution vector
    pub x: DVector<f64>,
    /// Final residual norm
    pub residual_norm: f64,
    /// Number of iterations
    pub iterations: usize,
    /// Converged flag
    pub converged: bool,
}

/// Newton solver with backtracking line search and a positivity floor.
pub fn newton_solve<F, J>(
    x0: DVector<f64>,
    residual_fn: F,
    jacobian_fn: J,
    config: &NewtonConfig,
) -> SolverResult<NewtonResult>
where
    F: Fn(&DVector<f64>) -> SolverResult<DVector<f64>>,
    J: Fn(&DVector<f64>) -> SolverResult<nalgebra::DMatrix<f64>>,
{
    let mut x = x0;
    let mut r = residual_fn(&x)?;
    let mut r_norm = r.norm();
    let r0_norm = r_norm;

    if !r_norm.is_finite() {
        return Err(SolverError::Numeric {
            what: "non-finite residual at initial guess".to_string(),
        });
    }

    for iter in 0..config.max_iterations {
        // Check convergence
        if r_norm < config.abs_tol || r_norm < config.rel_tol * r0_norm {
            return Ok(NewtonResult {
                x,
                residual_norm: r_norm,
                iterations: iter,
                converged: true,
            });
        }

        // Compute Jacobian and solve J * dx = -r
        let jac = jacobian_fn(&x)?;
        let dx = jac
            .lu()
            .solve(&(-r.clone()))
            .ok_or_else(|| SolverError::Numeric {
                what: "Jacobian solve failed".to_string(),
            })?;

        // Line search with positivity constraints
        let mut alpha = 1.0;
        let mut x_new = &x + alpha * &dx;
        let mut r_new = residual_fn(&x_new)?;
        let mut r_new_norm = r_new.norm();

        for _ in 0..config.max_line_search_iters {
            let valid =
                r_new_norm.is_finite() && x_new.iter().all(|&v| v >= config.min_value);

            // Check residual reduction
            if valid && r_new_norm < r_norm {
                break;
            }

            // Backtrack
            alpha *= config.line_search_beta;
            x_new = &x + alpha * &dx;
            r_new = residual_fn(&x_new)?;
            r_new_norm = r_new.norm();
        }

        // Update solution
        x = x_new;
        r = r_new;
        r_norm = r_new_norm;

        if !r_norm.is_finite() {
            return Err(SolverError::Numeric {
                what: format!("non-finite residual at iteration {iter}"),
            });
        }

        // Check for stagnation
        if alpha < 1e-10 {
            return Err(SolverError::ConvergenceFailed {
                what: format!("line search stagnated at iteration {iter}"),
            });
        }
    }

    Err(SolverError::ConvergenceFailed {
        what: format!(
            "maximum iterations {} reached, residual = {}",
            config.max_iterations, r_norm
        ),
    })
}
