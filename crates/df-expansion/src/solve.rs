//! Driver for the sudden-expansion flow solution.

use crate::error::ExpansionResult;
use crate::params::FlowParameters;
use crate::residuals::compute_residuals;
use df_core::{Real, ensure_finite};
use df_gas::stagnation_pressure_factor;
use df_solver::{NewtonRootFinder, RootFinder, RootReport, SolverError, SolverResult};
use nalgebra::DVector;

/// Trial state iterated by the root finder: exit Mach number and
/// stagnation pressure ratio Pt2/Pt1. Not exposed until convergence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolutionState {
    pub exit_mach: Real,
    pub pressure_ratio: Real,
}

/// Converged flow solution with derived loss metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlowResult {
    /// Exit Mach number
    pub exit_mach: Real,
    /// Stagnation pressure ratio Pt2/Pt1
    pub pressure_ratio: Real,
    /// 1 - Pt2/Pt1
    pub stagnation_pressure_loss: Real,
    /// Loss normalized by the inlet dynamic head 1 - p1/Pt1
    pub pressure_loss_coefficient: Real,
    /// Residual norm at convergence
    pub residual_norm: Real,
    /// Newton iterations used
    pub iterations: usize,
    /// Residual evaluations used
    pub evaluations: usize,
}

/// Stock pressure-ratio guess: assume a modest stagnation-pressure loss.
const INITIAL_PRESSURE_RATIO: Real = 0.9;

/// Stock initial guess: no immediate Mach change, modest pressure loss.
pub fn initial_guess(params: &FlowParameters) -> SolutionState {
    SolutionState {
        exit_mach: params.inlet_mach,
        pressure_ratio: INITIAL_PRESSURE_RATIO,
    }
}

/// Solve with the bundled Newton finder and the stock initial guess.
pub fn solve(params: &FlowParameters) -> ExpansionResult<FlowResult> {
    solve_with(params, &NewtonRootFinder::default())
}

/// Solve with a caller-provided root-finding strategy.
pub fn solve_with(
    params: &FlowParameters,
    finder: &dyn RootFinder,
) -> ExpansionResult<FlowResult> {
    solve_from(params, finder, initial_guess(params))
}

/// Solve from an explicit starting state.
///
/// A single attempt is made; a failure to converge is returned as an
/// error, never as a partial result.
pub fn solve_from(
    params: &FlowParameters,
    finder: &dyn RootFinder,
    guess: SolutionState,
) -> ExpansionResult<FlowResult> {
    let residual_fn = |x: &DVector<f64>| -> SolverResult<DVector<f64>> {
        let (continuity, momentum) = compute_residuals(
            SolutionState {
                exit_mach: x[0],
                pressure_ratio: x[1],
            },
            params,
        );
        Ok(DVector::from_vec(vec![continuity, momentum]))
    };

    let x0 = DVector::from_vec(vec![guess.exit_mach, guess.pressure_ratio]);
    let report = finder.find_root(x0, &residual_fn)?;

    // Anything short of an exact success is treated as non-convergence.
    if !report.converged {
        return Err(SolverError::ConvergenceFailed {
            what: format!(
                "root finder stopped after {} iterations without meeting tolerance",
                report.iterations
            ),
        }
        .into());
    }

    let state = SolutionState {
        exit_mach: ensure_finite(report.x[0], "exit Mach number")?,
        pressure_ratio: ensure_finite(report.x[1], "pressure ratio")?,
    };

    tracing::debug!(
        exit_mach = state.exit_mach,
        pressure_ratio = state.pressure_ratio,
        iterations = report.iterations,
        evaluations = report.evaluations,
        "expansion solve converged"
    );

    Ok(derive_result(state, params, &report))
}

/// Derive the reported loss metrics from a converged state.
///
/// The inlet stagnation factor is recomputed from the parameters so this
/// step stands on its own.
fn derive_result(
    state: SolutionState,
    params: &FlowParameters,
    report: &RootReport,
) -> FlowResult {
    let k = params.specific_heat_ratio;
    let loss = 1.0 - state.pressure_ratio;
    let inlet_head = 1.0 - stagnation_pressure_factor(k, params.inlet_mach).recip();

    FlowResult {
        exit_mach: state.exit_mach,
        pressure_ratio: state.pressure_ratio,
        stagnation_pressure_loss: loss,
        pressure_loss_coefficient: loss / inlet_head,
        residual_norm: report.residual_norm,
        iterations: report.iterations,
        evaluations: report.evaluations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_guess_reuses_inlet_mach() {
        let params = FlowParameters::new(0.45, 2.0, 0.5, 0.8).unwrap();
        let guess = initial_guess(&params);
        assert_eq!(guess.exit_mach, 0.45);
        assert_eq!(guess.pressure_ratio, 0.9);
    }

    #[test]
    fn loss_metrics_follow_pressure_ratio() {
        let params = FlowParameters::new(0.3, 2.0, 0.5, 0.8).unwrap();
        let result = solve(&params).unwrap();

        let expected_loss = 1.0 - result.pressure_ratio;
        assert!((result.stagnation_pressure_loss - expected_loss).abs() < 1e-12);

        let head = 1.0 - stagnation_pressure_factor(1.4, 0.3).recip();
        let expected_coeff = expected_loss / head;
        assert!((result.pressure_loss_coefficient - expected_coeff).abs() < 1e-12);
    }
}
