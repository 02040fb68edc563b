//! Continuity and momentum residuals for the sudden expansion.

use crate::params::FlowParameters;
use crate::solve::SolutionState;
use df_core::Real;
use df_gas::{flow_function, impulse_function, stagnation_pressure_factor};

/// Evaluate the continuity and momentum residuals at a trial state.
///
/// Both residuals vanish exactly at the physically consistent exit state.
/// The function is total over real trial states: the root finder probes
/// unphysical combinations during iteration and must get numbers back,
/// not panics.
pub fn compute_residuals(state: SolutionState, params: &FlowParameters) -> (Real, Real) {
    let k = params.specific_heat_ratio;
    let m1 = params.inlet_mach;
    let m2 = state.exit_mach;
    let pr = state.pressure_ratio;
    let ar = params.area_ratio;

    // Mass balance through the stagnation-referred flow functions at the
    // two stations; energy is folded into the stagnation relations.
    let continuity = pr * ar * flow_function(k, m2) / flow_function(k, m1) - 1.0;

    // Momentum balance across the expansion, normalized by inlet
    // stagnation pressure. The external drag force enters through cd*ad
    // acting on the inlet dynamic head.
    let p1_over_pt1 = stagnation_pressure_factor(k, m1).recip();
    let momentum = pr * ar * impulse_function(k, m2)
        - p1_over_pt1 * (ar + k * m1 * m1)
        + params.drag_coefficient * params.drag_area_ratio * (1.0 - p1_over_pt1);

    (continuity, momentum)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_params() -> FlowParameters {
        FlowParameters::new(0.3, 1.0, 0.0, 0.0).unwrap()
    }

    #[test]
    fn residuals_vanish_at_identity_state() {
        // No area change and no drag: the inlet state satisfies both balances
        let state = SolutionState {
            exit_mach: 0.3,
            pressure_ratio: 1.0,
        };
        let (continuity, momentum) = compute_residuals(state, &identity_params());
        assert!(continuity.abs() < 1e-12);
        assert!(momentum.abs() < 1e-12);
    }

    #[test]
    fn residuals_are_nonzero_off_solution() {
        let state = SolutionState {
            exit_mach: 0.3,
            pressure_ratio: 0.9,
        };
        let (continuity, momentum) = compute_residuals(state, &identity_params());
        assert!(continuity.abs() > 1e-3);
        assert!(momentum.abs() > 1e-3);
    }

    #[test]
    fn drag_shifts_the_momentum_residual_only() {
        let state = SolutionState {
            exit_mach: 0.25,
            pressure_ratio: 0.95,
        };
        let without = FlowParameters::new(0.3, 2.0, 0.0, 0.0).unwrap();
        let with = FlowParameters::new(0.3, 2.0, 0.5, 0.8).unwrap();

        let (c0, m0) = compute_residuals(state, &without);
        let (c1, m1) = compute_residuals(state, &with);
        assert_eq!(c0, c1);
        assert!(m1 > m0);
    }

    #[test]
    fn evaluable_at_unphysical_trial_states() {
        // The root finder may probe negative Mach numbers or pressure
        // ratios; both residuals must stay finite there.
        let params = identity_params();
        for state in [
            SolutionState {
                exit_mach: -0.5,
                pressure_ratio: 0.9,
            },
            SolutionState {
                exit_mach: 0.5,
                pressure_ratio: -2.0,
            },
            SolutionState {
                exit_mach: 3.0,
                pressure_ratio: 10.0,
            },
        ] {
            let (continuity, momentum) = compute_residuals(state, &params);
            assert!(continuity.is_finite());
            assert!(momentum.is_finite());
        }
    }
}
