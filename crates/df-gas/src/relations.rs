//! Isentropic stagnation relations for a calorically perfect gas.

use crate::error::{GasError, GasResult};
use df_core::Real;

/// Stagnation-to-static temperature ratio T0/T at Mach `m`.
pub fn stagnation_temperature_factor(k: Real, m: Real) -> Real {
    1.0 + 0.5 * (k - 1.0) * m * m
}

/// Stagnation-to-static pressure ratio p0/p at Mach `m`.
pub fn stagnation_pressure_factor(k: Real, m: Real) -> Real {
    stagnation_temperature_factor(k, m).powf(k / (k - 1.0))
}

/// Normalized mass-flow function at Mach `m`.
///
/// Mass flux per unit area referred to stagnation conditions is
/// proportional to m * (T0/T)^(-(k+1)/(2(k-1))). Peaks at m = 1.
pub fn flow_function(k: Real, m: Real) -> Real {
    let f = stagnation_temperature_factor(k, m);
    m * f.powf(-(k + 1.0) / (2.0 * (k - 1.0)))
}

/// Stream impulse per unit area normalized by stagnation pressure,
/// (1 + k m^2) * (T0/T)^(-k/(k-1)).
pub fn impulse_function(k: Real, m: Real) -> Real {
    let f = stagnation_temperature_factor(k, m);
    (1.0 + k * m * m) * f.powf(-k / (k - 1.0))
}

/// Validate a specific heat ratio before using the relations above.
pub fn check_heat_ratio(k: Real) -> GasResult<Real> {
    if k.is_finite() && k > 1.0 {
        Ok(k)
    } else {
        Err(GasError::InvalidHeatRatio { value: k })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_factor_at_sonic_condition() {
        // k = 1.4, m = 1: T0/T = 1.2 exactly
        assert!((stagnation_temperature_factor(1.4, 1.0) - 1.2).abs() < 1e-12);
    }

    #[test]
    fn pressure_factor_known_values() {
        // p0/p = 1 at rest, 1.892929 at m = 1 for air
        assert!((stagnation_pressure_factor(1.4, 0.0) - 1.0).abs() < 1e-12);
        assert!((stagnation_pressure_factor(1.4, 1.0) - 1.892929).abs() < 1e-5);
    }

    #[test]
    fn flow_function_peaks_at_sonic() {
        let peak = flow_function(1.4, 1.0);
        assert!(flow_function(1.4, 0.8) < peak);
        assert!(flow_function(1.4, 1.2) < peak);
        assert!((peak - 1.2_f64.powi(-3)).abs() < 1e-12);
    }

    #[test]
    fn impulse_function_at_rest() {
        assert!((impulse_function(1.4, 0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn heat_ratio_validation() {
        assert!(check_heat_ratio(1.4).is_ok());
        assert!(check_heat_ratio(1.0).is_err());
        assert!(check_heat_ratio(0.9).is_err());
        assert!(check_heat_ratio(f64::NAN).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn subsonic_flow_function_is_bounded_by_sonic(
            k in 1.1_f64..1.9,
            m in 0.01_f64..0.999,
        ) {
            let value = flow_function(k, m);
            prop_assert!(value > 0.0);
            prop_assert!(value <= flow_function(k, 1.0));
        }
    }
}
