//! Validated inputs for the sudden-expansion problem.

use crate::error::{ExpansionError, ExpansionResult};
use df_core::Real;
use df_gas::check_heat_ratio;

/// Default ratio of specific heats (diatomic gas).
pub const DEFAULT_SPECIFIC_HEAT_RATIO: Real = 1.4;

/// Flow parameters for a sudden area expansion with an external drag force.
///
/// All quantities are dimensionless. Constructed once per case and never
/// mutated; the whole computation is a pure function of these values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowParameters {
    /// Inlet Mach number
    pub inlet_mach: Real,
    /// Exit area / inlet area
    pub area_ratio: Real,
    /// Drag reference area / inlet area
    pub drag_area_ratio: Real,
    /// Drag coefficient
    pub drag_coefficient: Real,
    /// Ratio of specific heats cp/cv
    pub specific_heat_ratio: Real,
}

impl FlowParameters {
    /// Create parameters with the default specific heat ratio of 1.4.
    pub fn new(
        inlet_mach: Real,
        area_ratio: Real,
        drag_area_ratio: Real,
        drag_coefficient: Real,
    ) -> ExpansionResult<Self> {
        Self::with_heat_ratio(
            inlet_mach,
            area_ratio,
            drag_area_ratio,
            drag_coefficient,
            DEFAULT_SPECIFIC_HEAT_RATIO,
        )
    }

    /// Create parameters with an explicit specific heat ratio.
    ///
    /// Rejects the degenerate inputs the solver cannot handle: a
    /// non-positive or non-finite inlet Mach number or area ratio, a
    /// negative drag area, a non-finite drag coefficient, and a specific
    /// heat ratio at or below 1.
    pub fn with_heat_ratio(
        inlet_mach: Real,
        area_ratio: Real,
        drag_area_ratio: Real,
        drag_coefficient: Real,
        specific_heat_ratio: Real,
    ) -> ExpansionResult<Self> {
        if !(inlet_mach.is_finite() && inlet_mach > 0.0) {
            return Err(ExpansionError::InvalidParameter {
                what: "inlet Mach number",
                value: inlet_mach,
            });
        }
        if !(area_ratio.is_finite() && area_ratio > 0.0) {
            return Err(ExpansionError::InvalidParameter {
                what: "area ratio",
                value: area_ratio,
            });
        }
        if !(drag_area_ratio.is_finite() && drag_area_ratio >= 0.0) {
            return Err(ExpansionError::InvalidParameter {
                what: "drag area ratio",
                value: drag_area_ratio,
            });
        }
        if !drag_coefficient.is_finite() {
            return Err(ExpansionError::InvalidParameter {
                what: "drag coefficient",
                value: drag_coefficient,
            });
        }
        let specific_heat_ratio = check_heat_ratio(specific_heat_ratio)?;

        if inlet_mach >= 1.0 {
            tracing::warn!(inlet_mach, "inlet Mach number is not subsonic");
        }

        Ok(Self {
            inlet_mach,
            area_ratio,
            drag_area_ratio,
            drag_coefficient,
            specific_heat_ratio,
        })
    }
}
