//! df-expansion: sudden area expansion with drag for dumpflow.
//!
//! Solves the one-dimensional momentum and continuity balance across a
//! sudden area expansion with an external drag force, for subsonic
//! compressible flow of a calorically perfect gas. The unknowns are the
//! exit Mach number and the stagnation pressure ratio; the stagnation
//! pressure loss and the pressure loss coefficient are derived from the
//! converged pair.
//!
//! # Example
//!
//! ```
//! use df_expansion::{FlowParameters, solve};
//!
//! let params = FlowParameters::new(0.3, 2.0, 0.5, 0.8).unwrap();
//! let result = solve(&params).unwrap();
//!
//! assert!(result.exit_mach < params.inlet_mach);
//! assert!(result.pressure_ratio <= 1.0);
//! ```

pub mod error;
pub mod params;
pub mod residuals;
pub mod solve;

pub use error::{ExpansionError, ExpansionResult};
pub use params::{DEFAULT_SPECIFIC_HEAT_RATIO, FlowParameters};
pub use residuals::compute_residuals;
pub use solve::{FlowResult, SolutionState, initial_guess, solve, solve_from, solve_with};
