//! df-gas: perfect-gas compressible-flow relations for dumpflow.
//!
//! Provides the stagnation-state factors used by the expansion solver:
//! - stagnation temperature factor T0/T
//! - stagnation pressure factor p0/p
//! - normalized mass-flow function
//! - stream impulse function
//!
//! All quantities are dimensionless and assume a calorically perfect gas
//! with constant ratio of specific heats.

pub mod error;
pub mod relations;

pub use error::{GasError, GasResult};
pub use relations::*;
