//! df-solver: nonlinear root finding for dumpflow.
//!
//! This crate provides a damped Newton iteration with finite-difference
//! Jacobians for small square systems F(x) = 0, behind an injectable
//! `RootFinder` strategy trait so callers can swap the iteration scheme
//! without changing their own contract.

pub mod error;
pub mod jacobian;
pub mod newton;
pub mod strategy;

pub use error::{SolverError, SolverResult};
pub use jacobian::{DifferenceScheme, finite_difference_jacobian};
pub use newton::{NewtonConfig, NewtonResult, newton_solve};
pub use strategy::{NewtonRootFinder, ResidualFn, RootFinder, RootReport};
