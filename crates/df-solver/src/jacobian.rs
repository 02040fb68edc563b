//! Finite difference Jacobian approximation.

use crate::error::SolverResult;
use nalgebra::{DMatrix, DVector};

/// Differencing scheme used for each Jacobian column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifferenceScheme {
    /// Forward differences: one extra evaluation per column.
    Forward,
    /// Central differences: two extra evaluations per column, second-order
    /// accurate.
    Central,
}

/// Perturbation step for a column, scaled to the magnitude of the variable.
fn step_size(x_j: f64, epsilon: f64) -> f64 {
    epsilon * x_j.abs().max(1.0)
}

/// Approximate the Jacobian of `f` at `x` column by column.
pub fn finite_difference_jacobian<F>(
    x: &DVector<f64>,
    f: F,
    epsilon: f64,
    scheme: DifferenceScheme,
) -> SolverResult<DMatrix<f64>>
where
    F: Fn(&DVector<f64>) -> SolverResult<DVector<f64>>,
{
    let n = x.len();
    let f_x = f(x)?;
    let m = f_x.len();

    let mut jac = DMatrix::zeros(m, n);

    for j in 0..n {
        let dx = step_size(x[j], epsilon);

        let column = match scheme {
            DifferenceScheme::Forward => {
                let mut x_plus = x.clone();
                x_plus[j] += dx;
                (f(&x_plus)? - &f_x) / dx
            }
            DifferenceScheme::Central => {
                let mut x_plus = x.clone();
                x_plus[j] += dx;
                let mut x_minus = x.clone();
                x_minus[j] -= dx;
                (f(&x_plus)? - f(&x_minus)?) / (2.0 * dx)
            }
        };

        jac.set_column(j, &column);
    }

    Ok(jac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jacobian_linear() {
        // f(x) = 2*x, J = 2
        let f = |x: &DVector<f64>| -> SolverResult<DVector<f64>> {
            Ok(DVector::from_element(1, 2.0 * x[0]))
        };

        let x = DVector::from_element(1, 3.0);
        let jac = finite_difference_jacobian(&x, f, 1e-7, DifferenceScheme::Forward).unwrap();

        assert!((jac[(0, 0)] - 2.0).abs() < 1e-5);
    }

    #[test]
    fn jacobian_quadratic() {
        // f(x) = x^2, J = 2*x
        let f = |x: &DVector<f64>| -> SolverResult<DVector<f64>> {
            Ok(DVector::from_element(1, x[0] * x[0]))
        };

        let x = DVector::from_element(1, 3.0);
        let jac = finite_difference_jacobian(&x, f, 1e-7, DifferenceScheme::Forward).unwrap();

        assert!((jac[(0, 0)] - 6.0).abs() < 1e-5);
    }

    #[test]
    fn central_jacobian_coupled_system() {
        // f(x, y) = (x*y, x + y^2), J = [[y, x], [1, 2y]]
        let f = |x: &DVector<f64>| -> SolverResult<DVector<f64>> {
            Ok(DVector::from_vec(vec![x[0] * x[1], x[0] + x[1] * x[1]]))
        };

        let x = DVector::from_vec(vec![2.0, 3.0]);
        let jac = finite_difference_jacobian(&x, f, 1e-6, DifferenceScheme::Central).unwrap();

        assert!((jac[(0, 0)] - 3.0).abs() < 1e-6);
        assert!((jac[(0, 1)] - 2.0).abs() < 1e-6);
        assert!((jac[(1, 0)] - 1.0).abs() < 1e-6);
        assert!((jac[(1, 1)] - 6.0).abs() < 1e-6);
    }
}
