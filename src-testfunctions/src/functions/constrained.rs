//! Constrained optimization test functions
//!
//! Constraint helpers return a violation amount: `<= 0` when satisfied,
//! positive when violated.

use ndarray::Array1;

/// Linear budget constraint for the n-dimensional Rosenbrock problem:
/// sum(x_i) <= 10, i.e. violation = sum(x_i) - 10.
///
/// The unconstrained optimum (1, ..., 1) satisfies it exactly for n = 10,
/// which makes this a good end-to-end check that constraint handling does
/// not push the solution off the optimum.
pub fn sum_budget_constraint(x: &Array1<f64>) -> f64 {
	x.sum() - 10.0
}

/// Disk constraint: x^2 + y^2 <= 2
pub fn disk_constraint(x: &Array1<f64>) -> f64 {
	x[0].powi(2) + x[1].powi(2) - 2.0
}
