//! Multimodal test functions
//!
//! Functions with many local minima; gradient methods get trapped,
//! population methods should not.

use std::f64::consts::{E, PI};

use ndarray::Array1;

/// Ackley function (2-D form):
/// f(x) = -20*exp(-0.2*sqrt(0.5*(x^2+y^2))) - exp(0.5*(cos(2*pi*x)+cos(2*pi*y))) + 20 + e
/// Global minimum f(x) = 0 at x = (0, 0)
/// Bounds: typically x_i in [-5, 5]
pub fn ackley(x: &Array1<f64>) -> f64 {
	let arg1 = -0.2 * (0.5 * (x[0].powi(2) + x[1].powi(2))).sqrt();
	let arg2 = 0.5 * ((2.0 * PI * x[0]).cos() + (2.0 * PI * x[1]).cos());
	-20.0 * arg1.exp() - arg2.exp() + 20.0 + E
}

/// Schaffer function N.2:
/// f(x) = 0.5 + (sin^2(x^2 - y^2) - 0.5) / (1 + 0.001*(x^2 + y^2))^2
/// Global minimum f(x) = 0 at x = (0, 0)
/// Bounds: typically x_i in [-100, 100]
pub fn schaffer_n2(x: &Array1<f64>) -> f64 {
	let arg1 = (x[0].powi(2) - x[1].powi(2)).sin().powi(2) - 0.5;
	let arg2 = (1.0 + 0.001 * (x[0].powi(2) + x[1].powi(2))).powi(2);
	0.5 + arg1 / arg2
}

/// Rastrigin function:
/// f(x) = 10*n + sum(x_i^2 - 10*cos(2*pi*x_i))
/// Global minimum f(x) = 0 at x = (0, ..., 0)
/// Bounds: typically x_i in [-5.12, 5.12]
pub fn rastrigin(x: &Array1<f64>) -> f64 {
	let n = x.len() as f64;
	10.0 * n + x.iter().map(|&xi| xi.powi(2) - 10.0 * (2.0 * PI * xi).cos()).sum::<f64>()
}
