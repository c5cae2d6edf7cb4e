//! Unimodal test functions
//!
//! Single-optimum functions, the easiest sanity checks for a global
//! optimizer.

use ndarray::Array1;

/// Sphere function: f(x) = sum(x_i^2)
/// Global minimum f(x) = 0 at x = (0, ..., 0)
/// Bounds: typically x_i in [-5, 5]
pub fn sphere(x: &Array1<f64>) -> f64 {
	x.iter().map(|&xi| xi * xi).sum()
}

/// Rosenbrock function (any dimension >= 2):
/// f(x) = sum over i of 100*(x_{i+1} - x_i^2)^2 + (1 - x_i)^2
/// Global minimum f(x) = 0 at x = (1, ..., 1)
/// Bounds: typically x_i in [-5, 10] or [-100, 100]
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
	let n = x.len();
	let mut sum = 0.0;
	for i in 0..n - 1 {
		sum += 100.0 * (x[i + 1] - x[i].powi(2)).powi(2) + (1.0 - x[i]).powi(2);
	}
	sum
}

#[cfg(test)]
mod tests {
	use super::*;
	use ndarray::array;

	#[test]
	fn test_sphere_minimum() {
		assert_eq!(sphere(&array![0.0, 0.0, 0.0]), 0.0);
		assert_eq!(sphere(&array![1.0, 2.0]), 5.0);
	}

	#[test]
	fn test_rosenbrock_minimum() {
		assert_eq!(rosenbrock(&array![1.0, 1.0]), 0.0);
		assert_eq!(rosenbrock(&Array1::from(vec![1.0; 10])), 0.0);
		assert!(rosenbrock(&array![0.0, 0.0]) > 0.0);
	}
}
