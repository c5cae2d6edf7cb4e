//! Optimization test functions library
//!
//! A small collection of benchmark functions for validating global
//! optimizers, organized by category:
//!
//! - **Unimodal**: single global optimum (sphere, rosenbrock, ...)
//! - **Multimodal**: many local minima (ackley, rastrigin, schaffer N.2)
//! - **Constrained**: objectives paired with inequality constraints
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use globopt_testfunctions::{create_bounds, sphere};
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! assert_eq!(sphere(&x), 0.0);
//!
//! let bounds = create_bounds(2, -5.0, 5.0);
//! assert_eq!(bounds.len(), 2);
//! ```

pub mod functions;
pub use functions::*;

/// Create a uniform bounds vector: `n` copies of `(lower, upper)`.
pub fn create_bounds(n: usize, lower: f64, upper: f64) -> Vec<(f64, f64)> {
	vec![(lower, upper); n]
}
