use ndarray::Array1;

use crate::error::Result;
use crate::{DEConfig, DEReport, DiffEvolution};

/// Convenience function mirroring SciPy's API shape (simplified):
/// - `func`: objective function mapping x -> f(x), minimized
/// - `bounds`: vector of (lower, upper) pairs, one per dimension
/// - `config`: DE configuration
pub fn differential_evolution<F>(
	func: &F,
	bounds: &[(f64, f64)],
	config: DEConfig,
) -> Result<DEReport>
where
	F: Fn(&Array1<f64>) -> f64,
{
	let mut de = DiffEvolution::new(func, bounds.to_vec(), config)?;
	Ok(de.solve())
}

/// Constrained variant: `constraints` maps x to an aggregate violation,
/// `<= 0` meaning feasible, handled with the Lampinen selection rules.
pub fn differential_evolution_constrained<F, C>(
	func: &F,
	constraints: &C,
	bounds: &[(f64, f64)],
	config: DEConfig,
) -> Result<DEReport>
where
	F: Fn(&Array1<f64>) -> f64,
	C: Fn(&Array1<f64>) -> f64,
{
	let mut de = DiffEvolution::with_constraints(func, constraints, bounds.to_vec(), config)?;
	Ok(de.solve())
}
