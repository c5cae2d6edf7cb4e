//! A candidate solution together with its fitness and constraint values.

use ndarray::Array1;

/// Member of a population in population-based optimization algorithms.
///
/// `fitness` is meaningful only when `constraint <= 0`; both scalars start
/// at `f64::MAX`, meaning "not evaluated yet, treat as infeasible".
#[derive(Debug, Clone)]
pub struct Individual {
	/// Candidate point, one coordinate per problem dimension
	pub value: Array1<f64>,
	/// Objective value, minimized; `f64::MAX` until evaluated
	pub fitness: f64,
	/// Aggregate constraint violation; `<= 0` means feasible
	pub constraint: f64,
}

impl Individual {
	/// Unevaluated individual of dimension `dim` at the origin.
	pub fn zeros(dim: usize) -> Self {
		Self::new(Array1::zeros(dim))
	}

	/// Unevaluated individual at `value`.
	pub fn new(value: Array1<f64>) -> Self {
		Self { value, fitness: f64::MAX, constraint: f64::MAX }
	}

	/// Individual with known fitness and constraint values.
	pub fn with_scores(value: Array1<f64>, fitness: f64, constraint: f64) -> Self {
		Self { value, fitness, constraint }
	}

	/// True when this individual satisfies the constraints.
	pub fn is_feasible(&self) -> bool {
		self.constraint <= 0.0
	}

	/// Selection predicate following the Lampinen dominance rules.
	///
	/// `self` is NOT better when any of:
	/// 1. `other` is feasible with fitness at least as good as `self`'s,
	/// 2. `other` is feasible while `self` is not,
	/// 3. both are infeasible and `other` violates strictly less.
	///
	/// Note the asymmetry: a fitness tie between feasible individuals goes
	/// to `other`, a violation tie between infeasible ones goes to `self`.
	/// This matches the published selection scheme and is relied upon by
	/// the engine; keep it exact.
	pub fn is_better(&self, other: &Individual) -> bool {
		if ((other.constraint <= 0.0) && (other.fitness <= self.fitness))
			|| ((other.constraint <= 0.0) && (self.constraint > 0.0))
			|| ((other.constraint > 0.0) && (other.constraint < self.constraint))
		{
			return false;
		}

		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use ndarray::array;

	fn feasible(fitness: f64) -> Individual {
		Individual::with_scores(array![0.0, 0.0], fitness, -1.0)
	}

	fn infeasible(constraint: f64) -> Individual {
		Individual::with_scores(array![0.0, 0.0], f64::MAX, constraint)
	}

	#[test]
	fn test_default_scores_are_sentinels() {
		let ind = Individual::zeros(3);
		assert_eq!(ind.value.len(), 3);
		assert_eq!(ind.fitness, f64::MAX);
		assert_eq!(ind.constraint, f64::MAX);
		assert!(!ind.is_feasible());
	}

	#[test]
	fn test_feasible_beats_infeasible() {
		let a = feasible(1e12);
		let b = infeasible(1e-9);

		assert!(a.is_better(&b));
		assert!(!b.is_better(&a));
	}

	#[test]
	fn test_feasible_lower_fitness_wins() {
		let better = feasible(1.0);
		let worse = feasible(2.0);

		assert!(better.is_better(&worse));
		assert!(!worse.is_better(&better));
	}

	#[test]
	fn test_feasible_fitness_tie_goes_to_other() {
		let a = feasible(1.0);
		let b = feasible(1.0);

		// Neither strictly dominates; the incumbent ("other") keeps its slot.
		assert!(!a.is_better(&b));
		assert!(!b.is_better(&a));
	}

	#[test]
	fn test_infeasible_lower_violation_wins() {
		let better = infeasible(0.5);
		let worse = infeasible(2.0);

		assert!(better.is_better(&worse));
		assert!(!worse.is_better(&better));
	}

	#[test]
	fn test_infeasible_violation_tie_goes_to_self() {
		let a = infeasible(1.0);
		let b = infeasible(1.0);

		assert!(a.is_better(&b));
		assert!(b.is_better(&a));
	}

	#[test]
	fn test_zero_constraint_counts_as_feasible() {
		let boundary = Individual::with_scores(array![1.0], 3.0, 0.0);
		let strict = Individual::with_scores(array![1.0], 2.0, -1.0);

		assert!(boundary.is_feasible());
		assert!(strict.is_better(&boundary));
		assert!(!boundary.is_better(&strict));
	}
}
