//! Fixed-size collection of individuals with a cached best.

use crate::error::{DEError, Result};
use crate::individual::Individual;

/// Population of candidate solutions.
///
/// The size is fixed for the lifetime of the optimizer; slots are only
/// ever replaced in place. `best_individual` is a value copy, never a
/// reference into `individuals`: slots get overwritten by selection and
/// the cache must survive the overwrite of the slot it was copied from.
#[derive(Debug, Clone)]
pub struct Population {
	pub individuals: Vec<Individual>,
	pub best_individual: Individual,
}

impl Population {
	/// Population of `popsize` unevaluated individuals of dimension `dim`.
	pub fn new(popsize: usize, dim: usize) -> Self {
		let individuals = vec![Individual::zeros(dim); popsize];
		let best_individual = individuals[0].clone();
		Self { individuals, best_individual }
	}

	/// Population built from pre-evaluated individuals.
	///
	/// The best cache is seeded with a full scan, so `best()` semantics
	/// hold immediately after construction. `individuals` must not be
	/// empty.
	pub fn from_individuals(individuals: Vec<Individual>) -> Self {
		let best_individual = individuals[0].clone();
		let mut pop = Self { individuals, best_individual };
		pop.best();
		pop
	}

	/// Number of individuals.
	pub fn len(&self) -> usize {
		self.individuals.len()
	}

	pub fn is_empty(&self) -> bool {
		self.individuals.is_empty()
	}

	/// Checked access to an individual.
	pub fn get(&self, pos: usize) -> Result<&Individual> {
		self.individuals
			.get(pos)
			.ok_or(DEError::IndexOutOfRange { index: pos, popsize: self.individuals.len() })
	}

	/// Checked mutable access to an individual.
	pub fn get_mut(&mut self, pos: usize) -> Result<&mut Individual> {
		let popsize = self.individuals.len();
		self.individuals
			.get_mut(pos)
			.ok_or(DEError::IndexOutOfRange { index: pos, popsize })
	}

	/// Refresh and return the cached best individual.
	///
	/// Full O(popsize) rescan against the current cache; called once per
	/// generation, not per replacement.
	pub fn best(&mut self) -> &Individual {
		for i in 0..self.individuals.len() {
			if self.individuals[i].is_better(&self.best_individual) {
				self.best_individual = self.individuals[i].clone();
			}
		}

		&self.best_individual
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use ndarray::array;

	#[test]
	fn test_new_population_is_unevaluated() {
		let pop = Population::new(5, 2);
		assert_eq!(pop.len(), 5);
		for ind in &pop.individuals {
			assert_eq!(ind.fitness, f64::MAX);
			assert_eq!(ind.constraint, f64::MAX);
		}
		assert_eq!(pop.best_individual.constraint, f64::MAX);
	}

	#[test]
	fn test_get_out_of_range() {
		let pop = Population::new(4, 1);
		assert!(pop.get(3).is_ok());
		let err = pop.get(4).unwrap_err();
		assert!(err.is_index_error());
		assert!(matches!(err, DEError::IndexOutOfRange { index: 4, popsize: 4 }));
	}

	#[test]
	fn test_from_individuals_picks_feasible_lowest_fitness() {
		let pop = Population::from_individuals(vec![
			Individual::with_scores(array![1.0], 5.0, -1.0),
			Individual::with_scores(array![2.0], 1.0, 4.0),
			Individual::with_scores(array![3.0], 2.0, 0.0),
			Individual::with_scores(array![4.0], 9.0, -2.0),
		]);

		// Lowest fitness among the feasible ones, regardless of violations.
		assert_eq!(pop.best_individual.value, array![3.0]);
		assert_eq!(pop.best_individual.fitness, 2.0);
	}

	#[test]
	fn test_from_individuals_all_infeasible_picks_lowest_violation() {
		let pop = Population::from_individuals(vec![
			Individual::with_scores(array![1.0], f64::MAX, 3.0),
			Individual::with_scores(array![2.0], f64::MAX, 0.5),
			Individual::with_scores(array![3.0], f64::MAX, 2.0),
			Individual::with_scores(array![4.0], f64::MAX, 8.0),
		]);

		assert_eq!(pop.best_individual.value, array![2.0]);
		assert_eq!(pop.best_individual.constraint, 0.5);
	}

	#[test]
	fn test_best_cache_is_a_value_copy() {
		let mut pop = Population::from_individuals(vec![
			Individual::with_scores(array![1.0], 1.0, -1.0),
			Individual::with_scores(array![2.0], 2.0, -1.0),
			Individual::with_scores(array![3.0], 3.0, -1.0),
			Individual::with_scores(array![4.0], 4.0, -1.0),
		]);
		assert_eq!(pop.best_individual.fitness, 1.0);

		// Overwrite the slot the cache was copied from; the cache must
		// keep reporting the previously seen best.
		pop.individuals[0] = Individual::with_scores(array![9.0], 9.0, -1.0);
		let best = pop.best().clone();
		assert_eq!(best.fitness, 1.0);
		assert_eq!(best.value, array![1.0]);
	}

	#[test]
	fn test_best_improves_monotonically() {
		let mut pop = Population::from_individuals(vec![
			Individual::with_scores(array![5.0], 5.0, -1.0),
			Individual::with_scores(array![6.0], 6.0, -1.0),
			Individual::with_scores(array![7.0], 7.0, -1.0),
			Individual::with_scores(array![8.0], 8.0, -1.0),
		]);
		assert_eq!(pop.best_individual.fitness, 5.0);

		pop.individuals[2] = Individual::with_scores(array![0.5], 0.5, -1.0);
		assert_eq!(pop.best().fitness, 0.5);

		// A worse replacement never degrades the cache.
		pop.individuals[2] = Individual::with_scores(array![9.0], 9.0, -1.0);
		assert_eq!(pop.best().fitness, 0.5);
	}
}
