//! The Differential Evolution engine.

use ndarray::Array1;
use rand::SeedableRng;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;

use crate::crossover_binomial::binomial_crossover;
use crate::ensure_bounds::ensure_bounds;
use crate::error::{DEError, Result};
use crate::individual::Individual;
use crate::mutant_best1::mutant_best1;
use crate::mutant_rand1::mutant_rand1;
use crate::population::Population;
use crate::{DEConfig, DEReport};

/// Constraint function used when none is supplied: every point feasible.
fn unconstrained(_x: &Array1<f64>) -> f64 {
	0.0
}

/// Differential Evolution optimizer with Lampinen constraint handling.
///
/// The engine owns one population and a single RNG stream; instances are
/// not thread-safe and a finished engine is not reusable. Typical usage
/// is `new` -> `optimize()`/`solve()`; `initialize()` and `iterate()` are
/// public for callers that want to drive generations themselves.
///
/// The fitness and constraint callables must be cheap to invoke
/// repeatedly; a panic inside either unwinds through the engine with the
/// current candidate left unreplaced.
pub struct DiffEvolution<F, C>
where
	F: Fn(&Array1<f64>) -> f64,
	C: Fn(&Array1<f64>) -> f64,
{
	fitness: F,
	constraints: C,
	bounds: Vec<(f64, f64)>,
	dim: usize,
	config: DEConfig,
	popsize: usize,

	population: Population,
	bound_samplers: Vec<Uniform<f64>>,
	rng: StdRng,
	// Shared mutation factor, resampled once per generation
	mutation: f64,
	initialized: bool,
	nit: usize,
	nfev: usize,
}

impl<F> DiffEvolution<F, fn(&Array1<f64>) -> f64>
where
	F: Fn(&Array1<f64>) -> f64,
{
	/// Unconstrained optimizer: every candidate is feasible.
	pub fn new(fitness: F, bounds: Vec<(f64, f64)>, config: DEConfig) -> Result<Self> {
		Self::with_constraints(fitness, unconstrained, bounds, config)
	}
}

impl<F, C> DiffEvolution<F, C>
where
	F: Fn(&Array1<f64>) -> f64,
	C: Fn(&Array1<f64>) -> f64,
{
	/// Constrained optimizer.
	///
	/// `constraints` maps a candidate to a scalar aggregate violation;
	/// `<= 0` means feasible. Configuration is validated here and nothing
	/// is evaluated: an `Err` leaves no partially constructed engine.
	pub fn with_constraints(
		fitness: F,
		constraints: C,
		bounds: Vec<(f64, f64)>,
		config: DEConfig,
	) -> Result<Self> {
		let dim = bounds.len();
		if dim == 0 {
			return Err(DEError::EmptyBounds);
		}

		let popsize = config.popsize * dim;
		if popsize <= 3 {
			return Err(DEError::PopulationTooSmall { popsize });
		}

		config.mutation.validate()?;
		if !(0.0..=1.0).contains(&config.recombination) {
			return Err(DEError::InvalidRecombination { rate: config.recombination });
		}

		// One uniform sampler per dimension, precomputed once; also the
		// point where an empty [low, high) range is rejected.
		let mut bound_samplers = Vec::with_capacity(dim);
		for (index, &(lower, upper)) in bounds.iter().enumerate() {
			let sampler = Uniform::new(lower, upper)
				.map_err(|_| DEError::InvalidBounds { index, lower, upper })?;
			bound_samplers.push(sampler);
		}

		let rng = match config.seed {
			Some(s) => StdRng::seed_from_u64(s),
			None => {
				let mut thread_rng = rand::rng();
				StdRng::from_rng(&mut thread_rng)
			}
		};

		Ok(Self {
			fitness,
			constraints,
			bounds,
			dim,
			config,
			popsize,
			population: Population::new(popsize, dim),
			bound_samplers,
			rng,
			mutation: 0.0,
			initialized: false,
			nit: 0,
			nfev: 0,
		})
	}

	/// Problem dimension.
	pub fn dim(&self) -> usize {
		self.dim
	}

	/// Effective population size (multiplier * dim).
	pub fn popsize(&self) -> usize {
		self.popsize
	}

	/// The population; mostly useful for inspection in tests and tooling.
	pub fn population(&self) -> &Population {
		&self.population
	}

	/// Best individual seen so far.
	pub fn best(&self) -> &Individual {
		&self.population.best_individual
	}

	/// Fill the population with uniform draws from the bounds and score it.
	///
	/// Fitness is only computed for feasible members; infeasible ones keep
	/// the `f64::MAX` sentinel so no objective evaluation is wasted on a
	/// point the selection rule will judge by violation alone.
	pub fn initialize(&mut self) {
		for i in 0..self.popsize {
			for j in 0..self.dim {
				self.population.individuals[i].value[j] =
					self.bound_samplers[j].sample(&mut self.rng);
			}

			let constraint = (self.constraints)(&self.population.individuals[i].value);
			self.population.individuals[i].constraint = constraint;

			if constraint <= 0.0 {
				let fitness = (self.fitness)(&self.population.individuals[i].value);
				self.population.individuals[i].fitness = fitness;
				self.nfev += 1;
			}
		}

		self.population.best();
		self.initialized = true;
	}

	/// Build the trial vector for candidate `pos`.
	///
	/// Feasible candidates exploit with best/1, infeasible ones explore
	/// with rand/1; binomial crossover then mixes the mutant with the
	/// parent and out-of-bounds coordinates are redrawn within bounds.
	fn crossover(&mut self, pos: usize) -> Array1<f64> {
		let mutant = if self.population.individuals[pos].constraint <= 0.0 {
			mutant_best1(pos, &self.population, self.mutation, &mut self.rng)
		} else {
			mutant_rand1(pos, &self.population, self.mutation, &mut self.rng)
		};

		let mut trial = binomial_crossover(
			&self.population.individuals[pos].value,
			&mutant,
			self.config.recombination,
			&mut self.rng,
		);

		ensure_bounds(&mut trial, &self.bounds, &self.bound_samplers, &mut self.rng);

		trial
	}

	/// Advance the population by one generation.
	///
	/// Returns true when at least one slot was replaced by its trial.
	pub fn iterate(&mut self) -> bool {
		if !self.initialized {
			self.initialize();
		}

		let mut found_better = false;

		self.mutation = self.config.mutation.sample(&mut self.rng);

		for i in 0..self.popsize {
			let mut trial = Individual::new(self.crossover(i));
			trial.constraint = (self.constraints)(&trial.value);

			if trial.constraint <= 0.0 {
				trial.fitness = (self.fitness)(&trial.value);
				self.nfev += 1;
			}

			if trial.is_better(&self.population.individuals[i]) {
				self.population.individuals[i] = trial;
				found_better = true;
			}
		}

		self.population.best();
		self.nit += 1;

		found_better
	}

	/// Run generations until the iteration budget or the stagnation
	/// window is exhausted, and return the best candidate found.
	pub fn optimize(&mut self) -> Array1<f64> {
		if !self.initialized {
			self.initialize();
		}

		let mut last_better = 0usize;

		for iter in 0..self.config.maxiter {
			if self.iterate() {
				last_better = iter;
			}

			if self.config.disp {
				let best = &self.population.best_individual;
				eprintln!(
					"DE iter {:4}  best_f={:.6e}  best_c={:.3e}  F={:.3}",
					iter + 1,
					best.fitness,
					best.constraint,
					self.mutation
				);
			}

			if iter - last_better >= self.config.breakafter {
				break;
			}
		}

		self.population.best_individual.value.clone()
	}

	/// Run `optimize()` and package the outcome as a report.
	pub fn solve(&mut self) -> DEReport {
		let x = self.optimize();
		let best = &self.population.best_individual;
		let success = best.constraint <= 0.0;
		let message = if success {
			format!("Optimization terminated after {} generations", self.nit)
		} else {
			format!("No feasible candidate found in {} generations", self.nit)
		};

		DEReport {
			x,
			fun: best.fitness,
			constraint: best.constraint,
			success,
			message,
			nit: self.nit,
			nfev: self.nfev,
		}
	}
}
