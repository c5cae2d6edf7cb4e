//! Differential Evolution (DE) global optimizer in pure Rust using ndarray
//!
//! DE is a stochastic, population-based method that minimizes a possibly
//! non-convex, non-differentiable objective over a bounded box without
//! gradients. Inequality constraints are handled with the dominance rules
//! from [Lampinen, J., 2002]: feasible candidates beat infeasible ones
//! unconditionally, feasible candidates compete on fitness, infeasible
//! candidates compete on violation magnitude.
//!
//! Supported features:
//! - Box constraints (per-dimension lower/upper bounds)
//! - Scalar aggregate constraint function, `<= 0` means feasible
//! - best/1 mutation for feasible members, rand/1 for infeasible ones
//! - Binomial crossover with a forced dimension
//! - Mutation as a fixed factor or dithering in a range [min,max)
//! - Out-of-bounds repair by uniform resampling within bounds
//! - Early stop after a window of generations without improvement
//!
//! [Lampinen, J., 2002]: A constraint handling approach for the
//! differential evolution algorithm. Proceedings of the 2002 Congress on
//! Evolutionary Computation, CEC'02, Vol. 2, IEEE, 2002.

use std::fmt;

use ndarray::Array1;
use rand::Rng;
use serde::Serialize;

pub mod error;
pub mod individual;
pub mod population;

pub mod crossover_binomial;
pub mod distinct_indices;
pub mod ensure_bounds;
pub mod mutant_best1;
pub mod mutant_rand1;

pub mod diff_evolution;
pub mod differential_evolution;

pub use diff_evolution::DiffEvolution;
pub use differential_evolution::{differential_evolution, differential_evolution_constrained};
pub use error::{DEError, Result};
pub use individual::Individual;
pub use population::Population;

/// Mutation setting: either a fixed factor or a uniform range (dithering).
///
/// With `Range`, the factor F is resampled once per generation and shared
/// by every candidate of that generation.
#[derive(Debug, Clone, Copy)]
pub enum Mutation {
	/// Fixed mutation factor F in [0, 2)
	Factor(f64),
	/// Dithering range [min, max) with 0 <= min < max <= 2
	Range { min: f64, max: f64 },
}

impl Default for Mutation {
	fn default() -> Self {
		Mutation::Range { min: 0.5, max: 0.8 }
	}
}

impl Mutation {
	pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
		match *self {
			Mutation::Factor(f) => f,
			Mutation::Range { min, max } => rng.random_range(min..max),
		}
	}

	pub(crate) fn validate(&self) -> Result<()> {
		match *self {
			Mutation::Factor(factor) => {
				if !factor.is_finite() || !(0.0..2.0).contains(&factor) {
					return Err(DEError::InvalidMutationFactor { factor });
				}
			}
			Mutation::Range { min, max } => {
				if !(min.is_finite() && max.is_finite() && 0.0 <= min && min < max && max <= 2.0) {
					return Err(DEError::InvalidMutationRange { min, max });
				}
			}
		}
		Ok(())
	}
}

/// Configuration for the Differential Evolution optimizer
#[derive(Debug, Clone)]
pub struct DEConfig {
	/// Maximum number of generations
	pub maxiter: usize,
	/// Stop early after this many consecutive generations without improvement
	pub breakafter: usize,
	/// Population size multiplier; total NP = popsize * dim
	pub popsize: usize,
	/// Mutation factor setting
	pub mutation: Mutation,
	/// Recombination (crossover) probability CR in [0, 1]
	pub recombination: f64,
	/// Seed for reproducible runs; entropy-seeded when `None`
	pub seed: Option<u64>,
	/// Print best fitness/violation at each generation
	pub disp: bool,
}

impl Default for DEConfig {
	fn default() -> Self {
		Self {
			maxiter: 1000,
			breakafter: 100,
			popsize: 16,
			mutation: Mutation::default(),
			recombination: 0.8,
			seed: None,
			disp: false,
		}
	}
}

/// Fluent builder for `DEConfig` for ergonomic configuration.
pub struct DEConfigBuilder {
	cfg: DEConfig,
}

impl Default for DEConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl DEConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: DEConfig::default() }
	}
	pub fn maxiter(mut self, v: usize) -> Self {
		self.cfg.maxiter = v;
		self
	}
	pub fn breakafter(mut self, v: usize) -> Self {
		self.cfg.breakafter = v;
		self
	}
	pub fn popsize(mut self, v: usize) -> Self {
		self.cfg.popsize = v;
		self
	}
	pub fn mutation(mut self, v: Mutation) -> Self {
		self.cfg.mutation = v;
		self
	}
	pub fn recombination(mut self, v: f64) -> Self {
		self.cfg.recombination = v;
		self
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn disp(mut self, v: bool) -> Self {
		self.cfg.disp = v;
		self
	}
	pub fn build(self) -> DEConfig {
		self.cfg
	}
}

/// Result/Report of a DE optimization run
#[derive(Clone, Serialize)]
pub struct DEReport {
	/// Best candidate found
	pub x: Array1<f64>,
	/// Fitness of the best candidate; `f64::MAX` if never feasible
	pub fun: f64,
	/// Constraint value of the best candidate; `<= 0` means feasible
	pub constraint: f64,
	/// True when a feasible candidate was found
	pub success: bool,
	pub message: String,
	/// Number of generations performed
	pub nit: usize,
	/// Number of fitness evaluations
	pub nfev: usize,
}

impl fmt::Debug for DEReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DEReport")
			.field("x", &format!("len={}", self.x.len()))
			.field("fun", &self.fun)
			.field("constraint", &self.constraint)
			.field("success", &self.success)
			.field("message", &self.message)
			.field("nit", &self.nit)
			.field("nfev", &self.nfev)
			.finish()
	}
}
