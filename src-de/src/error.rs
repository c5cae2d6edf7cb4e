//! Error types for the Differential Evolution optimizer.
//!
//! Construction-time configuration problems are rejected before any
//! evaluation happens. Errors raised inside user-supplied fitness or
//! constraint callables are not modelled here: the callables are
//! infallible `Fn(&Array1<f64>) -> f64` and a panic inside one unwinds
//! through `initialize()`/`iterate()`/`optimize()` unmodified.

use thiserror::Error;

/// Errors that can occur during Differential Evolution optimization.
#[derive(Debug, Error)]
pub enum DEError {
	/// The bounds sequence is empty, so the problem has no dimensions.
	#[error("bounds must contain at least one (lower, upper) pair")]
	EmptyBounds,

	/// Effective population size is too small for the mutation strategies.
	///
	/// rand/1 needs 3 distinct partners excluding the candidate itself,
	/// so the rejection sampler requires at least 4 members.
	#[error("population size ({popsize}) must be > 3; increase the popsize multiplier")]
	PopulationTooSmall {
		/// The effective population size (multiplier * dim)
		popsize: usize,
	},

	/// A lower bound is not strictly below its upper bound.
	#[error("invalid bounds at index {index}: [{lower}, {upper}) is empty")]
	InvalidBounds {
		/// Index of the invalid bound pair
		index: usize,
		/// The lower bound value
		lower: f64,
		/// The upper bound value
		upper: f64,
	},

	/// Fixed mutation factor is out of the valid range [0, 2).
	#[error("invalid mutation factor: {factor} (must be in [0, 2))")]
	InvalidMutationFactor {
		/// The invalid mutation factor
		factor: f64,
	},

	/// Mutation dithering range is not a sub-range of [0, 2].
	#[error("invalid mutation range: [{min}, {max}) (need 0 <= min < max <= 2)")]
	InvalidMutationRange {
		/// Lower end of the range
		min: f64,
		/// Upper end of the range
		max: f64,
	},

	/// Recombination probability is out of the valid range [0, 1].
	#[error("invalid recombination probability: {rate} (must be in [0, 1])")]
	InvalidRecombination {
		/// The invalid probability
		rate: f64,
	},

	/// Out-of-range access into a population.
	#[error("population index {index} out of range (popsize {popsize})")]
	IndexOutOfRange {
		/// The requested index
		index: usize,
		/// The population size
		popsize: usize,
	},
}

/// A specialized `Result` type for DE operations.
pub type Result<T> = std::result::Result<T, DEError>;

impl DEError {
	/// Returns `true` for configuration errors detected at construction.
	pub fn is_config_error(&self) -> bool {
		matches!(
			self,
			DEError::EmptyBounds
				| DEError::PopulationTooSmall { .. }
				| DEError::InvalidBounds { .. }
				| DEError::InvalidMutationFactor { .. }
				| DEError::InvalidMutationRange { .. }
				| DEError::InvalidRecombination { .. }
		)
	}

	/// Returns `true` for out-of-range population access.
	pub fn is_index_error(&self) -> bool {
		matches!(self, DEError::IndexOutOfRange { .. })
	}
}
