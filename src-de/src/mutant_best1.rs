use ndarray::Array1;
use rand::Rng;

use crate::distinct_indices::distinct_indices;
use crate::population::Population;

/// "best/1" mutation: the cached best member plus a scaled difference of
/// two random members, both distinct and excluding the candidate.
///
/// Used for currently feasible candidates to exploit the best region
/// found so far.
pub(crate) fn mutant_best1<R: Rng + ?Sized>(
	i: usize,
	pop: &Population,
	f: f64,
	rng: &mut R,
) -> Array1<f64> {
	let idxs = distinct_indices(i, 2, pop.len(), rng);
	let r0 = idxs[0];
	let r1 = idxs[1];
	let diff = (&pop.individuals[r0].value - &pop.individuals[r1].value) * f;
	&pop.best_individual.value + &diff
}
