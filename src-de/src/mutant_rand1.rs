use ndarray::Array1;
use rand::Rng;

use crate::distinct_indices::distinct_indices;
use crate::population::Population;

/// "rand/1" mutation: a random base member plus a scaled difference of
/// two other members, all three distinct and excluding the candidate.
///
/// Used for currently infeasible candidates, where pulling towards the
/// best member would concentrate the search before a feasible region has
/// been located.
pub(crate) fn mutant_rand1<R: Rng + ?Sized>(
	i: usize,
	pop: &Population,
	f: f64,
	rng: &mut R,
) -> Array1<f64> {
	let idxs = distinct_indices(i, 3, pop.len(), rng);
	let r0 = idxs[0];
	let r1 = idxs[1];
	let r2 = idxs[2];
	let diff = (&pop.individuals[r0].value - &pop.individuals[r1].value) * f;
	&pop.individuals[r2].value + &diff
}
