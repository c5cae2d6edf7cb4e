//! Distinct partner selection for the mutation strategies.

use rand::Rng;

/// Draw `count` pairwise-distinct indices in `[0, pool_size)`, none equal
/// to `exclude`, by rejection sampling.
///
/// The retry loop is unbounded: each draw is retried until it differs from
/// `exclude` and from every index accepted so far. Callers must guarantee
/// `pool_size > count + 1` is comfortably satisfied or the loop degrades;
/// the engine enforces `popsize > 3` at construction, which covers the
/// 2 (best/1) and 3 (rand/1) partners needed here.
pub(crate) fn distinct_indices<R: Rng + ?Sized>(
	exclude: usize,
	count: usize,
	pool_size: usize,
	rng: &mut R,
) -> Vec<usize> {
	debug_assert!(count < pool_size);

	let mut indexes = vec![0usize; count];

	for i in 0..count {
		loop {
			let idx = rng.random_range(0..pool_size);
			if idx != exclude && !indexes[..i].contains(&idx) {
				indexes[i] = idx;
				break;
			}
		}
	}

	indexes
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn test_indices_are_distinct_and_exclude_candidate() {
		let mut rng = StdRng::seed_from_u64(7);

		for seed_round in 0..200 {
			let exclude = seed_round % 10;
			let idxs = distinct_indices(exclude, 3, 10, &mut rng);

			assert_eq!(idxs.len(), 3);
			for (k, &idx) in idxs.iter().enumerate() {
				assert!(idx < 10);
				assert_ne!(idx, exclude);
				for &other in &idxs[..k] {
					assert_ne!(idx, other);
				}
			}
		}
	}

	#[test]
	fn test_minimal_pool() {
		// popsize 4 is the smallest the engine accepts; rand/1 then has to
		// pick exactly the three non-candidate members.
		let mut rng = StdRng::seed_from_u64(11);
		for _ in 0..50 {
			let mut idxs = distinct_indices(2, 3, 4, &mut rng);
			idxs.sort_unstable();
			assert_eq!(idxs, vec![0, 1, 3]);
		}
	}

	#[test]
	fn test_two_partners() {
		let mut rng = StdRng::seed_from_u64(13);
		let idxs = distinct_indices(0, 2, 5, &mut rng);
		assert_eq!(idxs.len(), 2);
		assert_ne!(idxs[0], idxs[1]);
		assert!(idxs.iter().all(|&i| i != 0 && i < 5));
	}
}
