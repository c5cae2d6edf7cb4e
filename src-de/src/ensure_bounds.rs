use ndarray::Array1;
use rand::Rng;
use rand::distr::{Distribution, Uniform};

/// Repair out-of-bounds coordinates by redrawing them uniformly within
/// their dimension's bounds.
///
/// Resampling keeps diversity near the box faces where truncation would
/// pile candidates onto the boundary; in-bounds coordinates are left
/// untouched. `samplers` is the per-dimension arena precomputed by the
/// engine at construction.
pub(crate) fn ensure_bounds<R: Rng + ?Sized>(
	candidate: &mut Array1<f64>,
	bounds: &[(f64, f64)],
	samplers: &[Uniform<f64>],
	rng: &mut R,
) {
	for (j, &(low, high)) in bounds.iter().enumerate() {
		if candidate[j] < low || candidate[j] > high {
			candidate[j] = samplers[j].sample(rng);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use ndarray::array;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn samplers_for(bounds: &[(f64, f64)]) -> Vec<Uniform<f64>> {
		bounds.iter().map(|&(lo, hi)| Uniform::new(lo, hi).unwrap()).collect()
	}

	#[test]
	fn test_in_bounds_coordinates_untouched() {
		let bounds = [(-1.0, 1.0), (0.0, 10.0)];
		let samplers = samplers_for(&bounds);
		let mut rng = StdRng::seed_from_u64(1);

		let mut candidate = array![0.25, 9.5];
		ensure_bounds(&mut candidate, &bounds, &samplers, &mut rng);
		assert_eq!(candidate, array![0.25, 9.5]);
	}

	#[test]
	fn test_out_of_bounds_coordinates_resampled_within() {
		let bounds = [(-1.0, 1.0), (0.0, 10.0), (5.0, 6.0)];
		let samplers = samplers_for(&bounds);
		let mut rng = StdRng::seed_from_u64(2);

		for _ in 0..200 {
			let mut candidate = array![-3.7, 42.0, 4.9];
			ensure_bounds(&mut candidate, &bounds, &samplers, &mut rng);
			for (j, &(lo, hi)) in bounds.iter().enumerate() {
				assert!(candidate[j] >= lo && candidate[j] <= hi);
			}
		}
	}

	#[test]
	fn test_boundary_values_are_kept() {
		let bounds = [(-1.0, 1.0)];
		let samplers = samplers_for(&bounds);
		let mut rng = StdRng::seed_from_u64(3);

		let mut low = array![-1.0];
		ensure_bounds(&mut low, &bounds, &samplers, &mut rng);
		assert_eq!(low, array![-1.0]);

		let mut high = array![1.0];
		ensure_bounds(&mut high, &bounds, &samplers, &mut rng);
		assert_eq!(high, array![1.0]);
	}
}
