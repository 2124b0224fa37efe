// Copyright 2024-2025 Irreducible Inc.

//! The two linear layers of the permutation.
//!
//! The external layer multiplies the state by `circ(2 M4, M4, M4, M4)`, where `M4` is
//!
//! ```text
//! [ 2 3 1 1 ]
//! [ 1 2 3 1 ]
//! [ 1 1 2 3 ]
//! [ 3 1 1 2 ]
//! ```
//!
//! applied to each group of four consecutive lanes. The internal layer multiplies by
//! `1 + Diag(V)`, the all-ones matrix plus the diagonal [`INTERNAL_DIAG`].

use koalabear_field::{Error, FieldChip, KoalaBear};

use crate::constants::{INTERNAL_DIAG, WIDTH};

/// Multiplies four lanes by `M4` using 7 additions and 2 doublings.
pub fn mds_light_4x4<C: FieldChip>(chip: &mut C, x: &mut [C::Var; 4]) -> Result<(), Error> {
	let t01 = chip.add_f(x[0], x[1])?;
	let t23 = chip.add_f(x[2], x[3])?;
	let t0123 = chip.add_f(t01, t23)?;
	let t01123 = chip.add_f(t0123, x[1])?;
	let t01233 = chip.add_f(t0123, x[3])?;
	let x0_double = chip.mul_f_const(x[0], 2)?;
	let x2_double = chip.mul_f_const(x[2], 2)?;

	x[3] = chip.add_f(t01233, x0_double)?; // 3*x[0] + x[1] + x[2] + 2*x[3]
	x[1] = chip.add_f(t01123, x2_double)?; // x[0] + 2*x[1] + 3*x[2] + x[3]
	x[0] = chip.add_f(t01123, t01)?; // 2*x[0] + 3*x[1] + x[2] + x[3]
	x[2] = chip.add_f(t01233, t23)?; // x[0] + x[1] + 2*x[2] + 3*x[3]
	Ok(())
}

pub fn external_linear_layer<C: FieldChip>(
	chip: &mut C,
	state: &mut [C::Var; WIDTH],
) -> Result<(), Error> {
	for lanes in state.chunks_exact_mut(4) {
		let mut block = [lanes[0], lanes[1], lanes[2], lanes[3]];
		mds_light_4x4(chip, &mut block)?;
		lanes.copy_from_slice(&block);
	}

	// Each output picks up the sum of the lanes sharing its position within a block, which
	// together with the term already in place gives the doubled diagonal block.
	let mut sums = [state[0], state[1], state[2], state[3]];
	for base in (4..WIDTH).step_by(4) {
		for (offset, sum) in sums.iter_mut().enumerate() {
			*sum = chip.add_f(*sum, state[base + offset])?;
		}
	}

	for (i, lane) in state.iter_mut().enumerate() {
		*lane = chip.add_f(*lane, sums[i % 4])?;
	}
	Ok(())
}

pub fn internal_linear_layer<C: FieldChip>(
	chip: &mut C,
	state: &mut [C::Var; WIDTH],
) -> Result<(), Error> {
	let mut sum = chip.constant(KoalaBear::ZERO);
	for &lane in state.iter() {
		sum = chip.add_f(sum, lane)?;
	}

	for (lane, &diag) in state.iter_mut().zip(&INTERNAL_DIAG) {
		let diag = chip.constant(diag);
		let scaled = chip.mul_f(*lane, diag)?;
		*lane = chip.add_f(scaled, sum)?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use koalabear_field::{BoundedVar, KoalaBearChip};
	use rand::{SeedableRng, rngs::StdRng};

	use super::*;

	fn canonical<const N: usize>(state: [BoundedVar; N]) -> [KoalaBear; N] {
		state.map(|lane| lane.to_canonical())
	}

	#[test]
	fn test_mds_light_4x4() {
		let mut rng = StdRng::seed_from_u64(0);
		let input: [KoalaBear; 4] = std::array::from_fn(|_| KoalaBear::random(&mut rng));
		let matrix = [[2, 3, 1, 1], [1, 2, 3, 1], [1, 1, 2, 3], [3, 1, 1, 2]];
		let expected: [KoalaBear; 4] = std::array::from_fn(|row| {
			(0..4)
				.map(|col| KoalaBear::new(matrix[row][col]) * input[col])
				.sum()
		});

		let mut state = input.map(BoundedVar::from);
		mds_light_4x4(&mut KoalaBearChip::new(), &mut state).unwrap();
		assert_eq!(canonical(state), expected);
	}

	#[test]
	fn test_external_layer_on_unit_vector() {
		let mut state = [BoundedVar::ZERO; WIDTH];
		state[0] = BoundedVar::from(KoalaBear::ONE);
		external_linear_layer(&mut KoalaBearChip::new(), &mut state).unwrap();
		// First column of circ(2 M4, M4, M4, M4).
		let expected = KoalaBear::new_array([4, 2, 2, 6, 2, 1, 1, 3, 2, 1, 1, 3, 2, 1, 1, 3]);
		assert_eq!(canonical(state), expected);
	}

	#[test]
	fn test_internal_layer_on_counting_state() {
		let mut state: [BoundedVar; WIDTH] =
			std::array::from_fn(|i| BoundedVar::from(KoalaBear::new(i as u32)));
		internal_linear_layer(&mut KoalaBearChip::new(), &mut state).unwrap();
		let expected = KoalaBear::new_array([
			120, 121, 124, 1065353338, 132, 140, 117, 99, 88, 2055798905, 1598029946, 2130705156,
			99876984, 1331691639, 1864368248, 2025,
		]);
		assert_eq!(canonical(state), expected);
	}

	#[test]
	fn test_layers_keep_bounds_under_ceiling() {
		let p = KoalaBear::ORDER_U128;
		let wide = BoundedVar::new(p + 9, (1 << 118) - 1).unwrap();
		let mut chip = KoalaBearChip::new();

		let mut state = [wide; WIDTH];
		external_linear_layer(&mut chip, &mut state).unwrap();
		// Every row of circ(2 M4, M4, M4, M4) sums to 2 * 7 + 3 * 7.
		for lane in state {
			assert_eq!(lane.to_canonical(), KoalaBear::new(9 * 35));
		}

		let mut state = [wide; WIDTH];
		internal_linear_layer(&mut chip, &mut state).unwrap();
		for (lane, diag) in state.iter().zip(INTERNAL_DIAG) {
			assert_eq!(lane.to_canonical(), KoalaBear::new(9) * (diag + KoalaBear::new(16)));
		}
	}
}
