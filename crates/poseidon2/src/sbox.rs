// Copyright 2024-2025 Irreducible Inc.

use koalabear_field::{Error, FieldChip, KoalaBear};

use crate::constants::WIDTH;

/// Computes `x^3` for a single lane.
///
/// The input is first reduced so that both raw multiplications start from a bound of `p - 1`;
/// the cube (bounded by `(p - 1)^3`) is reduced again before it feeds any further additions.
pub fn sbox_p<C: FieldChip>(chip: &mut C, input: C::Var) -> Result<C::Var, Error> {
	let zero = chip.constant(KoalaBear::ZERO);
	let input = chip.add_f(input, zero)?;
	let input = chip.reduce_slow(input)?;
	let input2 = chip.mul_raw(input, input)?;
	let input3 = chip.mul_raw(input2, input)?;
	chip.reduce_slow(input3)
}

/// Applies [`sbox_p`] to every lane.
pub fn sbox<C: FieldChip>(chip: &mut C, state: &mut [C::Var; WIDTH]) -> Result<(), Error> {
	for lane in state.iter_mut() {
		*lane = sbox_p(chip, *lane)?;
	}
	Ok(())
}
