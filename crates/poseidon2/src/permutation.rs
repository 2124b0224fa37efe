// Copyright 2024-2025 Irreducible Inc.

use koalabear_field::{BoundedVar, Error, FieldChip, KoalaBear, KoalaBearChip};

use crate::{
	constants::{HALF_EXTERNAL_ROUNDS, NUM_INTERNAL_ROUNDS, ROUND_CONSTANTS, WIDTH},
	linear::{external_linear_layer, internal_linear_layer},
	sbox::{sbox, sbox_p},
};

/// The Poseidon2 permutation over KoalaBear with width 16, evaluated through a [`FieldChip`].
///
/// The chip is owned so that chips carrying state (constraint builders, counters) can be read back
/// after a permutation with [`Self::chip`] or [`Self::into_chip`].
#[derive(Debug, Default, Clone)]
pub struct Poseidon2KoalaBear<C> {
	chip: C,
}

impl<C: FieldChip> Poseidon2KoalaBear<C> {
	pub const fn new(chip: C) -> Self {
		Self { chip }
	}

	pub const fn chip(&self) -> &C {
		&self.chip
	}

	pub fn chip_mut(&mut self) -> &mut C {
		&mut self.chip
	}

	pub fn into_chip(self) -> C {
		self.chip
	}

	/// Adds the full row of constants for `round` to every lane.
	///
	/// Returns `None` when `round` is past the last round.
	pub fn add_round_constants(
		&mut self,
		state: &mut [C::Var; WIDTH],
		round: usize,
	) -> Option<Result<(), Error>> {
		let constants = ROUND_CONSTANTS.get(round)?;
		Some(add_round_constants(&mut self.chip, state, constants))
	}

	/// Permutes `state` in place.
	///
	/// On error the state holds whatever the failing round left behind and must be discarded.
	pub fn permute_mut(&mut self, state: &mut [C::Var; WIDTH]) -> Result<(), Error> {
		let _span = tracing::trace_span!("poseidon2_permute").entered();
		let chip = &mut self.chip;

		external_linear_layer(chip, state)?;

		let internal_start = HALF_EXTERNAL_ROUNDS;
		let internal_end = HALF_EXTERNAL_ROUNDS + NUM_INTERNAL_ROUNDS;
		for (round, constants) in ROUND_CONSTANTS.iter().enumerate() {
			if (internal_start..internal_end).contains(&round) {
				internal_round(chip, state, constants)?;
			} else {
				external_round(chip, state, constants)?;
			}
		}
		Ok(())
	}

	pub fn permute(&mut self, mut state: [C::Var; WIDTH]) -> Result<[C::Var; WIDTH], Error> {
		self.permute_mut(&mut state)?;
		Ok(state)
	}
}

/// Adds one row of round constants to the state, lane by lane.
pub fn add_round_constants<C: FieldChip>(
	chip: &mut C,
	state: &mut [C::Var; WIDTH],
	constants: &[u32; WIDTH],
) -> Result<(), Error> {
	for (lane, &rc) in state.iter_mut().zip(constants) {
		let rc = chip.constant(KoalaBear::new(rc));
		*lane = chip.add_f(*lane, rc)?;
	}
	Ok(())
}

fn external_round<C: FieldChip>(
	chip: &mut C,
	state: &mut [C::Var; WIDTH],
	constants: &[u32; WIDTH],
) -> Result<(), Error> {
	add_round_constants(chip, state, constants)?;
	sbox(chip, state)?;
	external_linear_layer(chip, state)
}

fn internal_round<C: FieldChip>(
	chip: &mut C,
	state: &mut [C::Var; WIDTH],
	constants: &[u32; WIDTH],
) -> Result<(), Error> {
	// Only the first constant of the row is used.
	let rc = chip.constant(KoalaBear::new(constants[0]));
	state[0] = chip.add_f(state[0], rc)?;
	state[0] = sbox_p(chip, state[0])?;
	internal_linear_layer(chip, state)
}

/// Permutes canonical field elements with the native chip.
pub fn permute_canonical(input: [KoalaBear; WIDTH]) -> Result<[KoalaBear; WIDTH], Error> {
	let mut permutation = Poseidon2KoalaBear::new(KoalaBearChip::new());
	let output = permutation.permute(input.map(BoundedVar::from_canonical))?;
	Ok(output.map(|lane| lane.to_canonical()))
}
