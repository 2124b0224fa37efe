// Copyright 2024-2025 Irreducible Inc.

//! Poseidon2 over the KoalaBear field with a state of 16 lanes.
//!
//! The permutation applies an initial external linear layer, 4 external rounds, 13 internal
//! rounds and 4 more external rounds. External rounds add a row of round constants, cube every
//! lane and apply the external linear layer; internal rounds add a constant to lane 0, cube lane 0
//! only and apply the internal diffusion layer.
//!
//! Every step is written against [`FieldChip`], so the same code evaluates natively with
//! [`KoalaBearChip`] and can be replayed through any other chip that implements the trait.

pub mod constants;
pub mod linear;
pub mod permutation;
pub mod sbox;

pub use constants::{NUM_EXTERNAL_ROUNDS, NUM_INTERNAL_ROUNDS, NUM_ROUNDS, WIDTH};
pub use koalabear_field::{BoundedVar, Error, FieldChip, KoalaBear, KoalaBearChip};
pub use permutation::{Poseidon2KoalaBear, permute_canonical};
