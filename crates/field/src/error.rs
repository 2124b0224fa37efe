// Copyright 2024-2025 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(
		"raw product of a {lhs_bits}-bit bound and a {rhs_bits}-bit bound exceeds the {max_bits}-bit ceiling"
	)]
	BoundOverflow {
		lhs_bits: u32,
		rhs_bits: u32,
		max_bits: u32,
	},
	#[error("value {value} does not fit upper bound {upper_bound} under the {max_bits}-bit ceiling")]
	InvalidBound {
		value: u128,
		upper_bound: u128,
		max_bits: u32,
	},
	#[error("invalid field constant {literal:?}")]
	InvalidConstant { literal: String },
}
