// Copyright 2024-2025 Irreducible Inc.

use crate::{Error, KoalaBear};

/// Width of the widest magnitude a [`BoundedVar`] may carry.
///
/// Keeping every bound below `2^127` means the sum of any two bounded values still fits a `u128`.
pub const MAX_BOUND_BITS: u32 = 127;
pub const MAX_UPPER_BOUND: u128 = (1 << MAX_BOUND_BITS) - 1;

/// A KoalaBear value held as an unreduced integer with a conservative bound on its magnitude.
///
/// `value` is congruent to the logical field element modulo `p` and `value <= upper_bound`. The
/// bound, not the value, decides when a reduction is required, so two variables with the same
/// bound are always treated identically regardless of their contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundedVar {
	value: u128,
	upper_bound: u128,
}

impl BoundedVar {
	pub const ZERO: Self = Self {
		value: 0,
		upper_bound: 0,
	};

	pub fn new(value: u128, upper_bound: u128) -> Result<Self, Error> {
		if value > upper_bound || upper_bound > MAX_UPPER_BOUND {
			return Err(Error::InvalidBound {
				value,
				upper_bound,
				max_bits: MAX_BOUND_BITS,
			});
		}
		Ok(Self { value, upper_bound })
	}

	pub(crate) fn new_unchecked(value: u128, upper_bound: u128) -> Self {
		debug_assert!(value <= upper_bound && upper_bound <= MAX_UPPER_BOUND);
		Self { value, upper_bound }
	}

	/// Wraps a canonical element of unknown provenance, bounded by `p - 1`.
	pub const fn from_canonical(x: KoalaBear) -> Self {
		Self {
			value: x.as_u32() as u128,
			upper_bound: KoalaBear::ORDER_U128 - 1,
		}
	}

	/// Wraps a known constant, bounded by the constant itself.
	pub const fn constant(x: KoalaBear) -> Self {
		Self {
			value: x.as_u32() as u128,
			upper_bound: x.as_u32() as u128,
		}
	}

	pub const fn value(&self) -> u128 {
		self.value
	}

	pub const fn upper_bound(&self) -> u128 {
		self.upper_bound
	}

	/// Number of bits needed to hold the upper bound.
	pub const fn bound_bits(&self) -> u32 {
		u128::BITS - self.upper_bound.leading_zeros()
	}

	/// True when the bound alone proves the value is already in `[0, p)`.
	pub const fn is_canonical(&self) -> bool {
		self.upper_bound < KoalaBear::ORDER_U128
	}

	pub const fn to_canonical(&self) -> KoalaBear {
		KoalaBear::from_u128(self.value)
	}
}

impl From<KoalaBear> for BoundedVar {
	fn from(x: KoalaBear) -> Self {
		Self::from_canonical(x)
	}
}
