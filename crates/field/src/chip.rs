// Copyright 2024-2025 Irreducible Inc.

use std::fmt::Debug;

use crate::{BoundedVar, Error, KoalaBear, MAX_BOUND_BITS, MAX_UPPER_BOUND};

/// The KoalaBear arithmetic API that gadgets are written against.
///
/// An implementation may evaluate values directly or record them as constraints. Additions and
/// multiplications by small constants never need the caller to reduce first: the chip reduces its
/// operands itself when a bound would otherwise leave the safe range. [`FieldChip::mul_raw`] is
/// the exception. It performs no reduction and fails with [`Error::BoundOverflow`] when the
/// product of the operand bounds leaves the safe range.
pub trait FieldChip {
	type Var: Copy + Debug;

	fn constant(&mut self, value: KoalaBear) -> Self::Var;

	/// Embeds a constant given as a canonical decimal literal.
	fn new_f_const(&mut self, literal: &str) -> Result<Self::Var, Error> {
		let value = KoalaBear::from_decimal(literal)?;
		Ok(self.constant(value))
	}

	fn add_f(&mut self, a: Self::Var, b: Self::Var) -> Result<Self::Var, Error>;

	fn mul_f_const(&mut self, a: Self::Var, k: u32) -> Result<Self::Var, Error>;

	fn mul_f(&mut self, a: Self::Var, b: Self::Var) -> Result<Self::Var, Error>;

	/// Exact, unreduced product whose bound is the product of the operand bounds.
	fn mul_raw(&mut self, a: Self::Var, b: Self::Var) -> Result<Self::Var, Error>;

	/// Reduces into `[0, p)`. The result is bounded by `p - 1`.
	fn reduce_slow(&mut self, a: Self::Var) -> Result<Self::Var, Error>;

	/// Reads back the canonical value, if this chip knows it.
	fn to_canonical(&self, a: Self::Var) -> Option<KoalaBear>;
}

/// Native evaluation of [`FieldChip`] over `u128` magnitudes.
#[derive(Debug, Default, Clone, Copy)]
pub struct KoalaBearChip;

impl KoalaBearChip {
	pub const fn new() -> Self {
		Self
	}

	fn reduce(a: BoundedVar) -> BoundedVar {
		#[cfg(feature = "trace_reductions")]
		tracing::trace!(bound_bits = a.bound_bits(), "canonical reduction");

		BoundedVar::new_unchecked(a.value() % KoalaBear::ORDER_U128, KoalaBear::ORDER_U128 - 1)
	}
}

fn within_ceiling(bound: Option<u128>) -> Option<u128> {
	bound.filter(|&bound| bound <= MAX_UPPER_BOUND)
}

impl FieldChip for KoalaBearChip {
	type Var = BoundedVar;

	fn constant(&mut self, value: KoalaBear) -> BoundedVar {
		BoundedVar::constant(value)
	}

	fn add_f(&mut self, a: BoundedVar, b: BoundedVar) -> Result<BoundedVar, Error> {
		let (a, b) = match within_ceiling(a.upper_bound().checked_add(b.upper_bound())) {
			Some(_) => (a, b),
			None => (Self::reduce(a), Self::reduce(b)),
		};
		Ok(BoundedVar::new_unchecked(a.value() + b.value(), a.upper_bound() + b.upper_bound()))
	}

	fn mul_f_const(&mut self, a: BoundedVar, k: u32) -> Result<BoundedVar, Error> {
		let k = u128::from(k);
		let a = match within_ceiling(a.upper_bound().checked_mul(k)) {
			Some(_) => a,
			None => Self::reduce(a),
		};
		Ok(BoundedVar::new_unchecked(a.value() * k, a.upper_bound() * k))
	}

	fn mul_f(&mut self, a: BoundedVar, b: BoundedVar) -> Result<BoundedVar, Error> {
		let (a, b) = match within_ceiling(a.upper_bound().checked_mul(b.upper_bound())) {
			Some(_) => (a, b),
			None => (Self::reduce(a), Self::reduce(b)),
		};
		self.mul_raw(a, b)
	}

	fn mul_raw(&mut self, a: BoundedVar, b: BoundedVar) -> Result<BoundedVar, Error> {
		let Some(upper_bound) = within_ceiling(a.upper_bound().checked_mul(b.upper_bound())) else {
			tracing::error!(
				lhs_bits = a.bound_bits(),
				rhs_bits = b.bound_bits(),
				"raw multiplication exceeds the bound ceiling"
			);
			return Err(Error::BoundOverflow {
				lhs_bits: a.bound_bits(),
				rhs_bits: b.bound_bits(),
				max_bits: MAX_BOUND_BITS,
			});
		};
		Ok(BoundedVar::new_unchecked(a.value() * b.value(), upper_bound))
	}

	fn reduce_slow(&mut self, a: BoundedVar) -> Result<BoundedVar, Error> {
		Ok(Self::reduce(a))
	}

	fn to_canonical(&self, a: BoundedVar) -> Option<KoalaBear> {
		Some(a.to_canonical())
	}
}
