// Copyright 2024-2025 Irreducible Inc.

use std::{
	fmt,
	iter::Sum,
	ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
	str::FromStr,
};

use rand::{
	Rng, RngCore,
	distributions::{Distribution, Standard},
};

use crate::Error;

/// An element of the KoalaBear field in canonical form.
///
/// The inner value is always in `[0, p)` with `p = 2^31 - 2^24 + 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct KoalaBear(u32);

impl KoalaBear {
	pub const ORDER_U32: u32 = 0x7f00_0001;
	pub const ORDER_U64: u64 = Self::ORDER_U32 as u64;
	pub const ORDER_U128: u128 = Self::ORDER_U32 as u128;
	/// Bit length of the modulus.
	pub const BITS: u32 = 31;

	pub const ZERO: Self = Self(0);
	pub const ONE: Self = Self(1);
	pub const TWO: Self = Self(2);
	pub const NEG_ONE: Self = Self(Self::ORDER_U32 - 1);

	/// Creates an element from any `u32`, reducing it modulo `p`.
	pub const fn new(value: u32) -> Self {
		Self(value % Self::ORDER_U32)
	}

	/// Creates an element from a value that must already be canonical.
	pub const fn new_canonical(value: u32) -> Option<Self> {
		if value < Self::ORDER_U32 {
			Some(Self(value))
		} else {
			None
		}
	}

	pub const fn new_array<const N: usize>(values: [u32; N]) -> [Self; N] {
		let mut out = [Self::ZERO; N];
		let mut i = 0;
		while i < N {
			out[i] = Self::new(values[i]);
			i += 1;
		}
		out
	}

	pub const fn from_u64(value: u64) -> Self {
		Self((value % Self::ORDER_U64) as u32)
	}

	pub const fn from_u128(value: u128) -> Self {
		Self((value % Self::ORDER_U128) as u32)
	}

	pub const fn as_u32(self) -> u32 {
		self.0
	}

	/// Parses a canonical decimal literal such as `"1065353217"`.
	///
	/// Literals that are empty, contain anything but ASCII digits, or are not below the modulus are
	/// rejected.
	pub fn from_decimal(literal: &str) -> Result<Self, Error> {
		let invalid = || Error::InvalidConstant {
			literal: literal.to_string(),
		};
		if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()) {
			return Err(invalid());
		}
		literal
			.parse::<u64>()
			.ok()
			.and_then(|value| u32::try_from(value).ok())
			.and_then(Self::new_canonical)
			.ok_or_else(invalid)
	}

	pub fn random(mut rng: impl RngCore) -> Self {
		rng.sample(Standard)
	}

	pub fn double(self) -> Self {
		self + self
	}

	pub fn square(self) -> Self {
		self * self
	}

	pub fn pow(self, mut exp: u64) -> Self {
		let mut base = self;
		let mut acc = Self::ONE;
		while exp > 0 {
			if exp & 1 == 1 {
				acc *= base;
			}
			base = base.square();
			exp >>= 1;
		}
		acc
	}

	/// Multiplicative inverse by Fermat's little theorem, `None` for zero.
	pub fn inverse(self) -> Option<Self> {
		(self != Self::ZERO).then(|| self.pow(Self::ORDER_U64 - 2))
	}
}

impl Add for KoalaBear {
	type Output = Self;

	#[inline]
	fn add(self, rhs: Self) -> Self {
		// Both operands are below 2^31, so the sum fits in a u32.
		let sum = self.0 + rhs.0;
		if sum >= Self::ORDER_U32 {
			Self(sum - Self::ORDER_U32)
		} else {
			Self(sum)
		}
	}
}

impl Sub for KoalaBear {
	type Output = Self;

	#[inline]
	fn sub(self, rhs: Self) -> Self {
		let (diff, borrow) = self.0.overflowing_sub(rhs.0);
		if borrow {
			Self(diff.wrapping_add(Self::ORDER_U32))
		} else {
			Self(diff)
		}
	}
}

impl Neg for KoalaBear {
	type Output = Self;

	#[inline]
	fn neg(self) -> Self {
		Self::ZERO - self
	}
}

impl Mul for KoalaBear {
	type Output = Self;

	#[inline]
	fn mul(self, rhs: Self) -> Self {
		Self::from_u64(self.0 as u64 * rhs.0 as u64)
	}
}

impl AddAssign for KoalaBear {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl SubAssign for KoalaBear {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

impl MulAssign for KoalaBear {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

impl Sum for KoalaBear {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl From<KoalaBear> for u32 {
	fn from(value: KoalaBear) -> Self {
		value.0
	}
}

impl FromStr for KoalaBear {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_decimal(s)
	}
}

impl fmt::Display for KoalaBear {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Distribution<KoalaBear> for Standard {
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> KoalaBear {
		// Rejection sampling on 31 bits accepts with probability close to 0.99.
		loop {
			let candidate = rng.next_u32() >> 1;
			if let Some(value) = KoalaBear::new_canonical(candidate) {
				return value;
			}
		}
	}
}
