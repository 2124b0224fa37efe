// Copyright 2024-2025 Irreducible Inc.

use crate::{Error, FieldChip, KoalaBear};

/// Number of calls made to each [`FieldChip`] operation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OpCounts {
	pub constants: usize,
	pub additions: usize,
	pub constant_multiplications: usize,
	pub multiplications: usize,
	pub raw_multiplications: usize,
	pub reductions: usize,
}

impl OpCounts {
	pub const fn total(&self) -> usize {
		self.constants
			+ self.additions
			+ self.constant_multiplications
			+ self.multiplications
			+ self.raw_multiplications
			+ self.reductions
	}
}

/// Forwards every operation to an inner chip and counts it.
///
/// Reductions a chip performs internally to keep bounds in range are not visible here; only
/// explicit [`FieldChip::reduce_slow`] calls are counted as reductions.
#[derive(Debug, Default, Clone)]
pub struct CountingChip<C> {
	inner: C,
	counts: OpCounts,
}

impl<C> CountingChip<C> {
	pub fn new(inner: C) -> Self {
		Self {
			inner,
			counts: OpCounts::default(),
		}
	}

	pub const fn counts(&self) -> OpCounts {
		self.counts
	}

	/// Returns the counts so far and starts again from zero.
	pub fn take_counts(&mut self) -> OpCounts {
		std::mem::take(&mut self.counts)
	}

	pub fn into_inner(self) -> C {
		self.inner
	}

	pub fn log_summary(&self, label: &str) {
		let OpCounts {
			constants,
			additions,
			constant_multiplications,
			multiplications,
			raw_multiplications,
			reductions,
		} = self.counts;
		tracing::debug!(
			label,
			constants,
			additions,
			constant_multiplications,
			multiplications,
			raw_multiplications,
			reductions,
			total = self.counts.total(),
			"field operation counts"
		);
	}
}

impl<C: FieldChip> FieldChip for CountingChip<C> {
	type Var = C::Var;

	fn constant(&mut self, value: KoalaBear) -> Self::Var {
		self.counts.constants += 1;
		self.inner.constant(value)
	}

	fn add_f(&mut self, a: Self::Var, b: Self::Var) -> Result<Self::Var, Error> {
		self.counts.additions += 1;
		self.inner.add_f(a, b)
	}

	fn mul_f_const(&mut self, a: Self::Var, k: u32) -> Result<Self::Var, Error> {
		self.counts.constant_multiplications += 1;
		self.inner.mul_f_const(a, k)
	}

	fn mul_f(&mut self, a: Self::Var, b: Self::Var) -> Result<Self::Var, Error> {
		self.counts.multiplications += 1;
		self.inner.mul_f(a, b)
	}

	fn mul_raw(&mut self, a: Self::Var, b: Self::Var) -> Result<Self::Var, Error> {
		self.counts.raw_multiplications += 1;
		self.inner.mul_raw(a, b)
	}

	fn reduce_slow(&mut self, a: Self::Var) -> Result<Self::Var, Error> {
		self.counts.reductions += 1;
		self.inner.reduce_slow(a)
	}

	fn to_canonical(&self, a: Self::Var) -> Option<KoalaBear> {
		self.inner.to_canonical(a)
	}
}
