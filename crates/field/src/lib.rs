// Copyright 2024-2025 Irreducible Inc.

//! Arithmetic over the KoalaBear prime field, `p = 2^31 - 2^24 + 1`.
//!
//! Two representations are provided. [`KoalaBear`] is a canonical element in `[0, p)`.
//! [`BoundedVar`] is an unreduced magnitude paired with a conservative upper bound on it. This is
//! the representation used when canonical reductions are expensive (for example when every
//! reduction costs a range check in a circuit), so reductions are deferred until a product could
//! exceed the width of the integer backend.
//!
//! Gadgets are written against the [`FieldChip`] trait. [`KoalaBearChip`] evaluates it natively
//! and [`CountingChip`] decorates any chip with per-operation counters.

mod bounded;
mod chip;
mod counting;
mod error;
mod koala_bear;

pub use bounded::{BoundedVar, MAX_BOUND_BITS, MAX_UPPER_BOUND};
pub use chip::{FieldChip, KoalaBearChip};
pub use counting::{CountingChip, OpCounts};
pub use error::Error;
pub use koala_bear::KoalaBear;
