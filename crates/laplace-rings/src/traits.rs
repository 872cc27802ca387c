//! Scalar traits for matrix entries.
//!
//! Determinant evaluation multiplies and sums long chains of entries, so the
//! entry type must expose checked arithmetic: overflow is reported to the
//! caller instead of wrapping silently.

use std::fmt::Debug;

use num_traits::{CheckedAdd, CheckedMul, CheckedNeg, One, Zero};

/// A signed integer ring with overflow-checked operations.
///
/// # Laws
///
/// - Addition and multiplication are associative and commutative with
///   identities `zero()` and `one()`
/// - `checked_add`, `checked_mul` and `checked_neg` return `None` exactly
///   when the mathematical result does not fit the representation
///
/// Implemented by blanket impl for every type carrying the `num-traits`
/// checked operations, which covers `i8` through `i128`.
pub trait CheckedRing:
    Zero + One + CheckedAdd + CheckedMul + CheckedNeg + Clone + Eq + Debug + Send + Sync
{
}

impl<T> CheckedRing for T where
    T: Zero + One + CheckedAdd + CheckedMul + CheckedNeg + Clone + Eq + Debug + Send + Sync
{
}
