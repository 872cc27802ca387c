//! # laplace-rings
//!
//! Scalar foundations for Laplace-expansion determinants.
//!
//! This crate provides:
//! - `CheckedRing`: the entry type contract, signed integers with
//!   overflow-checked arithmetic
//! - `Sign`: the alternating +1/-1 factor of a cofactor expansion

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod sign;
pub mod traits;

pub use sign::Sign;
pub use traits::CheckedRing;
