//! # laplace-linalg
//!
//! Determinants of square integer matrices by recursive Laplace (cofactor)
//! expansion along the first row.
//!
//! This crate provides:
//! - `SquareMatrix<R>`: an owned, row-major square matrix of integers
//! - `determinant`: the sequential recursive evaluator
//! - `determinant_parallel`: the same evaluator with one rayon task per
//!   first-row column, joined before summation
//!
//! ## Algorithm Notes
//!
//! Cofactor expansion is factorial-time; the one real-world lever is that a
//! zero entry in the expansion row contributes nothing, so its minor is
//! never built and never recursed into. Sparse rows are therefore cheap.
//!
//! All arithmetic is overflow-checked: a product or sum that leaves the
//! entry type surfaces as [`LinalgError::Overflow`] instead of wrapping.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod laplace;
pub mod parallel;
pub mod square_matrix;

pub use error::LinalgError;
pub use laplace::determinant;
pub use parallel::{determinant_parallel, determinant_parallel_with, ParallelConfig};
pub use square_matrix::SquareMatrix;

#[cfg(test)]
mod proptests;
