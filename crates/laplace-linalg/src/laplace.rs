//! Sequential determinant by recursive Laplace expansion.
//!
//! The determinant of an n x n matrix is the signed sum over the first row
//! of entry times minor determinant. Each minor is a freshly owned matrix
//! dropped as soon as its term is computed. A zero entry contributes
//! nothing, so its minor is never built and its subtree never evaluated.

use laplace_rings::{CheckedRing, Sign};

use crate::error::LinalgError;
use crate::square_matrix::SquareMatrix;

/// Computes the determinant by cofactor expansion along the first row.
///
/// Recursion is fully sequential; worst-case cost is O(n!) in the number of
/// nonzero-weighted subtrees reached.
///
/// # Errors
///
/// Returns [`LinalgError::Overflow`] when any product, negation or partial
/// sum leaves the range of the entry type.
pub fn determinant<R: CheckedRing>(matrix: &SquareMatrix<R>) -> Result<R, LinalgError> {
    if matrix.dimension() == 1 {
        return Ok(matrix[(0, 0)].clone());
    }
    let mut sum = R::zero();
    for column in 0..matrix.dimension() {
        let term = signed_cofactor_term(matrix, column)?;
        sum = sum.checked_add(&term).ok_or(LinalgError::Overflow)?;
    }
    Ok(sum)
}

/// One signed term `sign * entry * det(minor)` of the first-row expansion.
///
/// A zero entry short-circuits to zero before any minor is constructed; a
/// 1x1 minor is read directly instead of recursed into.
pub(crate) fn signed_cofactor_term<R: CheckedRing>(
    matrix: &SquareMatrix<R>,
    column: usize,
) -> Result<R, LinalgError> {
    let entry = &matrix[(0, column)];
    if entry.is_zero() {
        return Ok(R::zero());
    }
    let minor = matrix.minor(column);
    let sub = if minor.dimension() == 1 {
        minor[(0, 0)].clone()
    } else {
        determinant(&minor)?
    };
    let product = entry.checked_mul(&sub).ok_or(LinalgError::Overflow)?;
    Sign::of_position(0, column)
        .apply(product)
        .ok_or(LinalgError::Overflow)
}
