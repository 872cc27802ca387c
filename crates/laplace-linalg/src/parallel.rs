//! Parallel determinant evaluation with top-level fan-out.
//!
//! Fan-out happens only at the outermost call: one rayon task per first-row
//! column, each running the identical sequential cofactor logic over minors
//! it owns end-to-end. Deeper recursion never fans out again, bounding task
//! creation to O(n). All tasks are joined before any folding, and a failed
//! task surfaces as the single error of the whole evaluation.

use rayon::prelude::*;

use laplace_rings::CheckedRing;

use crate::error::LinalgError;
use crate::laplace::{self, signed_cofactor_term};
use crate::square_matrix::SquareMatrix;

/// Configuration for the parallel determinant.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Minimum dimension to fan out; smaller matrices run sequentially.
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 2,
        }
    }
}

/// Computes the determinant with one task per first-row column.
///
/// Equivalent to [`determinant_parallel_with`] under the default
/// configuration.
///
/// # Errors
///
/// Returns [`LinalgError::Overflow`] when any task's product chain or the
/// final fold leaves the range of the entry type.
pub fn determinant_parallel<R: CheckedRing>(
    matrix: &SquareMatrix<R>,
) -> Result<R, LinalgError> {
    determinant_parallel_with(matrix, &ParallelConfig::default())
}

/// Computes the determinant with top-level fan-out under a configuration.
///
/// # Errors
///
/// Returns [`LinalgError::Overflow`] when any task's product chain or the
/// final fold leaves the range of the entry type.
pub fn determinant_parallel_with<R: CheckedRing>(
    matrix: &SquareMatrix<R>,
    config: &ParallelConfig,
) -> Result<R, LinalgError> {
    let n = matrix.dimension();
    if n == 1 || n < config.parallel_threshold {
        return laplace::determinant(matrix);
    }

    // Join barrier: the collect completes every task before any folding,
    // and the first task error becomes the error of the whole evaluation.
    let terms: Vec<R> = (0..n)
        .into_par_iter()
        .map(|column| signed_cofactor_term(matrix, column))
        .collect::<Result<_, _>>()?;

    terms.into_iter().try_fold(R::zero(), |sum, term| {
        sum.checked_add(&term).ok_or(LinalgError::Overflow)
    })
}
