//! Property-based tests for determinant evaluation.

use proptest::prelude::*;

use crate::laplace::determinant;
use crate::parallel::determinant_parallel;
use crate::square_matrix::SquareMatrix;

// Entries stay small so no property test can overflow an i64.
fn entry() -> impl Strategy<Value = i64> {
    -9i64..=9
}

fn matrix(dimension: usize) -> impl Strategy<Value = SquareMatrix<i64>> {
    prop::collection::vec(entry(), dimension * dimension)
        .prop_map(move |entries| SquareMatrix::from_entries(dimension, entries).unwrap())
}

fn small_matrix() -> impl Strategy<Value = SquareMatrix<i64>> {
    (1usize..=5).prop_flat_map(matrix)
}

proptest! {
    #[test]
    fn det_of_1x1_is_the_entry(a in entry()) {
        let m = SquareMatrix::from_entries(1, vec![a]).unwrap();
        prop_assert_eq!(determinant(&m), Ok(a));
    }

    #[test]
    fn det_of_2x2_is_ad_minus_bc(a in entry(), b in entry(), c in entry(), d in entry()) {
        let m = SquareMatrix::from_rows(vec![vec![a, b], vec![c, d]]).unwrap();
        prop_assert_eq!(determinant(&m), Ok(a * d - b * c));
    }

    #[test]
    fn any_zero_row_annihilates(
        (mut m, row) in (2usize..=5).prop_flat_map(|n| (matrix(n), 0..n))
    ) {
        for col in 0..m.dimension() {
            m[(row, col)] = 0;
        }
        prop_assert_eq!(determinant(&m), Ok(0));
    }

    #[test]
    fn row_swap_negates(
        (mut m, i, j) in (2usize..=5).prop_flat_map(|n| (matrix(n), 0..n, 0..n))
    ) {
        prop_assume!(i != j);
        let before = determinant(&m).unwrap();
        m.swap_rows(i, j);
        prop_assert_eq!(determinant(&m), Ok(-before));
    }

    #[test]
    fn row_scale_is_linear(
        (mut m, row) in (2usize..=5).prop_flat_map(|n| (matrix(n), 0..n)),
        k in -5i64..=5,
    ) {
        let before = determinant(&m).unwrap();
        m.checked_scale_row(row, &k).unwrap();
        prop_assert_eq!(determinant(&m), Ok(k * before));
    }

    #[test]
    fn sequential_and_parallel_agree(m in small_matrix()) {
        prop_assert_eq!(determinant(&m), determinant_parallel(&m));
    }
}
