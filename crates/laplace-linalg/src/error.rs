//! Error types for matrix construction and determinant evaluation.

use thiserror::Error;

/// Errors reported by matrix construction and determinant evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// A matrix was requested with dimension 0.
    #[error("matrix dimension must be at least 1")]
    ZeroDimension,

    /// A row passed to `from_rows` has the wrong length.
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Entries required per row (the matrix dimension).
        expected: usize,
        /// Entries actually supplied.
        found: usize,
    },

    /// A flat entry buffer does not hold exactly dimension² values.
    #[error("{found} entries cannot fill a {dimension}x{dimension} matrix")]
    EntryCountMismatch {
        /// Requested side length.
        dimension: usize,
        /// Entries actually supplied.
        found: usize,
    },

    /// A product, negation or sum left the range of the entry type.
    #[error("arithmetic overflow while evaluating the determinant")]
    Overflow,
}
