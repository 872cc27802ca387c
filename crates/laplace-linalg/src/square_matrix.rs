//! Square matrix storage in row-major order.
//!
//! Every matrix owns its entries outright. Minors are fresh, independently
//! owned copies, so a minor stays valid after its source is dropped, and
//! dropping a minor on any return path releases its storage.

use std::fmt;
use std::ops::{Index, IndexMut};

use laplace_rings::CheckedRing;

use crate::error::LinalgError;

/// Square matrix stored in row-major order.
///
/// The entry at `(row, col)` lives at `entries[row * dimension + col]`.
/// Construction rejects dimension 0, so every value of this type is
/// indexable; there is no degenerate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix<R> {
    /// Side length, always at least 1.
    dimension: usize,
    /// `dimension * dimension` entries in row-major order.
    entries: Vec<R>,
}

impl<R: CheckedRing> SquareMatrix<R> {
    /// Creates a matrix of the given dimension filled with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ZeroDimension`] when `dimension == 0`.
    pub fn zeros(dimension: usize) -> Result<Self, LinalgError> {
        if dimension == 0 {
            return Err(LinalgError::ZeroDimension);
        }
        Ok(Self {
            dimension,
            entries: vec![R::zero(); dimension * dimension],
        })
    }

    /// Creates a matrix from a flat row-major entry buffer.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ZeroDimension`] when `dimension == 0`, or
    /// [`LinalgError::EntryCountMismatch`] when `entries.len()` is not
    /// exactly `dimension * dimension`.
    pub fn from_entries(dimension: usize, entries: Vec<R>) -> Result<Self, LinalgError> {
        if dimension == 0 {
            return Err(LinalgError::ZeroDimension);
        }
        if entries.len() != dimension * dimension {
            return Err(LinalgError::EntryCountMismatch {
                dimension,
                found: entries.len(),
            });
        }
        Ok(Self { dimension, entries })
    }

    /// Creates a matrix from nested row vectors.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ZeroDimension`] for empty input, or
    /// [`LinalgError::RaggedRows`] when any row's length differs from the
    /// number of rows.
    pub fn from_rows(rows: Vec<Vec<R>>) -> Result<Self, LinalgError> {
        let dimension = rows.len();
        if dimension == 0 {
            return Err(LinalgError::ZeroDimension);
        }
        for (row, values) in rows.iter().enumerate() {
            if values.len() != dimension {
                return Err(LinalgError::RaggedRows {
                    row,
                    expected: dimension,
                    found: values.len(),
                });
            }
        }
        Ok(Self {
            dimension,
            entries: rows.into_iter().flatten().collect(),
        })
    }

    /// Creates an identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ZeroDimension`] when `dimension == 0`.
    pub fn identity(dimension: usize) -> Result<Self, LinalgError> {
        let mut m = Self::zeros(dimension)?;
        for i in 0..dimension {
            m[(i, i)] = R::one();
        }
        Ok(m)
    }

    /// Returns the side length.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns a reference to the entry at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        if row < self.dimension && col < self.dimension {
            Some(&self.entries[row * self.dimension + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.dimension;
        &self.entries[start..start + self.dimension]
    }

    /// Returns a mutable slice of the specified row.
    pub fn row_mut(&mut self, row: usize) -> &mut [R] {
        let start = row * self.dimension;
        &mut self.entries[start..start + self.dimension]
    }

    /// Extracts the minor dropping row 0 and the given column.
    ///
    /// Row `i` of the minor is row `i + 1` of the source; column order skips
    /// exactly the deleted column. The result owns its storage and outlives
    /// the source.
    ///
    /// # Panics
    ///
    /// Panics when the matrix is 1x1 or the column is out of range; both
    /// are caller errors, not runtime conditions.
    #[must_use]
    pub fn minor(&self, column: usize) -> Self {
        assert!(self.dimension >= 2, "minor of a 1x1 matrix");
        assert!(
            column < self.dimension,
            "column {column} out of range for dimension {}",
            self.dimension
        );
        let n = self.dimension;
        let mut entries = Vec::with_capacity((n - 1) * (n - 1));
        for row in 1..n {
            for col in 0..n {
                if col == column {
                    continue;
                }
                entries.push(self.entries[row * n + col].clone());
            }
        }
        Self {
            dimension: n - 1,
            entries,
        }
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.dimension;
        let j_start = j * self.dimension;
        for k in 0..self.dimension {
            self.entries.swap(i_start + k, j_start + k);
        }
    }

    /// Multiplies every entry of a row by a scalar.
    ///
    /// The row is only written once every product is known to fit, so a
    /// failed call leaves the matrix unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Overflow`] when any product leaves the range
    /// of the entry type.
    pub fn checked_scale_row(&mut self, row: usize, scale: &R) -> Result<(), LinalgError> {
        let scaled: Vec<R> = self
            .row(row)
            .iter()
            .map(|v| v.checked_mul(scale).ok_or(LinalgError::Overflow))
            .collect::<Result<_, _>>()?;
        for (slot, value) in self.row_mut(row).iter_mut().zip(scaled) {
            *slot = value;
        }
        Ok(())
    }
}

impl<R> Index<(usize, usize)> for SquareMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.entries[row * self.dimension + col]
    }
}

impl<R> IndexMut<(usize, usize)> for SquareMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.entries[row * self.dimension + col]
    }
}

impl<R: fmt::Display> fmt::Display for SquareMatrix<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dimension {
            for col in 0..self.dimension {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.entries[row * self.dimension + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
