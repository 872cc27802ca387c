//! Alternating signs of a Laplace expansion.

use crate::traits::CheckedRing;

/// The +1/-1 factor attached to a matrix position in a cofactor expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    /// Positions where row + column is even.
    Positive,
    /// Positions where row + column is odd.
    Negative,
}

impl Sign {
    /// Returns the sign of position `(row, column)`.
    ///
    /// An engine expanding along row 0 only ever sees the column parity,
    /// but the full rule is kept so expansion along any row stays correct.
    #[must_use]
    pub fn of_position(row: usize, column: usize) -> Self {
        if (row + column) % 2 == 0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// Applies the sign to a value.
    ///
    /// Returns `None` when the negation overflows (e.g. `i64::MIN`).
    #[must_use]
    pub fn apply<R: CheckedRing>(self, value: R) -> Option<R> {
        match self {
            Self::Positive => Some(value),
            Self::Negative => value.checked_neg(),
        }
    }
}
