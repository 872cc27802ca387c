//! # Laplace
//!
//! Determinants of square integer matrices by recursive Laplace (cofactor)
//! expansion along the first row, sequentially or with one rayon task per
//! top-level cofactor term.
//!
//! ## Quick Start
//!
//! ```rust
//! use laplace::prelude::*;
//!
//! let m = SquareMatrix::from_rows(vec![
//!     vec![83i64, 86, 77],
//!     vec![15, 93, 35],
//!     vec![86, 92, 49],
//! ])?;
//! assert_eq!(determinant(&m)?, -202_965);
//! assert_eq!(determinant_parallel(&m)?, -202_965);
//! # Ok::<(), LinalgError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use laplace_linalg as linalg;
pub use laplace_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use laplace_linalg::{
        determinant, determinant_parallel, determinant_parallel_with, LinalgError,
        ParallelConfig, SquareMatrix,
    };
    pub use laplace_rings::{CheckedRing, Sign};
}
