//! Gram-Schmidt orthogonalization of real vector bases.
//!
//! ```
//! use gram_schmidt::{orthonormalize, is_orthonormal, VectorN};
//!
//! let basis = vec![VectorN::from([1.0, 0.0]), VectorN::from([1.0, 1.0])];
//! let u = orthonormalize(&basis)?;
//! assert!(is_orthonormal(&u)?);
//! # Ok::<(), gram_schmidt::GsError>(())
//! ```
//!
//! # Modules
//!
//! - `vector`: immutable N-dimensional vector arithmetic
//! - `gram_schmidt`: orthogonalization and verification predicates
//! - `batch`: many independent bases at once (parallel with the `parallel` feature)
//! - `report`, `input`, `config`: the console driver's presenter, input parsing and settings

pub mod batch;
pub mod config;
pub mod error;
pub mod gram_schmidt;
pub mod input;
pub mod report;
pub mod vector;

pub use error::{GsError, GsResult};
pub use gram_schmidt::{
    are_linearly_independent, collapsed_index, first_dependent_index, is_orthogonal, is_orthonormal,
    orthogonalize, orthonormalize, EPSILON,
};
pub use vector::VectorN;
