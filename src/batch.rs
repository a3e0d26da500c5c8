//! Batched orthogonalization of many independent bases.
//!
//! Calls share no state, so with the `parallel` feature each basis runs on the
//! rayon pool. Results keep input order, and one failing basis only affects
//! its own slot.

use crate::error::GsResult;
use crate::gram_schmidt::{orthogonalize, orthonormalize};
use crate::vector::VectorN;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

fn run_batch<F>(bases: &[Vec<VectorN>], op: F) -> Vec<GsResult<Vec<VectorN>>>
where
    F: Fn(&[VectorN]) -> GsResult<Vec<VectorN>> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        bases.par_iter().map(|b| op(b.as_slice())).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        bases.iter().map(|b| op(b.as_slice())).collect()
    }
}

/// [`orthogonalize`] each basis.
pub fn orthogonalize_batch(bases: &[Vec<VectorN>]) -> Vec<GsResult<Vec<VectorN>>> {
    run_batch(bases, orthogonalize)
}

/// [`orthonormalize`] each basis.
pub fn orthonormalize_batch(bases: &[Vec<VectorN>]) -> Vec<GsResult<Vec<VectorN>>> {
    run_batch(bases, orthonormalize)
}
