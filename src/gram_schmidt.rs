//! Classical Gram-Schmidt Orthogonalization
//!
//! Turns an ordered basis `[b₁, ..., bₙ]` into an orthogonal basis
//! `[w₁, ..., wₙ]` spanning the same space, and optionally normalizes it.
//!
//! # Algorithm
//!
//! ```text
//! w₁ = b₁
//! wᵢ = bᵢ - proj(w₁) - proj(w₂) - ... - proj(wᵢ₋₁)
//! ```
//!
//! Each projection is taken from the running remainder, not from the original
//! `bᵢ`: after subtracting `proj_{w₁}`, the next projection onto `w₂` uses the
//! already reduced vector. The order is fixed (j ascending) and determines the
//! rounding behaviour of the output.
//!
//! The result depends on input order: permuting the basis generally yields a
//! different orthogonal basis of the same span.
//!
//! # Tolerance
//!
//! [`EPSILON`] is used only by the predicates. Arithmetic never rounds to
//! zero, and a collapsed (dependent) vector is returned as is.

use crate::error::{GsError, GsResult};
use crate::vector::VectorN;

/// Tolerance for treating norms and dot products as zero (or norms as one).
pub const EPSILON: f64 = 1e-10;

/// Orthogonalize `basis` in index order.
///
/// # Errors
///
/// - [`GsError::InvalidArgument`] if `basis` is empty
/// - [`GsError::DimensionMismatch`] if the vectors do not share one dimension
pub fn orthogonalize(basis: &[VectorN]) -> GsResult<Vec<VectorN>> {
    let (first, rest) = basis
        .split_first()
        .ok_or_else(|| GsError::InvalidArgument("Basis cannot be empty".into()))?;

    let mut orthogonal = Vec::with_capacity(basis.len());
    orthogonal.push(first.clone());

    for b in rest {
        let mut current = b.clone();
        for w in &orthogonal {
            let projection = current.project_onto(w)?;
            current = current.subtract(&projection)?;
        }
        orthogonal.push(current);
    }

    Ok(orthogonal)
}

/// Orthogonalize `basis`, then normalize each vector in order.
///
/// # Errors
///
/// Everything [`orthogonalize`] returns, plus [`GsError::Arithmetic`] when an
/// orthogonalized vector has exactly zero norm. Near-zero norms are not caught;
/// call [`are_linearly_independent`] first.
pub fn orthonormalize(basis: &[VectorN]) -> GsResult<Vec<VectorN>> {
    orthogonalize(basis)?
        .iter()
        .map(VectorN::normalize)
        .collect()
}

/// Position of the first vector that collapses below [`EPSILON`] during
/// orthogonalization, if any.
///
/// Only small norms count as collapse. Input large enough to overflow the dot
/// products yields NaN remainders, and `NaN < EPSILON` is false, so such a
/// basis is not reported as dependent.
pub fn first_dependent_index(vectors: &[VectorN]) -> GsResult<Option<usize>> {
    let orthogonal = orthogonalize(vectors)?;
    Ok(collapsed_index(&orthogonal))
}

/// Index of the first already-orthogonalized vector with norm below [`EPSILON`].
pub fn collapsed_index(orthogonal: &[VectorN]) -> Option<usize> {
    orthogonal.iter().position(|w| w.norm() < EPSILON)
}

/// False when orthogonalization collapses some vector to a norm below [`EPSILON`].
///
/// Overflowing input is not caught; see [`first_dependent_index`].
pub fn are_linearly_independent(vectors: &[VectorN]) -> GsResult<bool> {
    Ok(first_dependent_index(vectors)?.is_none())
}

/// True when every distinct pair has `|⟨bᵢ, bⱼ⟩| ≤ EPSILON`.
///
/// An empty or single-vector basis is trivially orthogonal.
pub fn is_orthogonal(basis: &[VectorN]) -> GsResult<bool> {
    for (i, bi) in basis.iter().enumerate() {
        for bj in &basis[i + 1..] {
            let dot = bi.dot(bj)?;
            if dot.abs() > EPSILON || dot.is_nan() {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// True when `basis` is orthogonal and every norm is within [`EPSILON`] of 1.
pub fn is_orthonormal(basis: &[VectorN]) -> GsResult<bool> {
    if !is_orthogonal(basis)? {
        return Ok(false);
    }
    Ok(basis.iter().all(|v| (v.norm() - 1.0).abs() <= EPSILON))
}
