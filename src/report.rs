//! Full orthonormalization run and its textual rendering.

use crate::error::{GsError, GsResult};
use crate::gram_schmidt::{collapsed_index, is_orthogonal, is_orthonormal, orthogonalize};
use crate::vector::VectorN;
use serde::{Deserialize, Serialize};

/// Original, orthogonal and orthonormal bases with their verification flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasisReport {
    pub original: Vec<VectorN>,
    pub orthogonal: Vec<VectorN>,
    pub orthonormal: Vec<VectorN>,
    pub is_orthogonal: bool,
    pub is_orthonormal: bool,
}

impl BasisReport {
    /// Orthogonalize `basis`, check independence, then normalize.
    ///
    /// A dependent basis is rejected with [`GsError::LinearlyDependent`]
    /// naming the first collapsed vector (1-based), so normalization never
    /// sees a near-zero vector. The basis is orthogonalized once.
    pub fn compute(basis: &[VectorN]) -> GsResult<Self> {
        let orthogonal = orthogonalize(basis)?;
        if let Some(i) = collapsed_index(&orthogonal) {
            return Err(GsError::LinearlyDependent { index: i + 1 });
        }

        let orthonormal = orthogonal
            .iter()
            .map(VectorN::normalize)
            .collect::<GsResult<Vec<_>>>()?;
        let is_orthogonal = is_orthogonal(&orthogonal)?;
        let is_orthonormal = is_orthonormal(&orthonormal)?;

        Ok(Self {
            original: basis.to_vec(),
            orthogonal,
            orthonormal,
            is_orthogonal,
            is_orthonormal,
        })
    }
}

/// One line per vector: `v1 = (1.0000, 0.0000)`.
pub fn render_basis(basis: &[VectorN], prefix: &str, precision: usize) -> Vec<String> {
    basis
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{}{} = {:.*}", prefix, i + 1, precision, v))
        .collect()
}

pub fn verdict(ok: bool) -> &'static str {
    if ok {
        "YES ✓"
    } else {
        "NO ✗"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basis() {
        let basis = vec![VectorN::from([1.0, 0.0]), VectorN::from([0.5, -2.0])];
        assert_eq!(
            render_basis(&basis, "w", 4),
            vec!["w1 = (1.0000, 0.0000)", "w2 = (0.5000, -2.0000)"]
        );
        assert_eq!(render_basis(&basis[..1], "u", 1), vec!["u1 = (1.0, 0.0)"]);
    }

    #[test]
    fn test_verdict() {
        assert_eq!(verdict(true), "YES ✓");
        assert_eq!(verdict(false), "NO ✗");
    }

    #[test]
    fn test_dependent_basis_names_vector() {
        let basis = vec![
            VectorN::from([1.0, 2.0]),
            VectorN::from([2.0, 4.0]),
        ];
        match BasisReport::compute(&basis) {
            Err(GsError::LinearlyDependent { index }) => assert_eq!(index, 2),
            other => panic!("expected dependence error, got {:?}", other),
        }
    }
}
