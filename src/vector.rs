// src/vector.rs
//! Immutable N-dimensional real vector and the arithmetic Gram-Schmidt is built from.
//!
//! Every operation returns a new [`VectorN`]; nothing mutates a vector after
//! construction. Binary operations check dimensions and fail with
//! [`GsError::DimensionMismatch`] instead of panicking.

use crate::error::{GsError, GsResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, Mul, Neg};

/// Decimal places used by `Display` when the formatter gives no precision.
pub const DEFAULT_PRECISION: usize = 4;

/// A real vector whose dimension is fixed at construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VectorN {
    data: Vec<f64>,
}

impl VectorN {
    /// Construct from owned components. The dimension is `data.len()`.
    #[inline]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Construct by copying a slice.
    #[inline]
    pub fn from_slice(data: &[f64]) -> Self {
        Self { data: data.to_vec() }
    }

    /// Zero vector of the given dimension.
    #[inline]
    pub fn zeros(dimension: usize) -> Self {
        Self {
            data: vec![0.0; dimension],
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// Component at `index`, or `None` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Owned copy of the components.
    #[inline]
    pub fn components(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// True when every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0.0)
    }

    #[inline]
    fn check_dimension(&self, other: &Self) -> GsResult<()> {
        if self.dimension() != other.dimension() {
            return Err(GsError::DimensionMismatch {
                expected: self.dimension(),
                actual: other.dimension(),
            });
        }
        Ok(())
    }

    /// Inner product, accumulated left to right from index 0.
    #[inline]
    pub fn dot(&self, other: &Self) -> GsResult<f64> {
        self.check_dimension(other)?;
        let mut sum = 0.0;
        for (&a, &b) in self.data.iter().zip(other.data.iter()) {
            sum += a * b;
        }
        Ok(sum)
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(&self) -> f64 {
        let mut sum = 0.0;
        for &x in &self.data {
            sum += x * x;
        }
        sum.sqrt()
    }

    /// Scale every component by `s`.
    #[inline]
    pub fn scale(&self, s: f64) -> Self {
        Self {
            data: self.data.iter().map(|&x| x * s).collect(),
        }
    }

    /// Componentwise `self - other`.
    #[inline]
    pub fn subtract(&self, other: &Self) -> GsResult<Self> {
        self.check_dimension(other)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a - b)
                .collect(),
        })
    }

    /// Projection of `self` onto the line spanned by `onto`:
    /// `onto * (⟨self, onto⟩ / ⟨onto, onto⟩)`.
    ///
    /// Projecting onto a zero vector is not guarded: the ratio is `0/0` and
    /// the result carries NaN components.
    #[inline]
    pub fn project_onto(&self, onto: &Self) -> GsResult<Self> {
        let scalar = self.dot(onto)? / onto.dot(onto)?;
        Ok(onto.scale(scalar))
    }

    /// Unit vector in the direction of `self`.
    ///
    /// Only an exactly-zero norm is rejected; tiny norms are divided through.
    pub fn normalize(&self) -> GsResult<Self> {
        let magnitude = self.norm();
        if magnitude == 0.0 {
            return Err(GsError::Arithmetic("Cannot normalize zero vector".into()));
        }
        Ok(self.scale(1.0 / magnitude))
    }

    /// Componentwise comparison within `tolerance`. Different dimensions are never equal.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.dimension() == other.dimension()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl From<Vec<f64>> for VectorN {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

impl<const N: usize> From<[f64; N]> for VectorN {
    fn from(data: [f64; N]) -> Self {
        Self::new(data.to_vec())
    }
}

impl Index<usize> for VectorN {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl Mul<f64> for &VectorN {
    type Output = VectorN;

    #[inline]
    fn mul(self, rhs: f64) -> VectorN {
        self.scale(rhs)
    }
}

impl Neg for &VectorN {
    type Output = VectorN;

    #[inline]
    fn neg(self) -> VectorN {
        self.scale(-1.0)
    }
}

/// Renders as `(c1, c2, ..., cd)`; `{:.2}` overrides the default 4 decimals.
impl fmt::Display for VectorN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(f, "(")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.*}", precision, x)?;
        }
        write!(f, ")")
    }
}
