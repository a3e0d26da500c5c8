//! Error type shared by the vector and Gram-Schmidt modules.

/// Errors raised by vector arithmetic and basis operations.
///
/// The core predicates never fail on linear dependence:
/// [`crate::gram_schmidt::are_linearly_independent`] reports it as `false`.
/// Only [`crate::report::BasisReport::compute`] turns it into
/// [`GsError::LinearlyDependent`].
#[derive(Debug, Clone, PartialEq)]
pub enum GsError {
    /// Argument rejected before any arithmetic ran (e.g. an empty basis)
    InvalidArgument(String),

    /// Binary vector operation on operands of different dimension
    DimensionMismatch { expected: usize, actual: usize },

    /// Arithmetic that has no defined result (normalizing a zero vector)
    Arithmetic(String),

    /// Basis rejected by a full run because vector `index` (1-based) collapsed
    LinearlyDependent { index: usize },
}

impl std::fmt::Display for GsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GsError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            GsError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            GsError::Arithmetic(msg) => write!(f, "Arithmetic error: {}", msg),
            GsError::LinearlyDependent { index } => write!(
                f,
                "The vectors are linearly dependent (vector {} lies in the span of the vectors before it)",
                index
            ),
        }
    }
}

impl std::error::Error for GsError {}

/// Result alias used throughout the crate
pub type GsResult<T> = Result<T, GsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = GsError::DimensionMismatch { expected: 2, actual: 3 };
        assert_eq!(e.to_string(), "Dimension mismatch: expected 2, got 3");

        let e = GsError::InvalidArgument("Basis cannot be empty".into());
        assert_eq!(e.to_string(), "Invalid argument: Basis cannot be empty");

        let e = GsError::Arithmetic("Cannot normalize zero vector".into());
        assert_eq!(e.to_string(), "Arithmetic error: Cannot normalize zero vector");

        let e = GsError::LinearlyDependent { index: 2 };
        assert!(e.to_string().contains("vector 2 lies in the span"));
    }
}
