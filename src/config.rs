//! Session parameters for the interactive driver.

use crate::error::{GsError, GsResult};
use crate::vector::DEFAULT_PRECISION;
use serde::{Deserialize, Serialize};

/// Dimension bounds and output precision for one session.
///
/// The algorithm itself has no dimension limit; these bounds only shape what
/// the console accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Smallest accepted dimension (inclusive)
    pub min_dimension: usize,
    /// Largest accepted dimension (inclusive)
    pub max_dimension: usize,
    /// Decimal places when printing vectors
    pub precision: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_dimension: 2,
            max_dimension: 10,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> GsResult<()> {
        if self.min_dimension == 0 {
            return Err(GsError::InvalidArgument(
                "min_dimension must be at least 1".into(),
            ));
        }
        if self.min_dimension > self.max_dimension {
            return Err(GsError::InvalidArgument(format!(
                "min_dimension ({}) exceeds max_dimension ({})",
                self.min_dimension, self.max_dimension
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn accepts(&self, dimension: usize) -> bool {
        (self.min_dimension..=self.max_dimension).contains(&dimension)
    }
}
