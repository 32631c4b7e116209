//! Error types for blend operations.

use bmc_core::Shape;
use thiserror::Error;

/// Error type for blend and compositing operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// The two input grids differ in shape. Raised before any pixel work.
    #[error("shape mismatch: base is {expected}, overlay is {actual}")]
    ShapeMismatch {
        /// Shape of the base grid.
        expected: Shape,
        /// Shape of the overlay grid.
        actual: Shape,
    },

    /// The mode tag names no known formula.
    #[error("unsupported blend mode: {0:?}")]
    UnsupportedMode(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Grid construction or geometry failure.
    #[error("grid error: {0}")]
    Core(bmc_core::Error),
}

impl OpsError {
    /// Returns `true` when a batch over many modes can log this and go on.
    ///
    /// ```rust
    /// use bmc_ops::BlendMode;
    ///
    /// let err = "dissolve".parse::<BlendMode>().unwrap_err();
    /// assert!(err.is_recoverable());
    /// ```
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnsupportedMode(_))
    }
}

impl From<bmc_core::Error> for OpsError {
    fn from(err: bmc_core::Error) -> Self {
        match err {
            bmc_core::Error::ShapeMismatch { expected, actual } => {
                Self::ShapeMismatch { expected, actual }
            }
            other => Self::Core(other),
        }
    }
}

/// Result type for blend operations.
pub type OpsResult<T> = Result<T, OpsError>;
