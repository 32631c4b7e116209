//! Error types for grid construction and geometry.
//!
//! The [`Error`] enum covers the failure modes of building and reshaping
//! pixel grids:
//! - Buffer length does not match the requested dimensions
//! - Two grids that must agree in shape do not
//! - A crop or pixel access falls outside the grid
//!
//! # Usage
//!
//! ```rust
//! use bmc_core::{Error, PixelGrid};
//!
//! let err = PixelGrid::from_data(2, 2, vec![0.0; 5]).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```

use crate::Shape;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by `bmc-core` grid operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Pixel coordinates are outside grid bounds.
    #[error("pixel ({x}, {y}) out of bounds for grid {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Grid width
        width: u32,
        /// Grid height
        height: u32,
    },

    /// Buffer length or requested dimensions are inconsistent.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Two grids that must share a shape do not.
    ///
    /// Returned before any per-pixel work starts.
    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Shape of the first (base) grid
        expected: Shape,
        /// Shape of the second grid
        actual: Shape,
    },

    /// Source data carries a channel count the grid cannot represent.
    #[error("channel mismatch: expected {expected}, got {got}")]
    ChannelMismatch {
        /// Expected channel count
        expected: u32,
        /// Actual channel count
        got: u32,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::ShapeMismatch`] error.
    #[inline]
    pub fn shape_mismatch(expected: Shape, actual: Shape) -> Self {
        Self::ShapeMismatch { expected, actual }
    }

    /// Returns `true` if this is a shape or bounds error.
    #[inline]
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::ShapeMismatch { .. })
    }
}
