//! Input validation guards.
//!
//! Blend entry points call these before touching any pixel, so a bad
//! input never produces a partial result.
//!
//! # Example
//!
//! ```rust
//! use bmc_core::PixelGrid;
//! use bmc_ops::guard::ensure_same_shape;
//!
//! let a = PixelGrid::new(4, 4);
//! let b = PixelGrid::new(4, 3);
//! assert!(ensure_same_shape(&a, &b).is_err());
//! ```

use crate::{OpsError, OpsResult};
use bmc_core::PixelGrid;

/// Validates that `base` and `overlay` have identical `[H, W, C]` shapes.
///
/// # Errors
///
/// Returns [`OpsError::ShapeMismatch`] with both shapes.
pub fn ensure_same_shape(base: &PixelGrid, overlay: &PixelGrid) -> OpsResult<()> {
    if base.shape() != overlay.shape() {
        return Err(OpsError::ShapeMismatch {
            expected: base.shape(),
            actual: overlay.shape(),
        });
    }
    Ok(())
}

/// Validates that a named parameter lies in `[0, 1]`.
///
/// The compositor itself accepts any alpha; callers that take user input
/// (the CLI) use this to reject values outside the documented range.
pub fn ensure_unit_interval(name: &str, value: f64) -> OpsResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(OpsError::InvalidParameter(format!(
            "{name} must be in [0, 1], got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmc_core::Shape;

    #[test]
    fn test_same_shape_ok() {
        let a = PixelGrid::new(3, 2);
        assert!(ensure_same_shape(&a, &a.clone()).is_ok());
    }

    #[test]
    fn test_mismatch_reports_both_shapes() {
        let a = PixelGrid::new(4, 4);
        let b = PixelGrid::new(4, 3);
        let err = ensure_same_shape(&a, &b).unwrap_err();
        assert_eq!(
            err,
            OpsError::ShapeMismatch {
                expected: Shape::new(4, 4),
                actual: Shape::new(3, 4),
            }
        );
    }

    #[test]
    fn test_unit_interval() {
        assert!(ensure_unit_interval("alpha", 0.0).is_ok());
        assert!(ensure_unit_interval("alpha", 1.0).is_ok());
        assert!(ensure_unit_interval("alpha", 1.5).is_err());
        assert!(ensure_unit_interval("alpha", f64::NAN).is_err());
    }
}
