//! Alpha compositing of a blended layer over its base.
//!
//! ```text
//! result = clip((1 - alpha) * base + alpha * blended, 0, 1)
//! ```
//!
//! This runs after every blend mode, `normal` included, so alpha always
//! interpolates between the untouched base and the blended result.
//! Alpha is not range-checked here; see [`crate::guard::ensure_unit_interval`].

use crate::guard::ensure_same_shape;
use crate::OpsResult;
use bmc_core::PixelGrid;
use tracing::trace;

/// Composites one blended pixel over its base pixel.
///
/// # Example
///
/// ```rust
/// use bmc_ops::composite::composite_pixel;
///
/// let out = composite_pixel([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], 0.5);
/// assert_eq!(out, [0.5, 0.0, 0.5]);
/// ```
#[inline]
pub fn composite_pixel(base: [f64; 3], blended: [f64; 3], alpha: f64) -> [f64; 3] {
    let mix = |b: f64, x: f64| ((1.0 - alpha) * b + alpha * x).clamp(0.0, 1.0);
    [
        mix(base[0], blended[0]),
        mix(base[1], blended[1]),
        mix(base[2], blended[2]),
    ]
}

/// Composites a blended grid over its base.
///
/// # Errors
///
/// Returns [`crate::OpsError::ShapeMismatch`] if the grids differ in shape.
pub fn composite(base: &PixelGrid, blended: &PixelGrid, alpha: f64) -> OpsResult<PixelGrid> {
    ensure_same_shape(base, blended)?;
    trace!(alpha, "composite");
    Ok(base.zip_map(blended, |b, x| composite_pixel(b, x, alpha))?)
}
