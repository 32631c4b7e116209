//! One-call blend plus composite.
//!
//! [`blend_images`] is the entry point most callers want: it validates the
//! shapes, applies the mode and composites the result over the base at the
//! requested alpha, in a single pass over the pixels.
//!
//! # Example
//!
//! ```rust
//! use bmc_core::PixelGrid;
//! use bmc_ops::{blend_images, BlendMode};
//!
//! let red = PixelGrid::filled(2, 2, [1.0, 0.0, 0.0]);
//! let blue = PixelGrid::filled(2, 2, [0.0, 0.0, 1.0]);
//!
//! let out = blend_images(&red, &blue, 0.5, BlendMode::Normal)?;
//! assert_eq!(out.pixel(0, 0), [0.5, 0.0, 0.5]);
//! # Ok::<(), bmc_ops::OpsError>(())
//! ```

use crate::blend::blend_pixel;
use crate::composite::composite_pixel;
use crate::guard::ensure_same_shape;
use crate::{BlendMode, OpsResult};
use bmc_core::PixelGrid;
use tracing::debug;

/// Mode and opacity for a blend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendOptions {
    /// Blend formula.
    pub mode: BlendMode,
    /// Opacity of the blended layer over the base.
    pub alpha: f64,
}

impl Default for BlendOptions {
    fn default() -> Self {
        Self {
            mode: BlendMode::Normal,
            alpha: 1.0,
        }
    }
}

impl BlendOptions {
    /// Creates options for `mode` at full opacity.
    pub fn new(mode: BlendMode) -> Self {
        Self { mode, alpha: 1.0 }
    }

    /// Sets the opacity.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Applies these options to a base/overlay pair.
    pub fn apply(&self, base: &PixelGrid, overlay: &PixelGrid) -> OpsResult<PixelGrid> {
        blend_images(base, overlay, self.alpha, self.mode)
    }
}

/// Blends `overlay` onto `base` and composites at `alpha`.
///
/// Output is clipped to `[0, 1]`. At `alpha = 0` it equals `base`; at
/// `alpha = 1` it equals the clipped blend.
///
/// # Errors
///
/// Returns [`crate::OpsError::ShapeMismatch`] before any pixel work.
pub fn blend_images(
    base: &PixelGrid,
    overlay: &PixelGrid,
    alpha: f64,
    mode: BlendMode,
) -> OpsResult<PixelGrid> {
    ensure_same_shape(base, overlay)?;
    debug!(
        mode = %mode,
        alpha,
        width = base.width(),
        height = base.height(),
        "blend_images"
    );
    Ok(base.zip_map(overlay, |b, o| {
        composite_pixel(b, blend_pixel(b, o, mode), alpha)
    })?)
}

/// Like [`blend_images`] with the mode given as a tag.
///
/// The tag is parsed before the shapes are compared, so an unknown mode is
/// reported even for mismatched inputs.
///
/// # Errors
///
/// [`crate::OpsError::UnsupportedMode`] for an unknown tag, otherwise as
/// [`blend_images`].
pub fn blend_images_named(
    base: &PixelGrid,
    overlay: &PixelGrid,
    alpha: f64,
    mode: &str,
) -> OpsResult<PixelGrid> {
    let mode = BlendMode::parse(mode)?;
    blend_images(base, overlay, alpha, mode)
}
