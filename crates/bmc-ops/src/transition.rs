//! Alpha transition sequences.
//!
//! A transition blends the same pair at evenly spaced opacities from 0 to
//! 1, showing how a mode fades in over the base. [`strip`] lays the frames
//! side by side for a single contact-sheet image.
//!
//! When the `parallel` feature is enabled, frames are rendered with rayon.

use crate::pipeline::blend_images;
use crate::{BlendMode, OpsError, OpsResult};
use bmc_core::PixelGrid;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One frame of a transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Opacity this frame was rendered at.
    pub alpha: f64,
    /// Composited result.
    pub image: PixelGrid,
}

/// `steps` evenly spaced values from 0 to 1 inclusive.
///
/// One step yields `[0.0]`; zero steps yield nothing.
///
/// ```rust
/// use bmc_ops::transition::linspace;
///
/// assert_eq!(linspace(5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let last = (n - 1) as f64;
            (0..n).map(|i| i as f64 / last).collect()
        }
    }
}

/// Renders `steps` frames of `overlay` fading onto `base` with `mode`.
///
/// # Errors
///
/// Shape mismatch, or [`OpsError::InvalidParameter`] for zero steps.
pub fn transition(
    base: &PixelGrid,
    overlay: &PixelGrid,
    mode: BlendMode,
    steps: usize,
) -> OpsResult<Vec<Frame>> {
    if steps == 0 {
        return Err(OpsError::InvalidParameter("transition needs at least one step".into()));
    }
    debug!(mode = %mode, steps, "transition");
    let render = |alpha: f64| -> OpsResult<Frame> {
        Ok(Frame {
            alpha,
            image: blend_images(base, overlay, alpha, mode)?,
        })
    };

    #[cfg(feature = "parallel")]
    let frames = linspace(steps).into_par_iter().map(render).collect();
    #[cfg(not(feature = "parallel"))]
    let frames = linspace(steps).into_iter().map(render).collect();

    frames
}

/// Places frames left to right in one grid.
pub fn strip(frames: &[Frame]) -> OpsResult<PixelGrid> {
    let images: Vec<PixelGrid> = frames.iter().map(|f| f.image.clone()).collect();
    Ok(PixelGrid::hstack(&images)?)
}
