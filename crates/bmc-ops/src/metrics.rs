//! Image difference metrics for checking results against references.
//!
//! The sum of absolute errors (SAE) over RGB is the figure of merit: zero
//! means identical, anything above a small threshold points to a formula
//! discrepancy.

use crate::guard::ensure_same_shape;
use crate::pipeline::blend_images;
use crate::{BlendMode, OpsResult};
use bmc_core::PixelGrid;
use tracing::{debug, warn};

/// Sum of absolute differences over every sample.
///
/// # Errors
///
/// Returns [`crate::OpsError::ShapeMismatch`] if the shapes differ.
///
/// ```rust
/// use bmc_core::PixelGrid;
/// use bmc_ops::metrics::sae;
///
/// let a = PixelGrid::filled(2, 1, [0.5; 3]);
/// let b = PixelGrid::filled(2, 1, [0.25; 3]);
/// assert_eq!(sae(&a, &b)?, 1.5);
/// # Ok::<(), bmc_ops::OpsError>(())
/// ```
pub fn sae(a: &PixelGrid, b: &PixelGrid) -> OpsResult<f64> {
    ensure_same_shape(a, b)?;
    Ok(a.data()
        .iter()
        .zip(b.data())
        .map(|(x, y)| (x - y).abs())
        .sum())
}

/// SAE after quantizing both grids to 8 bits.
///
/// Matches how references stored as 8-bit PNGs are compared: small float
/// noise below half a code value does not count.
pub fn sae_quantized(a: &PixelGrid, b: &PixelGrid) -> OpsResult<u64> {
    ensure_same_shape(a, b)?;
    Ok(a.to_u8()
        .iter()
        .zip(b.to_u8())
        .map(|(&x, y)| u64::from(x.abs_diff(y)))
        .sum())
}

/// Largest absolute per-sample difference.
pub fn max_abs_diff(a: &PixelGrid, b: &PixelGrid) -> OpsResult<f64> {
    ensure_same_shape(a, b)?;
    Ok(a.data()
        .iter()
        .zip(b.data())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max))
}

/// Blends at full opacity and returns the quantized SAE against `reference`.
pub fn reference_sae(
    base: &PixelGrid,
    overlay: &PixelGrid,
    mode: BlendMode,
    reference: &PixelGrid,
) -> OpsResult<u64> {
    let ours = blend_images(base, overlay, 1.0, mode)?;
    let err = sae_quantized(&ours, reference)?;
    debug!(mode = %mode, sae = err, "reference comparison");
    Ok(err)
}

/// Two named images whose SAE fell below a threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarPair {
    /// First image name.
    pub first: String,
    /// Second image name.
    pub second: String,
    /// SAE between them.
    pub sae: f64,
}

/// Finds every unordered pair of images with `sae < threshold`.
///
/// Pairs are reported in input order. Pairs with different shapes are
/// skipped with a warning.
pub fn similar_pairs(images: &[(String, PixelGrid)], threshold: f64) -> Vec<SimilarPair> {
    let mut pairs = Vec::new();
    for (i, (name_a, a)) in images.iter().enumerate() {
        for (name_b, b) in &images[i + 1..] {
            match sae(a, b) {
                Ok(err) if err < threshold => pairs.push(SimilarPair {
                    first: name_a.clone(),
                    second: name_b.clone(),
                    sae: err,
                }),
                Ok(_) => {}
                Err(e) => warn!(first = %name_a, second = %name_b, "skipping pair: {e}"),
            }
        }
    }
    pairs
}
