//! Synthetic rainbow stripe patterns.
//!
//! Blending horizontal stripes over vertical stripes of the same palette
//! exercises every color pair at once, which makes the pair a compact
//! reference input for checking blend modes.

use crate::{OpsError, OpsResult};
use bmc_color::hls_to_rgb;
use bmc_core::PixelGrid;
use tracing::debug;

/// Stripe pattern parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripeConfig {
    /// Number of rainbow colors (one stripe each).
    pub colors: u32,
    /// Side of the square image in pixels.
    pub size: u32,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            colors: 12,
            size: 12,
        }
    }
}

impl StripeConfig {
    /// Thickness of one stripe. Rows/columns past `colors * thickness`
    /// stay black.
    pub fn thickness(&self) -> u32 {
        self.size.checked_div(self.colors).unwrap_or(0)
    }

    fn color_at(&self, palette: &[[f64; 3]], pos: u32) -> [f64; 3] {
        let thickness = self.thickness();
        if thickness == 0 {
            return [0.0; 3];
        }
        palette
            .get((pos / thickness) as usize)
            .copied()
            .unwrap_or([0.0; 3])
    }
}

/// `n` fully saturated colors evenly spaced around the hue circle.
///
/// Color `i` is HLS `(i / n, 0.5, 1.0)`, so the first is pure red.
///
/// ```rust
/// use bmc_ops::pattern::rainbow_colors;
///
/// let colors = rainbow_colors(3);
/// assert_eq!(colors[0], [1.0, 0.0, 0.0]);
/// assert_eq!(colors.len(), 3);
/// ```
pub fn rainbow_colors(n: u32) -> Vec<[f64; 3]> {
    (0..n)
        .map(|i| hls_to_rgb(f64::from(i) / f64::from(n), 0.5, 1.0))
        .collect()
}

/// Builds the `(horizontal, vertical)` stripe pair.
///
/// In the horizontal image row `y` belongs to stripe `y / thickness`; the
/// vertical image is the same with columns.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] if `colors` or `size` is zero.
pub fn striped_images(config: StripeConfig) -> OpsResult<(PixelGrid, PixelGrid)> {
    if config.colors == 0 || config.size == 0 {
        return Err(OpsError::InvalidParameter(format!(
            "stripe pattern needs colors > 0 and size > 0, got {config:?}"
        )));
    }
    debug!(colors = config.colors, size = config.size, "striped_images");
    let palette = rainbow_colors(config.colors);
    let horizontal = PixelGrid::from_fn(config.size, config.size, |_, y| config.color_at(&palette, y));
    let vertical = PixelGrid::from_fn(config.size, config.size, |x, _| config.color_at(&palette, x));
    Ok((horizontal, vertical))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmc_core::luma_bt601;

    #[test]
    fn test_rainbow_primaries() {
        let colors = rainbow_colors(6);
        let expected = [
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 1.0, 1.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
        ];
        for (got, want) in colors.iter().zip(expected) {
            for i in 0..3 {
                assert!((got[i] - want[i]).abs() < 1e-12, "{got:?} vs {want:?}");
            }
        }
        assert!(rainbow_colors(0).is_empty());
    }

    #[test]
    fn test_rainbow_full_chroma() {
        for c in rainbow_colors(12) {
            let max = c.iter().cloned().fold(f64::MIN, f64::max);
            let min = c.iter().cloned().fold(f64::MAX, f64::min);
            assert!((max - 1.0).abs() < 1e-12 && min.abs() < 1e-12, "{c:?}");
        }
    }

    #[test]
    fn test_default_stripes() {
        let (h, v) = striped_images(StripeConfig::default()).unwrap();
        assert_eq!(h.dimensions(), (12, 12));
        let palette = rainbow_colors(12);
        for i in 0..12 {
            assert_eq!(h.pixel(0, i), palette[i as usize]);
            assert_eq!(h.pixel(11, i), palette[i as usize]);
            assert_eq!(v.pixel(i, 0), palette[i as usize]);
            assert_eq!(v.pixel(i, 11), palette[i as usize]);
        }
    }

    #[test]
    fn test_leftover_rows_black() {
        let config = StripeConfig { colors: 3, size: 10 };
        assert_eq!(config.thickness(), 3);
        let (h, v) = striped_images(config).unwrap();
        assert_eq!(h.pixel(4, 2), [1.0, 0.0, 0.0]);
        assert_eq!(h.pixel(4, 9), [0.0; 3]);
        assert_eq!(v.pixel(9, 4), [0.0; 3]);
        assert!(luma_bt601(v.pixel(8, 0)) > 0.0);
    }

    #[test]
    fn test_more_colors_than_pixels_is_black() {
        let (h, _) = striped_images(StripeConfig { colors: 20, size: 4 }).unwrap();
        assert!(h.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_zero_colors_rejected() {
        assert!(striped_images(StripeConfig { colors: 0, size: 4 }).is_err());
        assert!(striped_images(StripeConfig { colors: 4, size: 0 }).is_err());
    }
}
