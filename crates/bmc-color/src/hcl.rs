//! Hue / Chroma / Luma color model.
//!
//! HCL here is the hexcone model used by the non-separable blend modes:
//!
//! - **hue**: position on the color wheel as a fraction of a turn, `[0, 1)`
//! - **chroma**: `max(R, G, B) - min(R, G, B)`
//! - **luma**: BT.601 weighted sum `0.299 R + 0.587 G + 0.114 B`
//!
//! The inverse rebuilds a zero-based triple from hue and chroma, then shifts
//! or scales it until its luma matches the requested one:
//!
//! ```text
//! m = luma - luma(r1, g1, b1)
//!
//! m + chroma > 1   too bright   add m plus an overflow correction
//! m < 0            too dark     scale by luma(r1, g1, b1) / luma
//! otherwise        in range     add m to every channel
//! ```
//!
//! Every channel is clamped to `[0, 1]` afterwards. For any RGB pixel with
//! nonzero chroma and luma, `hcl_to_rgb_pixel(rgb_to_hcl_pixel(p))` returns
//! `p` to within floating point noise.

use bmc_core::{luma_bt601, HclGrid, PixelGrid, EPSILON};
use tracing::trace;

/// Converts one RGB pixel to `[hue, chroma, luma]`.
///
/// Hue is 0 when chroma is 0. When several channels share the maximum, the
/// later channel (blue, then green, then red) picks the hue sector; all
/// choices land on the same hue.
///
/// # Example
///
/// ```rust
/// use bmc_color::rgb_to_hcl_pixel;
///
/// let [h, c, l] = rgb_to_hcl_pixel([0.0, 0.0, 1.0]);
/// assert!((h - 4.0 / 6.0).abs() < 1e-12);
/// assert_eq!(c, 1.0);
/// assert!((l - 0.114).abs() < 1e-12);
/// ```
#[inline]
pub fn rgb_to_hcl_pixel(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let chroma = maxc - minc;

    let hue = if chroma != 0.0 {
        let sector = if maxc == b {
            4.0 + (r - g) / chroma
        } else if maxc == g {
            2.0 + (b - r) / chroma
        } else {
            (g - b) / chroma
        };
        (sector / 6.0).rem_euclid(1.0)
    } else {
        0.0
    };

    [hue, chroma, luma_bt601(rgb)]
}

/// Converts one `[hue, chroma, luma]` pixel back to RGB.
///
/// # Example
///
/// ```rust
/// use bmc_color::hcl_to_rgb_pixel;
///
/// // Pure green: hue 1/3, chroma 1, luma 0.587
/// let rgb = hcl_to_rgb_pixel([1.0 / 3.0, 1.0, 0.587]);
/// assert!((rgb[1] - 1.0).abs() < 1e-9);
/// assert!(rgb[0].abs() < 1e-9 && rgb[2].abs() < 1e-9);
/// ```
#[inline]
pub fn hcl_to_rgb_pixel(hcl: [f64; 3]) -> [f64; 3] {
    let [h, c, l] = hcl;
    let h_prime = h * 6.0;
    let x = c * (1.0 - (h_prime.rem_euclid(2.0) - 1.0).abs());

    let (r1, g1, b1) = if h_prime < 1.0 {
        (c, x, 0.0)
    } else if h_prime < 2.0 {
        (x, c, 0.0)
    } else if h_prime < 3.0 {
        (0.0, c, x)
    } else if h_prime < 4.0 {
        (0.0, x, c)
    } else if h_prime < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let base_luma = luma_bt601([r1, g1, b1]);
    let m = l - base_luma;

    // Scale factor for the too-dark branch; black targets fall back to eps.
    let ms = if l > 0.0 { base_luma / l } else { EPSILON };

    // Overflow redistributed across channels for the too-bright branch.
    let ma = if m + x > 1.0 {
        2.0 * m + c + x - 2.0
    } else {
        (m + c - 1.0) / 2.0
    };

    let adjust = |v: f64| -> f64 {
        let out = if m + c > 1.0 {
            v + m + ma
        } else if m < 0.0 {
            v / (ms + EPSILON)
        } else {
            v + m
        };
        out.clamp(0.0, 1.0)
    };

    [adjust(r1), adjust(g1), adjust(b1)]
}

/// Converts an RGB grid to HCL.
pub fn rgb_to_hcl(grid: &PixelGrid) -> HclGrid {
    trace!(width = grid.width(), height = grid.height(), "hcl::rgb_to_hcl");
    grid.map(rgb_to_hcl_pixel)
}

/// Converts an HCL grid back to RGB, clamped to `[0, 1]`.
pub fn hcl_to_rgb(grid: &HclGrid) -> PixelGrid {
    trace!(width = grid.width(), height = grid.height(), "hcl::hcl_to_rgb");
    grid.map(hcl_to_rgb_pixel)
}
