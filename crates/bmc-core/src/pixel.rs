//! Per-pixel constants and helpers.

// ============================================================================
// BT.601 Luma Constants
// ============================================================================

/// BT.601 luma coefficient for the red channel.
///
/// Used in `Y = 0.299*R + 0.587*G + 0.114*B`.
pub const BT601_LUMA_R: f64 = 0.299;

/// BT.601 luma coefficient for the green channel.
pub const BT601_LUMA_G: f64 = 0.587;

/// BT.601 luma coefficient for the blue channel.
pub const BT601_LUMA_B: f64 = 0.114;

/// BT.601 luma coefficients as an array `[R, G, B]`.
pub const BT601_LUMA: [f64; 3] = [BT601_LUMA_R, BT601_LUMA_G, BT601_LUMA_B];

/// Weighted BT.601 brightness of an RGB triple.
///
/// This is the "luma" of the HCL model and the brightness compared by the
/// darker/lighter color blend modes.
///
/// ```
/// use bmc_core::luma_bt601;
///
/// assert!((luma_bt601([1.0, 1.0, 1.0]) - 1.0).abs() < 1e-12);
/// assert!((luma_bt601([1.0, 0.0, 0.0]) - 0.299).abs() < 1e-12);
/// ```
#[inline]
pub fn luma_bt601(rgb: [f64; 3]) -> f64 {
    BT601_LUMA_R * rgb[0] + BT601_LUMA_G * rgb[1] + BT601_LUMA_B * rgb[2]
}
