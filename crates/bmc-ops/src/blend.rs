//! Photoshop-style blend modes.
//!
//! Each mode combines a base pixel with an overlay pixel. Separable modes
//! apply one formula per channel; the rest work on whole pixels:
//!
//! - [`BlendMode::DarkerColor`] / [`BlendMode::LighterColor`] copy the
//!   entire RGB triple of whichever pixel has the lower/higher BT.601 luma,
//!   keeping the base on ties.
//! - [`BlendMode::Hue`], [`BlendMode::Saturation`], [`BlendMode::Color`] and
//!   [`BlendMode::Luminosity`] convert both pixels to HCL, take each channel
//!   from base or overlay, and convert back.
//!
//! Formulas may leave `[0, 1]` (vivid light near the edges, linear light);
//! the compositor clips afterwards. Every denominator is guarded by
//! [`EPSILON`], so finite inputs always give finite outputs.
//!
//! # Example
//!
//! ```rust
//! use bmc_ops::blend::blend_pixel;
//! use bmc_ops::BlendMode;
//!
//! let base = [0.8, 0.4, 0.2];
//! let overlay = [0.5, 0.5, 0.5];
//!
//! let out = blend_pixel(base, overlay, BlendMode::Multiply);
//! assert!((out[0] - 0.4).abs() < 1e-12);
//! ```

use crate::guard::ensure_same_shape;
use crate::{BlendMode, OpsResult};
use bmc_color::{hcl_to_rgb_pixel, rgb_to_hcl_pixel};
use bmc_core::{luma_bt601, PixelGrid, EPSILON};
use tracing::debug;

/// Blends two pixels. The result is not clipped.
#[inline]
pub fn blend_pixel(base: [f64; 3], overlay: [f64; 3], mode: BlendMode) -> [f64; 3] {
    match mode {
        BlendMode::Normal => overlay,
        BlendMode::Multiply => per_channel(base, overlay, |b, o| b * o),
        BlendMode::Screen => per_channel(base, overlay, |b, o| 1.0 - (1.0 - b) * (1.0 - o)),
        BlendMode::Overlay => per_channel(base, overlay, |b, o| {
            if b < 0.5 {
                2.0 * o * b
            } else {
                1.0 - 2.0 * (1.0 - o) * (1.0 - b)
            }
        }),
        BlendMode::Darken => per_channel(base, overlay, f64::min),
        BlendMode::Lighten => per_channel(base, overlay, f64::max),
        BlendMode::ColorBurn => per_channel(base, overlay, |b, o| {
            1.0 - ((1.0 - b) / o.clamp(EPSILON, 1.0)).min(1.0)
        }),
        BlendMode::LinearBurn => per_channel(base, overlay, |b, o| (b + o - 1.0).max(0.0)),
        BlendMode::DarkerColor => {
            if luma_bt601(base) <= luma_bt601(overlay) {
                base
            } else {
                overlay
            }
        }
        BlendMode::LighterColor => {
            if luma_bt601(base) >= luma_bt601(overlay) {
                base
            } else {
                overlay
            }
        }
        BlendMode::ColorDodge => {
            per_channel(base, overlay, |b, o| (b / (1.0 - o + EPSILON)).clamp(0.0, 1.0))
        }
        BlendMode::LinearDodge => per_channel(base, overlay, |b, o| (b + o).clamp(0.0, 1.0)),
        BlendMode::SoftLight => per_channel(base, overlay, |b, o| {
            if o <= 0.5 {
                b * (1.0 - (1.0 - 2.0 * o) * (1.0 - b))
            } else {
                b + (2.0 * o - 1.0) * (b.sqrt() - b)
            }
        }),
        BlendMode::HardLight => per_channel(base, overlay, |b, o| {
            if o < 0.5 {
                2.0 * o * b
            } else {
                1.0 - 2.0 * (1.0 - o) * (1.0 - b)
            }
        }),
        BlendMode::VividLight => per_channel(base, overlay, |b, o| {
            if o <= 0.5 {
                1.0 - (1.0 - b) / (2.0 * o + EPSILON)
            } else {
                b / (2.0 * (1.0 - o) + EPSILON)
            }
        }),
        BlendMode::LinearLight => per_channel(base, overlay, |b, o| b + 2.0 * o - 1.0),
        BlendMode::PinLight => per_channel(base, overlay, |b, o| {
            if o <= 0.5 {
                b.min(2.0 * o)
            } else {
                b.max(2.0 * (o - 0.5))
            }
        }),
        BlendMode::HardMix => {
            per_channel(base, overlay, |b, o| if b + o >= 1.0 { 1.0 } else { 0.0 })
        }
        BlendMode::Difference => per_channel(base, overlay, |b, o| (b - o).abs()),
        BlendMode::Exclusion => per_channel(base, overlay, |b, o| (b + o - 2.0 * b * o).abs()),
        BlendMode::Subtract => per_channel(base, overlay, |b, o| (b - o).clamp(0.0, 1.0)),
        BlendMode::Divide => per_channel(base, overlay, |b, o| b / o.clamp(EPSILON, 1.0)),
        BlendMode::Hue => hcl_compose(base, overlay, |b, o| [o[0], b[1], b[2]]),
        BlendMode::Saturation => hcl_compose(base, overlay, |b, o| [b[0], o[1], b[2]]),
        BlendMode::Color => hcl_compose(base, overlay, |b, o| [o[0], o[1], b[2]]),
        BlendMode::Luminosity => hcl_compose(base, overlay, |b, o| [b[0], b[1], o[2]]),
    }
}

/// Blends two equal-shaped grids. The result is not clipped.
///
/// # Errors
///
/// Returns [`crate::OpsError::ShapeMismatch`] before any pixel is computed.
pub fn blend(base: &PixelGrid, overlay: &PixelGrid, mode: BlendMode) -> OpsResult<PixelGrid> {
    ensure_same_shape(base, overlay)?;
    debug!(
        mode = %mode,
        width = base.width(),
        height = base.height(),
        "blend"
    );
    Ok(base.zip_map(overlay, |b, o| blend_pixel(b, o, mode))?)
}

#[inline(always)]
fn per_channel(base: [f64; 3], overlay: [f64; 3], f: impl Fn(f64, f64) -> f64) -> [f64; 3] {
    [
        f(base[0], overlay[0]),
        f(base[1], overlay[1]),
        f(base[2], overlay[2]),
    ]
}

/// Picks HCL channels from base/overlay and converts the result back to RGB.
#[inline]
fn hcl_compose(
    base: [f64; 3],
    overlay: [f64; 3],
    pick: impl Fn([f64; 3], [f64; 3]) -> [f64; 3],
) -> [f64; 3] {
    hcl_to_rgb_pixel(pick(rgb_to_hcl_pixel(base), rgb_to_hcl_pixel(overlay)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;
    use approx::assert_abs_diff_eq;
    use bmc_core::Shape;

    fn sample_a() -> PixelGrid {
        PixelGrid::from_fn(6, 5, |x, y| {
            [x as f64 / 5.0, y as f64 / 4.0, ((x + y) % 3) as f64 / 2.0]
        })
    }

    fn sample_b() -> PixelGrid {
        PixelGrid::from_fn(6, 5, |x, y| {
            [1.0 - y as f64 / 4.0, 0.3, (x * y % 7) as f64 / 6.0]
        })
    }

    fn assert_grid_eq(a: &PixelGrid, b: &PixelGrid, eps: f64) {
        assert_eq!(a.shape(), b.shape());
        for (x, y) in a.data().iter().zip(b.data()) {
            assert_abs_diff_eq!(x, y, epsilon = eps);
        }
    }

    #[test]
    fn test_multiply_pixel() {
        let out = blend_pixel([1.0, 1.0, 1.0], [0.5, 0.5, 0.5], BlendMode::Multiply);
        assert_eq!(out, [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_screen_pixel() {
        let out = blend_pixel([0.5, 0.5, 0.5], [0.5, 0.5, 0.5], BlendMode::Screen);
        assert_abs_diff_eq!(out[0], 0.75);
    }

    #[test]
    fn test_overlay_and_hard_light_mirror() {
        let (a, b) = ([0.3, 0.7, 0.5], [0.6, 0.2, 0.9]);
        let ov = blend_pixel(a, b, BlendMode::Overlay);
        let hl = blend_pixel(b, a, BlendMode::HardLight);
        for i in 0..3 {
            assert_abs_diff_eq!(ov[i], hl[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_burn_and_dodge_guarded() {
        let burn = blend_pixel([0.5, 1.0, 0.0], [0.0, 0.0, 0.0], BlendMode::ColorBurn);
        assert_eq!(burn, [0.0, 1.0, 0.0]);
        let dodge = blend_pixel([0.5, 0.0, 1.0], [1.0, 1.0, 1.0], BlendMode::ColorDodge);
        assert_eq!(dodge, [1.0, 0.0, 1.0]);
        let div = blend_pixel([0.5, 0.0, 0.2], [0.0, 0.0, 0.4], BlendMode::Divide);
        assert!(div.iter().all(|v| v.is_finite()));
        assert_abs_diff_eq!(div[2], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_vivid_light_extremes_finite() {
        for b in [0.0, 0.5, 1.0] {
            for o in [0.0, 0.5, 1.0] {
                let out = blend_pixel([b; 3], [o; 3], BlendMode::VividLight);
                assert!(out.iter().all(|v| v.is_finite()), "b={b} o={o}");
            }
        }
    }

    #[test]
    fn test_soft_light_neutral_gray() {
        let base = [0.2, 0.5, 0.9];
        let out = blend_pixel(base, [0.5; 3], BlendMode::SoftLight);
        for i in 0..3 {
            assert_abs_diff_eq!(out[i], base[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_pin_light_and_hard_mix() {
        assert_eq!(blend_pixel([0.8; 3], [0.2; 3], BlendMode::PinLight), [0.4; 3]);
        assert_abs_diff_eq!(blend_pixel([0.1; 3], [0.8; 3], BlendMode::PinLight)[0], 0.6, epsilon = 1e-12);
        assert_eq!(blend_pixel([0.5; 3], [0.5; 3], BlendMode::HardMix), [1.0; 3]);
        assert_eq!(blend_pixel([0.4; 3], [0.5; 3], BlendMode::HardMix), [0.0; 3]);
    }

    #[test]
    fn test_linear_modes() {
        assert_eq!(blend_pixel([0.2; 3], [0.3; 3], BlendMode::LinearBurn), [0.0; 3]);
        assert_eq!(blend_pixel([0.8; 3], [0.9; 3], BlendMode::LinearDodge), [1.0; 3]);
        let ll = blend_pixel([0.9; 3], [0.9; 3], BlendMode::LinearLight);
        assert_abs_diff_eq!(ll[0], 1.7, epsilon = 1e-12);
        assert_eq!(blend_pixel([0.2; 3], [0.5; 3], BlendMode::Subtract), [0.0; 3]);
    }

    #[test]
    fn test_commutative_modes() {
        let (a, b) = (sample_a(), sample_b());
        for mode in [
            BlendMode::Multiply,
            BlendMode::Screen,
            BlendMode::Difference,
            BlendMode::Exclusion,
            BlendMode::LinearDodge,
        ] {
            let ab = blend(&a, &b, mode).unwrap();
            let ba = blend(&b, &a, mode).unwrap();
            assert_grid_eq(&ab, &ba, 1e-12);
        }
    }

    #[test]
    fn test_idempotence() {
        let a = sample_a();
        assert_eq!(blend(&a, &a, BlendMode::Normal).unwrap(), a);
        let diff = blend(&a, &a, BlendMode::Difference).unwrap();
        assert!(diff.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_identity_elements() {
        let x = sample_b();
        let black = PixelGrid::new(6, 5);
        let white = PixelGrid::filled(6, 5, [1.0; 3]);
        assert_eq!(blend(&black, &x, BlendMode::Multiply).unwrap(), black);
        assert_eq!(blend(&white, &x, BlendMode::Screen).unwrap(), white);
        let add = blend(&x, &white, BlendMode::LinearDodge).unwrap();
        assert!(add.data().iter().all(|&v| v <= 1.0));
    }

    #[test]
    fn test_darker_lighter_partition() {
        let (a, b) = (sample_a(), sample_b());
        let dark = blend(&a, &b, BlendMode::DarkerColor).unwrap();
        let light = blend(&a, &b, BlendMode::LighterColor).unwrap();
        for y in 0..5 {
            for x in 0..6 {
                let (pa, pb) = (a.pixel(x, y), b.pixel(x, y));
                let (d, l) = (dark.pixel(x, y), light.pixel(x, y));
                assert!(d == pa || d == pb);
                assert!(l == pa || l == pb);
                if luma_bt601(pa) == luma_bt601(pb) {
                    assert_eq!(d, pa);
                    assert_eq!(l, pa);
                } else {
                    assert_ne!(d, l);
                }
            }
        }
    }

    #[test]
    fn test_darker_lighter_tie_keeps_base() {
        // Pure red and gray 0.299 share luma 0.299 exactly.
        let red = [1.0, 0.0, 0.0];
        let gray = [0.299; 3];
        assert_eq!(luma_bt601(red), luma_bt601(gray));
        assert_eq!(blend_pixel(red, gray, BlendMode::DarkerColor), red);
        assert_eq!(blend_pixel(red, gray, BlendMode::LighterColor), red);
        assert_eq!(blend_pixel(gray, red, BlendMode::DarkerColor), gray);
        assert_eq!(blend_pixel(gray, red, BlendMode::LighterColor), gray);
    }

    #[test]
    fn test_hcl_modes_on_same_input() {
        let p = [0.7, 0.3, 0.2];
        for mode in [
            BlendMode::Hue,
            BlendMode::Saturation,
            BlendMode::Color,
            BlendMode::Luminosity,
        ] {
            let out = blend_pixel(p, p, mode);
            for i in 0..3 {
                assert_abs_diff_eq!(out[i], p[i], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_hcl_modes_pick_channels() {
        // Both inputs and every result stay inside the RGB gamut.
        let base = [0.6, 0.4, 0.3];
        let overlay = [0.5, 0.45, 0.4];
        let [bh, bc, bl] = rgb_to_hcl_pixel(base);
        let [oh, oc, ol] = rgb_to_hcl_pixel(overlay);

        let cases = [
            (BlendMode::Hue, [oh, bc, bl]),
            (BlendMode::Saturation, [bh, oc, bl]),
            (BlendMode::Color, [oh, oc, bl]),
            (BlendMode::Luminosity, [bh, bc, ol]),
        ];
        for (mode, expected) in cases {
            let got = rgb_to_hcl_pixel(blend_pixel(base, overlay, mode));
            for i in 0..3 {
                assert_abs_diff_eq!(got[i], expected[i], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_luminosity_takes_overlay_luma() {
        let out = blend_pixel([0.8, 0.2, 0.2], [0.5, 0.5, 0.5], BlendMode::Luminosity);
        assert_abs_diff_eq!(luma_bt601(out), 0.5, epsilon = 1e-6);
        assert!(out[0] > out[1]);
    }

    #[test]
    fn test_every_mode_finite_on_extremes() {
        let corners = [0.0, 0.5, 1.0];
        for mode in BlendMode::ALL {
            for &b in &corners {
                for &o in &corners {
                    let out = blend_pixel([b, o, 1.0 - b], [o, b, 0.5], mode);
                    assert!(out.iter().all(|v| v.is_finite()), "{mode} b={b} o={o}");
                }
            }
        }
    }

    #[test]
    fn test_shape_mismatch() {
        let a = PixelGrid::new(10, 10);
        let b = PixelGrid::new(12, 10);
        let err = blend(&a, &b, BlendMode::Normal).unwrap_err();
        assert_eq!(
            err,
            OpsError::ShapeMismatch {
                expected: Shape::new(10, 10),
                actual: Shape::new(10, 12),
            }
        );
    }
}
