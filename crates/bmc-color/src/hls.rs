//! HLS (hue, lightness, saturation) to RGB.
//!
//! Only the forward direction is needed: rainbow test patterns are built
//! from evenly spaced hues at lightness 0.5 and full saturation.

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRD: f64 = 2.0 / 3.0;

/// Converts HLS to RGB. All inputs and outputs are in `[0, 1]`; hue wraps.
///
/// # Example
///
/// ```rust
/// use bmc_color::hls_to_rgb;
///
/// assert_eq!(hls_to_rgb(0.0, 0.5, 1.0), [1.0, 0.0, 0.0]);
/// assert_eq!(hls_to_rgb(0.3, 0.25, 0.0), [0.25, 0.25, 0.25]);
/// ```
pub fn hls_to_rgb(h: f64, l: f64, s: f64) -> [f64; 3] {
    if s == 0.0 {
        return [l, l, l];
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    [
        hue_channel(m1, m2, h + ONE_THIRD),
        hue_channel(m1, m2, h),
        hue_channel(m1, m2, h - ONE_THIRD),
    ]
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRD {
        m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0
    } else {
        m1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_wheel_primaries() {
        let green = hls_to_rgb(ONE_THIRD, 0.5, 1.0);
        assert_abs_diff_eq!(green[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(green[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(green[2], 0.0, epsilon = 1e-12);

        let blue = hls_to_rgb(TWO_THIRD, 0.5, 1.0);
        assert_abs_diff_eq!(blue[2], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(blue[0], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_half_step_orange() {
        // Hue 1/12 sits halfway between red and yellow.
        let rgb = hls_to_rgb(1.0 / 12.0, 0.5, 1.0);
        assert_abs_diff_eq!(rgb[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rgb[1], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(rgb[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_light_branch() {
        let rgb = hls_to_rgb(0.0, 0.75, 1.0);
        assert_abs_diff_eq!(rgb[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rgb[1], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(rgb[2], 0.5, epsilon = 1e-12);
    }
}
