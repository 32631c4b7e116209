//! The closed set of blend modes and their textual tags.
//!
//! Tags are matched case-insensitively and treat spaces, underscores and
//! hyphens alike, so `"color burn"`, `"color_burn"` (the reference image
//! file naming) and `"Color-Burn"` all name [`BlendMode::ColorBurn`].

use crate::{OpsError, OpsResult};
use std::fmt;
use std::str::FromStr;

/// Blend mode selecting the per-pixel formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Overlay replaces base.
    #[default]
    Normal,
    /// Product of both layers.
    Multiply,
    /// Inverse product of inverses.
    Screen,
    /// Multiply or screen depending on the base.
    Overlay,
    /// Per-channel minimum.
    Darken,
    /// Per-channel maximum.
    Lighten,
    /// Darkens base to reflect overlay by increasing contrast.
    ColorBurn,
    /// Sum minus one, floored at zero.
    LinearBurn,
    /// Whole pixel with the lower luma.
    DarkerColor,
    /// Whole pixel with the higher luma.
    LighterColor,
    /// Brightens base to reflect overlay by decreasing contrast.
    ColorDodge,
    /// Clamped sum ("add").
    LinearDodge,
    /// Gentle overlay driven by the overlay layer.
    SoftLight,
    /// Multiply or screen depending on the overlay.
    HardLight,
    /// Color burn or dodge depending on the overlay.
    VividLight,
    /// Linear burn or dodge depending on the overlay.
    LinearLight,
    /// Darken or lighten depending on the overlay.
    PinLight,
    /// Thresholded sum, 0 or 1 per channel.
    HardMix,
    /// Absolute difference.
    Difference,
    /// Lower-contrast difference.
    Exclusion,
    /// Clamped base minus overlay.
    Subtract,
    /// Base over overlay, overlay floored at eps.
    Divide,
    /// Overlay hue with base chroma and luma.
    Hue,
    /// Overlay chroma with base hue and luma.
    Saturation,
    /// Overlay hue and chroma with base luma.
    Color,
    /// Overlay luma with base hue and chroma.
    Luminosity,
}

impl BlendMode {
    /// Every mode, in reference table order.
    pub const ALL: [BlendMode; 26] = [
        Self::Normal,
        Self::Multiply,
        Self::Screen,
        Self::Overlay,
        Self::Darken,
        Self::Lighten,
        Self::ColorBurn,
        Self::LinearBurn,
        Self::DarkerColor,
        Self::LighterColor,
        Self::ColorDodge,
        Self::LinearDodge,
        Self::SoftLight,
        Self::HardLight,
        Self::VividLight,
        Self::LinearLight,
        Self::PinLight,
        Self::HardMix,
        Self::Difference,
        Self::Exclusion,
        Self::Subtract,
        Self::Divide,
        Self::Hue,
        Self::Saturation,
        Self::Color,
        Self::Luminosity,
    ];

    /// Canonical lowercase tag, words separated by a space.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
            Self::Darken => "darken",
            Self::Lighten => "lighten",
            Self::ColorBurn => "color burn",
            Self::LinearBurn => "linear burn",
            Self::DarkerColor => "darker color",
            Self::LighterColor => "lighter color",
            Self::ColorDodge => "color dodge",
            Self::LinearDodge => "linear dodge",
            Self::SoftLight => "soft light",
            Self::HardLight => "hard light",
            Self::VividLight => "vivid light",
            Self::LinearLight => "linear light",
            Self::PinLight => "pin light",
            Self::HardMix => "hard mix",
            Self::Difference => "difference",
            Self::Exclusion => "exclusion",
            Self::Subtract => "subtract",
            Self::Divide => "divide",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Color => "color",
            Self::Luminosity => "luminosity",
        }
    }

    /// Tag with underscores, as used in reference file names (`test_<tag>.png`).
    pub fn file_tag(self) -> String {
        self.name().replace(' ', "_")
    }

    /// `true` for modes computed channel by channel.
    ///
    /// Darker/lighter color pick whole pixels and the four HCL modes
    /// recombine hue, chroma and luma, so none of those is separable.
    pub const fn is_separable(self) -> bool {
        !matches!(
            self,
            Self::DarkerColor
                | Self::LighterColor
                | Self::Hue
                | Self::Saturation
                | Self::Color
                | Self::Luminosity
        )
    }

    /// Parses a textual tag.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::UnsupportedMode`] carrying the original tag.
    ///
    /// ```rust
    /// use bmc_ops::BlendMode;
    ///
    /// assert_eq!(BlendMode::parse("Linear_Dodge").unwrap(), BlendMode::LinearDodge);
    /// assert!(BlendMode::parse("does not exist").is_err());
    /// ```
    pub fn parse(tag: &str) -> OpsResult<Self> {
        let normalized = tag
            .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.name() == normalized)
            .ok_or_else(|| OpsError::UnsupportedMode(tag.to_string()))
    }
}

impl FromStr for BlendMode {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_names_unique_and_parse_back() {
        let names: HashSet<_> = BlendMode::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(names.len(), 26);
        for mode in BlendMode::ALL {
            assert_eq!(BlendMode::parse(mode.name()).unwrap(), mode);
            assert_eq!(BlendMode::parse(&mode.file_tag()).unwrap(), mode);
        }
    }

    #[test]
    fn test_parse_separators_and_case() {
        assert_eq!(BlendMode::parse("COLOR-BURN").unwrap(), BlendMode::ColorBurn);
        assert_eq!(BlendMode::parse("  vivid   light ").unwrap(), BlendMode::VividLight);
        assert_eq!("pin_light".parse::<BlendMode>().unwrap(), BlendMode::PinLight);
    }

    #[test]
    fn test_unknown_tag_is_unsupported() {
        let err = BlendMode::parse("does not exist").unwrap_err();
        assert_eq!(err, OpsError::UnsupportedMode("does not exist".into()));
        assert!(err.is_recoverable());
        assert!(BlendMode::parse("").is_err());
        assert!(BlendMode::parse("dissolve").is_err());
    }

    #[test]
    fn test_default_is_normal() {
        assert_eq!(BlendMode::default(), BlendMode::Normal);
        assert_eq!(BlendMode::Normal.to_string(), "normal");
    }

    #[test]
    fn test_separable_split() {
        let non_separable = BlendMode::ALL.iter().filter(|m| !m.is_separable()).count();
        assert_eq!(non_separable, 6);
    }
}
