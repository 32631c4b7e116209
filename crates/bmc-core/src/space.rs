//! Channel space markers.
//!
//! A [`Grid`](crate::Grid) carries a zero-sized marker naming what its three
//! channels mean. RGB and HCL grids share storage but are distinct types, so
//! an HCL grid cannot be handed to a blend formula or written out as an image
//! without an explicit conversion.
//!
//! ```compile_fail
//! use bmc_core::{HclGrid, PixelGrid};
//!
//! fn wants_rgb(_: &PixelGrid) {}
//! let hcl = HclGrid::new(1, 1);
//! wants_rgb(&hcl); // mismatched types
//! ```

use std::fmt;

/// Trait for channel space marker types.
pub trait ChannelSpace: Copy + Clone + Default + Send + Sync + fmt::Debug + 'static {
    /// Human-readable name of the space.
    const NAME: &'static str;

    /// Names of the three channels, in storage order.
    const CHANNEL_NAMES: [&'static str; 3];
}

/// Red, green, blue samples in `[0, 1]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb;

impl ChannelSpace for Rgb {
    const NAME: &'static str = "RGB";
    const CHANNEL_NAMES: [&'static str; 3] = ["R", "G", "B"];
}

/// Hue (fraction of a turn), chroma and BT.601 luma, each in `[0, 1]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hcl;

impl ChannelSpace for Hcl {
    const NAME: &'static str = "HCL";
    const CHANNEL_NAMES: [&'static str; 3] = ["H", "C", "L"];
}
