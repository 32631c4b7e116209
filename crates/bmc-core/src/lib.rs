//! # bmc-core
//!
//! Core types for the blend mode compendium.
//!
//! This crate provides the foundational types used by every other `bmc-*` crate:
//!
//! - [`Grid`] - Immutable, cheaply clonable pixel grid tagged with a channel space
//! - [`Rgb`], [`Hcl`] - Channel space markers ([`PixelGrid`] and [`HclGrid`] aliases)
//! - [`Shape`] - `[height, width, channels]` triple used for shape checks
//! - [`Error`] - Construction and geometry errors
//!
//! ## Value Range
//!
//! Grids hold `f64` samples normalized to `[0, 1]`. Integer encodings only
//! exist at the I/O boundary ([`Grid::from_u8`], [`Grid::to_u8`]).
//!
//! ## Crate Structure
//!
//! ```text
//! bmc-core (this crate)
//!    ^
//!    |
//!    +-- bmc-color (RGB <-> HCL, HLS)
//!    +-- bmc-ops (blend modes, compositing, metrics)
//!    +-- bmc-io (PNG I/O, cropping)
//!    +-- bmc-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod grid;
pub mod pixel;
pub mod shape;
pub mod space;

pub use error::{Error, Result};
pub use grid::{Grid, HclGrid, PixelGrid};
pub use pixel::{luma_bt601, BT601_LUMA, BT601_LUMA_B, BT601_LUMA_G, BT601_LUMA_R};
pub use shape::Shape;
pub use space::{ChannelSpace, Hcl, Rgb};

/// Guard added to denominators so no formula divides by an exact zero.
///
/// Shared by every division-guarded blend formula and by the HCL inverse.
pub const EPSILON: f64 = 1e-10;

/// Number of channels carried by every grid.
pub const CHANNELS: usize = 3;

/// Prelude module for convenient imports.
///
/// ```
/// use bmc_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::grid::{Grid, HclGrid, PixelGrid};
    pub use crate::pixel::{luma_bt601, BT601_LUMA};
    pub use crate::shape::Shape;
    pub use crate::space::{ChannelSpace, Hcl, Rgb};
    pub use crate::{CHANNELS, EPSILON};
}
