//! # bmc-io
//!
//! File boundary of the blend mode compendium.
//!
//! Everything inside the engine is an `f64` grid in `[0, 1]`; this crate
//! converts to and from 8/16-bit PNG and prepares input pairs:
//!
//! - [`png`] - Read any common PNG layout into a [`PixelGrid`], write 8-bit RGB
//! - [`crop`] - Shared central square crop and pair loading
//! - [`reference`] - Finding `test_<mode>.png` reference renders
//!
//! # Example
//!
//! ```rust,ignore
//! use bmc_io::{load_pair, write_png};
//! use bmc_ops::{blend_images, BlendMode};
//!
//! let (base, overlay) = load_pair("a.png", "b.png", true)?;
//! let out = blend_images(&base, &overlay, 1.0, BlendMode::Screen)?;
//! write_png("out.png", &out)?;
//! ```
//!
//! [`PixelGrid`]: bmc_core::PixelGrid

#![warn(missing_docs)]

mod error;
pub mod crop;
pub mod png;
pub mod reference;

pub use crop::{crop_to_shared_square, load_pair};
pub use error::{IoError, IoResult};
pub use crate::png::{read as read_png, write as write_png};
