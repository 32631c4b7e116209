//! # bmc-ops
//!
//! Blend modes and compositing for normalized RGB grids.
//!
//! # Modules
//!
//! - [`mode`] - The 26 [`BlendMode`]s and their textual tags
//! - [`blend`] - Per-pixel and per-grid blend formulas
//! - [`composite`] - Alpha compositing of the blended layer over the base
//! - [`pipeline`] - [`blend_images`]: blend plus composite in one pass
//! - [`guard`] - Shape and parameter validation
//! - [`metrics`] - SAE and pairwise similarity against references
//! - [`pattern`] - Rainbow stripe test patterns
//! - [`transition`] - Alpha fade sequences
//!
//! # Example
//!
//! ```rust
//! use bmc_core::PixelGrid;
//! use bmc_ops::{blend_images, BlendMode};
//!
//! let white = PixelGrid::filled(4, 4, [1.0; 3]);
//! let gray = PixelGrid::filled(4, 4, [0.5; 3]);
//!
//! let out = blend_images(&white, &gray, 1.0, BlendMode::Multiply)?;
//! assert_eq!(out.pixel(2, 2), [0.5; 3]);
//! # Ok::<(), bmc_ops::OpsError>(())
//! ```
//!
//! # Errors
//!
//! Every grid operation checks shapes first and fails with
//! [`OpsError::ShapeMismatch`] before touching pixels. Unknown mode tags
//! give [`OpsError::UnsupportedMode`], which [`OpsError::is_recoverable`]
//! flags so batch callers can log it and move on.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod blend;
pub mod composite;
pub mod guard;
pub mod metrics;
pub mod mode;
pub mod pattern;
pub mod pipeline;
pub mod transition;

pub use error::{OpsError, OpsResult};
pub use mode::BlendMode;
pub use pipeline::{blend_images, blend_images_named, BlendOptions};
