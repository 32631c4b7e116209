//! # bmc-color
//!
//! Color model conversions used by the blend engine.
//!
//! - [`hcl`] - Hue/Chroma/Luma (BT.601) forward and inverse transforms,
//!   per pixel and per grid. The hue, saturation, color and luminosity
//!   blend modes recombine channels in this space.
//! - [`hls`] - HLS to RGB, used to build rainbow test patterns.
//!
//! # Example
//!
//! ```rust
//! use bmc_color::hcl::{hcl_to_rgb_pixel, rgb_to_hcl_pixel};
//!
//! let rgb = [0.8, 0.4, 0.2];
//! let back = hcl_to_rgb_pixel(rgb_to_hcl_pixel(rgb));
//! assert!((back[0] - 0.8).abs() < 1e-6);
//! ```

#![warn(missing_docs)]

pub mod hcl;
pub mod hls;

pub use hcl::{hcl_to_rgb, hcl_to_rgb_pixel, rgb_to_hcl, rgb_to_hcl_pixel};
pub use hls::hls_to_rgb;
