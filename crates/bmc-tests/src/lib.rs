//! Integration tests for the blend mode compendium crates.
//!
//! These tests run the whole path a user takes: PNG in, crop, blend,
//! composite, PNG out, and comparison against reference renders.

pub mod golden;
