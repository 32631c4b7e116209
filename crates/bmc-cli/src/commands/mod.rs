//! CLI command implementations

pub mod blend;
pub mod compare;
pub mod modes;
pub mod similar;
pub mod stripes;
pub mod transition;

use anyhow::{bail, Context, Result};
use bmc_core::PixelGrid;
use bmc_ops::BlendMode;
use std::path::{Path, PathBuf};

/// Load image from path
pub fn load_image(path: &Path) -> Result<PixelGrid> {
    bmc_io::read_png(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &PixelGrid) -> Result<()> {
    bmc_io::write_png(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Load a base/overlay pair, cropped to a shared square if asked.
pub fn load_inputs(base: &Path, overlay: &Path, crop: bool) -> Result<(PixelGrid, PixelGrid)> {
    let base_img = load_image(base)?;
    let overlay_img = load_image(overlay)?;
    if crop {
        return bmc_io::crop_to_shared_square(&base_img, &overlay_img)
            .context("Failed to crop inputs");
    }
    if base_img.shape() != overlay_img.shape() {
        bail!(
            "Image shapes don't match: {} is {}, {} is {} (use --crop)",
            base.display(),
            base_img.shape(),
            overlay.display(),
            overlay_img.shape()
        );
    }
    Ok((base_img, overlay_img))
}

/// Parse a blend mode tag
pub fn parse_mode(tag: &str) -> Result<BlendMode> {
    BlendMode::parse(tag).with_context(|| "Run `bmc modes` for the list of supported modes")
}

/// Sorted PNG files in `dir` whose names start with `prefix`.
pub fn png_files(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    bmc_io::reference::png_files(dir, prefix)
        .with_context(|| format!("Failed to list images in {}", dir.display()))
}

/// File name without extension, for display
pub fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
