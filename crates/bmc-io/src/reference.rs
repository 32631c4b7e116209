//! Locating reference renders on disk.
//!
//! References are PNGs named `test_<mode>.png`, where `<mode>` is a blend
//! mode tag with underscores for spaces (`test_color_burn.png`).

use crate::{IoError, IoResult};
use std::path::{Path, PathBuf};

/// File name prefix shared by reference renders.
pub const REFERENCE_PREFIX: &str = "test_";

/// Sorted `*.png` files in `dir` whose names start with `prefix`.
pub fn png_files(dir: &Path, prefix: &str) -> IoResult<Vec<PathBuf>> {
    let pattern = dir.join(format!("{prefix}*.png"));
    let pattern = pattern
        .to_str()
        .ok_or_else(|| IoError::Pattern(format!("non UTF-8 path: {}", dir.display())))?;
    let mut files = glob::glob(pattern)
        .map_err(|e| IoError::Pattern(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| IoError::Io(e.into()))?;
    files.sort();
    Ok(files)
}

/// Mode tag encoded in a reference file name, underscores kept.
///
/// ```rust
/// use bmc_io::reference::mode_tag;
/// use std::path::Path;
///
/// assert_eq!(mode_tag(Path::new("refs/test_color_burn.png")).as_deref(), Some("color_burn"));
/// assert_eq!(mode_tag(Path::new("refs/other.png")), None);
/// ```
pub fn mode_tag(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    stem.strip_prefix(REFERENCE_PREFIX).map(str::to_string)
}
