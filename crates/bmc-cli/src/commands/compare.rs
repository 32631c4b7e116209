//! Reference comparison command
//!
//! Each `test_<mode>.png` in the reference directory is a render of BASE
//! and OVERLAY at full opacity. The mode is taken from the file name.

use crate::CompareArgs;
use anyhow::{bail, Context, Result};
use bmc_core::PixelGrid;
use bmc_io::reference::{mode_tag, REFERENCE_PREFIX};
use bmc_ops::metrics::reference_sae;
use bmc_ops::BlendMode;
use std::path::PathBuf;
use tracing::warn;

pub fn run(args: CompareArgs, verbose: bool) -> Result<()> {
    let (base, overlay) = super::load_inputs(&args.base, &args.overlay, args.crop)?;
    let files = super::png_files(&args.refs, REFERENCE_PREFIX)?;
    if files.is_empty() {
        bail!("No test_*.png references in {}", args.refs.display());
    }

    let results = check_references(&base, &overlay, &files)?;

    let mut failures = Vec::new();
    for &(mode, sae) in &results {
        if sae > args.threshold {
            println!("{:<14} SAE {:>10}  FAIL", mode.name(), sae);
            failures.push(mode);
        } else if verbose {
            println!("{:<14} SAE {:>10}  ok", mode.name(), sae);
        }
    }

    println!("{} references checked, {} over threshold {}", results.len(), failures.len(), args.threshold);
    if !failures.is_empty() {
        let names: Vec<&str> = failures.iter().map(|m| m.name()).collect();
        bail!("FAIL: {}", names.join(", "));
    }
    Ok(())
}

/// SAE of every supported reference in `files`, in file order.
///
/// Unknown mode tags are skipped with a warning. A reference whose size
/// differs from the inputs is an error, as is a set with nothing to check.
pub fn check_references(
    base: &PixelGrid,
    overlay: &PixelGrid,
    files: &[PathBuf],
) -> Result<Vec<(BlendMode, u64)>> {
    let mut results = Vec::new();
    for path in files {
        let Some(tag) = mode_tag(path) else {
            continue;
        };
        let mode = match BlendMode::parse(&tag) {
            Ok(mode) => mode,
            Err(e) if e.is_recoverable() => {
                warn!(reference = %path.display(), "skipping: {e}");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let reference = super::load_image(path)?;
        let sae = reference_sae(base, overlay, mode, &reference)
            .with_context(|| format!("Reference {} does not match the inputs", path.display()))?;
        results.push((mode, sae));
    }

    if results.is_empty() {
        bail!("No reference matched a supported blend mode");
    }
    Ok(results)
}
