//! Blend command

use crate::BlendArgs;
use anyhow::{Context, Result};
use bmc_ops::guard::ensure_unit_interval;
use bmc_ops::BlendOptions;
use tracing::info;

pub fn run(args: BlendArgs, verbose: bool) -> Result<()> {
    let mode = super::parse_mode(&args.mode)?;
    ensure_unit_interval("alpha", args.alpha)?;
    let (base, overlay) = super::load_inputs(&args.base, &args.overlay, args.crop)?;

    if verbose {
        println!(
            "Blending {} onto {} with mode '{}' at alpha {}",
            args.overlay.display(),
            args.base.display(),
            mode,
            args.alpha
        );
    }

    let result = BlendOptions::new(mode)
        .with_alpha(args.alpha)
        .apply(&base, &overlay)
        .context("Blend failed")?;

    super::save_image(&args.output, &result)?;
    info!(output = %args.output.display(), "wrote {}x{}", result.width(), result.height());

    if verbose {
        println!("Done.");
    }

    Ok(())
}
