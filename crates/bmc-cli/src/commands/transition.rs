//! Transition command

use crate::TransitionArgs;
use anyhow::{Context, Result};
use bmc_ops::transition::{strip, transition};

pub fn run(args: TransitionArgs, verbose: bool) -> Result<()> {
    let mode = super::parse_mode(&args.mode)?;
    let (base, overlay) = super::load_inputs(&args.base, &args.overlay, args.crop)?;

    let frames = transition(&base, &overlay, mode, args.steps).context("Transition failed")?;
    if verbose {
        let alphas: Vec<String> = frames.iter().map(|f| format!("{:.3}", f.alpha)).collect();
        println!("Mode '{}', alphas: {}", mode, alphas.join(" "));
    }

    let sheet = strip(&frames)?;
    super::save_image(&args.output, &sheet)?;

    if verbose {
        println!("Wrote {} frames to {}", frames.len(), args.output.display());
    }
    Ok(())
}
