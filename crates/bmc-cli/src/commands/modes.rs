//! Modes command

use crate::ModesArgs;
use anyhow::Result;
use bmc_ops::BlendMode;

pub fn run(args: ModesArgs, verbose: bool) -> Result<()> {
    for mode in BlendMode::ALL {
        if args.file_names {
            println!("test_{}.png", mode.file_tag());
        } else if verbose {
            let kind = if mode.is_separable() { "per-channel" } else { "whole-pixel" };
            println!("{:<14} {}", mode.name(), kind);
        } else {
            println!("{}", mode.name());
        }
    }
    Ok(())
}
