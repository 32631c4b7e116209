//! Stripes command

use crate::StripesArgs;
use anyhow::{Context, Result};
use bmc_ops::pattern::{striped_images, StripeConfig};

pub fn run(args: StripesArgs, verbose: bool) -> Result<()> {
    let config = StripeConfig {
        colors: args.colors,
        size: args.size,
    };
    let (horizontal, vertical) = striped_images(config)?;

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let h_path = args.output.join("image_horizontal_stripes.png");
    let v_path = args.output.join("image_vertical_stripes.png");
    super::save_image(&h_path, &horizontal)?;
    super::save_image(&v_path, &vertical)?;

    if verbose {
        println!(
            "{} colors, {}x{} px, stripe thickness {}",
            config.colors,
            config.size,
            config.size,
            config.thickness()
        );
        println!("  {}", h_path.display());
        println!("  {}", v_path.display());
    }
    Ok(())
}
