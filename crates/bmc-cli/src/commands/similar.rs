//! Similar references command

use crate::SimilarArgs;
use anyhow::{bail, Result};
use bmc_ops::metrics::similar_pairs;

pub fn run(args: SimilarArgs, verbose: bool) -> Result<()> {
    let files = super::png_files(&args.refs, "test")?;
    if files.is_empty() {
        bail!("No test*.png images in {}", args.refs.display());
    }

    let images = files
        .iter()
        .map(|path| Ok((super::stem(path), super::load_image(path)?)))
        .collect::<Result<Vec<_>>>()?;
    if verbose {
        println!("Comparing {} images pairwise", images.len());
    }

    let pairs = similar_pairs(&images, args.threshold);
    for pair in &pairs {
        println!(
            "'{}' and '{}' are {:.2} similar (SAE: {:.5})",
            pair.first,
            pair.second,
            1.0 - pair.sae,
            pair.sae
        );
    }
    if verbose && pairs.is_empty() {
        println!("No pairs below SAE {}", args.threshold);
    }
    Ok(())
}
