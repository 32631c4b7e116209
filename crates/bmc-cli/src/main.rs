//! bmc - Blend mode compendium CLI
//!
//! Blends image pairs with Photoshop-style modes, renders alpha
//! transitions, and checks results against reference renders.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "bmc")]
#[command(author, version, about = "Photoshop-style blend modes for PNG images")]
#[command(long_about = "
Blend two images with any of 26 Photoshop-style blend modes.

Examples:
  bmc modes                                  # List blend modes
  bmc blend a.png b.png -o out.png -m screen -a 0.75
  bmc blend photo1.png photo2.png -o out.png -m hue --crop
  bmc stripes -o test_images                 # Rainbow stripe pair
  bmc transition a.png b.png -o fade.png -m overlay -n 8
  bmc compare h.png v.png --refs refs/       # SAE against test_<mode>.png
  bmc similar --refs refs/ -t 0.1            # Near-identical references
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Blend OVERLAY onto BASE
    #[command(visible_alias = "b")]
    Blend(BlendArgs),

    /// List supported blend modes
    Modes(ModesArgs),

    /// Write the horizontal/vertical rainbow stripe test pair
    Stripes(StripesArgs),

    /// Render an alpha fade from BASE to the blended result as one strip
    #[command(visible_alias = "t")]
    Transition(TransitionArgs),

    /// Compare blends against reference renders named test_<mode>.png
    Compare(CompareArgs),

    /// Report reference images that are nearly identical to each other
    Similar(SimilarArgs),
}

#[derive(Args)]
struct BlendArgs {
    /// Base (bottom) image
    base: PathBuf,

    /// Overlay (top) image
    overlay: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Blend mode (e.g. "multiply", "color_burn", "soft-light")
    #[arg(short, long, default_value = "normal")]
    mode: String,

    /// Opacity of the blended layer, 0 to 1
    #[arg(short, long, default_value = "1.0")]
    alpha: f64,

    /// Crop both inputs to their largest shared central square
    #[arg(long)]
    crop: bool,
}

#[derive(Args)]
struct ModesArgs {
    /// Print reference file names instead of mode names
    #[arg(long)]
    file_names: bool,
}

#[derive(Args)]
struct StripesArgs {
    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Number of rainbow colors
    #[arg(short = 'n', long, default_value = "12")]
    colors: u32,

    /// Image side in pixels
    #[arg(short, long, default_value = "12")]
    size: u32,
}

#[derive(Args)]
struct TransitionArgs {
    /// Base (bottom) image
    base: PathBuf,

    /// Overlay (top) image
    overlay: PathBuf,

    /// Output strip image
    #[arg(short, long)]
    output: PathBuf,

    /// Blend mode
    #[arg(short, long, default_value = "normal")]
    mode: String,

    /// Number of frames, alpha evenly spaced from 0 to 1
    #[arg(short = 'n', long, default_value = "10")]
    steps: usize,

    /// Crop both inputs to their largest shared central square
    #[arg(long)]
    crop: bool,
}

#[derive(Args)]
struct CompareArgs {
    /// Base image the references were rendered from
    base: PathBuf,

    /// Overlay image the references were rendered from
    overlay: PathBuf,

    /// Directory holding test_<mode>.png references
    #[arg(long)]
    refs: PathBuf,

    /// Largest acceptable SAE in 8-bit code values
    #[arg(short, long, default_value = "0")]
    threshold: u64,

    /// Crop both inputs to their largest shared central square
    #[arg(long)]
    crop: bool,
}

#[derive(Args)]
struct SimilarArgs {
    /// Directory holding test*.png references
    #[arg(long)]
    refs: PathBuf,

    /// Report pairs with SAE below this value
    #[arg(short, long, default_value = "0.1")]
    threshold: f64,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Blend(args) => commands::blend::run(args, cli.verbose),
        Commands::Modes(args) => commands::modes::run(args, cli.verbose),
        Commands::Stripes(args) => commands::stripes::run(args, cli.verbose),
        Commands::Transition(args) => commands::transition::run(args, cli.verbose),
        Commands::Compare(args) => commands::compare::run(args, cli.verbose),
        Commands::Similar(args) => commands::similar::run(args, cli.verbose),
    }
}
