//! pdi CLI: edge detection, histogram equalization and gray morphology.

mod commands;
mod naming;

use clap::{Args, Parser, Subcommand};
use pdi_filter::{LaplacianMask, NormalizePolicy};
use std::path::{Path, PathBuf};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "pdi")]
#[command(
    about = "Grayscale image processing: Sobel and Laplacian edges, equalization, morphology"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sobel gradient magnitude.
    Sobel(SobelArgs),

    /// Laplacian edges with one or all of the four masks.
    Laplacian(LaplacianArgs),

    /// Histogram equalization, with histogram charts before and after.
    Equalize(EqualizeArgs),

    /// Gray erosion, dilation and morphological gradient with a square brick.
    Morph(MorphArgs),
}

#[derive(Debug, Clone, Args)]
struct InputArgs {
    /// Input images.
    inputs: Vec<PathBuf>,

    /// Also process a synthesized 200x200 test image (black with a white square).
    #[arg(long)]
    demo: bool,
}

#[derive(Debug, Clone, Args)]
struct SobelArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Normalization policy: clip_zero (alias clip0) or scale. Repeat or
    /// comma-separate to write several.
    #[arg(long, value_delimiter = ',', default_value = "clip_zero")]
    policy: Vec<NormalizePolicy>,

    /// Output directory.
    #[arg(long, default_value = "sobel_results")]
    out_dir: PathBuf,
}

#[derive(Debug, Clone, Args)]
struct LaplacianArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Mask id (1-4).
    #[arg(long, default_value_t = 1)]
    mask: u32,

    /// Run all four masks; overrides --mask.
    #[arg(long)]
    all_masks: bool,

    /// Normalization policy: clip_zero (alias clip0) or scale. Repeat or
    /// comma-separate to write several.
    #[arg(long, value_delimiter = ',', default_value = "clip_zero")]
    policy: Vec<NormalizePolicy>,

    /// Output directory.
    #[arg(long, default_value = "laplacian_results")]
    out_dir: PathBuf,
}

#[derive(Debug, Clone, Args)]
struct EqualizeArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output directory.
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,
}

#[derive(Debug, Clone, Args)]
struct MorphArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Side length of the square structuring element.
    #[arg(long, default_value_t = 5)]
    size: u32,

    /// Output directory.
    #[arg(long, default_value = "morphology_results")]
    out_dir: PathBuf,
}

impl InputArgs {
    fn resolve(&self, out_dir: &Path) -> CliResult<Vec<PathBuf>> {
        commands::resolve_inputs(&self.inputs, self.demo, out_dir)
    }
}

impl LaplacianArgs {
    fn masks(&self) -> CliResult<Vec<LaplacianMask>> {
        if self.all_masks {
            return Ok(LaplacianMask::ALL.to_vec());
        }
        Ok(vec![LaplacianMask::from_id(self.mask)?])
    }
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    run(Cli::parse())
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Sobel(args) => {
            let inputs = args.input.resolve(&args.out_dir)?;
            commands::run_sobel(&inputs, &args.policy, &args.out_dir)
        }
        Commands::Laplacian(args) => {
            let masks = args.masks()?;
            let inputs = args.input.resolve(&args.out_dir)?;
            commands::run_laplacian(&inputs, &masks, &args.policy, &args.out_dir)
        }
        Commands::Equalize(args) => {
            let inputs = args.input.resolve(&args.out_dir)?;
            commands::run_equalize(&inputs, &args.out_dir)
        }
        Commands::Morph(args) => {
            let inputs = args.input.resolve(&args.out_dir)?;
            commands::run_morph(&inputs, args.size, &args.out_dir)
        }
    }
}
