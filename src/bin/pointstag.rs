//! Command-line shell around the point-transform engine.
//!
//! Loads one image, replays a sequence of operations as a viewer's buttons
//! would, then saves the current result and optionally a display-sized preview.
//!
//! ```text
//! pointstag photo.jpg --step exponential --exponent 3 --step linear -o out.png
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pointstag::io::{load_raster, save_preview, save_raster};
use pointstag::{fit, DisplayBox, ImageState, PointTransform, DEFAULT_EXPONENT};
use tracing::{info, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Step {
    Grayscale,
    Logarithmic,
    Exponential,
    Linear,
    Revert,
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Apply point transforms (grayscale, log, exponential, linear) to an image"
)]
struct Args {
    /// Image to load
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    #[arg(
        short = 's',
        long = "step",
        value_enum,
        help = "Operation to run, in order; may be repeated"
    )]
    steps: Vec<Step>,

    #[arg(
        short = 'e',
        long,
        default_value_t = DEFAULT_EXPONENT,
        value_parser = clap::value_parser!(u32).range(1..=10),
        help = "Exponent used by exponential steps"
    )]
    exponent: u32,

    #[arg(short = 'o', long, help = "Save the current image (.png, .jpg, .jpeg)")]
    output: Option<PathBuf>,

    #[arg(long, help = "Save a copy resized to the display box")]
    preview: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = 600,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Display box width"
    )]
    max_width: u32,

    #[arg(
        long,
        default_value_t = 400,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Display box height"
    )]
    max_height: u32,

    #[arg(short = 'v', long, help = "Log state transitions")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let raster = load_raster(&args.input)
        .with_context(|| format!("Failed to load image: {:?}", args.input))?;

    let mut state = ImageState::new();
    state.load(raster);

    for step in &args.steps {
        match step {
            Step::Revert => state.revert()?,
            Step::Grayscale => run(&mut state, PointTransform::Grayscale)?,
            Step::Logarithmic => run(&mut state, PointTransform::Logarithmic)?,
            Step::Exponential => run(
                &mut state,
                PointTransform::Exponential {
                    exponent: args.exponent,
                },
            )?,
            Step::Linear => run(&mut state, PointTransform::Linear)?,
        }
    }

    let current = state
        .current_raster()
        .context("no image loaded")?;
    let bounds = DisplayBox::new(args.max_width as usize, args.max_height as usize);
    let (width, height) = fit(current.width(), current.height(), bounds);
    info!(
        "Current image {}x{}x{}, display size {}x{}, {} history entries",
        current.width(),
        current.height(),
        current.channels(),
        width,
        height,
        state.history_len()
    );

    if let Some(path) = &args.output {
        save_raster(current, path).with_context(|| format!("Failed to save image: {:?}", path))?;
        info!("Saved {:?}", path);
    }

    if let Some(path) = &args.preview {
        save_preview(current, path, bounds)
            .with_context(|| format!("Failed to save preview: {:?}", path))?;
        info!("Saved preview {:?}", path);
    }

    Ok(())
}

fn run(state: &mut ImageState, transform: PointTransform) -> Result<()> {
    let result = state.apply(transform)?;
    let (min, max) = result.min_max();
    info!("Applied {} (range {}-{})", transform, min, max);
    Ok(())
}
