//! hsvmask command-line interface.
//!
//! Headless access to the threshold pipeline and to Telea inpainting.
#![allow(clippy::uninlined_format_args)]

use clap::{Parser, Subcommand};
use serde::Serialize;

use hsvmask_algorithms::{
    fit_within, resize_mask, selected_pixels, telea_inpaint, threshold, DEFAULT_INPAINT_RADIUS,
};
use hsvmask_core::ChannelRange;
use hsvmask_io::{load_mask, load_rgb, write_image, write_mask};
use image::GrayImage;
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    HsvmaskIo(#[from] hsvmask_io::Error),

    #[error("Core error: {0}")]
    Core(#[from] hsvmask_core::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// HSV threshold masks and inpainting.
#[derive(Parser)]
#[command(name = "hsvmask")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Threshold an image in HSV space and write the binary mask
    Threshold {
        /// Input image
        input: PathBuf,

        /// Lower bound as h,s,v (hue 0-179, others 0-255)
        #[arg(long, value_delimiter = ',', default_value = "0,0,0")]
        lower: Vec<u8>,

        /// Upper bound as h,s,v
        #[arg(long, value_delimiter = ',', default_value = "179,255,255")]
        upper: Vec<u8>,

        /// Mask output path (lossless format)
        #[arg(short, long, default_value = "mask.png")]
        output: PathBuf,

        /// Also write the masked preview here
        #[arg(long)]
        preview: Option<PathBuf>,

        /// Threshold a copy downscaled to fit this size (pixels)
        #[arg(long)]
        max_size: Option<u32>,

        /// Print a JSON summary to stdout
        #[arg(long)]
        json: bool,
    },

    /// Fill masked regions of an image using Telea inpainting
    Inpaint {
        /// Image to repair
        image: PathBuf,

        /// Mask marking the pixels to fill (non-zero = fill)
        mask: PathBuf,

        /// Output path
        #[arg(short, long, default_value = "repaired.png")]
        output: PathBuf,

        /// Neighbourhood radius (pixels)
        #[arg(short, long, default_value_t = DEFAULT_INPAINT_RADIUS)]
        radius: u32,
    },
}

/// Summary printed by `threshold --json`.
///
/// `width`, `height` and `selected_pixels` describe the mask as written;
/// the working fields give the size it was thresholded at.
#[derive(Debug, Serialize)]
struct ThresholdSummary {
    width: u32,
    height: u32,
    working_width: u32,
    working_height: u32,
    selected_pixels: usize,
    range: ChannelRange,
}

impl ThresholdSummary {
    fn new(written: &GrayImage, working: (u32, u32), range: ChannelRange) -> Self {
        Self {
            width: written.width(),
            height: written.height(),
            working_width: working.0,
            working_height: working.1,
            selected_pixels: selected_pixels(written),
            range,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Threshold {
            input,
            lower,
            upper,
            output,
            preview,
            max_size,
            json,
        } => {
            let range = ChannelRange::from_components(&lower, &upper)?;
            log::debug!("Range: {}", range);

            let start = Instant::now();
            let source = load_rgb(&input)?;
            let working = match max_size {
                Some(max_dim) => fit_within(&source, max_dim),
                None => source.clone(),
            };
            if working.dimensions() != source.dimensions() {
                log::debug!(
                    "Working copy: {}x{}",
                    working.width(),
                    working.height()
                );
            }

            let (mask, masked) = threshold(&working, &range)?;
            let (width, height) = source.dimensions();
            let written = resize_mask(&mask, width, height);
            write_mask(&written, written.dimensions(), &output)?;
            if let Some(path) = preview {
                write_image(&masked, path)?;
            }

            let summary = ThresholdSummary::new(&written, working.dimensions(), range);
            log::info!(
                "Selected {} of {} pixels in {:.2}ms",
                summary.selected_pixels,
                written.len(),
                start.elapsed().as_secs_f64() * 1000.0
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        }

        Commands::Inpaint {
            image,
            mask,
            output,
            radius,
        } => {
            let source = load_rgb(&image)?;
            let mask = load_mask(&mask)?;

            let start = Instant::now();
            let repaired = telea_inpaint(&source, &mask, radius)?;
            log::info!(
                "Inpainted {} pixels in {:.2}s",
                selected_pixels(&mask),
                start.elapsed().as_secs_f64()
            );

            write_image(&repaired, &output)?;
        }
    }

    Ok(())
}
