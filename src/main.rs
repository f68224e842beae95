use clap::Parser;
use image::ImageReader;
use std::path::PathBuf;

use skittles::{DetectionConfig, Detector};
use skittles::detection::highlight::{highlight, DEFAULT_MARKER_RADIUS};

#[derive(Parser)]
#[command(name = "skittles")]
#[command(about = "Detect and locate colored candies in a photo")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// JSON file with reference colors and cleanup thresholds
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a copy of the image with detections marked
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Save intermediate masks to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Override the minimum object size in pixels
    #[arg(long, value_name = "PIXELS")]
    min_size: Option<u32>,

    /// Override the maximum hole size to fill in pixels
    #[arg(long, value_name = "PIXELS")]
    hole_size: Option<u32>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut config = match &args.config {
        Some(path) => DetectionConfig::from_json_file(path)?,
        None => DetectionConfig::default(),
    };
    if let Some(min_size) = args.min_size {
        config.cleanup.min_size = min_size;
    }
    if let Some(hole_size) = args.hole_size {
        config.cleanup.hole_size = hole_size;
    }
    config.validate()?;

    log::info!("Loading image: {:?}", args.image_path);

    let img = ImageReader::open(&args.image_path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

    log::info!("Image loaded: {}x{}", img.width(), img.height());

    let mut detector = Detector::new(config);
    if let Some(debug_dir) = args.debug_out {
        detector = detector.with_debug(debug_dir)?;
    }

    let report = detector.process(&img)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }

    if let Some(output) = args.output {
        let annotated = highlight(&img, &report, DEFAULT_MARKER_RADIUS);
        annotated.save(&output)
            .map_err(|e| anyhow::anyhow!("Failed to save {}: {}", output.display(), e))?;
        log::info!("Saved annotated image to {}", output.display());
    }

    Ok(())
}
