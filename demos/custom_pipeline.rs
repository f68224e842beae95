use image::ImageReader;
use skittles::Pipeline;
use skittles::detection::steps::*;
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <image_path>", args[0]);
        std::process::exit(1);
    }

    let img = ImageReader::open(&args[1])?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

    println!("Loaded image: {}x{}", img.width(), img.height());

    // Red candies, smaller objects allowed, no hole filling
    let pipeline = Pipeline::new()
        .add_step_boxed(Box::new(ColorMaskStep { center: [160, 20, 30], radius: 70.0 }))
        .add_step_boxed(Box::new(RemoveSmallObjectsStep { min_size: 500 }))
        .add_step_boxed(Box::new(ClearBorderStep))
        .add_step_boxed(Box::new(CentroidStep { min_area: 5 }));

    let regions = pipeline.run(img)?;

    println!("\n=== Results ===");
    println!("Total regions: {}", regions.len());
    for (i, region) in regions.iter().enumerate() {
        let x = region.get_int("centroid_x").unwrap_or(0);
        let y = region.get_int("centroid_y").unwrap_or(0);
        let area = region.get_int("pixel_count").unwrap_or(0);
        println!("  {}: ({}, {}) area={}", i + 1, x, y, area);
    }

    Ok(())
}
