pub mod color;
pub mod morphology;
pub mod regions;
pub mod highlight;
pub mod steps;

use image::DynamicImage;
use std::path::PathBuf;

use crate::config::{CleanupConfig, ColorReference, DetectionConfig};
use crate::models::{Centroid, ColorDetections, DetectionReport};
use crate::pipeline::Pipeline;

pub use color::color_mask;
pub use highlight::highlight;
pub use morphology::clean_mask;
pub use regions::get_centroids;

/// Main detection orchestrator: one pipeline run per reference color
pub struct Detector {
    pub config: DetectionConfig,
    pub debug_dir: Option<PathBuf>,
}

impl Detector {
    pub fn new(config: DetectionConfig) -> Self {
        Self {
            config,
            debug_dir: None,
        }
    }

    /// Save intermediate masks under `dir/<color name>/`
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, dir: PathBuf) -> anyhow::Result<Self> {
        if dir.exists() && std::fs::read_dir(&dir)?.next().is_some() {
            return Err(anyhow::anyhow!(
                "Debug directory is not empty: {}",
                dir.display()
            ));
        }
        self.debug_dir = Some(dir);
        Ok(self)
    }

    /// Detect every configured color in the image
    pub fn process(&self, img: &DynamicImage) -> anyhow::Result<DetectionReport> {
        self.config.validate()?;

        let mut colors = Vec::with_capacity(self.config.references.len());

        for reference in &self.config.references {
            log::info!("Detecting {} (center {:?}, radius {})",
                reference.name, reference.center, reference.radius);

            let mut pipeline = build_color_pipeline(reference, &self.config.cleanup);
            if let Some(dir) = &self.debug_dir {
                pipeline = pipeline.with_debug(dir.join(&reference.name))?;
            }

            let results = pipeline.run(img.clone())?;

            let centroids = results
                .iter()
                .map(|item| {
                    let x = item.get_int("centroid_x")
                        .ok_or_else(|| anyhow::anyhow!("Missing centroid_x"))?;
                    let y = item.get_int("centroid_y")
                        .ok_or_else(|| anyhow::anyhow!("Missing centroid_y"))?;
                    Ok(Centroid { x: x as u32, y: y as u32 })
                })
                .collect::<anyhow::Result<Vec<_>>>()?;

            log::info!("Found {} {} regions", centroids.len(), reference.name);

            colors.push(ColorDetections {
                name: reference.name.clone(),
                marker: reference.marker,
                centroids,
            });
        }

        Ok(DetectionReport { colors })
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(DetectionConfig::default())
    }
}

/// Centroids of one color by direct function composition, without the step
/// pipeline. [`Detector`] does not use it; it is the reference the pipeline
/// results are checked against.
pub fn detect_color(
    img: &DynamicImage,
    reference: &ColorReference,
    cleanup: &CleanupConfig,
) -> Vec<Centroid> {
    let mask = color_mask(img, reference.center, reference.radius);
    let cleaned = morphology::clean_mask_with(&mask, cleanup);
    regions::centroids_with_min_area(&cleaned, cleanup.min_region_area)
}

/// Build the mask → cleanup → centroid pipeline for one reference color
pub fn build_color_pipeline(reference: &ColorReference, cleanup: &CleanupConfig) -> Pipeline {
    use crate::detection::steps::*;

    Pipeline::new()
        .add_step_boxed(Box::new(ColorMaskStep {
            center: reference.center,
            radius: reference.radius,
        }))
        .add_step_boxed(Box::new(FillHolesStep))
        .add_step_boxed(Box::new(RemoveSmallObjectsStep { min_size: cleanup.min_size }))
        .add_step_boxed(Box::new(RemoveSmallHolesStep { hole_size: cleanup.hole_size }))
        .add_step_boxed(Box::new(ClearBorderStep))
        .add_step_boxed(Box::new(CentroidStep { min_area: cleanup.min_region_area }))
}
