use crate::pipeline::{PipelineData, PipelineStep, PipelineContext, BoundingBox, MetadataValue};
use crate::detection::{color, morphology, regions};
use anyhow::Result;
use image::DynamicImage;

/// Threshold the original image against a reference color
pub struct ColorMaskStep {
    pub center: [u8; 3],
    pub radius: f32,
}

impl PipelineStep for ColorMaskStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();
        for item in data {
            let mask = color::color_mask(&item.image, self.center, self.radius);
            log::debug!("  color mask: {} pixels within {} of {:?}",
                morphology::count_set(&mask), self.radius, self.center);
            result.push(item.with_image(DynamicImage::ImageLuma8(mask)));
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "Color Mask"
    }
}

/// Fill background regions enclosed by the mask
pub struct FillHolesStep;

impl PipelineStep for FillHolesStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        Ok(data
            .into_iter()
            .map(|item| {
                let filled = morphology::fill_holes(&item.image.to_luma8());
                item.with_image(DynamicImage::ImageLuma8(filled))
            })
            .collect())
    }

    fn name(&self) -> &str {
        "Fill Holes"
    }
}

/// Drop components smaller than `min_size` pixels
pub struct RemoveSmallObjectsStep {
    pub min_size: u32,
}

impl PipelineStep for RemoveSmallObjectsStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        Ok(data
            .into_iter()
            .map(|item| {
                let cleaned = morphology::remove_small_objects(&item.image.to_luma8(), self.min_size);
                item.with_image(DynamicImage::ImageLuma8(cleaned))
            })
            .collect())
    }

    fn name(&self) -> &str {
        "Remove Small Objects"
    }
}

/// Fill holes smaller than `hole_size` pixels
pub struct RemoveSmallHolesStep {
    pub hole_size: u32,
}

impl PipelineStep for RemoveSmallHolesStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        Ok(data
            .into_iter()
            .map(|item| {
                let cleaned = morphology::remove_small_holes(&item.image.to_luma8(), self.hole_size);
                item.with_image(DynamicImage::ImageLuma8(cleaned))
            })
            .collect())
    }

    fn name(&self) -> &str {
        "Remove Small Holes"
    }
}

/// Drop components touching the image border
pub struct ClearBorderStep;

impl PipelineStep for ClearBorderStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        Ok(data
            .into_iter()
            .map(|item| {
                let cleaned = morphology::clear_border(&item.image.to_luma8());
                item.with_image(DynamicImage::ImageLuma8(cleaned))
            })
            .collect())
    }

    fn name(&self) -> &str {
        "Clear Border"
    }
}

/// Label the mask and split it into one item per region - one image into many
pub struct CentroidStep {
    /// Regions must be strictly larger than this
    pub min_area: u32,
}

impl PipelineStep for CentroidStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();

        for item in data {
            let mask = item.image.to_luma8();
            let labeled = regions::label(&mask);

            log::debug!("  {} labelled regions", labeled.len());

            for region in labeled.into_iter().filter(|r| r.area() > self.min_area) {
                let bbox = BoundingBox {
                    x: region.min_x,
                    y: region.min_y,
                    width: region.width(),
                    height: region.height(),
                };

                let cropped = item.original.crop_imm(bbox.x, bbox.y, bbox.width, bbox.height);
                let centroid = region.centroid();

                let mut region_data = PipelineData::from_region(cropped, item.original.clone(), bbox);
                region_data.metadata = item.metadata.clone();
                region_data.metadata.insert("label".to_string(), MetadataValue::Int(region.label as i64));
                region_data.metadata.insert("pixel_count".to_string(), MetadataValue::Int(region.pixel_count as i64));
                region_data.metadata.insert("centroid_x".to_string(), MetadataValue::Int(centroid.x as i64));
                region_data.metadata.insert("centroid_y".to_string(), MetadataValue::Int(centroid.y as i64));

                result.push(region_data);
            }
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "Centroid Extraction"
    }
}
