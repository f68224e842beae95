use image::{GrayImage, Luma};
use imageproc::region_labelling::{Connectivity, connected_components};
use std::collections::BTreeMap;

use crate::detection::morphology;
use crate::models::{Centroid, Region};

/// Per-label statistics of a labelled mask
pub struct LabeledRegions {
    regions: Vec<Region>,
}

impl LabeledRegions {
    /// Label the set pixels of `mask`; every non-zero value is foreground
    pub fn from_mask(mask: &GrayImage, connectivity: Connectivity) -> Self {
        let selected = morphology::select(mask, true);
        let labels = connected_components(&selected, connectivity, Luma([0u8]));

        let mut by_label: BTreeMap<u32, Region> = BTreeMap::new();
        let mut first_seen: Vec<u32> = Vec::new();

        for (x, y, label) in labels.enumerate_pixels() {
            let label_val = label[0];
            if label_val == 0 {
                continue;
            }

            by_label
                .entry(label_val)
                .and_modify(|region| region.add_pixel(x, y))
                .or_insert_with(|| {
                    first_seen.push(label_val);
                    Region::new(label_val, x, y)
                });
        }

        // Raster order of first pixel, renumbered from 1
        let regions = first_seen
            .into_iter()
            .enumerate()
            .filter_map(|(idx, old)| {
                by_label.remove(&old).map(|mut region| {
                    region.label = idx as u32 + 1;
                    region
                })
            })
            .collect();

        Self { regions }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn into_regions(self) -> Vec<Region> {
        self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Connected regions of the mask, 4-connected, ordered by label
pub fn label(mask: &GrayImage) -> Vec<Region> {
    LabeledRegions::from_mask(mask, Connectivity::Four).into_regions()
}

/// Centroids of every region strictly larger than `min_area` pixels
pub fn centroids_with_min_area(mask: &GrayImage, min_area: u32) -> Vec<Centroid> {
    label(mask)
        .iter()
        .filter(|r| r.area() > min_area)
        .map(Region::centroid)
        .collect()
}

pub fn get_centroids(mask: &GrayImage) -> Vec<Centroid> {
    centroids_with_min_area(mask, 5)
}
