//! Binary mask cleanup.
//!
//! Masks are `GrayImage`s: any pixel other than [`MASK_OFF`] is set. Every
//! operation here is built on connected-component labelling: label either
//! the set pixels or their complement, measure each component, then rewrite
//! the pixels of the components that fail the test. Rewritten masks hold
//! only [`MASK_ON`] and [`MASK_OFF`].

use image::{GrayImage, Luma};
use imageproc::region_labelling::{Connectivity, connected_components};

use crate::config::CleanupConfig;

pub const MASK_OFF: u8 = 0;
pub const MASK_ON: u8 = u8::MAX;

pub fn is_set(value: u8) -> bool {
    value != MASK_OFF
}

/// 0/255 copy of `mask`
pub fn binarize(mask: &GrayImage) -> GrayImage {
    GrayImage::from_fn(mask.width(), mask.height(), |x, y| {
        Luma([if is_set(mask.get_pixel(x, y)[0]) { MASK_ON } else { MASK_OFF }])
    })
}

/// 0/1 copy of `mask` selecting set pixels, or unset ones when `set` is false.
/// The labeller treats 0 as background.
pub(crate) fn select(mask: &GrayImage, set: bool) -> GrayImage {
    GrayImage::from_fn(mask.width(), mask.height(), |x, y| {
        Luma([u8::from(is_set(mask.get_pixel(x, y)[0]) == set)])
    })
}

#[derive(Debug, Clone, Copy, Default)]
struct ComponentStats {
    pixel_count: u32,
    touches_border: bool,
}

/// Label the set (or unset) pixels and collect size/border statistics.
/// Returns the label buffer and stats indexed by label (index 0 unused).
fn label_components(
    mask: &GrayImage,
    set: bool,
    connectivity: Connectivity,
) -> (imageproc::definitions::Image<Luma<u32>>, Vec<ComponentStats>) {
    let (width, height) = mask.dimensions();
    let selected = select(mask, set);
    let labels = connected_components(&selected, connectivity, Luma([0u8]));

    let mut stats: Vec<ComponentStats> = Vec::new();
    for (x, y, label) in labels.enumerate_pixels() {
        let idx = label[0] as usize;
        if idx == 0 {
            continue;
        }
        if stats.len() <= idx {
            stats.resize(idx + 1, ComponentStats::default());
        }
        let entry = &mut stats[idx];
        entry.pixel_count += 1;
        if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
            entry.touches_border = true;
        }
    }

    (labels, stats)
}

/// Rewrite every pixel whose component satisfies `predicate` to `value`
fn rewrite_components<F>(
    mask: &GrayImage,
    set: bool,
    connectivity: Connectivity,
    value: u8,
    predicate: F,
) -> GrayImage
where
    F: Fn(&ComponentStats) -> bool,
{
    let (labels, stats) = label_components(mask, set, connectivity);
    let mut out = binarize(mask);

    for (x, y, label) in labels.enumerate_pixels() {
        let idx = label[0] as usize;
        if idx == 0 {
            continue;
        }
        if stats.get(idx).is_some_and(&predicate) {
            out.put_pixel(x, y, Luma([value]));
        }
    }

    out
}

/// Set every background region that is fully enclosed by the mask
pub fn fill_holes(mask: &GrayImage) -> GrayImage {
    rewrite_components(mask, false, Connectivity::Four, MASK_ON, |s| {
        !s.touches_border
    })
}

/// Clear set components with fewer than `min_size` pixels
pub fn remove_small_objects(mask: &GrayImage, min_size: u32) -> GrayImage {
    if min_size == 0 {
        return binarize(mask);
    }
    rewrite_components(mask, true, Connectivity::Four, MASK_OFF, |s| {
        s.pixel_count < min_size
    })
}

/// Set background components with fewer than `hole_size` pixels.
///
/// Unlike [`fill_holes`], small background regions touching the border
/// count as holes too.
pub fn remove_small_holes(mask: &GrayImage, hole_size: u32) -> GrayImage {
    if hole_size == 0 {
        return binarize(mask);
    }
    rewrite_components(mask, false, Connectivity::Four, MASK_ON, |s| {
        s.pixel_count < hole_size
    })
}

/// Clear set components touching the image border (8-connected)
pub fn clear_border(mask: &GrayImage) -> GrayImage {
    rewrite_components(mask, true, Connectivity::Eight, MASK_OFF, |s| {
        s.touches_border
    })
}

/// Full cleanup: fill holes, drop specks, fill small holes, drop border blobs
pub fn clean_mask(mask: &GrayImage, min_size: u32, hole_size: u32) -> GrayImage {
    let mask = fill_holes(mask);
    let mask = remove_small_objects(&mask, min_size);
    let mask = remove_small_holes(&mask, hole_size);
    clear_border(&mask)
}

pub fn clean_mask_with(mask: &GrayImage, config: &CleanupConfig) -> GrayImage {
    clean_mask(mask, config.min_size, config.hole_size)
}

/// Number of set pixels
pub fn count_set(mask: &GrayImage) -> usize {
    mask.pixels().filter(|p| is_set(p[0])).count()
}
