mod common;

use common::*;
use image::{GrayImage, Luma};
use imageproc::region_labelling::Connectivity;
use skittles::Centroid;
use skittles::detection::regions::{LabeledRegions, centroids_with_min_area, get_centroids, label};

#[test]
fn test_labels_follow_raster_order() {
    let mask = mask_from_rows(&[
        ".....##",
        "##...##",
        "##.....",
    ]);

    let regions = label(&mask);
    assert_eq!(regions.len(), 2);

    assert_eq!(regions[0].label, 1);
    assert_eq!((regions[0].min_x, regions[0].min_y), (5, 0));
    assert_eq!(regions[1].label, 2);
    assert_eq!((regions[1].min_x, regions[1].min_y), (0, 1));
}

#[test]
fn test_region_statistics() {
    let mask = mask_from_rows(&[
        "......",
        "..###.",
        "..###.",
    ]);

    let regions = label(&mask);
    assert_eq!(regions.len(), 1);

    let region = &regions[0];
    assert_eq!(region.area(), 6);
    assert_eq!((region.width(), region.height()), (3, 2));
    // mean y is 1.5, truncated
    assert_eq!(region.centroid(), Centroid { x: 3, y: 1 });
    assert!(region.touches_border(6, 3));
    assert!(!region.touches_border(10, 10));
}

#[test]
fn test_centroids_skip_tiny_regions() {
    let mask = mask_from_rows(&[
        "#####......",
        "........###",
        "........###",
    ]);

    // Five pixels is not enough, six is
    assert_eq!(get_centroids(&mask), vec![Centroid { x: 9, y: 1 }]);
    assert_eq!(centroids_with_min_area(&mask, 4).len(), 2);
}

#[test]
fn test_diagonal_neighbours_are_separate_regions() {
    let mask = mask_from_rows(&[
        "#.",
        ".#",
    ]);

    assert_eq!(label(&mask).len(), 2);
    assert_eq!(LabeledRegions::from_mask(&mask, Connectivity::Eight).len(), 1);
}

#[test]
fn test_empty_mask_has_no_regions() {
    let mask = mask_from_rows(&["...", "..."]);
    let labeled = LabeledRegions::from_mask(&mask, Connectivity::Four);
    assert!(labeled.is_empty());
    assert!(get_centroids(&mask).is_empty());
}

#[test]
fn test_disc_centroid_is_its_center() {
    let mut img = blank_scene(120, 120);
    draw_disc(&mut img, (60, 50), 20, GREEN);
    let mask = skittles::detection::color::color_mask_rgb(&img, GREEN.0, 10.0);

    let centroids = get_centroids(&mask);
    assert_eq!(centroids.len(), 1);
    assert!((centroids[0].x as i32 - 60).abs() <= 1);
    assert!((centroids[0].y as i32 - 50).abs() <= 1);
}

#[test]
fn test_any_nonzero_value_is_foreground() {
    // left half stored as 1, right half as 255
    let mask = GrayImage::from_fn(6, 2, |x, _| Luma([if x < 3 { 1 } else { 255 }]));

    let regions = label(&mask);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].area(), 12);
    assert_eq!(get_centroids(&mask), vec![Centroid { x: 2, y: 0 }]);
}
