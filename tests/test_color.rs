mod common;

use common::*;
use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use skittles::detection::color::{color_mask, color_mask_rgb, distance_squared};

#[test]
fn test_distance_squared_has_no_u8_overflow() {
    assert_eq!(distance_squared([0, 0, 0], [255, 255, 255]), 3 * 255 * 255);
    assert_eq!(distance_squared([35, 95, 20], [35, 95, 20]), 0);
}

#[test]
fn test_radius_is_exclusive() {
    let mut img = RgbImage::new(3, 1);
    img.put_pixel(0, 0, Rgb([0, 0, 0])); // distance² 0
    img.put_pixel(1, 0, Rgb([2, 2, 0])); // distance² 8
    img.put_pixel(2, 0, Rgb([3, 0, 0])); // distance² 9

    let mask = color_mask_rgb(&img, [0, 0, 0], 3.0);
    assert_eq!(mask_to_rows(&mask), vec!["##.".to_string()]);
}

#[test]
fn test_zero_radius_selects_nothing() {
    let img = RgbImage::from_pixel(4, 4, GREEN);
    let mask = color_mask_rgb(&img, GREEN.0, 0.0);
    assert!(mask.pixels().all(|p| p[0] == 0));
}

#[test]
fn test_mask_selects_only_matching_candy() {
    let img = candy_scene();
    let mask = color_mask_rgb(&img, GREEN.0, 60.0);

    assert_eq!(mask.dimensions(), img.dimensions());
    assert_eq!(mask.get_pixel(100, 100)[0], 255);
    assert_eq!(mask.get_pixel(300, 80)[0], 0, "brown candy must not match green");
    assert_eq!(mask.get_pixel(5, 5)[0], 0, "background must not match");
}

#[test]
fn test_alpha_channel_is_ignored() {
    let img = RgbaImage::from_pixel(2, 2, Rgba([74, 4, 4, 0]));
    let mask = color_mask(&DynamicImage::ImageRgba8(img), BROWN.0, 65.0);
    assert!(mask.pixels().all(|p| p[0] == 255));
}

#[test]
fn test_empty_image() {
    let img = RgbImage::new(0, 0);
    let mask = color_mask_rgb(&img, GREEN.0, 60.0);
    assert_eq!(mask.dimensions(), (0, 0));
}
