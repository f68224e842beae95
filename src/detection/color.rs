use image::{DynamicImage, GrayImage, Luma, RgbImage};

use super::morphology::{MASK_OFF, MASK_ON};

/// Squared euclidean distance between two RGB triples
pub fn distance_squared(a: [u8; 3], b: [u8; 3]) -> i32 {
    a.iter()
        .zip(b.iter())
        .map(|(&p, &q)| {
            let d = p as i32 - q as i32;
            d * d
        })
        .sum()
}

/// Mask of pixels whose color lies strictly inside the sphere around `center`
pub fn color_mask_rgb(image: &RgbImage, center: [u8; 3], radius: f32) -> GrayImage {
    let limit = (radius as f64) * (radius as f64);

    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let pixel = image.get_pixel(x, y);
        if (distance_squared(pixel.0, center) as f64) < limit {
            Luma([MASK_ON])
        } else {
            Luma([MASK_OFF])
        }
    })
}

pub fn color_mask(image: &DynamicImage, center: [u8; 3], radius: f32) -> GrayImage {
    color_mask_rgb(&image.to_rgb8(), center, radius)
}
