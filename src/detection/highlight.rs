use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;

use crate::models::DetectionReport;

pub const DEFAULT_MARKER_RADIUS: i32 = 4;

/// Copy of `image` with a dot in each color's marker color at every centroid
pub fn highlight(image: &DynamicImage, report: &DetectionReport, marker_radius: i32) -> RgbImage {
    let mut canvas = image.to_rgb8();

    for color in &report.colors {
        let marker = Rgb(color.marker);
        for c in &color.centroids {
            draw_filled_circle_mut(&mut canvas, (c.x as i32, c.y as i32), marker_radius, marker);
        }
    }

    canvas
}
