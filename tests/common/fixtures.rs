use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;
use tempfile::NamedTempFile;

/// Color constants for tests
pub const BACKGROUND: Rgb<u8> = Rgb([220, 210, 190]);
pub const GREEN: Rgb<u8> = Rgb([35, 95, 20]);
pub const BROWN: Rgb<u8> = Rgb([74, 4, 4]);

/// Plain beige table top
pub fn blank_scene(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, BACKGROUND)
}

pub fn draw_disc(img: &mut RgbImage, center: (i32, i32), radius: i32, color: Rgb<u8>) {
    draw_filled_circle_mut(img, center, radius, color);
}

/// 400x300 scene: two green and one brown candy, plus a green speck
/// and a green candy cut off by the left edge
pub fn candy_scene() -> RgbImage {
    let mut img = blank_scene(400, 300);
    draw_disc(&mut img, (100, 100), 40, GREEN);
    draw_disc(&mut img, (300, 200), 40, GREEN);
    draw_disc(&mut img, (300, 80), 40, BROWN);
    draw_disc(&mut img, (200, 250), 10, GREEN);
    draw_disc(&mut img, (0, 150), 60, GREEN);
    img
}

/// Build a mask from rows of '#' (set) and '.' (unset)
pub fn mask_from_rows(rows: &[&str]) -> GrayImage {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    GrayImage::from_fn(width, height, |x, y| {
        let set = rows[y as usize].as_bytes()[x as usize] == b'#';
        Luma([if set { 255 } else { 0 }])
    })
}

/// Render a mask back to rows, for readable assertions
pub fn mask_to_rows(mask: &GrayImage) -> Vec<String> {
    (0..mask.height())
        .map(|y| {
            (0..mask.width())
                .map(|x| if mask.get_pixel(x, y)[0] == 255 { '#' } else { '.' })
                .collect()
        })
        .collect()
}

/// Saves the image as PNG to a temp file.
/// The file will be automatically cleaned up when dropped.
pub fn save_temp_png(img: &RgbImage) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}
