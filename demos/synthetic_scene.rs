use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;

fn main() -> anyhow::Result<()> {
    let mut img = RgbImage::from_pixel(800, 600, Rgb([220, 210, 190]));

    // Green candies
    for &(x, y) in &[(150, 150), (400, 300), (650, 450)] {
        draw_filled_circle_mut(&mut img, (x, y), 45, Rgb([35, 95, 20]));
    }

    // Brown candies
    for &(x, y) in &[(600, 150), (200, 450)] {
        draw_filled_circle_mut(&mut img, (x, y), 45, Rgb([74, 4, 4]));
    }

    img.save("synthetic_scene.png")?;
    println!("Created synthetic_scene.png (800x600, 3 green + 2 brown)");
    Ok(())
}
