//! Texture generation for image display.

use eframe::egui::ColorImage;
use image::{RgbImage, RgbaImage};

/// Convert an RGB image for upload as an egui texture.
#[must_use]
pub fn rgb_to_color_image(image: &RgbImage) -> ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    ColorImage::from_rgb(size, image.as_raw())
}

/// Convert an RGBA image (straight alpha) for upload as an egui texture.
#[must_use]
pub fn rgba_to_color_image(image: &RgbaImage) -> ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, image.as_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Color32;
    use image::Rgb;

    #[test]
    fn test_rgb_layout() {
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(2, 1, Rgb([10, 20, 30]));

        let color = rgb_to_color_image(&img);
        assert_eq!(color.size, [3, 2]);
        assert_eq!(color.pixels[5], Color32::from_rgb(10, 20, 30));
        assert_eq!(color.pixels[0], Color32::BLACK);
    }
}
