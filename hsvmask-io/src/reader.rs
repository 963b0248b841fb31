//! Image readers.

use crate::Result;
use image::imageops::FilterType;
use image::{GrayImage, RgbImage, RgbaImage};
use std::path::Path;

/// Side length of preview thumbnails.
pub const THUMBNAIL_SIZE: u32 = 100;

/// Loads an image from disk as 8-bit RGB.
///
/// # Errors
/// Returns an error if the file cannot be read or decoded.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();
    let image = image::open(path)?.into_rgb8();
    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Loads an image from disk as a single-channel mask.
///
/// Colour images are converted to luminance.
///
/// # Errors
/// Returns an error if the file cannot be read or decoded.
pub fn load_mask<P: AsRef<Path>>(path: P) -> Result<GrayImage> {
    Ok(image::open(path)?.into_luma8())
}

/// Loads an image and squeezes it to exactly `size` x `size` pixels.
///
/// # Errors
/// Returns an error if the file cannot be read or decoded.
pub fn load_thumbnail<P: AsRef<Path>>(path: P, size: u32) -> Result<RgbaImage> {
    let image = image::open(path)?;
    Ok(image
        .resize_exact(size, size, FilterType::Triangle)
        .into_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load_rgb(dir.path().join("nope.png")).is_err());
    }

    #[test]
    fn test_thumbnail_is_square() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wide.png");
        RgbImage::from_pixel(300, 120, Rgb([1, 2, 3]))
            .save(&path)
            .unwrap();

        let thumb = load_thumbnail(&path, THUMBNAIL_SIZE).unwrap();
        assert_eq!(thumb.dimensions(), (THUMBNAIL_SIZE, THUMBNAIL_SIZE));
    }

    #[test]
    fn test_load_mask_from_rgb() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("white.png");
        RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]))
            .save(&path)
            .unwrap();

        let mask = load_mask(&path).unwrap();
        assert_eq!(mask.dimensions(), (4, 4));
        assert!(mask.as_raw().iter().all(|&v| v == 255));
    }
}
