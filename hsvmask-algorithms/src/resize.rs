//! Resizing helpers for working copies and saved masks.

use image::imageops::{self, FilterType};
use image::{GrayImage, RgbImage};

/// Downscales `image` so neither side exceeds `max_dim`, preserving aspect ratio.
///
/// Images that already fit (or a `max_dim` of zero) are returned unchanged.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn fit_within(image: &RgbImage, max_dim: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    if max_dim == 0 || (width <= max_dim && height <= max_dim) {
        return image.clone();
    }

    let scale = f64::from(max_dim) / f64::from(width.max(height));
    let new_width = ((f64::from(width) * scale).round() as u32).clamp(1, max_dim);
    let new_height = ((f64::from(height) * scale).round() as u32).clamp(1, max_dim);
    imageops::resize(image, new_width, new_height, FilterType::Triangle)
}

/// Resizes a binary mask to `width` x `height`.
///
/// Nearest-neighbour sampling keeps every output value in the input's value set,
/// so a `{0, 255}` mask stays binary.
#[must_use]
pub fn resize_mask(mask: &GrayImage, width: u32, height: u32) -> GrayImage {
    if mask.dimensions() == (width, height) {
        return mask.clone();
    }
    imageops::resize(mask, width, height, FilterType::Nearest)
}
