//! In-range thresholding and mask application.

use hsvmask_core::{ChannelRange, Error, Result};
use image::{GrayImage, RgbImage};
use rayon::prelude::*;

use crate::HsvImage;

/// Mask value for excluded pixels.
pub const MASK_MIN: u8 = 0;
/// Mask value for included pixels.
pub const MASK_MAX: u8 = u8::MAX;

/// Builds a binary mask: [`MASK_MAX`] where every channel lies in `range`, else [`MASK_MIN`].
#[must_use]
pub fn in_range(hsv: &HsvImage, range: &ChannelRange) -> GrayImage {
    let (width, height) = hsv.dimensions();
    let mut mask = GrayImage::new(width, height);
    let buf: &mut [u8] = &mut mask;
    buf.par_iter_mut()
        .zip(hsv.pixels().par_iter())
        .for_each(|(out, &px)| {
            *out = if range.contains(px) { MASK_MAX } else { MASK_MIN };
        });
    mask
}

/// Copies `image`, zeroing every pixel whose mask value is zero.
///
/// # Errors
/// Returns [`Error::DimensionMismatch`] if the mask and image sizes differ.
pub fn apply_mask(image: &RgbImage, mask: &GrayImage) -> Result<RgbImage> {
    if image.dimensions() != mask.dimensions() {
        return Err(Error::DimensionMismatch {
            expected: image.dimensions(),
            found: mask.dimensions(),
        });
    }

    let mut out = image.clone();
    let buf: &mut [u8] = &mut out;
    buf.par_chunks_exact_mut(3)
        .zip(mask.as_raw().par_iter())
        .for_each(|(px, &m)| {
            if m == MASK_MIN {
                px.fill(0);
            }
        });
    Ok(out)
}

/// Number of included pixels in a mask.
#[must_use]
pub fn selected_pixels(mask: &GrayImage) -> usize {
    mask.as_raw().par_iter().filter(|&&m| m != MASK_MIN).count()
}
