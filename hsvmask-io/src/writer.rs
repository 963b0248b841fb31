//! Image writers.

use crate::{Error, Result};
use hsvmask_algorithms::resize_mask;
use image::{GrayImage, ImageFormat, RgbImage};
use std::path::Path;

/// Rejects formats whose compression would blur a binary mask.
fn check_lossless(path: &Path) -> Result<ImageFormat> {
    let format = ImageFormat::from_path(path)?;
    if matches!(format, ImageFormat::Jpeg) {
        return Err(Error::InvalidFormat(format!(
            "{} is lossy and cannot hold a binary mask; use .png",
            path.display()
        )));
    }
    Ok(format)
}

/// Writes `mask` to `path` at `size` (width, height), resizing if needed.
///
/// Resizing uses nearest-neighbour sampling so the written file holds only
/// the values present in `mask`. Overwrites any existing file.
///
/// # Errors
/// Returns an error for lossy or unknown output formats, or if writing fails.
pub fn write_mask<P: AsRef<Path>>(mask: &GrayImage, size: (u32, u32), path: P) -> Result<()> {
    let path = path.as_ref();
    let format = check_lossless(path)?;
    let resized = resize_mask(mask, size.0, size.1);
    resized.save_with_format(path, format)?;
    log::info!(
        "wrote mask {} ({}x{})",
        path.display(),
        resized.width(),
        resized.height()
    );
    Ok(())
}

/// Writes an RGB image; the format follows the file extension.
///
/// # Errors
/// Returns an error if the format is unknown or writing fails.
pub fn write_image<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<()> {
    let path = path.as_ref();
    image.save(path)?;
    log::info!("wrote {}", path.display());
    Ok(())
}
