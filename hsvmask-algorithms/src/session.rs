//! The per-iteration threshold pipeline used by the interactive tuner.

use hsvmask_core::{ChannelRange, Error, RangeMonitor, Result};
use image::{GrayImage, RgbImage};

use crate::{apply_mask, fit_within, in_range, resize_mask, HsvImage};

/// Output of one tuner iteration.
#[derive(Debug, Clone)]
pub struct TunerFrame {
    /// Binary mask at working-copy size.
    pub mask: GrayImage,
    /// Working copy with excluded pixels zeroed.
    pub preview: RgbImage,
    /// Diagnostic line, present only when the range changed since the last iteration.
    pub report: Option<String>,
}

/// Convert to HSV, threshold, and build the masked preview.
///
/// # Errors
/// Only fails if the internally built mask disagrees with the image size.
pub fn threshold(image: &RgbImage, range: &ChannelRange) -> Result<(GrayImage, RgbImage)> {
    let hsv = HsvImage::from_rgb(image);
    let mask = in_range(&hsv, range);
    let preview = apply_mask(image, &mask)?;
    Ok((mask, preview))
}

/// State of an interactive thresholding session over one source image.
///
/// Holds the (possibly downscaled) working copy, the original dimensions
/// that saved masks are restored to, and the change monitor.
pub struct ThresholdSession {
    working: RgbImage,
    original_size: (u32, u32),
    monitor: RangeMonitor,
}

impl ThresholdSession {
    /// Starts a session. `max_working_dim` downscales large images for display.
    ///
    /// # Errors
    /// Returns [`Error::EmptyImage`] for an image with no pixels.
    pub fn new(source: &RgbImage, max_working_dim: Option<u32>) -> Result<Self> {
        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage);
        }
        let working = match max_working_dim {
            Some(max_dim) => fit_within(source, max_dim),
            None => source.clone(),
        };
        Ok(Self {
            working,
            original_size: (width, height),
            monitor: RangeMonitor::new(),
        })
    }

    /// The image being thresholded.
    #[must_use]
    pub fn working_image(&self) -> &RgbImage {
        &self.working
    }

    /// Dimensions of the working copy.
    #[must_use]
    pub fn working_size(&self) -> (u32, u32) {
        self.working.dimensions()
    }

    /// Dimensions of the source image as loaded.
    #[must_use]
    pub fn original_size(&self) -> (u32, u32) {
        self.original_size
    }

    /// Runs one iteration: recompute mask and preview from scratch for `range`.
    ///
    /// # Errors
    /// Propagates errors from [`threshold`].
    pub fn step(&mut self, range: &ChannelRange) -> Result<TunerFrame> {
        let (mask, preview) = threshold(&self.working, range)?;
        let report = self.monitor.observe(range);
        Ok(TunerFrame {
            mask,
            preview,
            report,
        })
    }

    /// Restores a working-size mask to the original image dimensions.
    #[must_use]
    pub fn export_mask(&self, mask: &GrayImage) -> GrayImage {
        let (width, height) = self.original_size;
        resize_mask(mask, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hsvmask_core::Channel;
    use image::Rgb;

    fn gradient_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 255 / width) as u8, (y * 255 / height) as u8, 128])
        })
    }

    #[test]
    fn test_step_reports_only_on_change() {
        let img = gradient_image(8, 8);
        let mut session = ThresholdSession::new(&img, None).unwrap();
        let mut range = ChannelRange::full();

        assert!(session.step(&range).unwrap().report.is_some());
        assert!(session.step(&range).unwrap().report.is_none());

        range.set_lower(Channel::Value, 10);
        assert!(session.step(&range).unwrap().report.is_some());
        assert!(session.step(&range).unwrap().report.is_none());
    }

    #[test]
    fn test_step_is_deterministic() {
        let img = gradient_image(16, 9);
        let mut session = ThresholdSession::new(&img, None).unwrap();
        let range = ChannelRange::new([0, 30, 0], [120, 255, 200]);

        let first = session.step(&range).unwrap();
        let second = session.step(&range).unwrap();
        assert_eq!(first.mask, second.mask);
        assert_eq!(first.preview, second.preview);
    }

    #[test]
    fn test_export_restores_original_size() {
        let img = gradient_image(900, 300);
        let mut session = ThresholdSession::new(&img, Some(300)).unwrap();
        assert_eq!(session.working_size(), (300, 100));
        assert_eq!(session.original_size(), (900, 300));

        let frame = session.step(&ChannelRange::full()).unwrap();
        assert_eq!(frame.mask.dimensions(), (300, 100));
        let exported = session.export_mask(&frame.mask);
        assert_eq!(exported.dimensions(), (900, 300));
        assert!(exported.as_raw().iter().all(|&v| v == 255));
    }

    #[test]
    fn test_empty_image_rejected() {
        let img = RgbImage::new(0, 5);
        assert!(matches!(
            ThresholdSession::new(&img, None),
            Err(Error::EmptyImage)
        ));
    }
}
