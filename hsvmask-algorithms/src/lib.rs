//! hsvmask-algorithms: Pixel algorithms behind the threshold tuner.
//!
//! This crate provides:
//! - **HSV conversion** - 8-bit convention, hue in `0..=179`
//! - **Thresholding** - inclusive in-range mask and masked preview
//! - **Resizing** - working-copy downscale and binary-safe mask resize
//! - **Telea inpainting** - fast marching fill of masked regions
//! - **Session** - the per-iteration tuner pipeline
//!
#![warn(missing_docs)]

mod hsv;
mod resize;
mod session;
mod telea;
mod threshold;

pub use hsv::{rgb_to_hsv, HsvImage};
pub use resize::{fit_within, resize_mask};
pub use session::{threshold, ThresholdSession, TunerFrame};
pub use telea::{telea_inpaint, DEFAULT_INPAINT_RADIUS};
pub use threshold::{apply_mask, in_range, selected_pixels, MASK_MAX, MASK_MIN};

// Re-export core range types
pub use hsvmask_core::{Channel, ChannelRange};
