//! hsvmask-core: Core types for HSV threshold masking.
//!
//! This crate provides the channel range that drives thresholding,
//! the change monitor behind the tuner's diagnostic output, and the
//! shared error type.
//!

pub mod error;
pub mod monitor;
pub mod range;

pub use error::{Error, Result};
pub use monitor::RangeMonitor;
pub use range::{Channel, ChannelRange};
