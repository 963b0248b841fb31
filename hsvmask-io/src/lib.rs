//! hsvmask-io: Image file I/O for hsvmask.
//!
//! Loading of source images, masks and thumbnails, and writing of
//! binary masks and RGB results.
//!

mod error;
mod reader;
mod writer;

pub use error::{Error, Result};
pub use reader::{load_mask, load_rgb, load_thumbnail, THUMBNAIL_SIZE};
pub use writer::{write_image, write_mask};
