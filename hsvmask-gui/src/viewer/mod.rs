//! Conversion of images into egui textures.

mod texture;

pub use texture::{rgb_to_color_image, rgba_to_color_image};
