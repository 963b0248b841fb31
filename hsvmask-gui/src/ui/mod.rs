//! UI rendering modules.
//!
//! - `control_panel`: left sidebar with the six range sliders and actions
//! - `main_view`: central panel with the masked preview, and the status bar
//! - `compare_window`: side-by-side thumbnails of an original and a mask

mod compare_window;
mod control_panel;
mod main_view;
pub mod theme;

/// File types offered by the open dialogs.
pub(crate) const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
