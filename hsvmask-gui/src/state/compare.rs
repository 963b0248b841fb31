//! State of the side-by-side compare window.

use std::path::PathBuf;

use eframe::egui;

/// Which of the two compare slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// The unedited photo.
    Original,
    /// A mask image.
    Mask,
}

impl SlotKind {
    /// Button caption for picking this slot's file.
    pub fn button_label(self) -> &'static str {
        match self {
            SlotKind::Original => "Select original image",
            SlotKind::Mask => "Select mask image",
        }
    }

    /// Texture name used when uploading the thumbnail.
    pub fn texture_name(self) -> &'static str {
        match self {
            SlotKind::Original => "compare_original",
            SlotKind::Mask => "compare_mask",
        }
    }
}

/// A loaded thumbnail.
pub struct CompareSlot {
    /// File the thumbnail came from.
    pub path: PathBuf,
    /// Uploaded thumbnail texture.
    pub texture: egui::TextureHandle,
}

/// Compare window visibility and its two slots.
#[derive(Default)]
pub struct CompareState {
    /// Whether the window is shown.
    pub open: bool,
    /// Thumbnail of the original image.
    pub original: Option<CompareSlot>,
    /// Thumbnail of the mask image.
    pub mask: Option<CompareSlot>,
}

impl CompareState {
    /// Mutable access to one slot.
    pub fn slot_mut(&mut self, kind: SlotKind) -> &mut Option<CompareSlot> {
        match kind {
            SlotKind::Original => &mut self.original,
            SlotKind::Mask => &mut self.mask,
        }
    }

    /// Shared access to one slot.
    pub fn slot(&self, kind: SlotKind) -> Option<&CompareSlot> {
        match kind {
            SlotKind::Original => self.original.as_ref(),
            SlotKind::Mask => self.mask.as_ref(),
        }
    }
}
