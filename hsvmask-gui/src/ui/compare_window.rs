//! Compare window: an original and a mask as thumbnails, side by side.

use std::path::{Path, PathBuf};

use eframe::egui::{self, Stroke};
use rfd::FileDialog;

use super::theme::dark;
use super::IMAGE_EXTENSIONS;
use crate::app::TunerApp;
use crate::state::{CompareSlot, SlotKind};
use crate::viewer::rgba_to_color_image;
use hsvmask_io::THUMBNAIL_SIZE;

fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

impl TunerApp {
    /// Render the compare window (if visible).
    pub(crate) fn render_compare_window(&mut self, ctx: &egui::Context) {
        if !self.compare.open {
            return;
        }

        #[allow(clippy::cast_precision_loss)]
        let side = THUMBNAIL_SIZE as f32;
        let mut open = self.compare.open;
        let mut picked: Option<(SlotKind, PathBuf)> = None;

        egui::Window::new("Compare")
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for kind in [SlotKind::Original, SlotKind::Mask] {
                        ui.vertical(|ui| {
                            if let Some(slot) = self.compare.slot(kind) {
                                ui.add(egui::Image::from_texture(
                                    egui::load::SizedTexture::new(
                                        slot.texture.id(),
                                        egui::vec2(side, side),
                                    ),
                                ));
                                ui.label(file_name(&slot.path));
                            } else {
                                let (rect, _) = ui.allocate_exact_size(
                                    egui::vec2(side, side),
                                    egui::Sense::hover(),
                                );
                                ui.painter().rect_stroke(
                                    rect,
                                    4.0,
                                    Stroke::new(1.0, dark::BORDER_LIGHT),
                                );
                                ui.label("");
                            }

                            if ui.button(kind.button_label()).clicked() {
                                if let Some(path) = FileDialog::new()
                                    .add_filter("Image files", IMAGE_EXTENSIONS)
                                    .pick_file()
                                {
                                    picked = Some((kind, path));
                                }
                            }
                        });
                    }
                });
            });

        self.compare.open = open;
        if let Some((kind, path)) = picked {
            self.load_compare_slot(ctx, kind, path);
        }
    }

    fn load_compare_slot(&mut self, ctx: &egui::Context, kind: SlotKind, path: PathBuf) {
        match hsvmask_io::load_thumbnail(&path, THUMBNAIL_SIZE) {
            Ok(thumb) => {
                let texture = ctx.load_texture(
                    kind.texture_name(),
                    rgba_to_color_image(&thumb),
                    egui::TextureOptions::LINEAR,
                );
                *self.compare.slot_mut(kind) = Some(CompareSlot { path, texture });
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_text = format!("Error: {e}");
            }
        }
    }
}
