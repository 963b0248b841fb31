//! Main view (central panel) and status bar rendering.

use eframe::egui;

use super::theme::accent;
use crate::app::TunerApp;

impl TunerApp {
    /// Render the central panel with the masked preview.
    pub(crate) fn render_central_panel(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(tex) = &self.texture {
                ui.centered_and_justified(|ui| {
                    ui.add(
                        egui::Image::from_texture(egui::load::SizedTexture::from_handle(tex))
                            .shrink_to_fit(),
                    );
                });
            } else {
                ui.centered_and_justified(|ui| ui.label("No Data"));
            }
        });
    }

    /// Render the bottom status bar.
    pub(crate) fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let color = if self.status_text.starts_with("Error") {
                accent::RED
            } else {
                ui.visuals().text_color()
            };
            ui.colored_label(color, &self.status_text);
        });
    }
}
