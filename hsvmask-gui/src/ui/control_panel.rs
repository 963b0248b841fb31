//! Control panel (left sidebar) rendering.

use eframe::egui;
use rfd::FileDialog;

use super::theme::{accent, form_label, primary_button, section_header};
use super::IMAGE_EXTENSIONS;
use crate::app::TunerApp;
use hsvmask_core::{Channel, ChannelRange};

/// Which side of a channel's range a slider edits.
#[derive(Clone, Copy)]
enum Bound {
    Min,
    Max,
}

impl TunerApp {
    /// Render the left panel: range sliders, image info and actions.
    pub(crate) fn render_control_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("controls")
            .resizable(false)
            .min_width(280.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                self.render_range_section(ui);
                ui.add_space(12.0);
                self.render_image_section(ui);
                ui.add_space(12.0);
                self.render_mask_section(ui);
                ui.add_space(12.0);
                ui.label(egui::RichText::new("S save · Q quit").weak());
            });
    }

    fn render_range_section(&mut self, ui: &mut egui::Ui) {
        ui.label(section_header("HSV range"));
        ui.separator();

        egui::Grid::new("range_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for bound in [Bound::Min, Bound::Max] {
                    for channel in Channel::ALL {
                        self.range_slider(ui, channel, bound);
                        ui.end_row();
                    }
                }
            });

        if ui.button("Reset range").clicked() {
            self.range = ChannelRange::default();
        }
        if self.range.is_empty() {
            ui.colored_label(accent::RED, "A min is above its max: nothing selected");
        }
    }

    fn range_slider(&mut self, ui: &mut egui::Ui, channel: Channel, bound: Bound) {
        let (suffix, mut value) = match bound {
            Bound::Min => ("Min", self.range.lower(channel)),
            Bound::Max => ("Max", self.range.upper(channel)),
        };
        ui.label(format!("{}{suffix}", channel.label()));
        let response = ui.add(egui::Slider::new(&mut value, 0..=channel.max()));
        if response.changed() {
            match bound {
                Bound::Min => self.range.set_lower(channel, value),
                Bound::Max => self.range.set_upper(channel, value),
            }
        }
    }

    fn render_image_section(&mut self, ui: &mut egui::Ui) {
        ui.label(section_header("Image"));
        ui.separator();

        ui.label(self.source_path.display().to_string());
        let (width, height) = self.session.original_size();
        ui.label(format!("{width} x {height}"));
        if self.session.working_size() != (width, height) {
            let (ww, wh) = self.session.working_size();
            ui.label(egui::RichText::new(format!("working copy {ww} x {wh}")).weak());
        }
        ui.label(format!("selected {} px", self.selected_count()));

        if ui.button("Open image…").clicked() {
            if let Some(path) = FileDialog::new()
                .add_filter("Image files", IMAGE_EXTENSIONS)
                .pick_file()
            {
                self.open_image(path);
            }
        }
    }

    fn render_mask_section(&mut self, ui: &mut egui::Ui) {
        ui.label(section_header("Mask"));
        ui.separator();

        ui.horizontal(|ui| {
            ui.label(form_label("Output"));
            ui.label(self.config.output.display().to_string());
        });
        if ui.add(primary_button("Save mask")).clicked() {
            self.save_requested = true;
        }

        let compare_label = if self.compare.open {
            "Hide compare"
        } else {
            "Compare images"
        };
        if ui.button(compare_label).clicked() {
            self.compare.open = !self.compare.open;
        }
    }
}
