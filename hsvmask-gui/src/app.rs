//! Main application state and logic.
//!
//! Contains the `TunerApp` struct which owns the channel range, runs one
//! threshold iteration per frame and handles save/exit requests. A failed
//! save closes the window and is reported back to `main`.

use std::path::PathBuf;

use eframe::egui;

use crate::state::{CompareState, FatalError, KeyAction, TunerConfig};
use crate::viewer::rgb_to_color_image;
use hsvmask_algorithms::{selected_pixels, ThresholdSession, TunerFrame};
use hsvmask_core::ChannelRange;

/// Main application state.
pub struct TunerApp {
    /// Startup configuration.
    pub(crate) config: TunerConfig,
    /// Image currently being tuned.
    pub(crate) source_path: PathBuf,
    /// Working image and change monitor.
    pub(crate) session: ThresholdSession,
    /// The six bounds edited by the sliders.
    pub(crate) range: ChannelRange,
    /// Result of the latest iteration.
    pub(crate) frame: Option<TunerFrame>,
    /// Cached preview texture.
    pub(crate) texture: Option<egui::TextureHandle>,
    /// Set by the save button, handled after the iteration.
    pub(crate) save_requested: bool,
    /// User-facing status message.
    pub(crate) status_text: String,
    /// Compare window state.
    pub(crate) compare: CompareState,
    /// Error that ended the session, shared with `main`.
    pub(crate) fatal: FatalError,
}

impl TunerApp {
    /// Create the app for an already loaded session.
    pub fn new(config: TunerConfig, session: ThresholdSession, fatal: FatalError) -> Self {
        Self {
            source_path: config.input.clone(),
            config,
            session,
            range: ChannelRange::default(),
            frame: None,
            texture: None,
            save_requested: false,
            status_text: "Ready".to_string(),
            compare: CompareState::default(),
            fatal,
        }
    }

    /// Replace the tuned image; the current range is kept.
    pub fn open_image(&mut self, path: PathBuf) {
        let loaded = hsvmask_io::load_rgb(&path).map_err(|e| e.to_string()).and_then(|img| {
            ThresholdSession::new(&img, self.config.max_working_size).map_err(|e| e.to_string())
        });
        match loaded {
            Ok(session) => {
                log::info!("Opened {}", path.display());
                self.status_text = format!("Opened {}", path.display());
                self.session = session;
                self.source_path = path;
                self.frame = None;
                self.texture = None;
            }
            Err(e) => {
                log::error!("Failed to open {}: {e}", path.display());
                self.status_text = format!("Error: {e}");
            }
        }
    }

    /// One tuner iteration: threshold with the current range and refresh the preview.
    fn run_iteration(&mut self, ctx: &egui::Context) {
        let frame = match self.session.step(&self.range) {
            Ok(frame) => frame,
            Err(e) => {
                log::error!("Threshold failed: {e}");
                self.status_text = format!("Error: {e}");
                return;
            }
        };

        if let Some(line) = &frame.report {
            log::info!("{line}");
        }

        let image = rgb_to_color_image(&frame.preview);
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                let texture = ctx.load_texture("preview", image, egui::TextureOptions::LINEAR);
                self.texture = Some(texture);
            }
        }
        self.frame = Some(frame);
    }

    /// Write the latest mask at the source image's original size.
    ///
    /// Does nothing before the first iteration.
    pub fn save_mask(&mut self) -> hsvmask_io::Result<()> {
        let Some(frame) = &self.frame else {
            return Ok(());
        };
        let mask = self.session.export_mask(&frame.mask);
        hsvmask_io::write_mask(&mask, mask.dimensions(), &self.config.output)?;
        self.status_text = format!(
            "Saved {} ({}x{})",
            self.config.output.display(),
            mask.width(),
            mask.height()
        );
        Ok(())
    }

    /// Save, or record the failure and close the window.
    fn save_or_quit(&mut self, ctx: &egui::Context) {
        if let Err(e) = self.save_mask() {
            log::error!("Failed to save {}: {e}", self.config.output.display());
            self.status_text = format!("Error: {e}");
            self.fatal.set(e);
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    /// Included pixel count of the latest mask.
    pub fn selected_count(&self) -> usize {
        self.frame.as_ref().map_or(0, |f| selected_pixels(&f.mask))
    }
}

impl eframe::App for TunerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Closing; nothing more to do.
        if self.fatal.is_set() {
            return;
        }
        self.render_control_panel(ctx);
        self.run_iteration(ctx);
        self.render_status_bar(ctx);
        self.render_central_panel(ctx);
        self.render_compare_window(ctx);

        let action = ctx.input(|i| KeyAction::from_events(&i.events));
        let button_save = std::mem::take(&mut self.save_requested);
        if action == KeyAction::Save || button_save {
            self.save_or_quit(ctx);
        }
        if action == KeyAction::Exit {
            log::info!("Exit requested");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        ctx.request_repaint_after(self.config.poll_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn app_writing_to(output: PathBuf) -> TunerApp {
        let source = RgbImage::from_fn(8, 6, |x, _| Rgb([(x * 30) as u8, 0, 0]));
        let session = ThresholdSession::new(&source, Some(4)).unwrap();
        let config = TunerConfig {
            output,
            ..TunerConfig::default()
        };
        let mut app = TunerApp::new(config, session, FatalError::default());
        app.frame = Some(app.session.step(&app.range).unwrap());
        app
    }

    #[test]
    fn test_save_writes_original_size() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("mask.png");
        let mut app = app_writing_to(output.clone());

        app.save_mask().unwrap();
        let saved = hsvmask_io::load_mask(&output).unwrap();
        assert_eq!(saved.dimensions(), (8, 6));
        assert!(app.status_text.starts_with("Saved"));
    }

    #[test]
    fn test_save_to_missing_directory_ends_session() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("mask.png");
        let mut app = app_writing_to(output);
        let fatal = app.fatal.clone();

        let ctx = egui::Context::default();
        app.save_or_quit(&ctx);

        assert!(app.status_text.starts_with("Error"));
        assert!(fatal.take().is_some());
    }

    #[test]
    fn test_save_before_first_iteration_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("mask.png");
        let mut app = app_writing_to(output.clone());
        app.frame = None;

        app.save_mask().unwrap();
        assert!(!output.exists());
        assert!(!app.fatal.is_set());
    }
}
