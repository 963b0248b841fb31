//! hsvmask GUI entry point: the interactive threshold tuner.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod state;
mod ui;
mod viewer;

use anyhow::Context;
use app::TunerApp;
use eframe::egui;
use hsvmask_algorithms::ThresholdSession;
use state::{FatalError, TunerConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = TunerConfig::from_args(std::env::args_os().skip(1));
    let source = hsvmask_io::load_rgb(&config.input)
        .with_context(|| format!("failed to load {}", config.input.display()))?;
    let session = ThresholdSession::new(&source, config.max_working_size)
        .with_context(|| format!("cannot threshold {}", config.input.display()))?;
    log::info!(
        "Tuning {} ({}x{}), press S to save, Q to quit",
        config.input.display(),
        source.width(),
        source.height()
    );

    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("hsvmask"),
        ..Default::default()
    };
    let fatal = FatalError::default();
    let app_fatal = fatal.clone();
    let output = config.output.clone();
    eframe::run_native(
        "hsvmask",
        opts,
        Box::new(move |cc| {
            ui::theme::configure_style(&cc.egui_ctx);
            Ok(Box::new(TunerApp::new(config, session, app_fatal)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {e}"))?;

    match fatal.take() {
        Some(e) => Err(e).with_context(|| format!("failed to save {}", output.display())),
        None => Ok(()),
    }
}
