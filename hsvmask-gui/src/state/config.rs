//! Tuner configuration.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Image opened when no path is given.
pub const DEFAULT_INPUT: &str = "painted_photo.png";
/// Where saved masks go.
pub const DEFAULT_OUTPUT: &str = "mask.png";

/// Startup configuration for the tuner window.
#[derive(Debug, Clone)]
pub struct TunerConfig {
    /// Source image path.
    pub input: PathBuf,
    /// Mask output path, overwritten on every save.
    pub output: PathBuf,
    /// Downscale the working copy to fit this size; `None` keeps full resolution.
    pub max_working_size: Option<u32>,
    /// Longest wait between iterations when there is no input.
    pub poll_interval: Duration,
    /// Initial window size.
    pub window_size: [f32; 2],
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            max_working_size: None,
            poll_interval: Duration::from_millis(10),
            window_size: [900.0, 500.0],
        }
    }
}

impl TunerConfig {
    /// Builds the config from process arguments; an optional first argument replaces the input.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        if let Some(input) = args.into_iter().next() {
            config.input = PathBuf::from(input);
        }
        config
    }
}
