use std::path::PathBuf;

/// tag attached to every log record of this plugin
pub const LOG_TARGET: &str = "screenshot";

/// screenshots land on the sd card
pub const DEFAULT_DIRECTORY: &str = "/sd";
pub const DEFAULT_PREFIX: &str = "screenshot-";
pub const EXTENSION: &str = "ppm";

/// compiled-in capture settings
///
/// There is no config file or environment lookup on the device,
/// the defaults are the only values used outside of tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSettings {
    /// directory the images are written to
    pub directory: PathBuf,
    /// file name prefix, followed by the timestamp
    pub prefix: String,
}

impl CaptureSettings {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECTORY)
    }
}
