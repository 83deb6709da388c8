//! Screenshot hook plugin for the Tanmatsu launcher.
//!
//! Watches the input stream for LOGO+P and writes the current
//! framebuffer to `/sd/screenshot-YYYYMMDDHHMMSS.ppm`.

pub mod capture;
pub mod chord;
pub mod config;
pub mod display;
pub mod hook;
pub mod plugin;
pub mod ppm;

pub use capture::{save_screenshot, CaptureError, Clock, LocalClock};
pub use chord::{ChordDetector, Verdict};
pub use hook::{InputHook, ScreenshotHook};
pub use plugin::{InitError, PluginHost, ScreenshotPlugin, PLUGIN_INFO};

shadow_rs::shadow!(build);
