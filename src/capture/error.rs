use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("no display surface available")]
    SurfaceUnavailable,
    #[error("display surface has no area ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },
    #[error("display surface has no pixel data")]
    PixelBufferUnavailable,
    #[error("pixel buffer too small: expected {expected} bytes, got {actual}")]
    PixelBufferTooSmall { expected: usize, actual: usize },
    #[error("failed to open `{}`: {source}", .path.display())]
    DestinationOpen { path: PathBuf, source: io::Error },
    #[error("failed to write `{}`: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}
