//! Error type shared by the library and the binary.

use std::path::PathBuf;

use crate::ascii::Axis;
use crate::config::ConfigError;

/// Errors that can occur while converting an image.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Width must be > 0 (use --width or -w)")]
    InvalidWidth,

    #[error("Character aspect ratio must be a positive number, got {0}")]
    InvalidCharAspect(f32),

    #[error("Failed to open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// More chunks were requested along `axis` than it has pixels.
    #[error("Step too small")]
    StepTooSmall {
        /// Axis that could not be partitioned
        axis: Axis,
        /// Pixel extent along that axis
        extent: u32,
        /// Requested chunk count
        count: u32,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

impl Error {
    /// Whether this error ends the run normally instead of failing it.
    ///
    /// A closed stdout (e.g. piping into `head`) counts as a normal end.
    pub fn is_graceful(&self) -> bool {
        match self {
            Error::StepTooSmall { .. } => true,
            Error::Write(e) => e.kind() == std::io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
}
