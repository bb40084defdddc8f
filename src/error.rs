//! Error types for loading point files and rendering charts.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a point file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path does not resolve to a readable file.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The byte stream could not be read to the end.
    #[error("failed to read point coordinates from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn file_not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileNotFound {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Short, user-facing message for dialogs and status lines.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "The selected file could not be found.",
            Self::Read { .. } => "Failed to read point coordinates from the file.",
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FileNotFound { path, .. } | Self::Read { path, .. } => path,
        }
    }
}

/// Errors raised by a render pass.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("series has no finite points to plot")]
    NoFinitePoints,

    /// The data span overflows or collapses to a zero or infinite scale.
    #[error("data range cannot be mapped onto the canvas")]
    DegenerateRange,
}
