//! Error types for plugin scaffolding

use std::path::PathBuf;
use thiserror::Error;

/// Scaffolding error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Project name contains something other than letters, digits, `-` or `_`
    #[error("Plugin name should only contain alphanumeric characters, hyphens, or underscores")]
    InvalidName {
        /// The rejected name
        name: String,
    },

    /// Target directory is already present
    #[error("Directory already exists: {}", path.display())]
    TargetExists {
        /// The existing target directory
        path: PathBuf,
    },

    /// Filesystem operation failed
    #[error("Filesystem error at {}: {source}", path.display())]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A file template failed to render
    #[error("Failed to render template {path}: {source}")]
    Render {
        /// Relative path of the file being rendered
        path: String,
        /// Underlying handlebars error
        #[source]
        source: Box<handlebars::RenderError>,
    },
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for scaffolding operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;
