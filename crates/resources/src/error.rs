//! Error types for resource loading.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for resource loading operations.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// Failed to load a glTF file.
    #[error("Failed to load glTF file '{path}': {message}")]
    GltfLoad {
        /// Path to the file that failed to load.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// glTF file contains no scenes.
    #[error("glTF file '{0}' contains no scenes")]
    NoScenes(PathBuf),

    /// The loader thread exited without delivering a result.
    #[error("Scene loader for '{0}' stopped without a result")]
    LoaderDisconnected(PathBuf),

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
}

/// Result type alias for resource operations.
pub type ResourceResult<T> = Result<T, ResourceError>;

impl From<ResourceError> for roomview_core::Error {
    fn from(err: ResourceError) -> Self {
        roomview_core::Error::Resource(err.to_string())
    }
}
