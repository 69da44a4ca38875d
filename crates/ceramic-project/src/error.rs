//! Project error types

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid project name: {0}")]
    InvalidName(String),

    #[error("Template directory not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Template package.json is not a JSON object")]
    InvalidManifest,

    #[error("Storage error: {0}")]
    Storage(#[from] ceramic_storage::StorageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProjectError {
    /// Tag an I/O failure with the path it happened on.
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| ProjectError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
