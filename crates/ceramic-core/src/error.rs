//! Core error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] ceramic_storage::StorageError),

    #[error("Project error: {0}")]
    Project(#[from] ceramic_project::ProjectError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No editor window: {0}")]
    EditorNotFound(String),

    #[error("Path is outside the project: {}", .0.display())]
    OutsideProject(PathBuf),
}
