//! Ceramic Core
//!
//! Central coordination layer for Ceramic Studio: configuration, the
//! database, recent projects and one tab registry per open editor window.

mod config;
mod editor;
mod error;
mod studio;

pub use config::Config;
pub use editor::Editor;
pub use error::CoreError;
pub use studio::Studio;

// Re-export core components
pub use ceramic_project::{
    is_valid_project_name, list_directory, read_file_contents, to_valid_project_id, FileIcon,
    FileNode, FileRef, Lang, ProjectError, RecentProject, RecentProjects,
};
pub use ceramic_storage::{Database, StorageError};
pub use ceramic_tabs::{SelectionListener, TabAction, TabId, TabRegistry, TabState};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
