//! Ceramic Project Support
//!
//! Everything the editor needs from the file system: the project tree shown
//! in the file browser, file contents for the editor pane, new projects
//! created from a template, and the list of recently opened projects.

mod error;
mod files;
mod kind;
mod name;
mod recent;
mod scaffold;

pub use error::ProjectError;
pub use files::{list_directory, read_file_contents, FileNode, FileRef};
pub use kind::{FileIcon, Lang};
pub use name::{is_valid_project_name, normalize_project_name, to_valid_project_id};
pub use recent::{RecentProject, RecentProjects};
pub use scaffold::scaffold_project;

pub type Result<T> = std::result::Result<T, ProjectError>;
