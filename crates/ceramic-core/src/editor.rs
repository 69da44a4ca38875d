//! Editor window state
//!
//! One editor per open project window. Its tab state lives exactly as long
//! as the window and is never persisted.

use std::path::{Path, PathBuf};

use ceramic_tabs::TabRegistry;

use crate::error::CoreError;
use crate::Result;

pub struct Editor {
    /// Window label the editor is bound to
    label: String,
    /// Root of the project shown in the file tree
    project_root: PathBuf,
    tabs: TabRegistry,
}

impl Editor {
    pub fn new(label: impl Into<String>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            project_root: project_root.into(),
            tabs: TabRegistry::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Window title: the project directory's name
    pub fn project_name(&self) -> String {
        project_name_for(&self.project_root)
    }

    pub fn tabs(&self) -> &TabRegistry {
        &self.tabs
    }

    /// Resolve a path the webview asked for, relative paths against the
    /// project root. Anything that ends up outside the project is refused,
    /// including through `..` or a symlink.
    pub fn resolve(&self, path: &Path) -> Result<PathBuf> {
        let root = self.project_root.canonicalize()?;
        let resolved = self.project_root.join(path).canonicalize()?;

        if !resolved.starts_with(&root) {
            return Err(CoreError::OutsideProject(path.to_path_buf()));
        }
        Ok(resolved)
    }
}

impl Clone for Editor {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            project_root: self.project_root.clone(),
            tabs: self.tabs.clone(),
        }
    }
}

pub(crate) fn project_name_for(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}
