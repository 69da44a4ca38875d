//! Project file tree and file contents

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::ProjectError;
use crate::kind::{FileIcon, Lang};
use crate::Result;

/// One entry of the file browser. `children` is present iff the entry is a
/// directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNode {
    pub path: String,
    pub name: String,
    pub is_directory: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FileNode>>,
}

/// A file known only by its path, as referenced by an open tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub path: String,
    pub name: String,
    pub is_directory: bool,
}

impl FileRef {
    pub fn for_path(path: &str) -> Self {
        Self {
            path: path.to_string(),
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            is_directory: false,
        }
    }

    pub fn icon(&self) -> FileIcon {
        FileIcon::for_name(&self.name)
    }

    pub fn lang(&self) -> Option<Lang> {
        Lang::for_path(&self.path)
    }
}

/// Walk `root` into a tree, directories first, then by name.
///
/// Entries named in `ignored` are skipped and symlinks are listed but not
/// followed. A subdirectory that cannot be read shows up empty; only an
/// unreadable root is an error.
pub fn list_directory(root: impl AsRef<Path>, ignored: &[String]) -> Result<Vec<FileNode>> {
    let root = root.as_ref();
    let metadata = fs::metadata(root).map_err(ProjectError::io(root))?;
    if !metadata.is_dir() {
        return Err(ProjectError::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(ProjectError::io(root))?;

    // Children of every directory seen so far, in walk order
    let mut children: HashMap<PathBuf, Vec<FileNode>> = HashMap::new();
    // Directories in pre-order with their slot in the parent's list
    let mut dirs: Vec<(PathBuf, PathBuf, usize)> = Vec::new();
    let mut count = 0;

    let walker = WalkDir::new(root)
        .follow_links(false)
        .min_depth(1)
        .sort_by(directories_first)
        .into_iter()
        .filter_entry(|entry| !is_ignored(entry, ignored));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable entry");
                continue;
            }
        };

        let path = entry.path();
        let parent = path.parent().unwrap_or(root).to_path_buf();
        let is_directory = entry.file_type().is_dir();
        let siblings = children.entry(parent.clone()).or_default();

        if is_directory {
            dirs.push((path.to_path_buf(), parent, siblings.len()));
        }

        siblings.push(FileNode {
            path: path.to_string_lossy().into_owned(),
            name: entry.file_name().to_string_lossy().into_owned(),
            is_directory,
            children: is_directory.then(Vec::new),
        });
        count += 1;
    }

    // Every descendant comes after its ancestor in pre-order, so going
    // backwards finishes each directory before it is attached.
    for (dir, parent, slot) in dirs.into_iter().rev() {
        let contents = children.remove(&dir).unwrap_or_default();
        if let Some(node) = children.get_mut(&parent).and_then(|s| s.get_mut(slot)) {
            node.children = Some(contents);
        }
    }

    let tree = children.remove(root).unwrap_or_default();
    tracing::debug!(root = %root.display(), entries = count, "Listed project files");
    Ok(tree)
}

fn directories_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.file_type()
        .is_dir()
        .cmp(&a.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn is_ignored(entry: &DirEntry, ignored: &[String]) -> bool {
    let name = entry.file_name().to_string_lossy();
    ignored.iter().any(|skip| *skip == name)
}

/// Load a file for the editor pane.
pub async fn read_file_contents(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    tokio::fs::read_to_string(path)
        .await
        .map_err(ProjectError::io(path))
}
