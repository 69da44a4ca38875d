//! New projects from a template directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::ProjectError;
use crate::name::{is_valid_project_name, normalize_project_name};
use crate::Result;

/// Template entries stored under a different name so tooling ignores them
/// inside the template itself.
const RENAMED: &[(&str, &str)] = &[
    ("_gitignore", ".gitignore"),
    ("_prettierignore", ".prettierignore"),
    ("_vscode", ".vscode"),
];

const MANIFEST: &str = "package.json";
const README: &str = "README.md";
/// Written from the template's copy instead of copied
const REWRITTEN: &[&str] = &[MANIFEST, README];
const README_PLACEHOLDER: &str = "my-ceramic-app";

/// Create `target_dir/<name>` from the template and return its path.
pub fn scaffold_project(
    template_dir: &Path,
    target_dir: &Path,
    project_name: &str,
) -> Result<PathBuf> {
    if !is_valid_project_name(project_name) {
        return Err(ProjectError::InvalidName(project_name.to_string()));
    }
    if !template_dir.is_dir() {
        return Err(ProjectError::TemplateNotFound(template_dir.to_path_buf()));
    }

    let name = normalize_project_name(project_name);
    let root = target_dir.join(&name);
    fs::create_dir_all(&root).map_err(ProjectError::io(&root))?;

    copy_template(template_dir, &root)?;

    write_manifest(&template_dir.join(MANIFEST), &root.join(MANIFEST), &name)?;

    let readme_path = template_dir.join(README);
    let readme = fs::read_to_string(&readme_path).map_err(ProjectError::io(&readme_path))?;
    let readme = readme.replacen(README_PLACEHOLDER, &name, 1);
    let readme_target = root.join(README);
    fs::write(&readme_target, readme).map_err(ProjectError::io(&readme_target))?;

    tracing::info!(project = %name, root = %root.display(), "Created project from template");

    Ok(root)
}

fn target_name(file_name: &str) -> &str {
    RENAMED
        .iter()
        .find(|(from, _)| *from == file_name)
        .map_or(file_name, |(_, to)| *to)
}

/// Where a template entry lands. Only top-level names are renamed.
fn target_path(root: &Path, relative: &Path) -> PathBuf {
    let mut components = relative.components();
    let Some(first) = components.next() else {
        return root.to_path_buf();
    };

    let top = root.join(target_name(&first.as_os_str().to_string_lossy()));
    let rest = components.as_path();
    if rest.as_os_str().is_empty() {
        top
    } else {
        top.join(rest)
    }
}

/// Copy everything but the rewritten top-level files into `root`.
fn copy_template(template_dir: &Path, root: &Path) -> Result<()> {
    let walker = WalkDir::new(template_dir)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() > 1 || !REWRITTEN.iter().any(|name| entry.file_name() == *name)
        });

    for entry in walker {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(template_dir) else {
            continue;
        };
        let target = target_path(root, relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(ProjectError::io(&target))?;
        } else {
            fs::copy(entry.path(), &target).map_err(ProjectError::io(entry.path()))?;
        }
    }

    Ok(())
}

fn write_manifest(source: &Path, target: &Path, name: &str) -> Result<()> {
    let raw = fs::read_to_string(source).map_err(ProjectError::io(source))?;
    let mut manifest: serde_json::Value = serde_json::from_str(&raw)?;

    manifest
        .as_object_mut()
        .ok_or(ProjectError::InvalidManifest)?
        .insert("name".to_string(), serde_json::Value::String(name.to_string()));

    let mut json = serde_json::to_string_pretty(&manifest)?;
    json.push('\n');
    fs::write(target, json).map_err(ProjectError::io(target))
}
