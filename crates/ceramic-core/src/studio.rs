//! Main studio state container
//!
//! Owns the database, the recent projects list and the editors of every
//! open project window. The webview only renders what comes out of here.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ceramic_project::{FileNode, ProjectError, RecentProject, RecentProjects};
use ceramic_storage::Database;

use crate::config::Config;
use crate::editor::{project_name_for, Editor};
use crate::error::CoreError;
use crate::Result;

pub struct Studio {
    config: Config,
    recent_projects: RecentProjects,
    /// Open editors by window label
    editors: Arc<RwLock<HashMap<String, Editor>>>,
}

impl Studio {
    /// Open the on-disk database named by `config`.
    pub fn new(config: Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        Ok(Self::with_database(config, db))
    }

    pub fn with_database(config: Config, db: Database) -> Self {
        let recent_projects = RecentProjects::new(db, config.recent_projects_limit);

        Self {
            config,
            recent_projects,
            editors: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // === Projects ===

    pub fn recent_projects(&self) -> Result<Vec<RecentProject>> {
        Ok(self.recent_projects.list()?)
    }

    pub fn forget_project(&self, path: &str) -> Result<bool> {
        Ok(self.recent_projects.remove(path)?)
    }

    /// Scaffold a new project from the configured template. Without a
    /// target directory it goes to the default projects directory.
    pub fn create_project(&self, target_dir: Option<&Path>, name: &str) -> Result<PathBuf> {
        let target_dir = target_dir.unwrap_or(&self.config.default_projects_dir);
        std::fs::create_dir_all(target_dir)?;

        Ok(ceramic_project::scaffold_project(
            &self.config.template_dir,
            target_dir,
            name,
        )?)
    }

    // === Editors ===

    /// Bind a fresh editor with an empty tab strip to a window.
    pub fn open_editor(&self, label: &str, project_root: &Path) -> Result<Editor> {
        if !project_root.is_dir() {
            let err = ProjectError::NotADirectory(project_root.to_path_buf());
            return Err(err.into());
        }

        let name = project_name_for(project_root);
        self.recent_projects
            .record_open(&project_root.to_string_lossy(), &name)?;

        let editor = Editor::new(label, project_root);
        let replaced = self
            .editors
            .write()
            .insert(label.to_string(), editor.clone());

        if replaced.is_some() {
            tracing::warn!(window = %label, "Replaced editor already bound to window");
        }

        tracing::info!(window = %label, project = %name, "Opened editor");

        Ok(editor)
    }

    pub fn editor(&self, label: &str) -> Result<Editor> {
        self.editors
            .read()
            .get(label)
            .cloned()
            .ok_or_else(|| CoreError::EditorNotFound(label.to_string()))
    }

    /// Drop the editor and its tab state when the window closes.
    pub fn close_editor(&self, label: &str) -> Result<()> {
        self.editors
            .write()
            .remove(label)
            .ok_or_else(|| CoreError::EditorNotFound(label.to_string()))?;

        tracing::info!(window = %label, "Closed editor");
        Ok(())
    }

    pub fn editor_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.editors.read().keys().cloned().collect();
        labels.sort();
        labels
    }

    /// File tree of the project open in a window
    pub fn project_files(&self, label: &str) -> Result<Vec<FileNode>> {
        let editor = self.editor(label)?;
        Ok(ceramic_project::list_directory(
            editor.project_root(),
            &self.config.file_tree_ignored,
        )?)
    }
}

impl Clone for Studio {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            recent_projects: self.recent_projects.clone(),
            editors: Arc::clone(&self.editors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn studio(data: &TempDir) -> Studio {
        let config = Config::new(data.path().to_path_buf());
        Studio::with_database(config, Database::open_in_memory().unwrap())
    }

    fn project(data: &TempDir) -> PathBuf {
        let root = data.path().join("demo-app");
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join("src/main.ts"), "export {}\n").unwrap();
        root
    }

    #[test]
    fn test_open_editor_records_recent_project() {
        let data = tempfile::tempdir().unwrap();
        let studio = studio(&data);
        let root = project(&data);

        let editor = studio.open_editor("editor-1", &root).unwrap();
        assert!(editor.tabs().snapshot().is_empty());

        let recents = studio.recent_projects().unwrap();
        assert_eq!(recents.len(), 1);
        assert_eq!(recents[0].name, "demo-app");
        assert_eq!(recents[0].path, root.to_string_lossy());
    }

    #[test]
    fn test_editor_tabs_are_per_window_and_dropped_on_close() {
        let data = tempfile::tempdir().unwrap();
        let studio = studio(&data);
        let root = project(&data);

        studio.open_editor("editor-1", &root).unwrap();
        studio.open_editor("editor-2", &root).unwrap();

        studio
            .editor("editor-1")
            .unwrap()
            .tabs()
            .add_tab(root.join("src/main.ts").to_string_lossy().into_owned());

        assert_eq!(studio.editor("editor-1").unwrap().tabs().snapshot().len(), 1);
        assert!(studio.editor("editor-2").unwrap().tabs().snapshot().is_empty());

        studio.close_editor("editor-1").unwrap();
        assert!(matches!(studio.editor("editor-1"), Err(CoreError::EditorNotFound(_))));
        assert!(matches!(studio.close_editor("editor-1"), Err(CoreError::EditorNotFound(_))));
        assert_eq!(studio.editor_labels(), vec!["editor-2"]);
    }

    #[test]
    fn test_open_editor_requires_directory() {
        let data = tempfile::tempdir().unwrap();
        let studio = studio(&data);

        let missing = data.path().join("missing");
        assert!(matches!(
            studio.open_editor("editor-1", &missing),
            Err(CoreError::Project(_))
        ));
        assert!(studio.recent_projects().unwrap().is_empty());
    }

    #[test]
    fn test_project_files_hides_ignored_entries() {
        let data = tempfile::tempdir().unwrap();
        let studio = studio(&data);
        let root = project(&data);
        studio.open_editor("editor-1", &root).unwrap();

        let files = studio.project_files("editor-1").unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["src"]);
    }

    #[test]
    fn test_create_project_uses_configured_template() {
        let data = tempfile::tempdir().unwrap();
        let studio = studio(&data);

        let template = &studio.config().template_dir;
        fs::create_dir_all(template).unwrap();
        fs::write(template.join("package.json"), r#"{"name":"my-ceramic-app"}"#).unwrap();
        fs::write(template.join("README.md"), "# my-ceramic-app\n").unwrap();

        let target = data.path().join("work");
        let root = studio.create_project(Some(&target), "fresh-app").unwrap();

        assert_eq!(root, target.join("fresh-app"));
        assert_eq!(fs::read_to_string(root.join("README.md")).unwrap(), "# fresh-app\n");
    }
}
