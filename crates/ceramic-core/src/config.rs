//! Studio configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::Result;

const CONFIG_FILE: &str = "config.json";
const TEMPLATE_DIR_ENV: &str = "CERAMIC_TEMPLATE_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Template copied into every new project
    pub template_dir: PathBuf,
    /// Where new projects go unless the user picks another directory
    pub default_projects_dir: PathBuf,
    /// Number of recent projects kept on the welcome screen
    pub recent_projects_limit: usize,
    /// Entry names hidden from the file tree
    pub file_tree_ignored: Vec<String>,
}

/// Optional overrides read from `config.json` in the data directory.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    template_dir: Option<PathBuf>,
    default_projects_dir: Option<PathBuf>,
    recent_projects_limit: Option<usize>,
    file_tree_ignored: Option<Vec<String>>,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        let default_projects_dir = dirs::home_dir()
            .map(|h| h.join("Projects"))
            .unwrap_or_else(|| data_dir.join("Projects"));

        Self {
            database_path: data_dir.join("studio.db"),
            template_dir: data_dir.join("templates").join("app"),
            default_projects_dir,
            recent_projects_limit: 10,
            file_tree_ignored: vec![".git".to_string(), "node_modules".to_string()],
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Ceramic Studio"))
            .unwrap_or_else(|| PathBuf::from(".ceramic"))
    }

    /// Defaults for `data_dir`, then `config.json` overrides, then the
    /// template directory from the environment.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let mut config = Self::new(data_dir.to_path_buf());

        let file_path = data_dir.join(CONFIG_FILE);
        if file_path.is_file() {
            let raw = std::fs::read_to_string(&file_path)?;
            let file: ConfigFile = serde_json::from_str(&raw)?;
            config.apply(file);
            tracing::info!(path = %file_path.display(), "Loaded configuration overrides");
        }

        if let Some(dir) = std::env::var_os(TEMPLATE_DIR_ENV) {
            config.template_dir = PathBuf::from(dir);
        }

        config.validate()?;
        Ok(config)
    }

    fn apply(&mut self, file: ConfigFile) {
        if let Some(dir) = file.template_dir {
            self.template_dir = dir;
        }
        if let Some(dir) = file.default_projects_dir {
            self.default_projects_dir = dir;
        }
        if let Some(limit) = file.recent_projects_limit {
            self.recent_projects_limit = limit;
        }
        if let Some(ignored) = file.file_tree_ignored {
            self.file_tree_ignored = ignored;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.recent_projects_limit == 0 {
            return Err(CoreError::Config(
                "recent_projects_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}
