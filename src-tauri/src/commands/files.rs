//! File browser and editor pane commands
use ceramic_core::FileNode;
use std::path::Path;
use tauri::{AppHandle, Manager, Window};

use super::CommandResult;
use crate::state::AppState;

/// File tree of the calling window's project
#[tauri::command]
pub async fn get_project_files(app: AppHandle, window: Window) -> CommandResult<Vec<FileNode>> {
    let studio = app.state::<AppState>().studio();
    let label = window.label().to_string();

    match tauri::async_runtime::spawn_blocking(move || studio.project_files(&label)).await {
        Ok(files) => files.into(),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Contents of a file in the calling window's project
#[tauri::command]
pub async fn get_file_contents(app: AppHandle, window: Window, path: String) -> CommandResult<String> {
    let resolved = app
        .state::<AppState>()
        .with_studio(|studio| studio.editor(window.label())?.resolve(Path::new(&path)));

    let file = match resolved {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!(window = %window.label(), path = %path, error = %e, "Failed to resolve file");
            return CommandResult::err(e.to_string());
        }
    };

    let contents = ceramic_core::read_file_contents(&file).await;
    if let Err(e) = &contents {
        tracing::warn!(path = %file.display(), error = %e, "Failed to read file");
    }
    contents.into()
}
