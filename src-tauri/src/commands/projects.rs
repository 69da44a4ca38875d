//! Welcome screen commands: recent projects, new projects, opening one
use ceramic_core::RecentProject;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tauri::{AppHandle, Manager, State, Window};
use tauri_plugin_dialog::DialogExt;
use tauri_plugin_opener::OpenerExt;

use super::windows::{build_editor_window, next_editor_label, EditorInfo, WELCOME_WINDOW};
use super::CommandResult;
use crate::bridge::WindowSelectionBridge;
use crate::state::AppState;

#[tauri::command]
pub fn get_home_dir() -> CommandResult<String> {
    match dirs::home_dir() {
        Some(home) => CommandResult::ok(home.to_string_lossy().into_owned()),
        None => CommandResult::err("Home directory not found".to_string()),
    }
}

#[tauri::command]
pub fn get_recent_projects(state: State<AppState>) -> CommandResult<Vec<RecentProject>> {
    state.with_studio(|studio| studio.recent_projects()).into()
}

#[tauri::command]
pub fn remove_recent_project(state: State<AppState>, path: String) -> CommandResult<bool> {
    state.with_studio(|studio| studio.forget_project(&path)).into()
}

#[tauri::command]
pub fn validate_project_name(name: String) -> CommandResult<bool> {
    CommandResult::ok(ceramic_core::is_valid_project_name(&name))
}

#[tauri::command]
pub fn to_valid_project_id(from: String) -> CommandResult<String> {
    CommandResult::ok(ceramic_core::to_valid_project_id(&from))
}

/// Ask for the directory a new project goes into. `None` when cancelled.
#[tauri::command]
pub async fn request_new_project_target_dir(app: AppHandle) -> CommandResult<Option<String>> {
    let default_dir = app
        .state::<AppState>()
        .studio()
        .config()
        .default_projects_dir
        .clone();

    let picked = tauri::async_runtime::spawn_blocking(move || {
        let mut dialog = app
            .dialog()
            .file()
            .set_title("Select project destination")
            .set_can_create_directories(true);
        if default_dir.is_dir() {
            dialog = dialog.set_directory(&default_dir);
        }
        dialog.blocking_pick_folder()
    })
    .await;

    match picked {
        Ok(dir) => CommandResult::ok(dir.map(|dir| dir.to_string())),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Scaffold a project and return its root.
#[tauri::command]
pub fn create_new_project(
    state: State<AppState>,
    project_name: String,
    target_dir: Option<String>,
) -> CommandResult<String> {
    let target_dir = target_dir.map(PathBuf::from);
    state
        .with_studio(|studio| studio.create_project(target_dir.as_deref(), &project_name))
        .map(|root| root.to_string_lossy().into_owned())
        .into()
}

/// Open a project in a new editor window.
///
/// The editor starts with no tabs. Called from the welcome window, the
/// welcome window closes once the editor is up.
#[tauri::command]
pub async fn open_project(
    app: AppHandle,
    window: Window,
    project_path: String,
) -> CommandResult<EditorInfo> {
    let state = app.state::<AppState>();
    let label = next_editor_label();

    let editor = match state.with_studio(|studio| studio.open_editor(&label, Path::new(&project_path)))
    {
        Ok(editor) => editor,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    editor
        .tabs()
        .subscribe(Arc::new(WindowSelectionBridge::new(app.clone(), &label)));

    if let Err(e) = build_editor_window(&app, &label, &editor.project_name()) {
        tracing::error!(window = %label, error = %e, "Failed to create editor window");
        if let Err(e) = state.with_studio(|studio| studio.close_editor(&label)) {
            tracing::warn!(window = %label, error = %e, "Failed to drop editor of unbuilt window");
        }
        return CommandResult::err(e.to_string());
    }

    if window.label() == WELCOME_WINDOW {
        if let Err(e) = window.close() {
            tracing::warn!(error = %e, "Failed to close welcome window");
        }
    }

    CommandResult::ok(EditorInfo::from(&editor))
}

#[tauri::command]
pub fn reveal_in_file_manager(app: AppHandle, path: String) -> CommandResult<()> {
    app.opener().reveal_item_in_dir(&path).into()
}
