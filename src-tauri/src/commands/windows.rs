//! Welcome and editor windows
use ceramic_core::Editor;
use serde::Serialize;
use tauri::{AppHandle, Manager, State, WebviewUrl, WebviewWindow, WebviewWindowBuilder, Window};

use super::CommandResult;
use crate::state::AppState;

pub const WELCOME_WINDOW: &str = "welcome";
const EDITOR_PREFIX: &str = "editor-";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorInfo {
    pub window_label: String,
    pub project_root: String,
    pub project_name: String,
}

impl From<&Editor> for EditorInfo {
    fn from(editor: &Editor) -> Self {
        Self {
            window_label: editor.label().to_string(),
            project_root: editor.project_root().to_string_lossy().into_owned(),
            project_name: editor.project_name(),
        }
    }
}

pub fn next_editor_label() -> String {
    format!("{}{}", EDITOR_PREFIX, uuid::Uuid::new_v4())
}

pub fn is_editor_label(label: &str) -> bool {
    label.starts_with(EDITOR_PREFIX)
}

pub fn build_welcome_window(app: &AppHandle) -> tauri::Result<WebviewWindow> {
    WebviewWindowBuilder::new(app, WELCOME_WINDOW, WebviewUrl::App("index.html#/welcome".into()))
        .title("Ceramic Studio")
        .inner_size(820.0, 560.0)
        .resizable(false)
        .center()
        .build()
}

pub fn build_editor_window(
    app: &AppHandle,
    label: &str,
    project_name: &str,
) -> tauri::Result<WebviewWindow> {
    WebviewWindowBuilder::new(app, label, WebviewUrl::App("index.html#/editor".into()))
        .title(project_name)
        .inner_size(1280.0, 800.0)
        .min_inner_size(800.0, 600.0)
        .center()
        .build()
}

/// Focus the welcome window, creating it if it was closed.
pub fn show_welcome_window(app: &AppHandle) -> tauri::Result<()> {
    match app.get_webview_window(WELCOME_WINDOW) {
        Some(window) => window.set_focus(),
        None => build_welcome_window(app).map(|_| ()),
    }
}

/// Drop the editor of a window that is gone.
pub fn window_destroyed(window: &Window) {
    let label = window.label();
    if !is_editor_label(label) {
        return;
    }

    let state = window.state::<AppState>();
    if let Err(e) = state.with_studio(|studio| studio.close_editor(label)) {
        tracing::warn!(window = %label, error = %e, "No editor to close for window");
    }
}

#[tauri::command]
pub fn get_editor(window: Window, state: State<AppState>) -> CommandResult<EditorInfo> {
    state
        .with_studio(|studio| studio.editor(window.label()))
        .map(|editor| EditorInfo::from(&editor))
        .into()
}

/// Close the calling editor window and go back to the welcome screen.
#[tauri::command]
pub async fn close_editor(app: AppHandle, window: Window) -> CommandResult<()> {
    if let Err(e) = show_welcome_window(&app) {
        return CommandResult::err(e.to_string());
    }

    window.close().into()
}
