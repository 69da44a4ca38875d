//! Tab strip commands
//!
//! Every command works on the editor bound to the calling window and
//! answers with the whole strip, so the webview never patches tab state
//! on its own.
use ceramic_core::{FileIcon, TabAction, TabState};
use serde::Serialize;
use tauri::{State, Window};

use super::CommandResult;
use crate::state::AppState;

/// Wire value for "no tab"
const NO_TAB: i64 = -1;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
    pub path: String,
    pub name: String,
    pub icon: FileIcon,
    pub is_active: bool,
    pub is_preview: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabStripInfo {
    pub tabs: Vec<TabInfo>,
    pub active_index: i64,
    pub preview_index: i64,
}

impl From<&TabState> for TabStripInfo {
    fn from(state: &TabState) -> Self {
        let tabs = state
            .tabs()
            .iter()
            .enumerate()
            .map(|(index, id)| {
                let name = id.display_name().to_string();
                TabInfo {
                    path: id.as_str().to_string(),
                    icon: FileIcon::for_name(&name),
                    name,
                    is_active: state.active_index() == Some(index),
                    is_preview: state.preview_index() == Some(index),
                }
            })
            .collect();

        Self {
            tabs,
            active_index: wire_index(state.active_index()),
            preview_index: wire_index(state.preview_index()),
        }
    }
}

fn wire_index(index: Option<usize>) -> i64 {
    index.map_or(NO_TAB, |i| i as i64)
}

fn dispatch(window: &Window, state: &AppState, action: TabAction) -> CommandResult<TabStripInfo> {
    state
        .with_studio(|studio| Ok(studio.editor(window.label())?.tabs().dispatch(action)))
        .map(|snapshot| TabStripInfo::from(snapshot.as_ref()))
        .into()
}

#[tauri::command]
pub fn get_tabs(window: Window, state: State<AppState>) -> CommandResult<TabStripInfo> {
    state
        .with_studio(|studio| Ok(studio.editor(window.label())?.tabs().snapshot()))
        .map(|snapshot| TabStripInfo::from(snapshot.as_ref()))
        .into()
}

#[tauri::command]
pub fn set_active_tab(
    window: Window,
    state: State<AppState>,
    path: String,
) -> CommandResult<TabStripInfo> {
    dispatch(&window, &state, TabAction::SetActive(path.into()))
}

#[tauri::command]
pub fn add_tab(window: Window, state: State<AppState>, path: String) -> CommandResult<TabStripInfo> {
    dispatch(&window, &state, TabAction::Add(path.into()))
}

#[tauri::command]
pub fn preview_tab(
    window: Window,
    state: State<AppState>,
    path: String,
) -> CommandResult<TabStripInfo> {
    dispatch(&window, &state, TabAction::Preview(path.into()))
}

#[tauri::command]
pub fn remove_tab(
    window: Window,
    state: State<AppState>,
    path: String,
) -> CommandResult<TabStripInfo> {
    dispatch(&window, &state, TabAction::Remove(path.into()))
}
