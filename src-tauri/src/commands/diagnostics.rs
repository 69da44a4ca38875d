use tauri::Window;

use super::CommandResult;

#[tauri::command]
pub fn frontend_ready(window: Window) -> CommandResult<()> {
    tracing::info!(window = %window.label(), "Frontend ready");
    CommandResult::ok(())
}
