//! Ceramic Studio - Tauri Application
//!
//! A welcome window to create or pick a project and one editor window per
//! open project. Rust owns the tab strips; each webview renders them.

mod bridge;
mod commands;
mod state;

use state::AppState;
use tauri::{Manager, WindowEvent};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    ceramic_core::init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let state = AppState::new()?;
            app.manage(state);

            commands::windows::build_welcome_window(app.handle())?;

            tracing::info!("Ceramic Studio started");

            Ok(())
        })
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                commands::windows::window_destroyed(window);
            }
        })
        .invoke_handler(tauri::generate_handler![
            // Diagnostics
            commands::diagnostics::frontend_ready,
            // Project commands
            commands::projects::get_home_dir,
            commands::projects::get_recent_projects,
            commands::projects::remove_recent_project,
            commands::projects::validate_project_name,
            commands::projects::to_valid_project_id,
            commands::projects::request_new_project_target_dir,
            commands::projects::create_new_project,
            commands::projects::open_project,
            commands::projects::reveal_in_file_manager,
            // Window commands
            commands::windows::get_editor,
            commands::windows::close_editor,
            // File commands
            commands::files::get_project_files,
            commands::files::get_file_contents,
            // Tab commands
            commands::tabs::get_tabs,
            commands::tabs::set_active_tab,
            commands::tabs::add_tab,
            commands::tabs::preview_tab,
            commands::tabs::remove_tab,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Ceramic Studio");
}
