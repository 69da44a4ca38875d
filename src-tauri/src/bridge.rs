//! Selection bridge
//!
//! Forwards active tab changes of one editor to its window, so the editing
//! surface loads the newly selected file.

use ceramic_core::{FileRef, SelectionListener, TabId};
use tauri::{AppHandle, Emitter};

pub const ACTIVE_FILE_CHANGED: &str = "active-file-changed";

pub struct WindowSelectionBridge {
    app: AppHandle,
    label: String,
}

impl WindowSelectionBridge {
    pub fn new(app: AppHandle, label: impl Into<String>) -> Self {
        Self {
            app,
            label: label.into(),
        }
    }

    /// Event name scoped to the bridged window
    pub fn event_name(&self) -> String {
        format!("{}/{}", ACTIVE_FILE_CHANGED, self.label)
    }
}

impl SelectionListener for WindowSelectionBridge {
    fn active_tab_changed(&self, active: Option<&TabId>) {
        let payload = active.map(|id| FileRef::for_path(id.as_str()));

        if let Err(e) = self.app.emit(&self.event_name(), payload) {
            tracing::warn!(window = %self.label, error = %e, "Failed to emit active file change");
        }
    }
}
