//! Tauri IPC Commands
//!
//! These commands bridge the webview to the Rust core. The studio owns all
//! project and tab state; the webview renders what it gets back.

pub mod diagnostics;
pub mod files;
pub mod projects;
pub mod tabs;
pub mod windows;

#[derive(Debug, serde::Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for CommandResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::err(e.to_string()),
        }
    }
}
