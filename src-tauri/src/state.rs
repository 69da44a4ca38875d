//! Application state management
use ceramic_core::{Config, Result, Studio};

/// Application state shared by every window
pub struct AppState {
    studio: Studio,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let config = Config::load(&Config::data_dir())?;
        let studio = Studio::new(config)?;

        Ok(Self { studio })
    }

    pub fn with_studio<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Studio) -> Result<T>,
    {
        f(&self.studio)
    }

    /// Owned handle for work that leaves the command thread.
    pub fn studio(&self) -> Studio {
        self.studio.clone()
    }
}
