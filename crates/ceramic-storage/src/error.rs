//! Storage error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Unsupported schema version {found}, expected at most {supported}")]
    SchemaTooNew { found: i32, supported: i32 },
}
