//! Ceramic Storage Layer
//!
//! SQLite persistence for the state that outlives an editor window, the
//! recently opened projects. Tab state is never stored.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
