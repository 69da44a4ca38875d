//! Tab error types
//!
//! Transitions never fail; these only come out of validating a state that
//! was assembled from raw parts.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Duplicate tab: {0}")]
    Duplicate(String),

    #[error("Active index {index} out of range for {len} tabs")]
    ActiveOutOfRange { index: usize, len: usize },

    #[error("Preview index {index} out of range for {len} tabs")]
    PreviewOutOfRange { index: usize, len: usize },

    #[error("No active tab while {0} tabs are open")]
    MissingActive(usize),
}
