//! Ceramic Tab Registry
//!
//! Decides which files are open in an editor window, which one is active,
//! and which single open file is a transient preview (single-click opens a
//! preview, double-click or an explicit open makes it permanent).
//!
//! Every transition is a pure `TabState -> TabState` function; the
//! [`TabRegistry`] swaps whole snapshots so readers never see a half-applied
//! update.

mod action;
mod error;
mod registry;
mod selection;
mod state;
mod tab;

#[cfg(test)]
mod proptests;

pub use action::TabAction;
pub use error::TabError;
pub use registry::TabRegistry;
pub use selection::SelectionListener;
pub use state::TabState;
pub use tab::TabId;

pub type Result<T> = std::result::Result<T, TabError>;
