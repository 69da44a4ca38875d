//! Selection bridge contract
//!
//! The registry tells the file-viewing surface which file to render. The
//! notification is one-way; listeners never drive transitions themselves.

use crate::tab::TabId;

pub trait SelectionListener: Send + Sync {
    /// Called after a transition moved the active index or changed which
    /// file it points at. `None` means the last tab was closed.
    fn active_tab_changed(&self, active: Option<&TabId>);
}

impl<F> SelectionListener for F
where
    F: Fn(Option<&TabId>) + Send + Sync,
{
    fn active_tab_changed(&self, active: Option<&TabId>) {
        self(active)
    }
}
