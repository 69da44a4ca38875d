//! User actions on the tab strip

use serde::{Deserialize, Serialize};

use crate::state::TabState;
use crate::tab::TabId;

/// One user interaction, mapped to exactly one transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "path", rename_all = "snake_case")]
pub enum TabAction {
    /// Click on a tab
    SetActive(TabId),
    /// Double-click in the file tree or on a tab
    Add(TabId),
    /// Single-click in the file tree
    Preview(TabId),
    /// Close button
    Remove(TabId),
}

impl TabAction {
    pub fn tab(&self) -> &TabId {
        match self {
            TabAction::SetActive(id)
            | TabAction::Add(id)
            | TabAction::Preview(id)
            | TabAction::Remove(id) => id,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabAction::SetActive(_) => "set_active",
            TabAction::Add(_) => "add",
            TabAction::Preview(_) => "preview",
            TabAction::Remove(_) => "remove",
        }
    }
}

impl TabState {
    /// Reduce one action into the next state.
    #[must_use]
    pub fn apply(&self, action: &TabAction) -> TabState {
        match action {
            TabAction::SetActive(id) => self.set_active_tab(id),
            TabAction::Add(id) => self.add_tab(id),
            TabAction::Preview(id) => self.preview_tab(id),
            TabAction::Remove(id) => self.remove_tab(id),
        }
    }
}
