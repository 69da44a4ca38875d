//! Tab strip state
//!
//! ```text
//! closed ──previewTab──▶ preview ──addTab──▶ permanent
//!    ▲                      │
//!    └──previewTab(other)───┘   (the old preview is evicted)
//! ```
//!
//! Indices are tracked by the identifier they point at. After a structural
//! change the new index is found by looking that identifier up again in the
//! new sequence, never by shifting the old offset.

use crate::error::TabError;
use crate::tab::TabId;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabState {
    /// Open tabs, left to right
    tabs: Vec<TabId>,
    /// Tab shown in the editor pane; `None` iff `tabs` is empty
    active_index: Option<usize>,
    /// The one tab (if any) in preview mode
    preview_index: Option<usize>,
}

impl TabState {
    /// Empty tab strip, as created when an editor window opens
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a state from raw parts, rejecting anything a transition
    /// could never produce.
    pub fn from_parts(
        tabs: Vec<TabId>,
        active_index: Option<usize>,
        preview_index: Option<usize>,
    ) -> Result<Self> {
        let state = Self {
            tabs,
            active_index,
            preview_index,
        };
        state.validate()?;
        Ok(state)
    }

    /// Check the structural invariants.
    pub fn validate(&self) -> Result<()> {
        for (i, tab) in self.tabs.iter().enumerate() {
            if self.tabs[..i].contains(tab) {
                return Err(TabError::Duplicate(tab.to_string()));
            }
        }

        let len = self.tabs.len();
        match self.active_index {
            None if len > 0 => return Err(TabError::MissingActive(len)),
            Some(index) if index >= len => {
                return Err(TabError::ActiveOutOfRange { index, len });
            }
            _ => {}
        }

        if let Some(index) = self.preview_index {
            if index >= len {
                return Err(TabError::PreviewOutOfRange { index, len });
            }
        }

        Ok(())
    }

    pub fn tabs(&self) -> &[TabId] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn preview_index(&self) -> Option<usize> {
        self.preview_index
    }

    /// Identifier of the tab shown in the editor pane
    pub fn active_id(&self) -> Option<&TabId> {
        self.active_index.and_then(|i| self.tabs.get(i))
    }

    /// Identifier of the preview tab
    pub fn preview_id(&self) -> Option<&TabId> {
        self.preview_index.and_then(|i| self.tabs.get(i))
    }

    pub fn position(&self, id: &TabId) -> Option<usize> {
        locate(&self.tabs, Some(id))
    }

    pub fn contains(&self, id: &TabId) -> bool {
        self.tabs.contains(id)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index == Some(index)
    }

    pub fn is_preview(&self, index: usize) -> bool {
        self.preview_index == Some(index)
    }

    /// Focus an already open tab. Unknown identifiers are ignored.
    #[must_use]
    pub fn set_active_tab(&self, id: &TabId) -> Self {
        match self.position(id) {
            Some(index) => self.with_active(index),
            None => self.clone(),
        }
    }

    /// Open a tab permanently.
    ///
    /// A preview tab is promoted in place, an open tab is focused, and a new
    /// tab lands immediately to the right of the active one.
    #[must_use]
    pub fn add_tab(&self, id: &TabId) -> Self {
        if self.preview_id() == Some(id) {
            return Self {
                tabs: self.tabs.clone(),
                active_index: self.preview_index,
                preview_index: None,
            };
        }

        if self.active_id() == Some(id) {
            return self.clone();
        }

        if let Some(index) = self.position(id) {
            return self.with_active(index);
        }

        let at = self.insertion_point();
        let mut tabs = self.tabs.clone();
        tabs.insert(at, id.clone());
        let preview_index = locate(&tabs, self.preview_id());

        Self {
            tabs,
            active_index: Some(at),
            preview_index,
        }
    }

    /// Open a tab in preview mode.
    ///
    /// At most one preview exists: previewing a file that is not open
    /// replaces the current preview in place instead of adding a tab.
    #[must_use]
    pub fn preview_tab(&self, id: &TabId) -> Self {
        if self.preview_id() == Some(id) {
            return Self {
                tabs: self.tabs.clone(),
                active_index: self.preview_index,
                preview_index: self.preview_index,
            };
        }

        if let Some(index) = self.position(id) {
            return self.with_active(index);
        }

        if let Some(slot) = self.preview_index {
            let mut tabs = self.tabs.clone();
            tabs[slot] = id.clone();
            return Self {
                tabs,
                active_index: Some(slot),
                preview_index: Some(slot),
            };
        }

        let at = self.insertion_point();
        let mut tabs = self.tabs.clone();
        tabs.insert(at, id.clone());

        Self {
            tabs,
            active_index: Some(at),
            preview_index: Some(at),
        }
    }

    /// Close a tab.
    ///
    /// Closing the active tab focuses its left neighbour, or the last tab
    /// when it was leftmost. Closing a tab that is not open is a no-op.
    #[must_use]
    pub fn remove_tab(&self, id: &TabId) -> Self {
        let Some(removed) = self.position(id) else {
            return self.clone();
        };

        let mut tabs = self.tabs.clone();
        tabs.remove(removed);

        let active_index = if self.is_active(removed) {
            left_neighbour(&tabs, removed)
        } else {
            locate(&tabs, self.active_id())
        };

        let preview_index = if self.is_preview(removed) {
            None
        } else {
            locate(&tabs, self.preview_id())
        };

        Self {
            tabs,
            active_index,
            preview_index,
        }
    }

    fn with_active(&self, index: usize) -> Self {
        Self {
            tabs: self.tabs.clone(),
            active_index: Some(index),
            preview_index: self.preview_index,
        }
    }

    /// New tabs open to the right of the active one.
    fn insertion_point(&self) -> usize {
        self.active_index.map_or(0, |i| i + 1)
    }
}

fn locate(tabs: &[TabId], id: Option<&TabId>) -> Option<usize> {
    id.and_then(|id| tabs.iter().position(|t| t == id))
}

/// Index to focus after closing the active tab at `closed`, given the tabs
/// that remain.
fn left_neighbour(remaining: &[TabId], closed: usize) -> Option<usize> {
    if remaining.is_empty() {
        None
    } else if closed == 0 {
        Some(remaining.len() - 1)
    } else {
        Some(closed - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(path: &str) -> TabId {
        TabId::from(path)
    }

    fn state(tabs: &[&str], active: Option<usize>, preview: Option<usize>) -> TabState {
        TabState::from_parts(tabs.iter().map(|t| id(t)).collect(), active, preview).unwrap()
    }

    fn names(state: &TabState) -> Vec<&str> {
        state.tabs().iter().map(TabId::as_str).collect()
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = TabState::new();
        assert!(state.is_empty());
        assert_eq!(state.active_index(), None);
        assert_eq!(state.preview_index(), None);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_preview_then_promote() {
        let previewed = TabState::new().preview_tab(&id("a.ts"));
        assert_eq!(names(&previewed), vec!["a.ts"]);
        assert_eq!(previewed.active_index(), Some(0));
        assert_eq!(previewed.preview_index(), Some(0));

        let promoted = previewed.add_tab(&id("a.ts"));
        assert_eq!(names(&promoted), vec!["a.ts"]);
        assert_eq!(promoted.active_index(), Some(0));
        assert_eq!(promoted.preview_index(), None);
    }

    #[test]
    fn test_add_inserts_right_of_active() {
        let before = state(&["a.ts", "b.ts"], Some(0), None);
        let after = before.add_tab(&id("c.ts"));
        assert_eq!(names(&after), vec!["a.ts", "c.ts", "b.ts"]);
        assert_eq!(after.active_index(), Some(1));
        assert_eq!(after.preview_index(), None);
    }

    #[test]
    fn test_add_keeps_preview_on_same_file() {
        // Preview sits right of the insertion point and must shift with it.
        let before = state(&["a.ts", "b.ts", "p.ts"], Some(0), Some(2));
        let after = before.add_tab(&id("c.ts"));
        assert_eq!(names(&after), vec!["a.ts", "c.ts", "b.ts", "p.ts"]);
        assert_eq!(after.active_index(), Some(1));
        assert_eq!(after.preview_id(), Some(&id("p.ts")));
        assert_eq!(after.preview_index(), Some(3));
    }

    #[test]
    fn test_add_existing_tab_activates_it() {
        let before = state(&["a.ts", "b.ts", "c.ts"], Some(0), Some(1));
        let after = before.add_tab(&id("c.ts"));
        assert_eq!(names(&after), names(&before));
        assert_eq!(after.active_index(), Some(2));
        assert_eq!(after.preview_index(), Some(1));

        assert_eq!(before.add_tab(&id("a.ts")), before);
    }

    #[test]
    fn test_preview_replaces_existing_preview() {
        let before = state(&["a.ts", "p.ts", "b.ts"], Some(0), Some(1));
        let after = before.preview_tab(&id("q.ts"));
        assert_eq!(names(&after), vec!["a.ts", "q.ts", "b.ts"]);
        assert_eq!(after.active_index(), Some(1));
        assert_eq!(after.preview_index(), Some(1));
    }

    #[test]
    fn test_preview_of_permanent_tab_only_activates() {
        let before = state(&["a.ts", "p.ts", "b.ts"], Some(1), Some(1));
        let after = before.preview_tab(&id("b.ts"));
        assert_eq!(names(&after), names(&before));
        assert_eq!(after.active_index(), Some(2));
        assert_eq!(after.preview_index(), Some(1));
    }

    #[test]
    fn test_preview_reselects_preview_slot() {
        let before = state(&["p.ts", "a.ts"], Some(1), Some(0));
        let after = before.preview_tab(&id("p.ts"));
        assert_eq!(names(&after), names(&before));
        assert_eq!(after.active_index(), Some(0));
        assert_eq!(after.preview_index(), Some(0));
    }

    #[test]
    fn test_set_active_ignores_unknown_tab() {
        let before = state(&["a.ts", "b.ts"], Some(1), None);
        assert_eq!(before.set_active_tab(&id("zzz.ts")), before);
        assert_eq!(before.set_active_tab(&id("a.ts")).active_index(), Some(0));
    }

    #[test]
    fn test_remove_active_prefers_left_neighbour() {
        let before = state(&["a.ts", "b.ts", "c.ts"], Some(1), None);
        let after = before.remove_tab(&id("b.ts"));
        assert_eq!(names(&after), vec!["a.ts", "c.ts"]);
        assert_eq!(after.active_index(), Some(0));
    }

    #[test]
    fn test_remove_leftmost_active_wraps_to_last() {
        let before = state(&["a.ts", "b.ts", "c.ts"], Some(0), None);
        let after = before.remove_tab(&id("a.ts"));
        assert_eq!(names(&after), vec!["b.ts", "c.ts"]);
        assert_eq!(after.active_index(), Some(1));
    }

    #[test]
    fn test_remove_last_tab_empties_state() {
        let before = state(&["a.ts"], Some(0), None);
        let after = before.remove_tab(&id("a.ts"));
        assert!(after.is_empty());
        assert_eq!(after.active_index(), None);
        assert_eq!(after.preview_index(), None);

        let before = state(&["a.ts"], Some(0), Some(0));
        assert_eq!(before.remove_tab(&id("a.ts")), TabState::new());
    }

    #[test]
    fn test_remove_preview_that_is_not_active() {
        let before = state(&["a.ts", "p.ts", "b.ts"], Some(2), Some(1));
        let after = before.remove_tab(&id("p.ts"));
        assert_eq!(names(&after), vec!["a.ts", "b.ts"]);
        assert_eq!(after.active_id(), Some(&id("b.ts")));
        assert_eq!(after.active_index(), Some(1));
        assert_eq!(after.preview_index(), None);
    }

    #[test]
    fn test_remove_active_preview_uses_left_neighbour() {
        let before = state(&["a.ts", "p.ts", "b.ts"], Some(1), Some(1));
        let after = before.remove_tab(&id("p.ts"));
        assert_eq!(names(&after), vec!["a.ts", "b.ts"]);
        assert_eq!(after.active_index(), Some(0));
        assert_eq!(after.preview_index(), None);
    }

    #[test]
    fn test_remove_background_tab_relocates_indices() {
        let before = state(&["a.ts", "b.ts", "c.ts", "p.ts"], Some(2), Some(3));
        let after = before.remove_tab(&id("a.ts"));
        assert_eq!(names(&after), vec!["b.ts", "c.ts", "p.ts"]);
        assert_eq!(after.active_id(), Some(&id("c.ts")));
        assert_eq!(after.preview_id(), Some(&id("p.ts")));
    }

    #[test]
    fn test_remove_active_keeps_preview_on_same_file() {
        let before = state(&["a.ts", "b.ts", "p.ts"], Some(1), Some(2));
        let after = before.remove_tab(&id("b.ts"));
        assert_eq!(names(&after), vec!["a.ts", "p.ts"]);
        assert_eq!(after.active_index(), Some(0));
        assert_eq!(after.preview_index(), Some(1));
    }

    #[test]
    fn test_remove_unknown_tab_is_noop() {
        let before = state(&["a.ts", "b.ts"], Some(1), Some(0));
        assert_eq!(before.remove_tab(&id("zzz.ts")), before);
    }

    #[test]
    fn test_from_parts_rejects_broken_states() {
        let dup = TabState::from_parts(vec![id("a.ts"), id("a.ts")], Some(0), None);
        assert_eq!(dup, Err(TabError::Duplicate("a.ts".to_string())));

        let missing = TabState::from_parts(vec![id("a.ts")], None, None);
        assert_eq!(missing, Err(TabError::MissingActive(1)));

        let active = TabState::from_parts(vec![], Some(0), None);
        assert_eq!(active, Err(TabError::ActiveOutOfRange { index: 0, len: 0 }));

        let preview = TabState::from_parts(vec![id("a.ts")], Some(0), Some(3));
        assert_eq!(preview, Err(TabError::PreviewOutOfRange { index: 3, len: 1 }));
    }
}
