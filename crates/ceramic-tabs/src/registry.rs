//! Tab Registry
//!
//! Holds the current tab state for one editor window and applies user
//! actions to it. Each transition replaces the whole snapshot, so a render
//! pass and a selection listener reading concurrently always agree.

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

use crate::action::TabAction;
use crate::selection::SelectionListener;
use crate::state::TabState;
use crate::tab::TabId;

pub struct TabRegistry {
    /// Current snapshot, swapped whole on every transition
    state: Arc<RwLock<Arc<TabState>>>,
    /// Serialises writers so no transition is computed from a stale snapshot
    writer: Arc<Mutex<()>>,
    /// Notified when the active tab moves or changes
    listeners: Arc<RwLock<Vec<Arc<dyn SelectionListener>>>>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(Arc::new(TabState::new()))),
            writer: Arc::new(Mutex::new(())),
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Current state. The snapshot never changes after it is handed out.
    pub fn snapshot(&self) -> Arc<TabState> {
        Arc::clone(&*self.state.read())
    }

    pub fn subscribe(&self, listener: Arc<dyn SelectionListener>) {
        self.listeners.write().push(listener);
    }

    /// Apply one action and return the resulting snapshot.
    pub fn dispatch(&self, action: TabAction) -> Arc<TabState> {
        let _writer = self.writer.lock();

        let previous = self.snapshot();
        let next = Arc::new(previous.apply(&action));
        debug_assert!(next.validate().is_ok(), "{:?} broke {:?}", action, next);

        tracing::debug!(
            op = action.as_str(),
            tab = %action.tab(),
            active = ?next.active_index(),
            preview = ?next.preview_index(),
            tabs = next.len(),
            "Tab transition"
        );

        *self.state.write() = Arc::clone(&next);

        if previous.active_index() != next.active_index()
            || previous.active_id() != next.active_id()
        {
            self.notify(next.active_id());
        }

        next
    }

    pub fn set_active_tab(&self, id: impl Into<TabId>) -> Arc<TabState> {
        self.dispatch(TabAction::SetActive(id.into()))
    }

    pub fn add_tab(&self, id: impl Into<TabId>) -> Arc<TabState> {
        self.dispatch(TabAction::Add(id.into()))
    }

    pub fn preview_tab(&self, id: impl Into<TabId>) -> Arc<TabState> {
        self.dispatch(TabAction::Preview(id.into()))
    }

    pub fn remove_tab(&self, id: impl Into<TabId>) -> Arc<TabState> {
        self.dispatch(TabAction::Remove(id.into()))
    }

    fn notify(&self, active: Option<&TabId>) {
        let listeners: Vec<_> = self.listeners.read().iter().cloned().collect();
        for listener in listeners {
            listener.active_tab_changed(active);
        }
    }
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TabRegistry {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            writer: Arc::clone(&self.writer),
            listeners: Arc::clone(&self.listeners),
        }
    }
}
