use proptest::prelude::*;
use proptest::sample::Index;

use crate::{TabAction, TabId, TabState};

const PATHS: &[&str] = &[
    "a.ts",
    "b.ts",
    "c.ts",
    "d.ts",
    "src/e.tsx",
    "src/nested/f.json",
];

/// Never produced by `tab_id()`, so it is guaranteed not to be open.
const FRESH: &str = "fresh/unopened.md";

fn tab_id() -> impl Strategy<Value = TabId> {
    prop::sample::select(PATHS).prop_map(TabId::from)
}

fn action() -> impl Strategy<Value = TabAction> {
    prop_oneof![
        tab_id().prop_map(TabAction::SetActive),
        tab_id().prop_map(TabAction::Add),
        tab_id().prop_map(TabAction::Preview),
        tab_id().prop_map(TabAction::Remove),
    ]
}

fn actions() -> impl Strategy<Value = Vec<TabAction>> {
    prop::collection::vec(action(), 0..48)
}

fn replay(actions: &[TabAction]) -> TabState {
    actions
        .iter()
        .fold(TabState::new(), |state, action| state.apply(action))
}

fn reachable_state() -> impl Strategy<Value = TabState> {
    actions().prop_map(|actions| replay(&actions))
}

fn open_tab(state: &TabState, pick: Index) -> TabId {
    state.tabs()[pick.index(state.len())].clone()
}

proptest! {
    /// Every prefix of every action sequence is a valid state.
    #[test]
    fn prop_invariants_hold_after_every_transition(actions in actions()) {
        let mut state = TabState::new();
        for action in &actions {
            state = state.apply(action);

            prop_assert!(state.validate().is_ok(), "{:?} -> {:?}", action, state);

            let mut unique = state.tabs().to_vec();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(unique.len(), state.len());

            prop_assert_eq!(state.active_index().is_none(), state.is_empty());
            prop_assert!(state.preview_index().map_or(true, |i| i < state.len()));
        }
    }

    #[test]
    fn prop_set_active_is_idempotent(state in reachable_state(), pick in any::<Index>()) {
        prop_assume!(!state.is_empty());
        let id = open_tab(&state, pick);

        let once = state.set_active_tab(&id);
        let twice = once.set_active_tab(&id);

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.active_id(), Some(&id));
        prop_assert_eq!(once.tabs(), state.tabs());
        prop_assert_eq!(once.preview_index(), state.preview_index());
    }

    #[test]
    fn prop_set_active_ignores_unopened_tab(state in reachable_state()) {
        prop_assert_eq!(state.set_active_tab(&TabId::from(FRESH)), state);
    }

    #[test]
    fn prop_preview_replaces_old_preview(state in reachable_state()) {
        let Some(slot) = state.preview_index() else {
            return Ok(());
        };
        let old = state.tabs()[slot].clone();
        let fresh = TabId::from(FRESH);

        let next = state.preview_tab(&fresh);

        prop_assert!(!next.contains(&old));
        prop_assert_eq!(next.len(), state.len());
        prop_assert_eq!(next.position(&fresh), Some(slot));
        prop_assert_eq!(next.active_index(), Some(slot));
        prop_assert_eq!(next.preview_index(), Some(slot));
    }

    #[test]
    fn prop_preview_never_accumulates(actions in actions()) {
        // Previewing alone never grows the strip past one tab.
        let previews: Vec<TabAction> = actions
            .into_iter()
            .map(|action| TabAction::Preview(action.tab().clone()))
            .collect();
        let state = replay(&previews);
        prop_assert!(state.len() <= 1);
    }

    #[test]
    fn prop_add_promotes_preview_in_place(state in reachable_state()) {
        let Some(slot) = state.preview_index() else {
            return Ok(());
        };
        let id = state.tabs()[slot].clone();

        let next = state.add_tab(&id);

        prop_assert_eq!(next.preview_index(), None);
        prop_assert_eq!(next.active_index(), Some(slot));
        prop_assert_eq!(next.tabs(), state.tabs());
    }

    #[test]
    fn prop_add_opens_right_of_active(state in reachable_state()) {
        let fresh = TabId::from(FRESH);
        let expected = state.active_index().map_or(0, |i| i + 1);

        let next = state.add_tab(&fresh);

        prop_assert_eq!(next.len(), state.len() + 1);
        prop_assert_eq!(next.position(&fresh), Some(expected));
        prop_assert_eq!(next.active_index(), Some(expected));
        prop_assert_eq!(next.preview_id(), state.preview_id());
    }

    #[test]
    fn prop_remove_closes_exactly_one_tab(state in reachable_state(), pick in any::<Index>()) {
        prop_assume!(!state.is_empty());
        let id = open_tab(&state, pick);

        let next = state.remove_tab(&id);

        prop_assert!(!next.contains(&id));
        prop_assert_eq!(next.len(), state.len() - 1);

        let mut survivors = state.tabs().to_vec();
        survivors.retain(|t| t != &id);
        prop_assert_eq!(next.tabs(), survivors.as_slice());

        if state.active_id() != Some(&id) {
            prop_assert_eq!(next.active_id(), state.active_id());
        }
        if state.preview_id() != Some(&id) {
            prop_assert_eq!(next.preview_id(), state.preview_id());
        } else {
            prop_assert_eq!(next.preview_index(), None);
        }
    }

    #[test]
    fn prop_closing_everything_empties_state(state in reachable_state()) {
        let ids = state.tabs().to_vec();
        let closed = ids.iter().fold(state, |state, id| state.remove_tab(id));

        prop_assert_eq!(closed, TabState::new());
    }
}
