use super::*;
use crate::net::types::{BugPriority, BugStatus};

fn bug(id: i64, title: &str) -> Bug {
    Bug {
        id,
        title: title.to_owned(),
        description: "Test".to_owned(),
        status: BugStatus::Open,
        priority: BugPriority::High,
    }
}

// =============================================================
// BugsState defaults
// =============================================================

#[test]
fn bugs_state_default_is_pending() {
    let state = BugsState::default();
    assert!(state.loading);
    assert!(state.bugs.is_empty());
}

#[test]
fn bugs_state_default_no_error_no_pending_delete() {
    let state = BugsState::default();
    assert!(state.error.is_none());
    assert!(state.pending_delete.is_none());
}

// =============================================================
// Load transitions
// =============================================================

#[test]
fn begin_load_marks_loading() {
    let mut state = BugsState::default();
    state.finish_load(vec![]);
    state.begin_load();
    assert!(state.loading);
}

#[test]
fn finish_load_stores_titles_in_returned_order() {
    let mut state = BugsState::default();
    state.finish_load(vec![bug(1, "Bug 1"), bug(2, "Bug 2"), bug(3, "Bug 3")]);

    let titles: Vec<&str> = state.bugs.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["Bug 1", "Bug 2", "Bug 3"]);
    assert!(!state.loading);
}

#[test]
fn finish_load_replaces_previous_snapshot() {
    let mut state = BugsState::default();
    state.finish_load(vec![bug(1, "Bug 1"), bug(2, "Bug 2")]);
    state.finish_load(vec![bug(2, "Bug 2")]);

    assert_eq!(state.bugs.len(), 1);
    assert_eq!(state.bugs[0].id, 2);
}

#[test]
fn finish_load_clears_error_and_pending_delete() {
    let mut state = BugsState::default();
    state.fail_load();
    state.arm_delete(1);

    state.finish_load(vec![bug(1, "Bug 1")]);
    assert!(state.error.is_none());
    assert!(state.pending_delete.is_none());
}

#[test]
fn fail_load_sets_fixed_message() {
    let mut state = BugsState::default();
    state.fail_load();

    assert_eq!(state.error.as_deref(), Some("Failed to fetch bugs"));
    assert_eq!(state.error.as_deref(), Some(LOAD_ERROR));
    assert!(!state.loading);
}

// =============================================================
// Delete confirmation
// =============================================================

#[test]
fn delete_requires_arming_first() {
    let mut state = BugsState::default();
    state.finish_load(vec![bug(1, "Bug 1")]);
    assert!(!state.delete_armed(1));

    state.arm_delete(1);
    assert!(state.delete_armed(1));
}

#[test]
fn arming_another_row_moves_the_confirmation() {
    let mut state = BugsState::default();
    state.arm_delete(1);
    state.arm_delete(2);

    assert!(!state.delete_armed(1));
    assert!(state.delete_armed(2));
}

#[test]
fn disarm_clears_the_confirmation() {
    let mut state = BugsState::default();
    state.arm_delete(1);
    state.disarm_delete();
    assert!(!state.delete_armed(1));
}
