//! Debug domain: tests for debug state bookkeeping.

use super::DebugState;

#[test]
fn test_message_expires_after_duration() {
    let mut state = DebugState::default();
    state.set_message("Respawned", 1.0);
    state.tick_message(0.4);
    assert_eq!(state.message(), Some("Respawned"));
    state.tick_message(0.6);
    assert_eq!(state.message(), None);
}

#[test]
fn test_new_message_replaces_old() {
    let mut state = DebugState::default();
    state.set_message("first", 0.5);
    state.tick_message(0.4);
    state.set_message("second", 2.0);
    state.tick_message(0.4);
    assert_eq!(state.message(), Some("second"));
}
