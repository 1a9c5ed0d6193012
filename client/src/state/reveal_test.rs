use super::*;

// =============================================================
// Phase transitions
// =============================================================

#[test]
fn starts_initializing_with_placeholder() {
    let state = RevealState::new();
    assert_eq!(state.phase(), RevealPhase::Initializing);
    assert!(state.shows_placeholder());
    assert!(!state.images_loaded());
    assert!(!state.is_mounted());
}

#[test]
fn begin_waits_for_assets() {
    let mut state = RevealState::new();
    state.begin();
    assert_eq!(state.phase(), RevealPhase::WaitingForAssets);
    assert!(state.shows_placeholder());
}

#[test]
fn settle_opens_gate() {
    let mut state = RevealState::new();
    let ticket = state.begin();
    assert_eq!(state.settle(ticket), SettleOutcome::Opened);
    assert_eq!(state.phase(), RevealPhase::Ready);
    assert!(state.images_loaded());
    assert!(!state.shows_placeholder());
}

#[test]
fn settle_twice_is_noop() {
    let mut state = RevealState::new();
    let ticket = state.begin();
    assert_eq!(state.settle(ticket), SettleOutcome::Opened);
    assert_eq!(state.settle(ticket), SettleOutcome::AlreadyReady);
    assert_eq!(state.phase(), RevealPhase::Ready);
}

#[test]
fn settle_without_begin_is_ignored() {
    let mut state = RevealState::new();
    let mut other = RevealState::new();
    let foreign = other.begin();
    assert_eq!(state.settle(foreign), SettleOutcome::Superseded);
    assert_eq!(state.phase(), RevealPhase::Initializing);
}

#[test]
fn opened_state_is_ready_without_a_cycle() {
    let mut state = RevealState::opened();
    assert_eq!(state.phase(), RevealPhase::Ready);
    assert!(!state.shows_placeholder());
    assert!(!state.is_mounted());

    let ticket = state.begin();
    assert_eq!(state.phase(), RevealPhase::WaitingForAssets);
    assert_eq!(state.settle(ticket), SettleOutcome::Opened);
}

// =============================================================
// Item list changes
// =============================================================

#[test]
fn new_list_after_ready_restarts_cycle() {
    let mut state = RevealState::new();
    let first = state.begin();
    state.settle(first);

    let second = state.begin();
    assert_eq!(state.phase(), RevealPhase::WaitingForAssets);
    assert!(state.shows_placeholder());
    assert!(second > first);

    assert_eq!(state.settle(second), SettleOutcome::Opened);
    assert!(state.images_loaded());
}

#[test]
fn stale_settlement_does_not_open_gate() {
    let mut state = RevealState::new();
    let old = state.begin();
    let current = state.begin();

    assert_eq!(state.settle(old), SettleOutcome::Superseded);
    assert_eq!(state.phase(), RevealPhase::WaitingForAssets);

    assert_eq!(state.settle(current), SettleOutcome::Opened);
    assert_eq!(state.phase(), RevealPhase::Ready);
}

// =============================================================
// Mounted flag
// =============================================================

#[test]
fn mounted_flips_exactly_once() {
    let mut state = RevealState::new();
    assert!(state.mark_mounted());
    assert!(!state.mark_mounted());
    assert!(state.is_mounted());
}

#[test]
fn mounted_is_independent_of_phase() {
    let mut state = RevealState::new();
    state.mark_mounted();
    assert!(state.is_mounted());
    assert!(state.shows_placeholder());

    for _ in 0..3 {
        let ticket = state.begin();
        assert!(state.is_mounted());
        state.settle(ticket);
        assert!(state.is_mounted());
    }
    assert!(!state.mark_mounted());
}

#[test]
fn animations_need_mount_and_content() {
    let mut state = RevealState::new();
    let ticket = state.begin();
    state.settle(ticket);
    assert!(!state.animations_enabled());
    state.mark_mounted();
    assert!(state.animations_enabled());
    state.begin();
    assert!(!state.animations_enabled());
}
