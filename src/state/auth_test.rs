use super::*;
use crate::test_helpers::profile;

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
}

#[test]
fn auth_state_loaded_clears_loading() {
    let state = AuthState::loaded(Some(profile("u-1")));
    assert!(!state.loading);
    assert_eq!(state.user.map(|u| u.id), Some("u-1".to_owned()));

    let empty = AuthState::loaded(None);
    assert!(!empty.loading);
    assert!(empty.user.is_none());
}
