use super::*;

fn settled(authenticated: bool, admin: bool) -> AuthState {
    AuthState { authenticated, admin, checking: false }
}

#[test]
fn default_state_is_checking_and_unauthenticated() {
    let state = AuthState::default();
    assert!(state.checking);
    assert!(!state.authenticated);
    assert!(!state.admin);
}

#[test]
fn guard_shows_loading_while_checking() {
    let state = AuthState { authenticated: true, admin: true, checking: true };
    assert_eq!(GuardView::resolve(&state, false), GuardView::Loading);
    assert_eq!(GuardView::resolve(&state, true), GuardView::Loading);
}

#[test]
fn guard_denies_admin_subtree_without_admin_flag() {
    assert_eq!(GuardView::resolve(&settled(true, false), true), GuardView::Denied);
}

#[test]
fn guard_renders_admin_subtree_for_admin() {
    assert_eq!(GuardView::resolve(&settled(true, true), true), GuardView::Content);
}

#[test]
fn guard_renders_plain_subtree_for_any_authenticated_viewer() {
    assert_eq!(GuardView::resolve(&settled(true, false), false), GuardView::Content);
    assert_eq!(GuardView::resolve(&settled(true, true), false), GuardView::Content);
}

#[test]
fn guard_hides_content_when_unauthenticated() {
    assert_eq!(GuardView::resolve(&settled(false, false), false), GuardView::Hidden);
    assert_eq!(GuardView::resolve(&AuthState::signed_out(), false), GuardView::Hidden);
}

#[test]
fn signed_in_copies_admin_flag() {
    let record = SessionRecord {
        id: "1".to_owned(),
        name: "A".to_owned(),
        email: "a@b.com".to_owned(),
        admin: false,
    };
    assert_eq!(AuthState::signed_in(&record), settled(true, false));
}

#[test]
fn login_route_detection_tolerates_trailing_slash() {
    assert!(is_login_route("/login"));
    assert!(is_login_route("/login/"));
    assert!(!is_login_route("/"));
    assert!(!is_login_route("/login/extra"));
}
