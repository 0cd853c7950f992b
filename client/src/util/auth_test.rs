use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::state::auth::GuardView;
use crate::state::session::{MemorySessionStore, SessionError};

fn record() -> SessionRecord {
    SessionRecord {
        id: "1".to_owned(),
        name: "A".to_owned(),
        email: "a@b.com".to_owned(),
        admin: true,
    }
}

// =============================================================
// check_route
// =============================================================

#[test]
fn login_route_skips_session_read_and_redirect() {
    let store = MemorySessionStore::seeded("{broken");
    let redirects = RefCell::new(Vec::<String>::new());
    let mut state = AuthState::default();

    let outcome = check_route(&mut state, "/login", &store, |to| redirects.borrow_mut().push(to.to_owned()));

    assert_eq!(outcome, GateOutcome::Public);
    assert!(!state.checking);
    assert!(redirects.borrow().is_empty());
    // The corrupt blob was never read, so it is still there.
    assert_eq!(store.raw().as_deref(), Some("{broken"));
}

#[test]
fn missing_record_redirects_and_never_exposes_content() {
    let store = MemorySessionStore::default();
    let redirects = RefCell::new(Vec::<String>::new());
    let mut state = AuthState::default();

    let outcome = check_route(&mut state, "/", &store, |to| redirects.borrow_mut().push(to.to_owned()));

    assert_eq!(outcome, GateOutcome::Redirected);
    assert_eq!(*redirects.borrow(), vec![LOGIN_ROUTE.to_owned()]);
    assert_eq!(GuardView::resolve(&state, false), GuardView::Hidden);
    assert_eq!(GuardView::resolve(&state, true), GuardView::Denied);
}

#[test]
fn redirect_is_issued_while_still_checking() {
    let store = MemorySessionStore::default();
    let calls = RefCell::new(0);
    let mut state = AuthState::default();

    check_route(&mut state, "/", &store, |_| *calls.borrow_mut() += 1);

    assert_eq!(*calls.borrow(), 1);
    assert!(!state.checking);
    assert!(!state.authenticated);
}

#[test]
fn corrupt_record_is_cleared_and_redirects_without_panicking() {
    let store = MemorySessionStore::seeded("not-json");
    let redirects = RefCell::new(Vec::<String>::new());
    let mut state = AuthState::default();

    let outcome = check_route(&mut state, "/", &store, |to| redirects.borrow_mut().push(to.to_owned()));

    assert_eq!(outcome, GateOutcome::Redirected);
    assert_eq!(*redirects.borrow(), vec![LOGIN_ROUTE.to_owned()]);
    assert_eq!(store.raw(), None);
    assert!(!state.authenticated);
}

#[test]
fn valid_record_authenticates_with_single_checking_transition() {
    let store = MemorySessionStore::default();
    store.save(&record()).unwrap();
    let mut state = AuthState::default();
    assert!(state.checking);

    let outcome = check_route(&mut state, "/", &store, |to| panic!("unexpected redirect to {to}"));

    assert_eq!(outcome, GateOutcome::Authenticated);
    assert_eq!(state, AuthState { authenticated: true, admin: true, checking: false });
    assert_eq!(GuardView::resolve(&state, true), GuardView::Content);
}

#[test]
fn route_change_re_evaluates_after_session_disappears() {
    let store = MemorySessionStore::default();
    store.save(&record()).unwrap();
    let mut state = AuthState::default();
    check_route(&mut state, "/", &store, |_| {});
    assert!(state.authenticated);

    store.clear();
    let redirects = RefCell::new(0);
    let outcome = check_route(&mut state, "/", &store, |_| *redirects.borrow_mut() += 1);

    assert_eq!(outcome, GateOutcome::Redirected);
    assert_eq!(*redirects.borrow(), 1);
    assert!(!state.authenticated);
}

// =============================================================
// 401 enforcement
// =============================================================

#[test]
fn unauthorized_clears_session_and_redirects() {
    let store = MemorySessionStore::default();
    store.save(&record()).unwrap();
    let redirects = RefCell::new(Vec::<String>::new());

    let out: Result<(), ApiError> =
        enforce_session(Err(ApiError::Unauthorized), &store, |to| redirects.borrow_mut().push(to.to_owned()));

    assert_eq!(out, Err(ApiError::Unauthorized));
    assert_eq!(*redirects.borrow(), vec![LOGIN_ROUTE.to_owned()]);
    assert_eq!(store.load(), Ok(None));
}

#[test]
fn other_results_pass_through_untouched() {
    let store = MemorySessionStore::default();
    store.save(&record()).unwrap();

    let ok = enforce_session(Ok(5), &store, |to| panic!("unexpected redirect to {to}"));
    let failed: Result<(), ApiError> = enforce_session(
        Err(ApiError::Status { status: 500, message: "boom".to_owned() }),
        &store,
        |to| panic!("unexpected redirect to {to}"),
    );

    assert_eq!(ok, Ok(5));
    assert!(matches!(failed, Err(ApiError::Status { status: 500, .. })));
    assert_eq!(store.load(), Ok(Some(record())));
}

// =============================================================
// sign_in
// =============================================================

#[test]
fn sign_in_persists_record_and_navigates_to_dashboard() {
    let store = MemorySessionStore::default();
    let sent = RefCell::new(None);
    let navigated = RefCell::new(None);

    let result = block_on(sign_in(
        &store,
        "a@b.com",
        "x",
        |request| {
            *sent.borrow_mut() = Some(request);
            async {
                Ok(LoginResponse {
                    message: None,
                    admin_id: "1".to_owned(),
                    name: "A".to_owned(),
                    email: "a@b.com".to_owned(),
                })
            }
        },
        |to| *navigated.borrow_mut() = Some(to.to_owned()),
    ));

    assert_eq!(result, Ok(record()));
    assert_eq!(
        sent.borrow().clone(),
        Some(LoginRequest { email: "a@b.com".to_owned(), password: "x".to_owned() })
    );
    assert_eq!(store.load(), Ok(Some(record())));
    assert_eq!(navigated.borrow().as_deref(), Some(DASHBOARD_ROUTE));
}

#[test]
fn sign_in_rejects_blank_fields_before_any_request() {
    let store = MemorySessionStore::default();
    let sent = RefCell::new(false);
    let result = block_on(sign_in(
        &store,
        "  ",
        "x",
        |_| {
            *sent.borrow_mut() = true;
            async { Err(ApiError::Unavailable) }
        },
        |to| panic!("unexpected navigation to {to}"),
    ));
    assert!(result.is_err());
    assert!(!*sent.borrow());
    assert_eq!(store.load(), Ok(None));
}

#[test]
fn sign_in_surfaces_server_error_and_persists_nothing() {
    let store = MemorySessionStore::default();
    let result = block_on(sign_in(
        &store,
        "a@b.com",
        "wrong",
        |_| async {
            Err(ApiError::Status { status: 400, message: "Email and password are required".to_owned() })
        },
        |to| panic!("unexpected navigation to {to}"),
    ));
    assert_eq!(result, Err("Email and password are required".to_owned()));
    assert_eq!(store.load(), Ok(None));
}

#[test]
fn sign_in_maps_401_to_credential_message_without_redirect() {
    let store = MemorySessionStore::default();
    let result = block_on(sign_in(
        &store,
        "a@b.com",
        "wrong",
        |_| async { Err(ApiError::Unauthorized) },
        |to| panic!("unexpected navigation to {to}"),
    ));
    assert_eq!(result, Err("Invalid email or password".to_owned()));
}

// =============================================================
// sign_out
// =============================================================

fn run_sign_out(remote: Result<(), ApiError>) -> (bool, AuthState, MemorySessionStore, Vec<String>) {
    let store = MemorySessionStore::default();
    store.save(&record()).unwrap();
    let mut state = AuthState { authenticated: true, admin: true, checking: false };
    let redirects = RefCell::new(Vec::<String>::new());

    let remote_ok = block_on(sign_out(&mut state, &store, move || async move { remote }, |to| {
        redirects.borrow_mut().push(to.to_owned());
    }));

    (remote_ok, state, store, redirects.into_inner())
}

#[test]
fn sign_out_end_state_ignores_remote_outcome() {
    let (ok_flag, ok_state, ok_store, ok_redirects) = run_sign_out(Ok(()));
    let (err_flag, err_state, err_store, err_redirects) = run_sign_out(Err(ApiError::Network("offline".to_owned())));

    assert!(ok_flag);
    assert!(!err_flag);
    assert_eq!(ok_state, AuthState::signed_out());
    assert_eq!(err_state, ok_state);
    assert_eq!(ok_store.load(), Ok(None));
    assert_eq!(err_store.load(), Ok(None));
    assert_eq!(ok_redirects, vec![LOGIN_ROUTE.to_owned()]);
    assert_eq!(err_redirects, ok_redirects);
}

#[test]
fn sign_out_is_idempotent() {
    let store = MemorySessionStore::default();
    let mut state = AuthState::signed_out();
    let redirects = RefCell::new(0);

    for _ in 0..3 {
        block_on(sign_out(&mut state, &store, || async { Err(ApiError::Unauthorized) }, |_| {
            *redirects.borrow_mut() += 1;
        }));
    }

    assert_eq!(*redirects.borrow(), 3);
    assert_eq!(state, AuthState::signed_out());
    assert_eq!(store.load(), Ok(None));
}

#[test]
fn sign_out_tolerates_corrupt_store() {
    let store = MemorySessionStore::seeded("garbage");
    let mut state = AuthState::default();
    block_on(sign_out(&mut state, &store, || async { Ok(()) }, |_| {}));
    assert_eq!(store.raw(), None);
    assert!(!matches!(store.load(), Err(SessionError::Corrupt(_))));
}

#[test]
fn go_to_is_noop_outside_browser() {
    go_to(LOGIN_ROUTE);
}
