use super::*;

#[test]
fn endpoint_url_joins_base_and_path() {
    assert_eq!(endpoint_url("http://localhost:8000", OVERVIEW_PATH), "http://localhost:8000/api/overview/");
}

#[test]
fn item_paths_keep_trailing_slash() {
    assert_eq!(device_path("d1"), "/api/devices/d1/");
    assert_eq!(user_path("u1"), "/api/users/u1/");
    assert_eq!(search_detail_path("u1"), "/api/search/u1/");
    assert_eq!(summary_path("u1"), "/api/summarize/u1/");
}

#[test]
fn decode_body_parses_json() {
    let overview: Overview = decode_body(r#"{"total_devices": 3}"#).unwrap();
    assert_eq!(overview.total_devices, 3);
}

#[test]
fn decode_body_treats_empty_as_unit() {
    assert!(decode_body::<()>("  ").is_ok());
}

#[test]
fn decode_body_reports_bad_json() {
    let result: Result<Overview, ApiError> = decode_body("<html>");
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn new_device_body_starts_with_zero_scans() {
    let draft = DeviceDraft { name: "Lobby".to_owned(), ..DeviceDraft::default() };
    let json = encode_body(&NewDevice { draft: &draft, total_scans: 0 }).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["total_scans"], 0);
    assert_eq!(value["name"], "Lobby");
}

#[test]
fn calls_are_unavailable_outside_browser() {
    let result = futures::executor::block_on(fetch_overview());
    assert_eq!(result, Err(ApiError::Unavailable));
    let login = futures::executor::block_on(login(LoginRequest {
        email: "a@b.com".to_owned(),
        password: "x".to_owned(),
    }));
    assert_eq!(login, Err(ApiError::Unavailable));
}

// =============================================================
// 401 policy shared by every protected call
// =============================================================

fn signed_in_store() -> crate::state::session::MemorySessionStore {
    let store = crate::state::session::MemorySessionStore::default();
    store
        .save(&crate::state::session::SessionRecord {
            id: "a1".to_owned(),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            admin: true,
        })
        .unwrap();
    store
}

#[test]
fn json_and_unit_calls_both_clear_session_on_401() {
    let redirects = std::cell::RefCell::new(Vec::<String>::new());

    let store = signed_in_store();
    let json: Result<Overview, ApiError> =
        finish_json(Err(ApiError::Unauthorized), &store, |to| redirects.borrow_mut().push(to.to_owned()));
    assert_eq!(json, Err(ApiError::Unauthorized));
    assert_eq!(store.load(), Ok(None));

    let store = signed_in_store();
    let unit = finish_unit(Err(ApiError::Unauthorized), &store, |to| redirects.borrow_mut().push(to.to_owned()));
    assert_eq!(unit, Err(ApiError::Unauthorized));
    assert_eq!(store.load(), Ok(None));

    assert_eq!(*redirects.borrow(), vec![crate::state::auth::LOGIN_ROUTE.to_owned(); 2]);
}

#[test]
fn successful_and_non_401_outcomes_keep_session() {
    let store = signed_in_store();
    let redirected = std::cell::Cell::new(false);

    let ok: Result<Overview, ApiError> = finish_json(Ok(r#"{"total_devices": 2}"#.to_owned()), &store, |_| redirected.set(true));
    assert_eq!(ok.unwrap().total_devices, 2);

    let failed = finish_unit(
        Err(ApiError::Status { status: 500, message: "boom".to_owned() }),
        &store,
        |_| redirected.set(true),
    );
    assert!(matches!(failed, Err(ApiError::Status { status: 500, .. })));

    let bad_body: Result<Overview, ApiError> = finish_json(Ok("<html>".to_owned()), &store, |_| redirected.set(true));
    assert!(matches!(bad_body, Err(ApiError::Decode(_))));

    assert!(!redirected.get());
    assert!(store.load().unwrap().is_some());
}
