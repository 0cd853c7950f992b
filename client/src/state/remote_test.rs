use super::*;

#[test]
fn latest_response_is_applied() {
    let mut remote = RemoteData::<u32>::default();
    let token = remote.begin();
    assert!(remote.is_initial_load());
    assert!(remote.resolve(token, Ok(7)));
    assert_eq!(remote.data, Some(7));
    assert!(!remote.loading);
}

#[test]
fn stale_response_is_discarded() {
    let mut remote = RemoteData::<&str>::default();
    let poll = remote.begin();
    let refresh = remote.begin();

    assert!(remote.resolve(refresh, Ok("after mutation")));
    assert!(!remote.resolve(poll, Ok("before mutation")));
    assert_eq!(remote.data, Some("after mutation"));
}

#[test]
fn stale_response_does_not_clear_loading() {
    let mut remote = RemoteData::<u32>::default();
    let old = remote.begin();
    let _new = remote.begin();
    remote.resolve(old, Ok(1));
    assert!(remote.loading);
    assert_eq!(remote.data, None);
}

#[test]
fn error_keeps_previous_data() {
    let mut remote = RemoteData::<u32>::default();
    let t = remote.begin();
    remote.resolve(t, Ok(1));
    let t = remote.begin();
    remote.resolve(t, Err(ApiError::Network("offline".to_owned())));
    assert_eq!(remote.data, Some(1));
    assert!(remote.error.is_some());
    assert_eq!(remote.failed_empty(), None);
}

#[test]
fn error_without_data_requests_retry_panel() {
    let mut remote = RemoteData::<u32>::default();
    let t = remote.begin();
    remote.resolve(t, Err(ApiError::Status { status: 500, message: "boom".to_owned() }));
    assert_eq!(remote.failed_empty(), Some("boom"));
    assert!(!remote.is_initial_load());
}
