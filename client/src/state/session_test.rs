use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn record() -> SessionRecord {
    SessionRecord {
        id: "1".to_owned(),
        name: "A".to_owned(),
        email: "a@b.com".to_owned(),
        admin: true,
    }
}

#[test]
fn save_then_load_round_trips_identity() {
    let store = MemorySessionStore::default();
    store.save(&record()).unwrap();
    let loaded = store.load().unwrap().unwrap();
    assert_eq!(
        (loaded.id.as_str(), loaded.name.as_str(), loaded.email.as_str()),
        ("1", "A", "a@b.com")
    );
    assert_eq!(loaded, record());
}

#[test]
fn save_writes_single_json_blob() {
    let store = MemorySessionStore::default();
    store.save(&record()).unwrap();
    let raw = store.raw().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["id"], "1");
    assert_eq!(value["email"], "a@b.com");
    assert_eq!(value["admin"], true);
}

#[test]
fn load_on_empty_store_is_none() {
    let store = MemorySessionStore::default();
    assert_eq!(store.load(), Ok(None));
}

#[test]
fn load_rejects_corrupt_blob() {
    let store = MemorySessionStore::seeded("{not json");
    assert!(matches!(store.load(), Err(SessionError::Corrupt(_))));
}

#[test]
fn load_rejects_legacy_boolean_marker() {
    let store = MemorySessionStore::seeded("true");
    assert!(matches!(store.load(), Err(SessionError::Corrupt(_))));
}

#[test]
fn load_rejects_blank_id() {
    let store = MemorySessionStore::seeded(r#"{"id":"  ","name":"A","email":"a@b.com"}"#);
    assert_eq!(store.load(), Err(SessionError::Incomplete));
}

#[test]
fn missing_admin_field_defaults_to_true() {
    let parsed = SessionRecord::parse(r#"{"id":"7","name":"B","email":"b@c.com"}"#).unwrap();
    assert!(parsed.admin);
}

#[test]
fn from_login_copies_identity() {
    let response = LoginResponse {
        message: Some("Login successful".to_owned()),
        admin_id: "1".to_owned(),
        name: "A".to_owned(),
        email: "a@b.com".to_owned(),
    };
    assert_eq!(SessionRecord::from_login(&response), record());
}

#[test]
fn clear_is_idempotent() {
    let store = MemorySessionStore::default();
    store.save(&record()).unwrap();
    store.clear();
    store.clear();
    assert_eq!(store.load(), Ok(None));
    assert_eq!(store.raw(), None);
}

#[test]
fn subscribers_see_saves_and_clears() {
    let store = MemorySessionStore::default();
    let seen = Arc::new(Mutex::new(Vec::<Option<String>>::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(Box::new(move |record: Option<&SessionRecord>| {
        sink.lock().unwrap().push(record.map(|r| r.name.clone()));
    }));

    store.save(&record()).unwrap();
    store.clear();

    assert_eq!(*seen.lock().unwrap(), vec![Some("A".to_owned()), None]);
}

#[test]
fn unsubscribe_stops_notifications() {
    let store = MemorySessionStore::default();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let id = store.subscribe(Box::new(move |_: Option<&SessionRecord>| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    store.clear();
    store.unsubscribe(id);
    store.clear();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn listener_may_reenter_store() {
    let store = Arc::new(MemorySessionStore::default());
    let inner = Arc::clone(&store);
    let observed = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&observed);
    store.subscribe(Box::new(move |_: Option<&SessionRecord>| {
        *sink.lock().unwrap() = Some(inner.load().ok().flatten());
    }));

    store.save(&record()).unwrap();

    assert_eq!(*observed.lock().unwrap(), Some(Some(record())));
}

#[test]
fn default_store_starts_empty_outside_browser() {
    let store = default_store();
    assert_eq!(store.load(), Ok(None));
}
