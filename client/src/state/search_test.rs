use super::*;

fn user(id: &str) -> SearchUser {
    SearchUser { id: id.to_owned(), name: format!("User {id}"), ..SearchUser::default() }
}

#[test]
fn only_latest_keystroke_fires() {
    let mut state = SearchState::default();
    let first = state.keystroke("a".to_owned());
    let second = state.keystroke("ad".to_owned());
    assert_eq!(state.begin(first), None);
    assert_eq!(state.begin(second), Some("ad".to_owned()));
    assert!(state.loading);
}

#[test]
fn blank_query_closes_suggestions_without_request() {
    let mut state = SearchState::default();
    let seq = state.keystroke("ada".to_owned());
    state.begin(seq);
    state.resolve(seq, Some(vec![user("1")]));
    assert!(state.open);

    let seq = state.keystroke("  ".to_owned());
    assert_eq!(state.begin(seq), None);
    assert!(!state.open);
    assert!(state.suggestions.is_empty());
}

#[test]
fn results_are_capped_at_four() {
    let mut state = SearchState::default();
    let seq = state.keystroke("a".to_owned());
    state.begin(seq);
    let users = (0..6).map(|i| user(&i.to_string())).collect();
    assert!(state.resolve(seq, Some(users)));
    assert_eq!(state.suggestions.len(), 4);
}

#[test]
fn stale_response_is_ignored() {
    let mut state = SearchState::default();
    let old = state.keystroke("a".to_owned());
    state.begin(old);
    let new = state.keystroke("ab".to_owned());
    assert!(!state.resolve(old, Some(vec![user("1")])));
    assert!(state.suggestions.is_empty());
    state.begin(new);
    assert!(state.resolve(new, Some(vec![user("2")])));
    assert_eq!(state.suggestions[0].id, "2");
}

#[test]
fn failure_or_empty_result_closes_list() {
    let mut state = SearchState::default();
    let seq = state.keystroke("zz".to_owned());
    state.begin(seq);
    state.resolve(seq, None);
    assert!(!state.open);
    assert!(!state.loading);
}

#[test]
fn clear_invalidates_in_flight_search() {
    let mut state = SearchState::default();
    let seq = state.keystroke("ada".to_owned());
    state.begin(seq);
    state.clear();
    assert!(!state.resolve(seq, Some(vec![user("1")])));
    assert!(state.query.is_empty());
}
