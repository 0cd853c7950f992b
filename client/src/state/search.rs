//! Header search box state.
//!
//! Each keystroke bumps `seq`. The debounced request fires only if no newer
//! keystroke arrived, and its response is applied only if it still belongs to
//! the latest keystroke.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::config::SEARCH_SUGGESTION_LIMIT;
use crate::net::types::SearchUser;

#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub query: String,
    pub suggestions: Vec<SearchUser>,
    pub open: bool,
    pub loading: bool,
    seq: u64,
}

impl SearchState {
    /// Record new input and return its sequence number.
    pub fn keystroke(&mut self, query: String) -> u64 {
        self.seq += 1;
        self.query = query;
        self.seq
    }

    /// Whether the debounce for `seq` should still fire.
    pub fn is_current(&self, seq: u64) -> bool {
        self.seq == seq
    }

    /// Query to send for `seq`, or `None` when blank (which also closes the
    /// suggestion list) or superseded.
    pub fn begin(&mut self, seq: u64) -> Option<String> {
        if !self.is_current(seq) {
            return None;
        }
        let query = self.query.trim().to_owned();
        if query.is_empty() {
            self.suggestions.clear();
            self.open = false;
            self.loading = false;
            return None;
        }
        self.loading = true;
        Some(query)
    }

    /// Apply a search response. Failures clear the list silently.
    pub fn resolve(&mut self, seq: u64, users: Option<Vec<SearchUser>>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.loading = false;
        let mut users = users.unwrap_or_default();
        users.truncate(SEARCH_SUGGESTION_LIMIT);
        self.open = !users.is_empty();
        self.suggestions = users;
        true
    }

    /// Reset after a suggestion is picked. In-flight responses become stale.
    pub fn clear(&mut self) {
        self.seq += 1;
        self.query.clear();
        self.suggestions.clear();
        self.open = false;
        self.loading = false;
    }
}
