//! Build-time client configuration.
//!
//! The API base URL is baked into the WASM bundle from `CHAINGATE_API_URL`
//! at compile time; there is no runtime configuration surface in the browser.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Base URL used when `CHAINGATE_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Refresh period for polling screens (overview, blockchain transactions).
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Delay between the last keystroke and the search request.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// How long a toast stays visible before dismissing itself.
pub const TOAST_TTL: Duration = Duration::from_secs(5);

/// Maximum number of search suggestions shown under the search box.
pub const SEARCH_SUGGESTION_LIMIT: usize = 4;

/// Rows per page for client-side paginated tables.
pub const PAGE_SIZE: usize = 10;

/// API base URL without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("CHAINGATE_API_URL"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_URL);
    value.trim_end_matches('/').to_owned()
}
