//! REST client for the access-control API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sent with
//! browser credentials so the server's session cookie travels along.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`]; data is
//! only fetched after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every call except the credential exchange passes through
//! `util::auth::enforce_session`, so a `401` from any endpoint clears the
//! session record and redirects to the login route. Other failures are
//! returned to the calling screen.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::state::session::{SessionStore, default_store};
use crate::util::auth::{enforce_session, go_to};
use super::types::{
    AccessLevelsResponse, ChainInfo, Device, DeviceDraft, DeviceListResponse, LoginRequest, LoginResponse, LogsResponse,
    NewDevice, Overview, PortalUser, SearchRequest, SearchResponse, Settings, SummarizeResponse, SummaryChatRequest,
    TransactionsResponse, UserDetailsResponse, UserDraft, UserListResponse,
};

// =============================================================================
// PATHS
// =============================================================================

const LOGIN_PATH: &str = "/api/supervisor/access/";
const LOGOUT_PATH: &str = "/api/supervisor/logout/";
const OVERVIEW_PATH: &str = "/api/overview/";
const DEVICES_PATH: &str = "/api/devices/";
const USERS_PATH: &str = "/api/users/";
const ACCESS_LEVELS_PATH: &str = "/api/access-levels/";
const LOGS_PATH: &str = "/api/logs/";
const SETTINGS_PATH: &str = "/api/settings/";
const CHAIN_INFO_PATH: &str = "/api/blockchain/chain-info/";
const TRANSACTIONS_PATH: &str = "/api/blockchain/transactions/";
const SEARCH_PATH: &str = "/api/search/";
const SUMMARIZE_PATH: &str = "/api/summarize/";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint_url(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

fn device_path(id: &str) -> String {
    format!("{DEVICES_PATH}{id}/")
}

fn user_path(id: &str) -> String {
    format!("{USERS_PATH}{id}/")
}

fn search_detail_path(id: &str) -> String {
    format!("{SEARCH_PATH}{id}/")
}

fn summary_path(id: &str) -> String {
    format!("{SUMMARIZE_PATH}{id}/")
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Decode a 2xx body. An empty body decodes as JSON `null`, which suits
/// unit-like responses.
fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send one request and return the raw 2xx body.
async fn send(method: Method, path: &str, body: Option<String>) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        use leptos::logging::warn;

        let url = endpoint_url(&crate::config::api_base_url(), path);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .credentials(web_sys::RequestCredentials::Include);
        let request = match body {
            Some(json) => builder.header("Content-Type", "application/json").body(json),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request.send().await.map_err(|e| {
            warn!("{method:?} {path} failed: {e}");
            ApiError::Network(e.to_string())
        })?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        if resp.ok() {
            Ok(text)
        } else {
            warn!("{method:?} {path} returned {status}");
            Err(super::error::error_for_status(status, &text))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Unavailable)
    }
}

/// Decode a protected call's raw outcome and apply the `401` policy.
fn finish_json<T, R>(raw: Result<String, ApiError>, store: &dyn SessionStore, redirect: R) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    R: FnOnce(&str),
{
    enforce_session(raw.and_then(|text| decode_body(&text)), store, redirect)
}

/// [`finish_json`] for calls whose response body is ignored.
fn finish_unit<R>(raw: Result<String, ApiError>, store: &dyn SessionStore, redirect: R) -> Result<(), ApiError>
where
    R: FnOnce(&str),
{
    enforce_session(raw.map(|_| ()), store, redirect)
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let raw = send(Method::Get, path, None).await;
    finish_json(raw, default_store().as_ref(), go_to)
}

async fn with_body<B: Serialize, T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let json = encode_body(body)?;
    let raw = send(method, path, Some(json)).await;
    finish_json(raw, default_store().as_ref(), go_to)
}

async fn without_result(method: Method, path: &str, body: Option<String>) -> Result<(), ApiError> {
    let raw = send(method, path, body).await;
    finish_unit(raw, default_store().as_ref(), go_to)
}

// =============================================================================
// AUTH
// =============================================================================

/// Exchange credentials via `POST /api/supervisor/access/`.
///
/// Public call: a `401` here means bad credentials, not an expired session,
/// so it is returned to the login form instead of redirecting.
///
/// # Errors
///
/// Returns the classified failure.
pub async fn login(request: LoginRequest) -> Result<LoginResponse, ApiError> {
    let json = encode_body(&request)?;
    let text = send(Method::Post, LOGIN_PATH, Some(json)).await?;
    decode_body(&text)
}

/// Invalidate the server session via `POST /api/supervisor/logout/`.
///
/// # Errors
///
/// Returns the classified failure; callers treat any failure as best-effort.
pub async fn logout() -> Result<(), ApiError> {
    send(Method::Post, LOGOUT_PATH, Some("{}".to_owned())).await.map(|_| ())
}

// =============================================================================
// OVERVIEW
// =============================================================================

/// # Errors
///
/// Returns the classified failure.
pub async fn fetch_overview() -> Result<Overview, ApiError> {
    get(OVERVIEW_PATH).await
}

// =============================================================================
// DEVICES
// =============================================================================

/// # Errors
///
/// Returns the classified failure.
pub async fn fetch_devices() -> Result<DeviceListResponse, ApiError> {
    get(DEVICES_PATH).await
}

/// Create a device. New devices start with zero scans.
///
/// # Errors
///
/// Returns the classified failure.
pub async fn create_device(draft: &DeviceDraft) -> Result<Device, ApiError> {
    with_body(Method::Post, DEVICES_PATH, &NewDevice { draft, total_scans: 0 }).await
}

/// # Errors
///
/// Returns the classified failure.
pub async fn update_device(id: &str, draft: &DeviceDraft) -> Result<(), ApiError> {
    without_result(Method::Put, &device_path(id), Some(encode_body(draft)?)).await
}

/// # Errors
///
/// Returns the classified failure.
pub async fn delete_device(id: &str) -> Result<(), ApiError> {
    without_result(Method::Delete, &device_path(id), None).await
}

/// # Errors
///
/// Returns the classified failure.
pub async fn fetch_access_levels() -> Result<AccessLevelsResponse, ApiError> {
    get(ACCESS_LEVELS_PATH).await
}

// =============================================================================
// USERS
// =============================================================================

/// # Errors
///
/// Returns the classified failure.
pub async fn fetch_users() -> Result<UserListResponse, ApiError> {
    get(USERS_PATH).await
}

/// # Errors
///
/// Returns the classified failure.
pub async fn create_user(draft: &UserDraft) -> Result<PortalUser, ApiError> {
    with_body(Method::Post, USERS_PATH, draft).await
}

/// # Errors
///
/// Returns the classified failure.
pub async fn update_user(id: &str, draft: &UserDraft) -> Result<(), ApiError> {
    without_result(Method::Put, &user_path(id), Some(encode_body(draft)?)).await
}

/// # Errors
///
/// Returns the classified failure.
pub async fn delete_user(id: &str) -> Result<(), ApiError> {
    without_result(Method::Delete, &user_path(id), None).await
}

// =============================================================================
// LOGS, SETTINGS, BLOCKCHAIN
// =============================================================================

/// # Errors
///
/// Returns the classified failure.
pub async fn fetch_logs() -> Result<LogsResponse, ApiError> {
    get(LOGS_PATH).await
}

/// # Errors
///
/// Returns the classified failure.
pub async fn fetch_settings() -> Result<Settings, ApiError> {
    get(SETTINGS_PATH).await
}

/// # Errors
///
/// Returns the classified failure.
pub async fn save_settings(settings: &Settings) -> Result<(), ApiError> {
    without_result(Method::Put, SETTINGS_PATH, Some(encode_body(settings)?)).await
}

/// # Errors
///
/// Returns the classified failure.
pub async fn fetch_chain_info() -> Result<ChainInfo, ApiError> {
    get(CHAIN_INFO_PATH).await
}

/// # Errors
///
/// Returns the classified failure.
pub async fn fetch_transactions() -> Result<TransactionsResponse, ApiError> {
    get(TRANSACTIONS_PATH).await
}

// =============================================================================
// SEARCH + SUMMARY
// =============================================================================

/// # Errors
///
/// Returns the classified failure.
pub async fn search_users(query: &str) -> Result<SearchResponse, ApiError> {
    with_body(Method::Post, SEARCH_PATH, &SearchRequest { query: query.to_owned() }).await
}

/// # Errors
///
/// Returns the classified failure.
pub async fn fetch_user_details(id: &str) -> Result<UserDetailsResponse, ApiError> {
    get(&search_detail_path(id)).await
}

/// # Errors
///
/// Returns the classified failure.
pub async fn fetch_summary(id: &str) -> Result<SummarizeResponse, ApiError> {
    get(&summary_path(id)).await
}

/// Ask a follow-up question about a badge holder.
///
/// # Errors
///
/// Returns the classified failure.
pub async fn send_summary_chat(request: &SummaryChatRequest) -> Result<SummarizeResponse, ApiError> {
    with_body(Method::Post, SUMMARIZE_PATH, request).await
}
