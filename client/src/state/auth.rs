//! Auth-gate state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the `AuthProvider` route wrapper and `ProtectedRoute` guards to
//! decide, on every render, whether protected content may be shown. The
//! transitions themselves live in `util::auth`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::SessionRecord;

/// Public route that never requires a session.
pub const LOGIN_ROUTE: &str = "/login";

/// Landing route after a successful login.
pub const DASHBOARD_ROUTE: &str = "/";

/// Authentication flags for the current tab.
///
/// `checking` starts `true` and flips to `false` once the first route check
/// has completed, so nothing protected can paint before a decision exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub admin: bool,
    pub checking: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { authenticated: false, admin: false, checking: true }
    }
}

impl AuthState {
    /// Settled, unauthenticated state.
    pub fn signed_out() -> Self {
        Self { authenticated: false, admin: false, checking: false }
    }

    /// Settled state for a valid session record.
    pub fn signed_in(record: &SessionRecord) -> Self {
        Self { authenticated: true, admin: record.admin, checking: false }
    }
}

/// Result of one route check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// Public route; no session was read.
    Public,
    /// A valid session record was found.
    Authenticated,
    /// No usable record; the viewer was sent to the login route.
    Redirected,
}

/// What a guarded subtree should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// Route check still pending.
    Loading,
    /// Admin-only subtree viewed without the admin flag.
    Denied,
    /// Not authenticated; render nothing while the redirect happens.
    Hidden,
    /// Render the protected subtree.
    Content,
}

impl GuardView {
    /// Decide how a subtree guarded with `require_admin` renders.
    pub fn resolve(state: &AuthState, require_admin: bool) -> Self {
        if state.checking {
            Self::Loading
        } else if require_admin && !state.admin {
            Self::Denied
        } else if !state.authenticated {
            Self::Hidden
        } else {
            Self::Content
        }
    }
}

/// Whether `route` is the public login route (trailing slash tolerated).
pub fn is_login_route(route: &str) -> bool {
    let trimmed = route.trim_end_matches('/');
    trimmed == LOGIN_ROUTE
}
