//! Path-based authorization gate and the session cookie it inspects.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

/// Prefixes that require an authenticated session.
pub const PROTECTED_PREFIXES: &[&str] = &["/dashboard", "/customers", "/invoices"];

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Session cookie set on login. Presence is the only signal the gate reads;
/// token validation lives with the external auth collaborator.
pub const SESSION_COOKIE: &str = "acme_session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
}

/// Decide whether a request may proceed. Protected paths require a
/// session; authenticated users are bounced off public-only pages back
/// to the dashboard.
pub fn authorize(is_logged_in: bool, path: &str) -> AuthDecision {
    let protected = PROTECTED_PREFIXES.iter().any(|p| path.starts_with(p));
    if protected {
        if is_logged_in {
            AuthDecision::Allow
        } else {
            AuthDecision::RedirectToLogin
        }
    } else if is_logged_in {
        AuthDecision::RedirectToDashboard
    } else {
        AuthDecision::Allow
    }
}

/// True when the session cookie is present with a non-empty value.
pub fn has_session(req: &Request) -> bool {
    req.headers()
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .any(|(name, value)| name == SESSION_COOKIE && !value.is_empty())
}

/// Gate middleware for all page routes. Ops endpoints are mounted
/// outside it.
pub async fn gate(req: Request, next: Next) -> Response {
    match authorize(has_session(&req), req.uri().path()) {
        AuthDecision::Allow => next.run(req).await,
        AuthDecision::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
        AuthDecision::RedirectToDashboard => Redirect::to(DASHBOARD_PATH).into_response(),
    }
}
