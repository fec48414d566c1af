//! Typed calls to the auth endpoints, built on [`super::http`].

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::{self, RequestContext};
use super::types::{TokenPair, UserProfile};

/// Issues an access+refresh pair for a username/password.
pub(crate) const TOKEN_ENDPOINT: &str = "/auth/token/";
/// Exchanges a refresh token for a fresh access token.
pub(crate) const TOKEN_REFRESH_ENDPOINT: &str = "/auth/token/refresh/";
/// Profile of the authenticated account.
pub(crate) const ME_ENDPOINT: &str = "/auth/me/";
/// Server-side invalidation of a refresh token.
pub(crate) const LOGOUT_ENDPOINT: &str = "/auth/logout/";

/// Trade credentials for a token pair. A 401 here means bad username or
/// password and reaches the caller directly.
pub async fn obtain_tokens(username: &str, password: &str) -> Result<TokenPair, ApiError> {
    let body = serde_json::json!({ "username": username, "password": password });
    http::request_json(RequestContext::post(TOKEN_ENDPOINT, body)).await
}

/// Fetch the signed-in account's profile.
pub async fn fetch_profile() -> Result<UserProfile, ApiError> {
    http::request_json(RequestContext::get(ME_ENDPOINT)).await
}

/// Ask the server to invalidate `refresh_token`. Best-effort; local logout
/// does not depend on the outcome.
pub async fn notify_logout(refresh_token: &str) -> Result<(), ApiError> {
    let body = serde_json::json!({ "refresh": refresh_token });
    http::request_unit(RequestContext::post(LOGOUT_ENDPOINT, body)).await
}
