//! Authenticated HTTP core. Every API call in the crate goes through
//! [`request_json`] / [`request_unit`], which attach the bearer credential
//! and recover once from an expired access token.
//!
//! ERROR HANDLING
//! ==============
//! Only HTTP 401 is intercepted. The first 401 on a request context triggers
//! a credential refresh and a single transparent retry; the refresh call
//! itself bypasses this module's recovery so it can never recurse. Every
//! other failure — including a 401 from the token-issuance endpoint and a
//! second 401 after a retry — is returned to the caller as an [`ApiError`].
//!
//! Client-side (hydrate): real HTTP via `gloo-net`. Other targets: stubs
//! returning an error, since the API only exists in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::types::{ErrorBody, RefreshedAccess};
#[cfg(feature = "hydrate")]
use crate::util::storage;

/// Fixed backend address; request paths are joined onto it.
pub const API_BASE: &str = "http://127.0.0.1:8000/api";

pub(crate) const STATUS_UNAUTHORIZED: u16 = 401;

/// HTTP methods the admin API is called with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Per-call request state.
///
/// The `retry_attempted` flag lives on the individual context, never in
/// shared state, so concurrent requests cannot contaminate each other's
/// refresh cycle. It permits at most one refresh-and-retry per original
/// request.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub retry_attempted: bool,
}

impl RequestContext {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
            retry_attempted: false,
        }
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
            retry_attempted: false,
        }
    }
}

pub(crate) fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

pub(crate) fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Token-issuance requests must see their own 401 ("invalid credentials"
/// feedback); the refresh sub-endpoint underneath it stays interceptable.
pub(crate) fn exempt_from_refresh(path: &str) -> bool {
    path.contains("/auth/token") && !path.contains("refresh")
}

/// Next step after a response, given the request's context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Recovery {
    /// Not an authorization failure; hand the response to the caller.
    PassThrough,
    /// Authorization failure the caller must see unmodified.
    Propagate,
    /// First 401 with a refresh credential on hand: refresh, then retry.
    Refresh,
    /// First 401 with no refresh credential: the session is unrecoverable.
    ForceLogin,
}

pub(crate) fn recovery_for(
    status: u16,
    path: &str,
    retry_attempted: bool,
    has_refresh_token: bool,
) -> Recovery {
    if status != STATUS_UNAUTHORIZED {
        return Recovery::PassThrough;
    }
    if exempt_from_refresh(path) || retry_attempted {
        return Recovery::Propagate;
    }
    if has_refresh_token {
        Recovery::Refresh
    } else {
        Recovery::ForceLogin
    }
}

/// The login page itself must never bounce back onto `/login`.
pub(crate) fn should_redirect_to_login(current_path: &str) -> bool {
    current_path != crate::routes::LOGIN_PATH
}

pub(crate) fn status_message(status: u16, detail: Option<String>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => detail,
        _ => format!("request failed: {status}"),
    }
}

/// Issue `ctx` and decode the JSON body of a successful response.
pub(crate) async fn request_json<T: DeserializeOwned>(ctx: RequestContext) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(ctx).await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ctx;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Issue `ctx` and discard the body of a successful response.
pub(crate) async fn request_unit(ctx: RequestContext) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(ctx).await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ctx;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Issue the request, recovering once from an expired access token.
///
/// The returned response may still carry a non-success status (anything the
/// recovery table passes through); body handling belongs to the callers
/// above.
#[cfg(feature = "hydrate")]
async fn send(mut ctx: RequestContext) -> Result<gloo_net::http::Response, ApiError> {
    loop {
        let resp = dispatch(&ctx).await?;
        let has_refresh = storage::read(storage::REFRESH_TOKEN_KEY).is_some();
        match recovery_for(resp.status(), &ctx.path, ctx.retry_attempted, has_refresh) {
            Recovery::PassThrough => return Ok(resp),
            Recovery::Propagate => return Err(error_from_response(resp).await),
            Recovery::ForceLogin => {
                storage::clear_session();
                redirect_to_login();
                return Err(error_from_response(resp).await);
            }
            Recovery::Refresh => {
                ctx.retry_attempted = true;
                match refresh_access_token().await {
                    Ok(access) => {
                        storage::write(storage::ACCESS_TOKEN_KEY, &access);
                        crate::state::session::apply_refreshed_access(&access);
                    }
                    Err(err) => {
                        storage::clear_session();
                        redirect_to_login();
                        return Err(err);
                    }
                }
            }
        }
    }
}

/// One wire round-trip: base URL + JSON content type + bearer credential
/// when the mirror holds one.
#[cfg(feature = "hydrate")]
async fn dispatch(ctx: &RequestContext) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let url = api_url(&ctx.path);
    let builder = match ctx.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
    };
    let mut builder = builder.header("Content-Type", "application/json");
    if let Some(token) = storage::read(storage::ACCESS_TOKEN_KEY) {
        builder = builder.header("Authorization", &bearer_value(&token));
    }
    let request = match &ctx.body {
        Some(body) => builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
    };
    request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Exchange the persisted refresh credential for a new access token.
///
/// Plain `gloo-net` on purpose: going through [`send`] would let a rejected
/// refresh re-enter the recovery table.
#[cfg(feature = "hydrate")]
async fn refresh_access_token() -> Result<String, ApiError> {
    use gloo_net::http::Request;

    let Some(refresh) = storage::read(storage::REFRESH_TOKEN_KEY) else {
        return Err(ApiError::Network("refresh token missing".to_owned()));
    };
    let payload = serde_json::json!({ "refresh": refresh });
    let resp = Request::post(&api_url(super::api::TOKEN_REFRESH_ENDPOINT))
        .header("Content-Type", "application/json")
        .json(&payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    let body: RefreshedAccess = resp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(body.access)
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let detail = resp.json::<ErrorBody>().await.ok().and_then(|b| b.detail);
    ApiError::Status {
        status,
        message: status_message(status, detail),
    }
}

/// Leave the app for the login entry point, unless already there. A full
/// location change, not router navigation: the next boot re-reads the
/// cleared mirror, so memory and storage cannot disagree.
#[cfg(feature = "hydrate")]
fn redirect_to_login() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let current = window.location().pathname().unwrap_or_default();
    if should_redirect_to_login(&current) {
        let _ = window.location().set_href(crate::routes::LOGIN_PATH);
    }
}
