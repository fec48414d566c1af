//! Auth-session store for the signed-in console user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "is a user logged in, and as whom". `App`
//! constructs one `Session` from the storage mirror and provides it as
//! `RwSignal<Session>` context; route guards and layouts read it, the
//! operations below are the only writers. The refresh token is persisted
//! only — it never lives in memory state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::Cell;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::UserProfile;
use crate::routes;
use crate::util::storage;

/// In-memory login state. Invariant: authenticated ⇔ access token present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub access_token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    /// Rebuild in-memory state from the storage mirror. Called once at
    /// startup; afterwards the mirror only follows this store.
    pub fn restore() -> Self {
        Self {
            access_token: storage::read(storage::ACCESS_TOKEN_KEY),
            user: storage::load_json(storage::USER_KEY),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

thread_local! {
    /// Live session the HTTP layer pushes silently refreshed credentials
    /// into. The HTTP core runs outside the component tree and cannot reach
    /// the context, so `App` hands it the signal here.
    static ACTIVE: Cell<Option<RwSignal<Session>>> = const { Cell::new(None) };
}

/// Bind the session signal the HTTP layer reports refreshed credentials to.
/// Called once by `App`, right after `Session::restore`.
pub fn register(session: RwSignal<Session>) {
    ACTIVE.set(Some(session));
}

/// Replace the in-memory access token after a successful silent refresh, so
/// the store never trails its mirror.
pub fn apply_refreshed_access(access: &str) {
    if let Some(session) = ACTIVE.get() {
        session.update(|s| s.access_token = Some(access.to_owned()));
    }
}

/// Where an account lands right after signing in. Exam-scoped admins go to
/// their exam's dashboard (or the generic one when no exam is assigned yet);
/// everyone else gets the console dashboard.
pub fn post_login_destination(user: &UserProfile) -> String {
    if user.is_exam_admin() {
        match user.exam.as_deref() {
            Some(code) if !code.is_empty() => format!("/exam/{code}"),
            _ => "/exam/dashboard".to_owned(),
        }
    } else {
        "/".to_owned()
    }
}

/// Sign in: trade credentials for tokens, persist them, fetch the profile,
/// then navigate by role.
///
/// Atomic from the caller's point of view: if the profile fetch fails, the
/// freshly persisted credentials are rolled back and the error is returned —
/// no half-established session survives this function.
///
/// # Errors
///
/// Propagates the issuance failure (typically `401` with the backend's
/// "invalid credentials" detail) or the profile-fetch failure, for the login
/// page to display.
pub async fn login<F>(
    session: RwSignal<Session>,
    username: &str,
    password: &str,
    navigate: F,
) -> Result<(), ApiError>
where
    F: Fn(&str, NavigateOptions),
{
    let pair = api::obtain_tokens(username, password).await?;
    storage::write(storage::ACCESS_TOKEN_KEY, &pair.access);
    storage::write(storage::REFRESH_TOKEN_KEY, &pair.refresh);
    session.update(|s| s.access_token = Some(pair.access.clone()));

    let profile = match api::fetch_profile().await {
        Ok(profile) => profile,
        Err(err) => {
            storage::clear_session();
            session.set(Session::default());
            return Err(err);
        }
    };
    storage::save_json(storage::USER_KEY, &profile);
    let destination = post_login_destination(&profile);
    session.update(|s| s.user = Some(profile));

    navigate(&destination, NavigateOptions::default());
    Ok(())
}

/// Sign out: best-effort server-side invalidation of the refresh token,
/// then unconditional local teardown and navigation to the login page.
/// The server call failing is logged, never surfaced — logout always
/// succeeds locally.
pub async fn logout<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    if let Some(refresh) = storage::read(storage::REFRESH_TOKEN_KEY) {
        notify_server(&refresh).await;
    }
    storage::clear_session();
    session.set(Session::default());
    navigate(routes::LOGIN_PATH, NavigateOptions::default());
}

/// Best-effort server-side invalidation of `refresh`. A failure is logged
/// and never returned, so the local teardown in [`logout`] cannot be
/// blocked by it.
async fn notify_server(refresh: &str) {
    if let Err(err) = api::notify_logout(refresh).await {
        leptos::logging::warn!("logout request failed: {err}");
    }
}
