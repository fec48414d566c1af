//! Shared navigation-guard helper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated layout must apply identical deny behavior, so the
//! effect lives here rather than in each shell.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::routes::{self, GuardDecision};
use crate::state::session::Session;

/// Navigation options for a denied location: replace the history entry so
/// the Back button cannot return to a URL the guard just bounced off.
fn deny_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Redirect to `/login` whenever the current location requires auth and the
/// session has none. Re-runs on every navigation and session change.
pub fn install_route_guard<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    let navigate = navigate.clone();
    Effect::new(move || {
        let path = location.pathname.get();
        let authenticated = session.get().is_authenticated();
        if routes::guard(&path, authenticated) == GuardDecision::RedirectToLogin {
            navigate(routes::LOGIN_PATH, deny_options());
        }
    });
}
