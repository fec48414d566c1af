//! Authenticated shells the routed pages render inside.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both layouts install the route guard and the document-title sync, so any
//! page nested under them is auth-gated without carrying that logic itself.

pub mod admin;
pub mod exam;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;

/// Sign-out control shared by the shells. Fires the best-effort server
/// notification and tears the session down locally whatever the outcome.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_click = move |_| {
        let _ = session;
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::state::session::logout(session, navigate).await;
            });
        }
    };

    view! {
        <button class="logout-button" on:click=on_click>
            "Sign Out"
        </button>
    }
}
