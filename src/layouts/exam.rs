//! Slim shell for exam-scoped admin accounts: just a header bar with the
//! exam code and a sign-out control.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::LogoutButton;
use crate::state::session::Session;
use crate::util::{guard, title};

#[component]
pub fn ExamLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    guard::install_route_guard(session, use_navigate());
    title::install_title_sync();

    let params = use_params_map();
    let code = Memo::new(move |_| params.read().get("code").unwrap_or_default());

    view! {
        <div class="exam-layout">
            <header class="exam-layout__header">
                <span class="exam-layout__brand">"Seqrview"</span>
                <span class="exam-layout__code">{move || code.get()}</span>
                <LogoutButton/>
            </header>
            <main class="exam-layout__content">
                <Outlet/>
            </main>
        </div>
    }
}
