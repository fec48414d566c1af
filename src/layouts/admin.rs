//! Console shell for internal admin accounts: sidebar navigation around an
//! `Outlet` for the routed page.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;

use super::LogoutButton;
use crate::state::session::Session;
use crate::util::{guard, title};

#[component]
pub fn AdminLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    guard::install_route_guard(session, use_navigate());
    title::install_title_sync();

    let user_line = move || {
        session
            .get()
            .user
            .map(|user| user.display_name().to_owned())
            .unwrap_or_default()
    };

    view! {
        <div class="admin-layout">
            <aside class="admin-layout__sidebar">
                <div class="admin-layout__brand">"Seqrview"</div>
                <nav class="admin-layout__nav">
                    <A href="/">"Dashboard"</A>
                    <span class="admin-layout__nav-group">"Masters"</span>
                    <A href="/masters/clients">"Clients"</A>
                    <A href="/masters/centers">"Centers"</A>
                    <A href="/masters/users">"Users"</A>
                    <A href="/masters/operators">"Operators"</A>
                    <A href="/masters/roles">"Roles"</A>
                    <A href="/masters/task-library">"Task Library"</A>
                    <span class="admin-layout__nav-group">"Operations"</span>
                    <A href="/operations/exams">"Exams"</A>
                </nav>
                <div class="admin-layout__footer">
                    <span class="admin-layout__user">{user_line}</span>
                    <LogoutButton/>
                </div>
            </aside>
            <main class="admin-layout__content">
                <Outlet/>
            </main>
        </div>
    }
}
