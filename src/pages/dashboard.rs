//! Console landing page for internal admin accounts.

use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__heading">"Dashboard"</h1>
            <p class="page__hint">"Pick a master or an operations area from the sidebar."</p>
        </section>
    }
}
