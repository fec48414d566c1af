//! Master-data screens: clients, centers, users, operators, roles, and the
//! task library. Shells only; each heading matches the route table.

use leptos::prelude::*;

#[component]
fn MasterShell(heading: &'static str) -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__heading">{heading}</h1>
            <p class="page__hint">"No records loaded."</p>
        </section>
    }
}

#[component]
pub fn ClientsPage() -> impl IntoView {
    view! { <MasterShell heading="Client Master"/> }
}

#[component]
pub fn CentersPage() -> impl IntoView {
    view! { <MasterShell heading="Center Master"/> }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    view! { <MasterShell heading="User Management"/> }
}

#[component]
pub fn OperatorsPage() -> impl IntoView {
    view! { <MasterShell heading="Operators"/> }
}

#[component]
pub fn RolesPage() -> impl IntoView {
    view! { <MasterShell heading="Roles"/> }
}

#[component]
pub fn TaskLibraryPage() -> impl IntoView {
    view! { <MasterShell heading="Task Library"/> }
}
