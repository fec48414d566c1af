//! Root application component: session context, router, and the route tree.
//!
//! DESIGN
//! ======
//! The component tree below mirrors `routes::ROUTES` one for one; the
//! descriptor table stays the single description of the navigable surface,
//! this file only binds each path to its view.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::layouts::{admin::AdminLayout, exam::ExamLayout};
use crate::pages::{
    dashboard::DashboardPage,
    exam::ExamDashboardPage,
    login::LoginPage,
    masters::{CentersPage, ClientsPage, OperatorsPage, RolesPage, TaskLibraryPage, UsersPage},
    operations::{ExamCentersPage, ExamShiftsPage, ExamsPage, ShiftAssignmentsPage},
};
use crate::state::session::{self, Session};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Rebuilds the session from the storage mirror exactly once and provides
/// it as context; from here on the mirror only follows the store.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::restore());
    session::register(session);
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/seqrview-web.css"/>
        <Title text="Seqrview"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=AdminLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route
                        path=(StaticSegment("masters"), StaticSegment("clients"))
                        view=ClientsPage
                    />
                    <Route
                        path=(StaticSegment("masters"), StaticSegment("centers"))
                        view=CentersPage
                    />
                    <Route
                        path=(StaticSegment("masters"), StaticSegment("users"))
                        view=UsersPage
                    />
                    <Route
                        path=(StaticSegment("masters"), StaticSegment("operators"))
                        view=OperatorsPage
                    />
                    <Route
                        path=(StaticSegment("masters"), StaticSegment("roles"))
                        view=RolesPage
                    />
                    <Route
                        path=(StaticSegment("masters"), StaticSegment("task-library"))
                        view=TaskLibraryPage
                    />
                    <Route
                        path=(StaticSegment("operations"), StaticSegment("exams"))
                        view=ExamsPage
                    />
                    <Route
                        path=(
                            StaticSegment("operations"),
                            StaticSegment("exams"),
                            ParamSegment("code"),
                            StaticSegment("shifts"),
                        )
                        view=ExamShiftsPage
                    />
                    <Route
                        path=(
                            StaticSegment("operations"),
                            StaticSegment("exams"),
                            ParamSegment("code"),
                            StaticSegment("centers"),
                        )
                        view=ExamCentersPage
                    />
                    <Route
                        path=(
                            StaticSegment("operations"),
                            StaticSegment("exams"),
                            ParamSegment("code"),
                            StaticSegment("assignments"),
                        )
                        view=ShiftAssignmentsPage
                    />
                </ParentRoute>
                <ParentRoute
                    path=(StaticSegment("exam"), ParamSegment("code"))
                    view=ExamLayout
                >
                    <Route path=StaticSegment("") view=ExamDashboardPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
