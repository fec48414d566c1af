//! Static route table and the pre-navigation auth guard.
//!
//! DESIGN
//! ======
//! The table is the single description of the navigable surface: the
//! component tree in `app.rs` mirrors it, layouts consult it for titles,
//! and the guard derives allow/deny purely from (path, authenticated) so
//! routing policy stays testable without a router instance.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Login entry point; denied navigation is sent here.
pub const LOGIN_PATH: &str = "/login";

/// One navigable location. `path` may contain `:name` parameter segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub requires_auth: bool,
    pub title: &'static str,
}

/// Full navigable surface of the console. Immutable after startup.
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor { path: "/login", requires_auth: false, title: "Login" },
    RouteDescriptor { path: "/", requires_auth: true, title: "Dashboard" },
    RouteDescriptor { path: "/masters/clients", requires_auth: true, title: "Client Master" },
    RouteDescriptor { path: "/masters/centers", requires_auth: true, title: "Center Master" },
    RouteDescriptor { path: "/masters/users", requires_auth: true, title: "User Management" },
    RouteDescriptor { path: "/masters/operators", requires_auth: true, title: "Operators" },
    RouteDescriptor { path: "/masters/roles", requires_auth: true, title: "Roles" },
    RouteDescriptor { path: "/masters/task-library", requires_auth: true, title: "Task Library" },
    RouteDescriptor { path: "/operations/exams", requires_auth: true, title: "Exams" },
    RouteDescriptor { path: "/operations/exams/:code/shifts", requires_auth: true, title: "Exam Shifts" },
    RouteDescriptor { path: "/operations/exams/:code/centers", requires_auth: true, title: "Exam Centers" },
    RouteDescriptor { path: "/operations/exams/:code/assignments", requires_auth: true, title: "Shift Assignments" },
    RouteDescriptor { path: "/exam/:code", requires_auth: true, title: "Exam Dashboard" },
];

/// Split into non-empty segments; tolerates trailing and doubled slashes.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = segments(pattern);
    let mut path_segments = segments(path);
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) if p.starts_with(':') || p == s => {}
            _ => return false,
        }
    }
}

/// Find the descriptor a concrete location falls under.
pub fn find_route(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| matches(route.path, path))
}

/// Document title for a location, when it is a known route.
pub fn page_title(path: &str) -> Option<&'static str> {
    find_route(path).map(|route| route.title)
}

/// Outcome of the pre-navigation check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

/// Gate authenticated areas: a `requires_auth` route without a session is
/// denied; everything else — including unknown paths, which fall through to
/// the router's not-found view — proceeds.
pub fn guard(path: &str, authenticated: bool) -> GuardDecision {
    match find_route(path) {
        Some(route) if route.requires_auth && !authenticated => GuardDecision::RedirectToLogin,
        _ => GuardDecision::Allow,
    }
}
