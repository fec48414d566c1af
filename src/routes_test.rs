use super::*;

// =============================================================
// Path matching
// =============================================================

#[test]
fn root_matches_dashboard() {
    assert_eq!(find_route("/").map(|r| r.title), Some("Dashboard"));
}

#[test]
fn static_paths_match_exactly() {
    assert_eq!(find_route("/masters/clients").map(|r| r.title), Some("Client Master"));
    assert_eq!(find_route("/operations/exams").map(|r| r.title), Some("Exams"));
}

#[test]
fn trailing_slash_is_tolerated() {
    assert_eq!(find_route("/login/").map(|r| r.path), Some("/login"));
    assert_eq!(find_route("/masters/centers/").map(|r| r.title), Some("Center Master"));
}

#[test]
fn param_segment_matches_any_value() {
    assert_eq!(find_route("/exam/NEET-2026").map(|r| r.title), Some("Exam Dashboard"));
    assert_eq!(find_route("/exam/dashboard").map(|r| r.title), Some("Exam Dashboard"));
    assert_eq!(
        find_route("/operations/exams/CAT24/shifts").map(|r| r.title),
        Some("Exam Shifts")
    );
    assert_eq!(
        find_route("/operations/exams/CAT24/assignments").map(|r| r.title),
        Some("Shift Assignments")
    );
}

#[test]
fn partial_and_unknown_paths_do_not_match() {
    assert_eq!(find_route("/exam"), None);
    assert_eq!(find_route("/exam/NEET-2026/extra"), None);
    assert_eq!(find_route("/masters"), None);
    assert_eq!(find_route("/nope"), None);
}

#[test]
fn page_title_resolves_known_paths_only() {
    assert_eq!(page_title("/masters/task-library"), Some("Task Library"));
    assert_eq!(page_title("/does/not/exist"), None);
}

// =============================================================
// Guard
// =============================================================

#[test]
fn every_protected_route_redirects_when_unauthenticated() {
    for route in ROUTES.iter().filter(|r| r.requires_auth) {
        let location = route.path.replace(":code", "NEET-2026");
        assert_eq!(
            guard(&location, false),
            GuardDecision::RedirectToLogin,
            "expected redirect for {location}"
        );
    }
}

#[test]
fn every_route_proceeds_when_authenticated() {
    for route in ROUTES {
        let location = route.path.replace(":code", "NEET-2026");
        assert_eq!(guard(&location, true), GuardDecision::Allow, "expected allow for {location}");
    }
}

#[test]
fn login_proceeds_without_a_session() {
    assert_eq!(guard(LOGIN_PATH, false), GuardDecision::Allow);
}

#[test]
fn unknown_paths_fall_through_to_the_router() {
    assert_eq!(guard("/totally/unknown", false), GuardDecision::Allow);
}
