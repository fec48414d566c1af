use std::cell::RefCell;
use std::future::Future;
use std::pin::pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

use super::*;

/// Drive a future to completion. The async paths under test never suspend
/// on the native target (the HTTP stubs answer immediately), so one poll
/// must finish them.
fn poll_ready<F: Future>(fut: F) -> F::Output {
    let mut fut = pin!(fut);
    match fut.as_mut().poll(&mut Context::from_waker(Waker::noop())) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("future suspended on the native target"),
    }
}

fn profile(user_type: &str, exam: Option<&str>) -> UserProfile {
    UserProfile {
        uid: "u-1".to_owned(),
        username: "asha".to_owned(),
        email: None,
        first_name: None,
        middle_name: None,
        last_name: None,
        full_name: None,
        user_type: user_type.to_owned(),
        status: None,
        mobile_primary: None,
        photo: None,
        exam: exam.map(str::to_owned),
    }
}

// =============================================================
// Authenticated predicate
// =============================================================

#[test]
fn fresh_session_is_unauthenticated() {
    assert!(!Session::default().is_authenticated());
}

#[test]
fn access_token_alone_authenticates() {
    let session = Session {
        access_token: Some("tok".to_owned()),
        user: None,
    };
    assert!(session.is_authenticated());
}

#[test]
fn user_without_access_token_does_not_authenticate() {
    let session = Session {
        access_token: None,
        user: Some(profile("OPERATOR", None)),
    };
    assert!(!session.is_authenticated());
}

#[test]
fn predicate_tracks_token_across_login_logout_cycles() {
    let mut session = Session::default();
    for _ in 0..3 {
        session.access_token = Some("tok".to_owned());
        session.user = Some(profile("INTERNAL_ADMIN", None));
        assert!(session.is_authenticated());

        session = Session::default();
        assert!(!session.is_authenticated());
    }
}

// =============================================================
// Post-login routing
// =============================================================

#[test]
fn internal_admin_lands_on_the_dashboard() {
    assert_eq!(post_login_destination(&profile("INTERNAL_ADMIN", None)), "/");
}

#[test]
fn non_admin_roles_land_on_the_dashboard_too() {
    assert_eq!(post_login_destination(&profile("OPERATOR", None)), "/");
    assert_eq!(post_login_destination(&profile("CLIENT_ADMIN", None)), "/");
    assert_eq!(post_login_destination(&profile("CLIENT_VIEWER", None)), "/");
}

#[test]
fn exam_admin_lands_on_their_exam() {
    assert_eq!(
        post_login_destination(&profile("EXAM_ADMIN", Some("NEET-2026"))),
        "/exam/NEET-2026"
    );
}

#[test]
fn exam_admin_without_exam_gets_the_generic_exam_dashboard() {
    assert_eq!(post_login_destination(&profile("EXAM_ADMIN", None)), "/exam/dashboard");
    assert_eq!(post_login_destination(&profile("EXAM_ADMIN", Some(""))), "/exam/dashboard");
}

#[test]
fn exam_destination_is_a_known_route() {
    let destination = post_login_destination(&profile("EXAM_ADMIN", Some("CAT24")));
    assert_eq!(crate::routes::page_title(&destination), Some("Exam Dashboard"));
}

// =============================================================
// Silent refresh
// =============================================================

#[test]
fn silent_refresh_updates_the_registered_session() {
    let session = RwSignal::new(Session {
        access_token: Some("expired".to_owned()),
        user: Some(profile("INTERNAL_ADMIN", None)),
    });
    register(session);

    apply_refreshed_access("fresh.access.token");

    let state = session.get();
    assert_eq!(state.access_token.as_deref(), Some("fresh.access.token"));
    assert!(state.user.is_some(), "refresh must not touch the profile");
}

#[test]
fn silent_refresh_without_a_registered_session_is_a_no_op() {
    // Each test thread starts with no binding; nothing to update, nothing
    // to panic over.
    apply_refreshed_access("fresh.access.token");
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_the_session_before_navigating_to_login() {
    let session = RwSignal::new(Session {
        access_token: Some("tok".to_owned()),
        user: Some(profile("OPERATOR", None)),
    });
    let visited = Rc::new(RefCell::new(Vec::new()));
    let trail = Rc::clone(&visited);

    poll_ready(logout(session, move |path: &str, _| {
        assert!(
            !session.get().is_authenticated(),
            "navigation fired before the session was torn down"
        );
        trail.borrow_mut().push(path.to_owned());
    }));

    assert_eq!(*visited.borrow(), vec!["/login".to_owned()]);
    assert_eq!(session.get(), Session::default());
}

#[test]
fn failed_logout_notification_is_swallowed() {
    // The native stub fails every server call; the helper must still
    // return, leaving [`logout`] free to finish the local teardown.
    poll_ready(notify_server("stale-refresh-token"));
}
