use super::*;

// =============================================================
// URL + header construction
// =============================================================

#[test]
fn api_url_joins_path_onto_base() {
    assert_eq!(api_url("/auth/me/"), "http://127.0.0.1:8000/api/auth/me/");
}

#[test]
fn bearer_value_formats_authorization_header() {
    assert_eq!(bearer_value("abc.def.ghi"), "Bearer abc.def.ghi");
}

// =============================================================
// Issuance-endpoint exemption
// =============================================================

#[test]
fn token_issuance_is_exempt_from_interception() {
    assert!(exempt_from_refresh("/auth/token/"));
}

#[test]
fn refresh_sub_endpoint_is_not_exempt() {
    assert!(!exempt_from_refresh("/auth/token/refresh/"));
}

#[test]
fn ordinary_endpoints_are_not_exempt() {
    assert!(!exempt_from_refresh("/auth/me/"));
    assert!(!exempt_from_refresh("/masters/clients/"));
}

// =============================================================
// Recovery decision table
// =============================================================

#[test]
fn success_passes_through() {
    assert_eq!(recovery_for(200, "/auth/me/", false, true), Recovery::PassThrough);
}

#[test]
fn non_auth_failures_pass_through() {
    assert_eq!(recovery_for(400, "/auth/me/", false, true), Recovery::PassThrough);
    assert_eq!(recovery_for(500, "/auth/me/", false, true), Recovery::PassThrough);
}

#[test]
fn login_401_reaches_the_caller_unmodified() {
    assert_eq!(recovery_for(401, "/auth/token/", false, true), Recovery::Propagate);
}

#[test]
fn first_401_with_refresh_token_refreshes() {
    assert_eq!(recovery_for(401, "/auth/me/", false, true), Recovery::Refresh);
}

#[test]
fn first_401_without_refresh_token_forces_login() {
    assert_eq!(recovery_for(401, "/auth/me/", false, false), Recovery::ForceLogin);
}

#[test]
fn second_401_propagates_instead_of_looping() {
    assert_eq!(recovery_for(401, "/auth/me/", true, true), Recovery::Propagate);
    assert_eq!(recovery_for(401, "/auth/me/", true, false), Recovery::Propagate);
}

#[test]
fn refresh_endpoint_401_is_interceptable_by_the_table() {
    // Reached only if a caller routed the refresh endpoint through `send`;
    // the real refresh call bypasses the table entirely.
    assert_eq!(
        recovery_for(401, "/auth/token/refresh/", false, true),
        Recovery::Refresh
    );
}

// =============================================================
// Request context
// =============================================================

#[test]
fn fresh_contexts_have_not_retried() {
    assert!(!RequestContext::get("/auth/me/").retry_attempted);
    assert!(!RequestContext::post("/auth/logout/", serde_json::json!({})).retry_attempted);
}

#[test]
fn retry_flag_is_per_context() {
    let mut first = RequestContext::get("/auth/me/");
    let second = RequestContext::get("/auth/me/");
    first.retry_attempted = true;
    assert!(!second.retry_attempted);
}

// =============================================================
// Redirect-loop guard + error text
// =============================================================

#[test]
fn login_page_never_redirects_to_itself() {
    assert!(!should_redirect_to_login("/login"));
    assert!(should_redirect_to_login("/"));
    assert!(should_redirect_to_login("/masters/clients"));
}

#[test]
fn status_message_prefers_backend_detail() {
    assert_eq!(
        status_message(401, Some("Token is invalid or expired".to_owned())),
        "Token is invalid or expired"
    );
}

#[test]
fn status_message_falls_back_to_status_line() {
    assert_eq!(status_message(502, None), "request failed: 502");
    assert_eq!(status_message(401, Some(String::new())), "request failed: 401");
}
