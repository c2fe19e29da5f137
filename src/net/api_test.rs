use super::*;

fn make_user(username: &str) -> User {
    User { id: None, username: username.to_owned(), role: None, created_at: None }
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn login_endpoint_targets_auth_login() {
    assert_eq!(login_endpoint(), "http://localhost:8080/auth/login");
}

#[test]
fn sign_up_endpoint_targets_auth_users() {
    assert_eq!(sign_up_endpoint(), "http://localhost:8080/auth/users");
}

// =============================================================
// Success notices
// =============================================================

#[test]
fn login_success_notice_welcomes_user() {
    let notice = login_success_notice(&make_user("alice"));
    assert_eq!(notice, "Login successful! Welcome, alice");
    assert!(notice.contains("Welcome, alice"));
}

#[test]
fn sign_up_success_notice_welcomes_user() {
    assert_eq!(
        sign_up_success_notice(&make_user("bob")),
        "Sign up successful! Welcome, bob"
    );
}

// =============================================================
// Failure notices
// =============================================================

#[test]
fn rejected_login_uses_fixed_text() {
    assert_eq!(login_failed_notice(&ApiError::Rejected), "Login failed: Login failed");
}

#[test]
fn rejected_sign_up_uses_fixed_text() {
    assert_eq!(sign_up_failed_notice(&ApiError::Rejected), "Sign up failed: Sign up failed");
}

#[test]
fn transport_failures_surface_underlying_error_text() {
    let err = ApiError::Transport("error decoding response body".to_owned());
    assert_eq!(login_failed_notice(&err), "Login failed: error decoding response body");
    assert_eq!(sign_up_failed_notice(&err), "Sign up failed: error decoding response body");
}
