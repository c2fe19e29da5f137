use super::*;

use crate::net::types::Role;

fn filled_form() -> AuthForm {
    AuthForm {
        username: "alice".to_owned(),
        password: "hunter2".to_owned(),
        role: Role::Student,
        mode: Mode::Login,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn form_defaults_to_login_mode() {
    let form = AuthForm::default();
    assert_eq!(form.mode, Mode::Login);
    assert!(!form.mode.is_sign_up());
}

#[test]
fn form_defaults_to_student_role_and_empty_fields() {
    let form = AuthForm::default();
    assert_eq!(form.role, Role::Student);
    assert!(form.username.is_empty());
    assert!(form.password.is_empty());
}

// =============================================================
// Setters
// =============================================================

#[test]
fn setters_replace_values() {
    let mut form = AuthForm::default();
    form.set_username("bob".to_owned());
    form.set_password("secret".to_owned());
    form.set_role(Role::Dispatch);
    assert_eq!(form.username, "bob");
    assert_eq!(form.password, "secret");
    assert_eq!(form.role, Role::Dispatch);
}

// =============================================================
// Mode transitions
// =============================================================

#[test]
fn toggle_flips_login_and_sign_up() {
    let mut form = AuthForm::default();
    form.toggle_mode();
    assert_eq!(form.mode, Mode::SignUp);
    form.toggle_mode();
    assert_eq!(form.mode, Mode::Login);
}

#[test]
fn toggle_round_trip_retains_fields_and_hides_role_selector() {
    let mut form = filled_form();
    form.toggle_mode();
    assert!(form.mode.is_sign_up());
    form.toggle_mode();
    assert!(!form.mode.is_sign_up());
    assert_eq!(form.username, "alice");
    assert_eq!(form.password, "hunter2");
}

#[test]
fn return_to_login_leaves_sign_up_mode() {
    let mut form = filled_form();
    form.toggle_mode();
    form.return_to_login();
    assert_eq!(form.mode, Mode::Login);
}

#[test]
fn return_to_login_is_idempotent() {
    let mut form = filled_form();
    form.return_to_login();
    assert_eq!(form.mode, Mode::Login);
}

// =============================================================
// Wire snapshots
// =============================================================

#[test]
fn credentials_snapshot_copies_fields() {
    let form = filled_form();
    let creds = form.credentials();
    assert_eq!(creds.username, "alice");
    assert_eq!(creds.password, "hunter2");
}

#[test]
fn sign_up_snapshot_carries_selected_role() {
    let mut form = filled_form();
    form.set_role(Role::Dispatch);
    let req = form.sign_up_request();
    assert_eq!(req.username, "alice");
    assert_eq!(req.password, "hunter2");
    assert_eq!(req.role, Role::Dispatch);
}

// =============================================================
// Mode display helpers
// =============================================================

#[test]
fn mode_titles() {
    assert_eq!(Mode::Login.title(), "Login form");
    assert_eq!(Mode::SignUp.title(), "Sign Up form");
}

#[test]
fn mode_submit_labels() {
    assert_eq!(Mode::Login.submit_label(), "Login");
    assert_eq!(Mode::SignUp.submit_label(), "Sign Up");
}

#[test]
fn mode_toggle_labels() {
    assert_eq!(Mode::Login.toggle_label(), "Don't have an account? Sign Up");
    assert_eq!(Mode::SignUp.toggle_label(), "Already have an account? Login");
}
