//! Form state for the login / sign-up screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth page owns one `RwSignal<AuthForm>`; input handlers mutate it
//! through the setters below and the submit handler snapshots it into the
//! wire DTOs of `net::types`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Credentials, Role, SignUpRequest};

/// Which request a form submission issues.
///
/// Initial state is `Login`. The user can toggle indefinitely; a successful
/// sign-up also returns the form to `Login`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Login,
    SignUp,
}

impl Mode {
    /// Whether the role selector is rendered and included in the request.
    pub fn is_sign_up(self) -> bool {
        matches!(self, Mode::SignUp)
    }

    /// Heading shown above the form.
    pub fn title(self) -> &'static str {
        match self {
            Mode::Login => "Login form",
            Mode::SignUp => "Sign Up form",
        }
    }

    /// Label on the submit button.
    pub fn submit_label(self) -> &'static str {
        match self {
            Mode::Login => "Login",
            Mode::SignUp => "Sign Up",
        }
    }

    /// Label on the mode-toggle button.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Mode::Login => "Don't have an account? Sign Up",
            Mode::SignUp => "Already have an account? Login",
        }
    }
}

/// Form state for the auth page: credentials, role, and the active mode.
///
/// Defaults: empty fields, `Role::Student`, `Mode::Login`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthForm {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub mode: Mode,
}

impl AuthForm {
    pub fn set_username(&mut self, value: String) {
        self.username = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Flip between login and sign-up. Field values are retained.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Login => Mode::SignUp,
            Mode::SignUp => Mode::Login,
        };
    }

    /// Transition taken after a successful sign-up call.
    pub fn return_to_login(&mut self) {
        self.mode = Mode::Login;
    }

    /// Snapshot the form as a login request body.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }

    /// Snapshot the form as a sign-up request body.
    pub fn sign_up_request(&self) -> SignUpRequest {
        SignUpRequest {
            username: self.username.clone(),
            password: self.password.clone(),
            role: self.role,
        }
    }
}
