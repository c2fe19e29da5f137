//! Wire DTOs for the auth backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON bodies field-for-field so request
//! encoding and response decoding stay schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account category attached to sign-up requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Dispatch,
}

impl Role {
    /// Wire spelling, matching the serde casing.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Dispatch => "dispatch",
        }
    }

    /// Parse the wire spelling; `None` for anything unknown.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Role::Student),
            "dispatch" => Some(Role::Dispatch),
            _ => None,
        }
    }
}

/// Login request body: exactly username + password.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Sign-up request body: credentials plus the selected role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// An account as returned by the auth endpoints.
///
/// Only `username` is load-bearing for this client; the remaining fields
/// are decoded when present and otherwise default to `None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    pub username: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Success envelope shared by both auth endpoints.
///
/// The backend issues `token` on both calls; this client decodes it but
/// never stores it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
