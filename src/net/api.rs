//! HTTP dispatch for the two auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error since the form is
//! only submittable in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get an explicit `Result` with a two-kind error: the server said
//! no (`Rejected`), or the request never produced a decodable success body
//! (`Transport`). The page turns either into a notice string; nothing is
//! retried and every failure is terminal for that submission.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::AuthResponse;
use super::types::{Credentials, SignUpRequest, User};

/// Base address of the auth backend.
pub const API_BASE: &str = "http://localhost:8080";

/// Why a dispatch operation failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status.
    Rejected,
    /// The request never completed, or the success body did not decode.
    Transport(String),
}

impl ApiError {
    /// Text shown after the fixed notice prefix: the transport error when
    /// there is one, otherwise the operation's rejection text.
    fn message_or<'a>(&'a self, rejected: &'a str) -> &'a str {
        match self {
            ApiError::Rejected => rejected,
            ApiError::Transport(msg) => msg,
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint() -> String {
    format!("{API_BASE}/auth/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_up_endpoint() -> String {
    format!("{API_BASE}/auth/users")
}

/// Notice shown when a login attempt succeeds.
pub fn login_success_notice(user: &User) -> String {
    format!("Login successful! Welcome, {}", user.username)
}

/// Notice shown when a sign-up attempt succeeds.
pub fn sign_up_success_notice(user: &User) -> String {
    format!("Sign up successful! Welcome, {}", user.username)
}

/// Notice shown when a login attempt fails.
pub fn login_failed_notice(err: &ApiError) -> String {
    format!("Login failed: {}", err.message_or("Login failed"))
}

/// Notice shown when a sign-up attempt fails.
pub fn sign_up_failed_notice(err: &ApiError) -> String {
    format!("Sign up failed: {}", err.message_or("Sign up failed"))
}

/// Log in via `POST /auth/login`.
///
/// # Errors
///
/// `Rejected` on a non-success status; `Transport` when the request or the
/// response decoding fails.
pub async fn log_in(credentials: &Credentials) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_auth(&login_endpoint(), credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Create an account via `POST /auth/users`.
///
/// The backend answers 201 Created; any success status is accepted.
///
/// # Errors
///
/// Same taxonomy as [`log_in`].
pub async fn sign_up(request: &SignUpRequest) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_auth(&sign_up_endpoint(), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Shared POST flow: JSON body out, `AuthResponse` back, user extracted.
#[cfg(feature = "hydrate")]
async fn post_auth<B: serde::Serialize>(url: &str, body: &B) -> Result<User, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        log::warn!("auth request to {url} rejected with status {}", resp.status());
        return Err(ApiError::Rejected);
    }
    let body: AuthResponse = resp.json().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok(body.user)
}
