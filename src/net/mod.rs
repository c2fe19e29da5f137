//! Networking modules for the auth backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the two auth REST calls and formats their outcome notices;
//! `types` defines the JSON bodies both sides agree on.

pub mod api;
pub mod types;
