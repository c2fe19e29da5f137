//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it holds the signals, wires
//! input events into `state`, and drives `net::api` from submit handlers.

pub mod login;
