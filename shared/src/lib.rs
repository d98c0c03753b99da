//! Shared domain models and the typed endpoint protocol for Aptcare.
//!
//! Everything in this crate is target-independent: the frontend uses it to
//! build payloads, and unit tests exercise it natively.

pub mod models;
pub mod protocol;

pub use models::*;
pub use protocol::*;

// =========================================================
// Constants
// =========================================================

/// Header carrying the session token, attached verbatim (no "Bearer " prefix).
pub const HEADER_AUTH_TOKEN: &str = "auth-token";

/// Durable-storage key for the session token.
pub const STORAGE_TOKEN_KEY: &str = "aptcare_token";

/// Session-storage key for the signed-in user record.
pub const STORAGE_USER_KEY: &str = "aptcare_session_user";
