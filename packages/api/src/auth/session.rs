//! Session data keys.
//!
//! The whole durable session is a single value: the signed-in user's id.
//! Everything else about the identity is re-derived from the `users` row on
//! restore, so a role change takes effect on the next fetch without a fresh
//! login.

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";
