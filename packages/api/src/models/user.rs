//! # User model
//!
//! Two representations of an application user:
//!
//! - [`User`] (server only) — the full `users` row, loaded via [`sqlx::FromRow`].
//!   Carries the argon2 `password_hash`, which must never cross the server
//!   boundary.
//! - [`UserInfo`] — the client-safe projection sent through server functions.
//!   The `Uuid` crosses as a `String` so it works in WASM, and the role
//!   defaults to [`Role::User`] when the stored value is empty or unknown.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Access role stored on a user row. Gates the admin-only views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    /// Parse the stored role text, treating anything unrecognised
    /// (including an empty string) as a regular user.
    pub fn from_stored(s: &str) -> Self {
        match s {
            "Admin" => Role::Admin,
            _ => Role::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            role: Role::from_stored(&self.role),
            created_at: self.created_at.format("%d/%m/%Y").to_string(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_defaults_to_user_for_empty_or_unknown() {
        assert_eq!(Role::from_stored(""), Role::User);
        assert_eq!(Role::from_stored("Superadmin"), Role::User);
        assert_eq!(Role::from_stored("Admin"), Role::Admin);
        assert_eq!(Role::from_stored("User"), Role::User);
    }

    #[test]
    fn role_round_trips_through_str() {
        for role in [Role::Admin, Role::User] {
            assert_eq!(Role::from_stored(role.as_str()), role);
        }
    }
}
