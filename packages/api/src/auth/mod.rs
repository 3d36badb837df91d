//! Name + password authentication and session keys.

#[cfg(feature = "server")]
mod password;
mod session;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
pub use session::SESSION_USER_ID_KEY;
