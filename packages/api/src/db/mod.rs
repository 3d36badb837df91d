//! # Database access
//!
//! The shared PostgreSQL pool behind every server function. Gated behind
//! `#[cfg(feature = "server")]` so client (WASM) builds never pull in SQLx
//! or Tokio networking code; see [`get_pool`] for the initialisation
//! contract.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;
