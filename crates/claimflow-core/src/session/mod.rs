//! Session domain types.
//!
//! A session represents the authenticated user currently driving the shell.
//! It is owned by the auth scope: created on login, destroyed on logout,
//! with at most one active session at a time.

pub mod model;
pub mod role;

pub use model::Session;
pub use role::UserRole;
