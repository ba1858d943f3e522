//! Application layer for the Claimflow shell.
//!
//! Scope services, their ordered composition, and the shell that binds the
//! composed state to the navigation layer.

pub mod bootstrap;
pub mod composition;
pub mod scopes;
pub mod shell;

pub use bootstrap::{AppBootstrap, bootstrap};
pub use composition::AppScopes;
pub use scopes::{AuthScope, ClaimScope, MessageScope, NotificationScope};
pub use shell::AppShell;
