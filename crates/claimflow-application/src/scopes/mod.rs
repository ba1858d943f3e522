//! App-wide state scopes.
//!
//! Each scope is an explicit service object with a documented lifecycle:
//! constructed once by the composition root (auth first, then claim,
//! message, notification), alive for the process lifetime, torn down
//! explicitly on shutdown. Dependent scopes capture the auth scope's watch
//! subscription at construction, so they can never observe an
//! uninitialized auth state.

pub mod auth;
pub mod claim;
pub mod message;
pub mod notification;

pub use auth::AuthScope;
pub use claim::ClaimScope;
pub use message::MessageScope;
pub use notification::NotificationScope;
