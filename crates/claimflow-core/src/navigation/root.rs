//! Root-level destination selection.
//!
//! The root stack declares all possible subtrees up front and delegates the
//! choice entirely to the auth scope's current session. Absence of a
//! session is a normal, displayable state that selects the auth flow.

use crate::session::{Session, UserRole};
use serde::Serialize;

/// Global status-bar style applied by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBarStyle {
    /// Follow the platform default for the current screen.
    Auto,
    Light,
    Dark,
}

/// Names of all top-level children, declared unconditionally.
///
/// Only one subtree is ever active; selection happens in
/// [`RootDestination::for_session`], never here.
pub const ROOT_CHILDREN: &[&str] = &["welcome", "auth", "body-shop", "adjuster", "customer"];

/// The active top-level subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootDestination {
    /// Login / signup flow, shown whenever no session exists.
    AuthFlow,
    /// The subtree owned by the session's role.
    Role(UserRole),
}

impl RootDestination {
    /// Selects the active subtree from the current session.
    ///
    /// This performs no role policy of its own: it reads `session.role` and
    /// nothing else.
    pub fn for_session(session: Option<&Session>) -> Self {
        match session {
            None => RootDestination::AuthFlow,
            Some(session) => RootDestination::Role(session.role),
        }
    }
}
