//! The application shell.
//!
//! Wires the composed scopes to the navigation layer: all role navigators
//! are declared up front, but exactly one subtree is active at a time,
//! selected from the auth scope's current session.

use crate::composition::AppScopes;
use claimflow_core::Result;
use claimflow_core::conversation::Conversation;
use claimflow_core::navigation::{NavigatorStack, RootDestination, StatusBarStyle};
use claimflow_core::session::UserRole;
use std::collections::HashMap;

/// Top-level shell over the scopes and the role navigators.
pub struct AppShell {
    scopes: AppScopes,
    navigators: HashMap<UserRole, NavigatorStack>,
}

impl AppShell {
    /// The global status-bar style applied once at startup.
    pub const STATUS_BAR_STYLE: StatusBarStyle = StatusBarStyle::Auto;

    /// Builds the shell, declaring every role navigator unconditionally.
    pub fn new(scopes: AppScopes) -> Self {
        let navigators = [UserRole::BodyShop, UserRole::Adjuster, UserRole::Customer]
            .into_iter()
            .map(|role| (role, NavigatorStack::for_role(role)))
            .collect();

        Self { scopes, navigators }
    }

    /// The composed scopes.
    pub fn scopes(&self) -> &AppScopes {
        &self.scopes
    }

    /// The currently active top-level subtree.
    ///
    /// Selection is delegated entirely to the auth scope's session; no
    /// role policy lives here.
    pub fn active_destination(&self) -> RootDestination {
        RootDestination::for_session(self.scopes.auth.current().as_ref())
    }

    /// The navigator owning the active subtree, if a session exists.
    pub fn active_navigator_mut(&mut self) -> Option<&mut NavigatorStack> {
        match self.active_destination() {
            RootDestination::AuthFlow => None,
            RootDestination::Role(role) => self.navigators.get_mut(&role),
        }
    }

    /// Read access to a specific role's navigator.
    pub fn navigator(&self, role: UserRole) -> &NavigatorStack {
        &self.navigators[&role]
    }

    /// The viewer's conversation list, ordered for display.
    ///
    /// Empty when no session exists.
    pub async fn conversations(&self) -> Result<Vec<Conversation>> {
        self.scopes.messages.conversations_for_viewer().await
    }
}
