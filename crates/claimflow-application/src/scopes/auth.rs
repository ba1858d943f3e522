//! Authentication scope.

use claimflow_core::session::{Session, UserRole};
use tokio::sync::watch;

/// Holds the current session and notifies dependents on change.
///
/// The scope enforces the single-session invariant: establishing a new
/// session replaces any previous one. The authentication backend itself is
/// an external collaborator; this scope only owns the resulting state.
pub struct AuthScope {
    session_tx: watch::Sender<Option<Session>>,
}

impl AuthScope {
    /// Creates the scope with no session (a valid, displayable state).
    pub fn new() -> Self {
        let (session_tx, _) = watch::channel(None);
        tracing::info!("[Scopes] Auth scope initialized");
        Self { session_tx }
    }

    /// Establishes a session, replacing any active one.
    pub fn establish(&self, session: Session) -> Session {
        tracing::info!(
            user_id = %session.user_id,
            role = %session.role,
            "Session established"
        );
        self.session_tx.send_replace(Some(session.clone()));
        session
    }

    /// Convenience login: builds and establishes a session starting now.
    pub fn login(
        &self,
        user_id: impl Into<String>,
        display_name: impl Into<String>,
        role: UserRole,
    ) -> Session {
        self.establish(Session::new(user_id, display_name, role))
    }

    /// Destroys the active session, if any.
    pub fn logout(&self) {
        let previous = self.session_tx.send_replace(None);
        if let Some(session) = previous {
            tracing::info!(user_id = %session.user_id, "Session cleared");
        }
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Option<Session> {
        self.session_tx.borrow().clone()
    }

    /// Subscribes to session changes.
    ///
    /// The receiver always starts with a defined value (possibly `None`),
    /// which is what lets dependent scopes rely on auth state being
    /// initialized before their own construction completes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.session_tx.subscribe()
    }
}

impl Default for AuthScope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_without_a_session() {
        let auth = AuthScope::new();
        assert!(auth.current().is_none());
    }

    #[test]
    fn test_login_establishes_session() {
        let auth = AuthScope::new();
        auth.login("user-1", "Riley", UserRole::Customer);

        let session = auth.current().unwrap();
        assert_eq!(session.user_id, "user-1");
        assert_eq!(session.role, UserRole::Customer);
    }

    #[test]
    fn test_at_most_one_active_session() {
        let auth = AuthScope::new();
        auth.login("user-1", "Riley", UserRole::Customer);
        auth.login("user-2", "Jo", UserRole::Adjuster);

        let session = auth.current().unwrap();
        assert_eq!(session.user_id, "user-2");
    }

    #[test]
    fn test_logout_clears_session() {
        let auth = AuthScope::new();
        auth.login("user-1", "Riley", UserRole::Customer);
        auth.logout();
        assert!(auth.current().is_none());
    }

    #[tokio::test]
    async fn test_subscribers_observe_changes() {
        let auth = AuthScope::new();
        let mut rx = auth.subscribe();
        assert!(rx.borrow().is_none());

        auth.login("user-1", "Riley", UserRole::BodyShop);
        rx.changed().await.unwrap();
        assert_eq!(
            rx.borrow().as_ref().map(|s| s.role),
            Some(UserRole::BodyShop)
        );
    }
}
