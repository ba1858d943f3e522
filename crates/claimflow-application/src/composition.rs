//! Ordered composition of the app-wide scopes.

use crate::scopes::{AuthScope, ClaimScope, MessageScope, NotificationScope};
use claimflow_core::claim::ClaimRepository;
use claimflow_core::config::ShellConfig;
use claimflow_core::conversation::ConversationRepository;
use std::sync::Arc;

/// The four app-wide scopes, composed once at startup.
///
/// Construction order is a contract: auth first, then claim, then message,
/// then notification. Each inner scope captures the auth scope's watch
/// subscription at construction, so by the time its own initialization
/// completes the auth state it observes is always defined (possibly "no
/// session", which is a valid state, never an absent one).
pub struct AppScopes {
    pub auth: Arc<AuthScope>,
    pub claims: Arc<ClaimScope>,
    pub messages: Arc<MessageScope>,
    pub notifications: Arc<NotificationScope>,
}

impl AppScopes {
    /// Composes the scopes over the given repositories.
    pub fn compose(
        claim_repository: Arc<dyn ClaimRepository>,
        conversation_repository: Arc<dyn ConversationRepository>,
        config: &ShellConfig,
    ) -> Self {
        tracing::info!("[Composition] Composing app scopes");

        let auth = Arc::new(AuthScope::new());
        let claims = Arc::new(ClaimScope::new(claim_repository, auth.subscribe()));
        let messages = Arc::new(MessageScope::new(
            conversation_repository,
            auth.subscribe(),
        ));
        let notifications = Arc::new(NotificationScope::new(config.notifications_enabled));

        Self {
            auth,
            claims,
            messages,
            notifications,
        }
    }

    /// Tears the scopes down in reverse composition order.
    ///
    /// Scopes normally live until process exit; this explicit path exists
    /// so tests (and a clean shutdown) can assert the lifecycle instead of
    /// relying on drop order.
    pub fn shutdown(&self) {
        tracing::info!("[Composition] Shutting down app scopes");
        self.notifications.reset();
        self.auth.logout();
    }
}
