//! Notification scope.

use chrono::Utc;
use claimflow_core::notification::NotificationRegistration;
use std::sync::RwLock;

/// Tracks push notification registration state.
///
/// Delivery itself belongs to an external push service; the shell only
/// records where registration stands. When notifications are disabled in
/// the configuration, registration attempts are ignored.
pub struct NotificationScope {
    enabled: bool,
    state: RwLock<NotificationRegistration>,
}

impl NotificationScope {
    /// Creates the scope in the unregistered state.
    pub fn new(enabled: bool) -> Self {
        tracing::info!(enabled, "[Scopes] Notification scope initialized");
        Self {
            enabled,
            state: RwLock::new(NotificationRegistration::Unregistered),
        }
    }

    /// Records a successful registration with the push service.
    ///
    /// Ignored (state stays unregistered) when notifications are disabled.
    pub fn register(&self, device_token: impl Into<String>) -> NotificationRegistration {
        if !self.enabled {
            tracing::debug!("Notification registration skipped: disabled in config");
            return self.snapshot();
        }

        let registration = NotificationRegistration::Registered {
            device_token: device_token.into(),
            registered_at: Utc::now(),
        };
        *self.state.write().unwrap() = registration.clone();
        registration
    }

    /// Records that the user denied the permission prompt.
    pub fn deny(&self) {
        *self.state.write().unwrap() = NotificationRegistration::Denied;
    }

    /// Resets to the unregistered state (e.g. on logout).
    pub fn reset(&self) {
        *self.state.write().unwrap() = NotificationRegistration::Unregistered;
    }

    /// Snapshot of the current registration state.
    pub fn snapshot(&self) -> NotificationRegistration {
        self.state.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unregistered() {
        let scope = NotificationScope::new(true);
        assert_eq!(scope.snapshot(), NotificationRegistration::Unregistered);
    }

    #[test]
    fn test_register_stores_token() {
        let scope = NotificationScope::new(true);
        let registration = scope.register("tok-42");
        assert!(registration.is_registered());
        assert!(scope.snapshot().is_registered());
    }

    #[test]
    fn test_register_is_ignored_when_disabled() {
        let scope = NotificationScope::new(false);
        scope.register("tok-42");
        assert_eq!(scope.snapshot(), NotificationRegistration::Unregistered);
    }

    #[test]
    fn test_deny_then_reset() {
        let scope = NotificationScope::new(true);
        scope.deny();
        assert_eq!(scope.snapshot(), NotificationRegistration::Denied);

        scope.reset();
        assert_eq!(scope.snapshot(), NotificationRegistration::Unregistered);
    }
}
