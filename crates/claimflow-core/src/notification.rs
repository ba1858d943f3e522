//! Push notification registration state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery/registration state for push notifications.
///
/// The shell only tracks this state; actual registration and delivery are
/// performed by an external push service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationRegistration {
    /// No registration has been attempted yet.
    #[default]
    Unregistered,
    /// The device is registered for delivery.
    Registered {
        /// Opaque token issued by the push service
        device_token: String,
        /// Timestamp when registration completed
        registered_at: DateTime<Utc>,
    },
    /// The user denied the permission prompt.
    Denied,
}

impl NotificationRegistration {
    /// Returns true if the device can currently receive notifications.
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unregistered() {
        assert_eq!(
            NotificationRegistration::default(),
            NotificationRegistration::Unregistered
        );
        assert!(!NotificationRegistration::default().is_registered());
    }

    #[test]
    fn test_registered_state_round_trips_through_json() {
        let state = NotificationRegistration::Registered {
            device_token: "tok-1".to_string(),
            registered_at: Utc::now(),
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: NotificationRegistration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
        assert!(back.is_registered());
    }
}
