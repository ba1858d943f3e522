//! Session domain model.

use super::role::UserRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents an authenticated user session.
///
/// This is the "pure" domain model the shell operates on, independent of
/// whatever backend performed the authentication. The auth scope guarantees
/// at most one `Session` exists at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier of the authenticated user (UUID format)
    pub user_id: String,
    /// Display name shown in the shell chrome
    pub display_name: String,
    /// Role the user acts under for this session
    pub role: UserRole,
    /// Timestamp when the session was established
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Creates a new session starting now.
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            role,
            started_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_carries_role() {
        let session = Session::new("user-1", "Dana", UserRole::Adjuster);
        assert_eq!(session.user_id, "user-1");
        assert_eq!(session.role, UserRole::Adjuster);
    }
}
