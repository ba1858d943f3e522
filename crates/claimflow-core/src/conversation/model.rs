//! Conversation and message domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A lightweight summary of the most recent message in a conversation.
///
/// Carried on the conversation record so list surfaces can render a preview
/// without loading the full message history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSummary {
    /// User ID of the sender
    pub sender_id: String,
    /// Message body preview
    pub content: String,
    /// Timestamp when the message was created
    pub created_at: DateTime<Utc>,
}

/// A conversation thread between two or more claim participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation identifier (UUID format)
    pub id: String,
    /// User IDs of all participants
    pub participant_ids: Vec<String>,
    /// Summary of the most recent message, if any message exists yet
    pub last_message: Option<MessageSummary>,
    /// Timestamp when the conversation record was last updated
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// The timestamp used for recency ordering.
    ///
    /// Prefers the last message's creation time; a conversation without any
    /// message falls back to its own `updated_at`.
    pub fn effective_recency(&self) -> DateTime<Utc> {
        self.last_message
            .as_ref()
            .map(|m| m.created_at)
            .unwrap_or(self.updated_at)
    }

    /// Returns true if the given user participates in this conversation.
    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participant_ids.iter().any(|id| id == user_id)
    }
}

/// A single message within a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// Unique message identifier (UUID format)
    pub id: String,
    /// The conversation this message belongs to
    pub conversation_id: String,
    /// User ID of the sender
    pub sender_id: String,
    /// Message body
    pub content: String,
    /// Timestamp when the message was created
    pub created_at: DateTime<Utc>,
}

impl ConversationMessage {
    /// Creates the matching list-surface summary for this message.
    pub fn to_summary(&self) -> MessageSummary {
        MessageSummary {
            sender_id: self.sender_id.clone(),
            content: self.content.clone(),
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_effective_recency_prefers_last_message() {
        let conversation = Conversation {
            id: "conv-1".to_string(),
            participant_ids: vec!["a".to_string(), "b".to_string()],
            last_message: Some(MessageSummary {
                sender_id: "a".to_string(),
                content: "hello".to_string(),
                created_at: at(100),
            }),
            updated_at: at(50),
        };
        assert_eq!(conversation.effective_recency(), at(100));
    }

    #[test]
    fn test_effective_recency_falls_back_to_updated_at() {
        let conversation = Conversation {
            id: "conv-2".to_string(),
            participant_ids: vec!["a".to_string()],
            last_message: None,
            updated_at: at(200),
        };
        assert_eq!(conversation.effective_recency(), at(200));
    }
}
