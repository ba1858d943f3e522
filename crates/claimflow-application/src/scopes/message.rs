//! Message scope.

use chrono::Utc;
use claimflow_core::conversation::ordering::sort_by_recency;
use claimflow_core::conversation::{Conversation, ConversationMessage, ConversationRepository};
use claimflow_core::session::Session;
use claimflow_core::{ClaimflowError, Result};
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

/// Exposes the viewer's conversations, ordered for display.
///
/// The list is recomputed from repository state on every call; there is no
/// incremental cache to go stale. Without a session the scope renders
/// nothing - a defined empty state, not an error.
pub struct MessageScope {
    repository: Arc<dyn ConversationRepository>,
    auth: watch::Receiver<Option<Session>>,
    changed_tx: watch::Sender<u64>,
}

impl MessageScope {
    /// Creates the scope over a repository and the auth subscription.
    pub fn new(
        repository: Arc<dyn ConversationRepository>,
        auth: watch::Receiver<Option<Session>>,
    ) -> Self {
        let (changed_tx, _) = watch::channel(0);
        tracing::info!("[Scopes] Message scope initialized");
        Self {
            repository,
            auth,
            changed_tx,
        }
    }

    /// Snapshot of the auth state this scope sees.
    pub fn auth_snapshot(&self) -> Option<Session> {
        self.auth.borrow().clone()
    }

    /// Subscribes to conversation change notifications.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changed_tx.subscribe()
    }

    /// The viewer's conversations, most recent first.
    ///
    /// Recency prefers the last message's timestamp over the record's
    /// `updated_at`; ties order by conversation id.
    pub async fn conversations_for_viewer(&self) -> Result<Vec<Conversation>> {
        let Some(session) = self.auth_snapshot() else {
            return Ok(Vec::new());
        };

        let conversations = self.repository.list_for_user(&session.user_id).await?;
        Ok(sort_by_recency(conversations))
    }

    /// A conversation's messages in creation order.
    pub async fn messages(&self, conversation_id: &str) -> Result<Vec<ConversationMessage>> {
        self.repository.list_messages(conversation_id).await
    }

    /// Records a message from the current viewer.
    ///
    /// Appends to the conversation's history, refreshes the parent record's
    /// last-message summary, and notifies watchers.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` when no session exists.
    /// - `NotFound` when the conversation does not exist.
    pub async fn record_message(
        &self,
        conversation_id: &str,
        content: impl Into<String>,
    ) -> Result<ConversationMessage> {
        let session = self
            .auth_snapshot()
            .ok_or_else(|| ClaimflowError::unauthorized("No active session"))?;

        let mut conversation = self
            .repository
            .find_by_id(conversation_id)
            .await?
            .ok_or_else(|| ClaimflowError::not_found("conversation", conversation_id))?;

        let message = ConversationMessage {
            id: Uuid::new_v4().to_string(),
            conversation_id: conversation_id.to_string(),
            sender_id: session.user_id.clone(),
            content: content.into(),
            created_at: Utc::now(),
        };

        self.repository.append_message(&message).await?;

        conversation.last_message = Some(message.to_summary());
        conversation.updated_at = message.created_at;
        self.repository.save(&conversation).await?;

        tracing::debug!(conversation_id, "Message recorded");
        self.changed_tx.send_modify(|version| *version += 1);
        Ok(message)
    }
}
