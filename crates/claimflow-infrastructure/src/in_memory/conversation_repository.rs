//! In-memory conversation repository.

use async_trait::async_trait;
use claimflow_core::conversation::{Conversation, ConversationMessage, ConversationRepository};
use claimflow_core::{ClaimflowError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Conversation repository backed by in-process maps.
///
/// Messages are stored per conversation in append order, which keeps
/// `list_messages` in creation order without extra sorting.
#[derive(Clone, Default)]
pub struct InMemoryConversationRepository {
    conversations: Arc<RwLock<HashMap<String, Conversation>>>,
    messages: Arc<RwLock<HashMap<String, Vec<ConversationMessage>>>>,
}

impl InMemoryConversationRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given conversations.
    pub async fn with_conversations(
        conversations: impl IntoIterator<Item = Conversation>,
    ) -> Self {
        let repository = Self::new();
        {
            let mut store = repository.conversations.write().await;
            for conversation in conversations {
                store.insert(conversation.id.clone(), conversation);
            }
        }
        repository
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn find_by_id(&self, conversation_id: &str) -> Result<Option<Conversation>> {
        let conversations = self.conversations.read().await;
        Ok(conversations.get(conversation_id).cloned())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Conversation>> {
        let conversations = self.conversations.read().await;
        Ok(conversations
            .values()
            .filter(|conversation| conversation.has_participant(user_id))
            .cloned()
            .collect())
    }

    async fn save(&self, conversation: &Conversation) -> Result<()> {
        let mut conversations = self.conversations.write().await;
        conversations.insert(conversation.id.clone(), conversation.clone());
        Ok(())
    }

    async fn append_message(&self, message: &ConversationMessage) -> Result<()> {
        // The parent record must exist; dangling messages would be invisible
        // to every list surface.
        {
            let conversations = self.conversations.read().await;
            if !conversations.contains_key(&message.conversation_id) {
                return Err(ClaimflowError::not_found(
                    "conversation",
                    message.conversation_id.clone(),
                ));
            }
        }

        let mut messages = self.messages.write().await;
        messages
            .entry(message.conversation_id.clone())
            .or_default()
            .push(message.clone());
        Ok(())
    }

    async fn list_messages(&self, conversation_id: &str) -> Result<Vec<ConversationMessage>> {
        let messages = self.messages.read().await;
        Ok(messages.get(conversation_id).cloned().unwrap_or_default())
    }
}
