//! Conversation repository trait.
//!
//! Defines the interface for conversation access, decoupling the shell from
//! the message transport behind it.

use super::model::{Conversation, ConversationMessage};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for conversation threads and their messages.
///
/// The production implementation fronts a remote messaging service; the
/// in-memory implementation backs tests and local development. Either way
/// the shell only ever sees this contract.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Finds a conversation by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Conversation))`: Conversation found
    /// - `Ok(None)`: Conversation not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, conversation_id: &str) -> Result<Option<Conversation>>;

    /// Lists all conversations the given user participates in.
    ///
    /// The result carries no ordering guarantee; callers apply the display
    /// ordering policy themselves.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Conversation>>;

    /// Saves a conversation record (insert or update).
    async fn save(&self, conversation: &Conversation) -> Result<()>;

    /// Appends a message to its conversation's history.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent conversation does not exist.
    async fn append_message(&self, message: &ConversationMessage) -> Result<()>;

    /// Lists a conversation's messages in creation order.
    async fn list_messages(&self, conversation_id: &str) -> Result<Vec<ConversationMessage>>;
}
