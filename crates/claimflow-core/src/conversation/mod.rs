//! Conversation domain types and ordering policy.
//!
//! Conversations are threads between claim participants (shop staff,
//! adjusters, customers). The message scope loads them through
//! [`ConversationRepository`] and presents them ordered by
//! [`ordering::sort_by_recency`].

pub mod model;
pub mod ordering;
pub mod repository;

pub use model::{Conversation, ConversationMessage, MessageSummary};
pub use repository::ConversationRepository;
