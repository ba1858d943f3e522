//! Claim repository trait.
//!
//! Defines the interface for claim access, decoupling the shell from the
//! claim backend behind it.

use super::model::Claim;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for claim records.
///
/// This trait defines the contract for persisting and retrieving claims,
/// decoupling the application's core logic from the specific backend
/// (remote claim service in production, in-memory store in tests).
#[async_trait]
pub trait ClaimRepository: Send + Sync {
    /// Finds a claim by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Claim))`: Claim found
    /// - `Ok(None)`: Claim not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, claim_id: &str) -> Result<Option<Claim>>;

    /// Saves a claim (insert or update).
    async fn save(&self, claim: &Claim) -> Result<()>;

    /// Deletes a claim.
    async fn delete(&self, claim_id: &str) -> Result<()>;

    /// Lists claims the given user is involved in (as owner or shop).
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Claim>>;
}
