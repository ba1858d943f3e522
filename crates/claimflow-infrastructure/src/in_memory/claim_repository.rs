//! In-memory claim repository.

use async_trait::async_trait;
use claimflow_core::Result;
use claimflow_core::claim::{Claim, ClaimRepository};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Claim repository backed by an in-process map.
///
/// Cloning is cheap and shares the underlying store.
#[derive(Clone, Default)]
pub struct InMemoryClaimRepository {
    claims: Arc<RwLock<HashMap<String, Claim>>>,
}

impl InMemoryClaimRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given claims.
    pub async fn with_claims(claims: impl IntoIterator<Item = Claim>) -> Self {
        let repository = Self::new();
        {
            let mut store = repository.claims.write().await;
            for claim in claims {
                store.insert(claim.id.clone(), claim);
            }
        }
        repository
    }
}

#[async_trait]
impl ClaimRepository for InMemoryClaimRepository {
    async fn find_by_id(&self, claim_id: &str) -> Result<Option<Claim>> {
        let claims = self.claims.read().await;
        Ok(claims.get(claim_id).cloned())
    }

    async fn save(&self, claim: &Claim) -> Result<()> {
        let mut claims = self.claims.write().await;
        claims.insert(claim.id.clone(), claim.clone());
        Ok(())
    }

    async fn delete(&self, claim_id: &str) -> Result<()> {
        let mut claims = self.claims.write().await;
        claims.remove(claim_id);
        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Claim>> {
        let claims = self.claims.read().await;
        Ok(claims
            .values()
            .filter(|claim| claim.involves(user_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimflow_core::claim::VehicleInfo;

    fn vehicle() -> VehicleInfo {
        VehicleInfo {
            make: "Honda".to_string(),
            model: "Civic".to_string(),
            year: 2019,
            vin: "2HGFC2F59KH512345".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repository = InMemoryClaimRepository::new();
        let claim = Claim::open("cust-1", vehicle());

        repository.save(&claim).await.unwrap();
        let found = repository.find_by_id(&claim.id).await.unwrap().unwrap();
        assert_eq!(found, claim);
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repository = InMemoryClaimRepository::new();
        assert!(repository.find_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_for_user_filters_by_involvement() {
        let mut shop_claim = Claim::open("cust-1", vehicle());
        shop_claim.shop_id = Some("shop-1".to_string());
        let other_claim = Claim::open("cust-2", vehicle());

        let repository =
            InMemoryClaimRepository::with_claims([shop_claim.clone(), other_claim]).await;

        let for_shop = repository.list_for_user("shop-1").await.unwrap();
        assert_eq!(for_shop.len(), 1);
        assert_eq!(for_shop[0].id, shop_claim.id);

        let for_stranger = repository.list_for_user("nobody").await.unwrap();
        assert!(for_stranger.is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_claim() {
        let claim = Claim::open("cust-1", vehicle());
        let repository = InMemoryClaimRepository::with_claims([claim.clone()]).await;

        repository.delete(&claim.id).await.unwrap();
        assert!(repository.find_by_id(&claim.id).await.unwrap().is_none());
    }
}
