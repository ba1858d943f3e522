//! Claim scope.

use claimflow_core::claim::{Claim, ClaimRepository, ClaimStage, DamageEstimate, PhotoRef, VehicleInfo};
use claimflow_core::session::{Session, UserRole};
use claimflow_core::{ClaimflowError, Result};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

/// Exposes claim records to the role screens and enforces the pipeline.
///
/// Reads are scoped to the current session; writes go through
/// load-mutate-save against the repository and bump a change counter that
/// dependent screens watch.
pub struct ClaimScope {
    repository: Arc<dyn ClaimRepository>,
    auth: watch::Receiver<Option<Session>>,
    changed_tx: watch::Sender<u64>,
}

impl ClaimScope {
    /// Creates the scope over a repository and the auth subscription.
    pub fn new(
        repository: Arc<dyn ClaimRepository>,
        auth: watch::Receiver<Option<Session>>,
    ) -> Self {
        let (changed_tx, _) = watch::channel(0);
        tracing::info!("[Scopes] Claim scope initialized");
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

    /// Subscribes to claim change notifications.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changed_tx.subscribe()
    }

    /// Finds a claim by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no claim carries the id.
    pub async fn get(&self, claim_id: &str) -> Result<Claim> {
        self.repository
            .find_by_id(claim_id)
            .await?
            .ok_or_else(|| ClaimflowError::not_found("claim", claim_id))
    }

    /// Lists the claims the current viewer is involved in.
    ///
    /// Without a session this is a defined empty state, not an error.
    pub async fn list_for_viewer(&self) -> Result<Vec<Claim>> {
        let Some(session) = self.auth_snapshot() else {
            return Ok(Vec::new());
        };
        self.repository.list_for_user(&session.user_id).await
    }

    /// Opens a new claim owned by the current viewer.
    ///
    /// A body-shop viewer is recorded as the handling shop as well.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` when no session exists.
    pub async fn open_claim(&self, vehicle: VehicleInfo) -> Result<Claim> {
        let session = self.require_session()?;

        let mut claim = Claim::open(&session.user_id, vehicle);
        if session.role == UserRole::BodyShop {
            claim.shop_id = Some(session.user_id.clone());
        }

        self.repository.save(&claim).await?;
        tracing::info!(claim_id = %claim.id, "Claim opened");
        self.notify_changed();
        Ok(claim)
    }

    /// Assigns a body shop to handle the claim.
    pub async fn assign_to_shop(&self, claim_id: &str, shop_id: &str) -> Result<Claim> {
        let mut claim = self.get(claim_id).await?;
        claim.shop_id = Some(shop_id.to_string());
        claim.touch();
        self.repository.save(&claim).await?;
        self.notify_changed();
        Ok(claim)
    }

    /// Advances a claim to the next pipeline stage.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` when `target` is not the immediately following
    ///   stage, or when submitting without a recorded estimate.
    /// - `NotFound` when the claim does not exist.
    pub async fn advance_stage(&self, claim_id: &str, target: ClaimStage) -> Result<Claim> {
        let mut claim = self.get(claim_id).await?;

        if !claim.stage.can_advance_to(target) {
            return Err(ClaimflowError::InvalidTransition {
                from: claim.stage.to_string(),
                to: target.to_string(),
            });
        }

        // Submission additionally requires the estimate to exist; the
        // navigation layer never enforces this, so the gate lives here.
        if target == ClaimStage::Submitted && claim.estimate.is_none() {
            return Err(ClaimflowError::InvalidTransition {
                from: claim.stage.to_string(),
                to: target.to_string(),
            });
        }

        claim.stage = target;
        claim.touch();
        self.repository.save(&claim).await?;
        tracing::info!(claim_id = %claim.id, stage = %target, "Claim advanced");
        self.notify_changed();
        Ok(claim)
    }

    /// Attaches a damage photo reference to the claim.
    pub async fn attach_photo(&self, claim_id: &str, uri: impl Into<String>) -> Result<Claim> {
        let mut claim = self.get(claim_id).await?;
        claim.photos.push(PhotoRef {
            id: Uuid::new_v4().to_string(),
            uri: uri.into(),
            captured_at: Utc::now(),
        });
        claim.touch();
        self.repository.save(&claim).await?;
        self.notify_changed();
        Ok(claim)
    }

    /// Records the repair estimate on the claim.
    pub async fn record_estimate(
        &self,
        claim_id: &str,
        estimate: DamageEstimate,
    ) -> Result<Claim> {
        let mut claim = self.get(claim_id).await?;
        claim.estimate = Some(estimate);
        claim.touch();
        self.repository.save(&claim).await?;
        self.notify_changed();
        Ok(claim)
    }

    fn require_session(&self) -> Result<Session> {
        self.auth_snapshot()
            .ok_or_else(|| ClaimflowError::unauthorized("No active session"))
    }

    fn notify_changed(&self) {
        self.changed_tx.send_modify(|version| *version += 1);
    }
}
