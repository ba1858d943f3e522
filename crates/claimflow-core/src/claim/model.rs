//! Claim domain model.

use super::stage::ClaimStage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Vehicle identification captured at claim intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInfo {
    pub make: String,
    pub model: String,
    pub year: u16,
    /// Vehicle identification number
    pub vin: String,
}

/// Reference to a damage photo held by the upload service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRef {
    /// Unique photo identifier (UUID format)
    pub id: String,
    /// Storage URI resolved by the external photo service
    pub uri: String,
    /// Timestamp when the photo was captured
    pub captured_at: DateTime<Utc>,
}

/// A repair cost estimate prepared from the damage assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageEstimate {
    /// Total estimated repair cost in cents
    pub total_cents: u64,
    /// Free-form line items as produced by the estimate service
    pub line_items: Vec<String>,
    /// Timestamp when the estimate was produced
    pub prepared_at: DateTime<Utc>,
}

/// An insurance claim for vehicle damage.
///
/// This is the domain record shared by all three roles: the body shop
/// advances it through the pipeline, the adjuster reviews it once
/// submitted, and the customer tracks its status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique claim identifier (UUID format)
    pub id: String,
    /// User ID of the policy holder who owns the claim
    pub owner_id: String,
    /// User ID of the body shop handling the claim, once assigned
    pub shop_id: Option<String>,
    /// Vehicle the claim is about
    pub vehicle: VehicleInfo,
    /// Current pipeline stage
    pub stage: ClaimStage,
    /// Damage photos collected so far
    pub photos: Vec<PhotoRef>,
    /// Repair estimate, present from the estimate stage onwards
    pub estimate: Option<DamageEstimate>,
    /// Timestamp when the claim was opened
    pub created_at: DateTime<Utc>,
    /// Timestamp when the claim was last updated
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Opens a new claim at the start of the pipeline.
    pub fn open(owner_id: impl Into<String>, vehicle: VehicleInfo) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.into(),
            shop_id: None,
            vehicle,
            stage: ClaimStage::VehicleInfo,
            photos: Vec::new(),
            estimate: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true if the given user is the owner or the assigned shop.
    pub fn involves(&self, user_id: &str) -> bool {
        self.owner_id == user_id || self.shop_id.as_deref() == Some(user_id)
    }

    /// Marks the record as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
