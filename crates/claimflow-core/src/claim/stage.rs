//! Claim processing pipeline stages.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The stage a claim currently sits at in the body-shop pipeline.
///
/// Stages form a linear sequence; a claim may only advance to the
/// immediately following stage. Screens remain freely reachable in the
/// navigation layer - the gating lives here and in the claim scope.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ClaimStage {
    /// Vehicle identification has been captured (or is being captured).
    VehicleInfo,
    /// Damage photos are being collected.
    PhotoCapture,
    /// Shop staff are assessing the photographed damage.
    DamageAssessment,
    /// A repair estimate is being prepared.
    Estimate,
    /// The claim has been submitted for adjuster review. Terminal.
    Submitted,
}

impl ClaimStage {
    /// The stage that follows this one, or `None` at the end of the pipeline.
    pub fn next(self) -> Option<ClaimStage> {
        match self {
            ClaimStage::VehicleInfo => Some(ClaimStage::PhotoCapture),
            ClaimStage::PhotoCapture => Some(ClaimStage::DamageAssessment),
            ClaimStage::DamageAssessment => Some(ClaimStage::Estimate),
            ClaimStage::Estimate => Some(ClaimStage::Submitted),
            ClaimStage::Submitted => None,
        }
    }

    /// Returns true if a claim at this stage may advance to `target`.
    ///
    /// Only single forward steps are allowed; skipping stages or moving
    /// backwards is rejected.
    pub fn can_advance_to(self, target: ClaimStage) -> bool {
        self.next() == Some(target)
    }

    /// Returns true if this is the terminal stage.
    pub fn is_terminal(self) -> bool {
        self == ClaimStage::Submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_is_linear() {
        let mut stage = ClaimStage::VehicleInfo;
        let mut walked = vec![stage];
        while let Some(next) = stage.next() {
            walked.push(next);
            stage = next;
        }
        assert_eq!(
            walked,
            vec![
                ClaimStage::VehicleInfo,
                ClaimStage::PhotoCapture,
                ClaimStage::DamageAssessment,
                ClaimStage::Estimate,
                ClaimStage::Submitted,
            ]
        );
    }

    #[test]
    fn test_can_only_advance_one_step_forward() {
        assert!(ClaimStage::VehicleInfo.can_advance_to(ClaimStage::PhotoCapture));
        assert!(ClaimStage::Estimate.can_advance_to(ClaimStage::Submitted));

        // Skipping ahead is rejected.
        assert!(!ClaimStage::VehicleInfo.can_advance_to(ClaimStage::Submitted));
        assert!(!ClaimStage::PhotoCapture.can_advance_to(ClaimStage::Estimate));

        // Moving backwards is rejected.
        assert!(!ClaimStage::Estimate.can_advance_to(ClaimStage::PhotoCapture));
    }

    #[test]
    fn test_submitted_is_terminal() {
        assert!(ClaimStage::Submitted.is_terminal());
        assert_eq!(ClaimStage::Submitted.next(), None);
        assert!(!ClaimStage::Estimate.is_terminal());
    }
}
