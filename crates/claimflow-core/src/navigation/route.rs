//! Route descriptors and per-role route tables.
//!
//! Screens are declared as data: one `const` table per role, each entry
//! carrying the screen's path pattern, presentation mode, title, and back
//! affordance. Secondary screens are parameterized by a claim identifier
//! resolved from the path (`claim/:id/<step>`).

use crate::error::{ClaimflowError, Result};
use crate::session::UserRole;
use serde::Serialize;

/// How a screen visually enters the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presentation {
    /// In-flow full screen on the navigation stack.
    Card,
    /// Dismissible overlay.
    Modal,
}

/// The label shown on a screen's back affordance.
///
/// `Cancel` marks terminal modal flows (such as final submission) where
/// leaving means abandoning, not stepping back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackLabel {
    Back,
    Cancel,
}

/// Static metadata for one screen in a role's stack.
///
/// Descriptors are immutable and defined at navigator-construction time;
/// they are never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDescriptor {
    /// Path pattern; `:id` segments match a claim identifier
    pub name: &'static str,
    /// Presentation mode
    pub presentation: Presentation,
    /// Human-readable title shown in the header
    pub title: &'static str,
    /// Back affordance label
    pub back_label: BackLabel,
    /// Whether the header chrome is shown (tab roots render their own)
    pub header_shown: bool,
}

impl RouteDescriptor {
    /// Creates a secondary card screen reached by push.
    const fn card(name: &'static str, title: &'static str) -> Self {
        Self {
            name,
            presentation: Presentation::Card,
            title,
            back_label: BackLabel::Back,
            header_shown: true,
        }
    }

    /// Creates a modal overlay screen with a Cancel affordance.
    const fn modal(name: &'static str, title: &'static str) -> Self {
        Self {
            name,
            presentation: Presentation::Modal,
            title,
            back_label: BackLabel::Cancel,
            header_shown: true,
        }
    }

    /// Creates a headerless tab root; tabs render their own chrome.
    const fn tabs(title: &'static str) -> Self {
        Self {
            name: TAB_ROOT,
            presentation: Presentation::Card,
            title,
            back_label: BackLabel::Back,
            header_shown: false,
        }
    }

    /// Returns true if this descriptor is the role's tab root.
    pub fn is_tab_root(&self) -> bool {
        self.name == TAB_ROOT
    }

    /// Matches a concrete path against this descriptor's pattern.
    ///
    /// Returns the captured claim id for `:id` segments, or `None` in the
    /// capture slot for literal-only patterns. A non-matching path returns
    /// `None` overall.
    pub fn match_path(&self, path: &str) -> Option<Option<String>> {
        let pattern: Vec<&str> = self.name.split('/').collect();
        let concrete: Vec<&str> = path.split('/').collect();
        if pattern.len() != concrete.len() {
            return None;
        }

        let mut claim_id = None;
        for (expected, actual) in pattern.iter().zip(concrete.iter()) {
            if *expected == ":id" {
                if actual.is_empty() {
                    return None;
                }
                claim_id = Some(actual.to_string());
            } else if expected != actual {
                return None;
            }
        }
        Some(claim_id)
    }
}

/// Route name of every role's default tab-set screen.
pub const TAB_ROOT: &str = "tabs";

/// Body-shop stack: a linear claim-processing pipeline ending in a modal
/// confirmation step.
pub const BODY_SHOP_ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::tabs("Shop"),
    RouteDescriptor::card("claim/:id/vehicle-info", "Vehicle Information"),
    RouteDescriptor::card("claim/:id/photos", "Photo Capture"),
    RouteDescriptor::card("claim/:id/damage-assessment", "Damage Assessment"),
    RouteDescriptor::card("claim/:id/estimate", "Estimate"),
    RouteDescriptor::modal("claim/:id/submit", "Submit Claim"),
];

/// Adjuster stack: a single review step.
pub const ADJUSTER_ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::tabs("Adjuster"),
    RouteDescriptor::card("claim/:id/review", "Claim Review"),
];

/// Customer stack: claim tracking plus a modal intake flow.
pub const CUSTOMER_ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::tabs("My Claims"),
    RouteDescriptor::card("claim/:id/status", "Claim Status"),
    RouteDescriptor::modal("claim/new", "New Claim"),
];

/// Returns the route table for the given role.
pub fn routes_for(role: UserRole) -> &'static [RouteDescriptor] {
    match role {
        UserRole::BodyShop => BODY_SHOP_ROUTES,
        UserRole::Adjuster => ADJUSTER_ROUTES,
        UserRole::Customer => CUSTOMER_ROUTES,
    }
}

/// Resolves a concrete path against a route table.
///
/// # Returns
///
/// The matching descriptor plus the claim id captured from the path, if
/// the pattern carries an `:id` segment.
///
/// # Errors
///
/// Returns [`ClaimflowError::Navigation`] when no table entry matches.
pub fn resolve<'a>(
    table: &'a [RouteDescriptor],
    path: &str,
) -> Result<(&'a RouteDescriptor, Option<String>)> {
    table
        .iter()
        .find_map(|descriptor| {
            descriptor
                .match_path(path)
                .map(|claim_id| (descriptor, claim_id))
        })
        .ok_or_else(|| ClaimflowError::navigation(format!("Unknown route: {path}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_starts_with_a_headerless_tab_root() {
        for role in [UserRole::BodyShop, UserRole::Adjuster, UserRole::Customer] {
            let table = routes_for(role);
            assert!(table[0].is_tab_root(), "{role} table must start with tabs");
            assert!(!table[0].header_shown);
        }
    }

    #[test]
    fn test_body_shop_pipeline_order_and_modal_submit() {
        let names: Vec<&str> = BODY_SHOP_ROUTES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                TAB_ROOT,
                "claim/:id/vehicle-info",
                "claim/:id/photos",
                "claim/:id/damage-assessment",
                "claim/:id/estimate",
                "claim/:id/submit",
            ]
        );

        let submit = BODY_SHOP_ROUTES.last().unwrap();
        assert_eq!(submit.presentation, Presentation::Modal);
        assert_eq!(submit.back_label, BackLabel::Cancel);
    }

    #[test]
    fn test_resolve_captures_claim_id() {
        let (descriptor, claim_id) =
            resolve(BODY_SHOP_ROUTES, "claim/CLM-1234/estimate").unwrap();
        assert_eq!(descriptor.title, "Estimate");
        assert_eq!(claim_id.as_deref(), Some("CLM-1234"));
    }

    #[test]
    fn test_resolve_literal_route_has_no_claim_id() {
        let (descriptor, claim_id) = resolve(CUSTOMER_ROUTES, "claim/new").unwrap();
        assert_eq!(descriptor.title, "New Claim");
        assert!(claim_id.is_none());
    }

    #[test]
    fn test_resolve_rejects_unknown_and_malformed_paths() {
        assert!(resolve(ADJUSTER_ROUTES, "claim/CLM-1/estimate").is_err());
        assert!(resolve(BODY_SHOP_ROUTES, "claim//estimate").is_err());
        assert!(resolve(BODY_SHOP_ROUTES, "claim/CLM-1").is_err());
    }
}
