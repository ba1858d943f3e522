//! User role types.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The role an authenticated user acts under.
///
/// Each role owns its own navigation subtree; the root navigator selects
/// exactly one subtree from the active session's role.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UserRole {
    /// Repair-shop staff processing vehicle damage claims.
    BodyShop,
    /// Insurance adjuster reviewing submitted claims.
    Adjuster,
    /// Policy holder tracking their own claims.
    Customer,
}
