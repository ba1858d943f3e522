//! Navigation domain types.
//!
//! Each role's screen set is declared as a static table of
//! [`route::RouteDescriptor`] records consumed by a generic
//! [`navigator::NavigatorStack`], rather than hand-built per-role branches.
//! The root-level selection between the auth flow and the role subtrees
//! lives in [`root`].

pub mod navigator;
pub mod root;
pub mod route;

pub use navigator::{NavigatorStack, PushedRoute};
pub use root::{RootDestination, StatusBarStyle};
pub use route::{BackLabel, Presentation, RouteDescriptor};
