//! Role-scoped navigator stack.

use super::route::{self, RouteDescriptor, routes_for};
use crate::error::Result;
use crate::session::UserRole;

/// A screen currently on the stack, with its resolved path parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushedRoute {
    /// Pattern name of the matched descriptor
    pub name: &'static str,
    /// Claim id captured from the path, when the pattern carries one
    pub claim_id: Option<String>,
}

/// A navigation stack over one role's route table.
///
/// The stack starts at the role's tab root (headerless, tabs render their
/// own chrome); secondary screens are pushed by concrete path and validated
/// against the table. The navigator never enforces workflow ordering -
/// screens are independently reachable and pipeline gating belongs to the
/// claim scope.
#[derive(Debug)]
pub struct NavigatorStack {
    role: UserRole,
    routes: &'static [RouteDescriptor],
    stack: Vec<PushedRoute>,
}

impl NavigatorStack {
    /// Creates a navigator positioned at the role's tab root.
    pub fn for_role(role: UserRole) -> Self {
        Self {
            role,
            routes: routes_for(role),
            stack: Vec::new(),
        }
    }

    /// The role this navigator belongs to.
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// The route table backing this navigator.
    pub fn routes(&self) -> &'static [RouteDescriptor] {
        self.routes
    }

    /// Pushes a screen by concrete path, e.g. `claim/CLM-12/estimate`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClaimflowError::Navigation`] when the path matches
    /// no entry of this role's table.
    pub fn push(&mut self, path: &str) -> Result<&'static RouteDescriptor> {
        let (descriptor, claim_id) = route::resolve(self.routes, path)?;
        self.stack.push(PushedRoute {
            name: descriptor.name,
            claim_id,
        });
        Ok(descriptor)
    }

    /// Pops the top screen, returning it.
    ///
    /// Popping at the tab root is a no-op returning `None`.
    pub fn pop(&mut self) -> Option<PushedRoute> {
        self.stack.pop()
    }

    /// The descriptor of the currently visible screen.
    ///
    /// Falls back to the tab root when nothing has been pushed.
    pub fn current(&self) -> &'static RouteDescriptor {
        match self.stack.last() {
            Some(top) => self
                .routes
                .iter()
                .find(|descriptor| descriptor.name == top.name)
                .expect("pushed routes always originate from the table"),
            None => &self.routes[0],
        }
    }

    /// The claim id the visible screen is parameterized by, if any.
    pub fn current_claim_id(&self) -> Option<&str> {
        self.stack.last().and_then(|top| top.claim_id.as_deref())
    }

    /// Number of screens pushed above the tab root.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
