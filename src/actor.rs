//! The acting user's context.
//!
//! Supplied by the auth layer; the core only reads it to decide whether
//! mutation entry points should be offered. Enforcement stays with the
//! caller: every core function remains callable and correct regardless
//! of the actor, so a read-only session is a presentation concern, not
//! a data invariant.

use serde::{Deserialize, Serialize};

/// Role of the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorRole {
    /// Master-data administration.
    Admin,
    /// Operational planning.
    Planner,
    /// Dashboard-only access.
    Viewer,
}

/// Who is driving the session, and whether they may mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorContext {
    pub role: ActorRole,
    pub read_only: bool,
}

impl ActorContext {
    pub fn new(role: ActorRole) -> Self {
        Self {
            role,
            read_only: matches!(role, ActorRole::Viewer),
        }
    }

    /// Forces the session read-only regardless of role.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Whether assign/unassign/create/delete entry points are offered.
    pub fn can_mutate(&self) -> bool {
        !self.read_only
    }
}
