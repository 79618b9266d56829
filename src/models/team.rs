//! Team model.
//!
//! A team is the second possible assignment target. Its member list is a
//! denormalized snapshot (id, display name, role within the team) used by
//! the timeline to expand a team row into employee rows. The invariant
//! that a team never loses its last supervisory member is cross-entity
//! and lives in [`crate::policy`], not here.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::EntityId;
use crate::table::{FieldValue, TableRecord};

/// A team of employees attached to a plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier.
    pub id: EntityId,
    pub name: String,
    /// Name of the plant the team operates in.
    pub plant: String,
    /// Ordered member snapshot; order drives timeline row order.
    pub members: Vec<TeamMember>,
    pub status: TeamStatus,
    /// Display color for timeline rows (hex code).
    pub color: Option<String>,
}

/// A member entry inside a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: EntityId,
    pub name: String,
    pub role: MemberRole,
}

/// Role a member holds within a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberRole {
    Manager,
    Supervisor,
    TeamLead,
    Operator,
    Werknemer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamStatus {
    Active,
    Inactive,
}

impl Team {
    /// Creates an active team with no members.
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            plant: String::new(),
            members: Vec::new(),
            status: TeamStatus::Active,
            color: None,
        }
    }

    /// Sets the plant name.
    pub fn with_plant(mut self, plant: impl Into<String>) -> Self {
        self.plant = plant.into();
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Appends a member.
    pub fn with_member(mut self, id: EntityId, name: impl Into<String>, role: MemberRole) -> Self {
        self.members.push(TeamMember {
            id,
            name: name.into(),
            role,
        });
        self
    }

    /// Number of members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Whether the given employee appears in the member snapshot.
    pub fn has_member(&self, employee_id: EntityId) -> bool {
        self.members.iter().any(|m| m.id == employee_id)
    }
}

impl fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TeamStatus::Active => "Active",
            TeamStatus::Inactive => "Inactive",
        };
        f.write_str(s)
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MemberRole::Manager => "Manager",
            MemberRole::Supervisor => "Supervisor",
            MemberRole::TeamLead => "Team Lead",
            MemberRole::Operator => "Operator",
            MemberRole::Werknemer => "Werknemer",
        };
        f.write_str(s)
    }
}

impl TableRecord for Team {
    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => FieldValue::Int(self.id as i64),
            "name" => FieldValue::Text(self.name.clone()),
            "plant" => FieldValue::Text(self.plant.clone()),
            "status" => FieldValue::Text(self.status.to_string()),
            "members" => FieldValue::Int(self.member_count() as i64),
            _ => FieldValue::Text(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_builder() {
        let team = Team::new(1, "Fireflies")
            .with_plant("Ghent Main")
            .with_color("#ef4444")
            .with_member(101, "Joel Miller", MemberRole::Supervisor)
            .with_member(102, "Ellie Williams", MemberRole::Werknemer);

        assert_eq!(team.member_count(), 2);
        assert!(team.has_member(101));
        assert!(!team.has_member(999));
        assert_eq!(team.status, TeamStatus::Active);
        assert_eq!(team.color.as_deref(), Some("#ef4444"));
    }

    #[test]
    fn test_table_fields() {
        let team = Team::new(2, "WLF").with_member(105, "Abby", MemberRole::Supervisor);
        assert_eq!(team.field("members"), FieldValue::Int(1));
        assert_eq!(team.field("status"), FieldValue::Text("Active".into()));
    }
}
