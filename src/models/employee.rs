//! Employee model and the lock cascade.
//!
//! An employee is one of the two possible assignment targets (the other
//! being a team). Locking an employee is a single atomic transform: role,
//! team membership, and plant assignment are all cleared together, so no
//! partial-update API can leave the entity in a half-locked state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::EntityId;
use crate::table::{FieldValue, TableRecord};

/// An employee in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Gender,
    /// City the employee works from.
    pub location: String,
    pub role: EmployeeRole,
    pub email: String,
    pub phone: String,
    pub contract_type: ContractType,
    pub status: AvailabilityStatus,
    pub join_date: Option<NaiveDate>,
    pub department: String,
    /// Free-text availability pattern (e.g. "Mon-Fri", "Shift A").
    pub availability: String,
    /// When true the employee cannot receive assignments.
    pub locked: bool,
    /// Teams the employee belongs to. Non-managers hold at most one.
    pub team_ids: Vec<EntityId>,
    pub plant_id: Option<EntityId>,
    pub address: Option<String>,
}

/// Employee role in the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeRole {
    Manager,
    Supervisor,
    /// Regular worker.
    Werknemer,
    Unassigned,
}

/// Availability status shown in the roster grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    Available,
    Sick,
    OnLeave,
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractType {
    FullTime,
    PartTime,
    Freelance,
}

impl Employee {
    /// Creates an employee with the given identity. Remaining fields start
    /// empty/available and are filled via the `with_*` builders.
    pub fn new(id: EntityId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date: None,
            gender: Gender::Other,
            location: String::new(),
            role: EmployeeRole::Werknemer,
            email: String::new(),
            phone: String::new(),
            contract_type: ContractType::FullTime,
            status: AvailabilityStatus::Available,
            join_date: None,
            department: String::new(),
            availability: String::new(),
            locked: false,
            team_ids: Vec::new(),
            plant_id: None,
            address: None,
        }
    }

    /// Sets the role.
    pub fn with_role(mut self, role: EmployeeRole) -> Self {
        self.role = role;
        self
    }

    /// Sets the availability status.
    pub fn with_status(mut self, status: AvailabilityStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets team membership.
    pub fn with_teams(mut self, team_ids: Vec<EntityId>) -> Self {
        self.team_ids = team_ids;
        self
    }

    /// Sets the plant assignment.
    pub fn with_plant(mut self, plant_id: EntityId) -> Self {
        self.plant_id = Some(plant_id);
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the contact details.
    pub fn with_contact(mut self, email: impl Into<String>, phone: impl Into<String>) -> Self {
        self.email = email.into();
        self.phone = phone.into();
        self
    }

    /// Display name used in grids, notifications, and absence matching.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Whether the employee is blocked from receiving assignments.
    ///
    /// Either the explicit flag or the status counts; seed data may carry
    /// one without the other.
    pub fn is_locked(&self) -> bool {
        self.locked || self.status == AvailabilityStatus::Locked
    }

    /// Locks the employee.
    ///
    /// Atomic cascade: role resets to unassigned, team membership and
    /// plant assignment are cleared, status becomes locked. Unlocking does
    /// not restore any of these.
    pub fn lock(mut self) -> Self {
        self.locked = true;
        self.status = AvailabilityStatus::Locked;
        self.role = EmployeeRole::Unassigned;
        self.team_ids.clear();
        self.plant_id = None;
        self
    }

    /// Unlocks the employee. Only the status is restored to available;
    /// role, teams, and plant stay unset (the cascade is one-directional).
    pub fn unlock(mut self) -> Self {
        self.locked = false;
        self.status = AvailabilityStatus::Available;
        self
    }
}

impl EmployeeRole {
    /// Whether this role may keep a team staffed on its own.
    pub fn is_supervisory(self) -> bool {
        matches!(self, EmployeeRole::Manager | EmployeeRole::Supervisor)
    }
}

impl fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EmployeeRole::Manager => "Manager",
            EmployeeRole::Supervisor => "Supervisor",
            EmployeeRole::Werknemer => "Werknemer",
            EmployeeRole::Unassigned => "Unassigned",
        };
        f.write_str(s)
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AvailabilityStatus::Available => "Available",
            AvailabilityStatus::Sick => "Sick",
            AvailabilityStatus::OnLeave => "On leave",
            AvailabilityStatus::Locked => "Locked",
        };
        f.write_str(s)
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContractType::FullTime => "Full-time",
            ContractType::PartTime => "Part-time",
            ContractType::Freelance => "Freelance",
        };
        f.write_str(s)
    }
}

impl TableRecord for Employee {
    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => FieldValue::Int(self.id as i64),
            "first_name" => FieldValue::Text(self.first_name.clone()),
            "last_name" => FieldValue::Text(self.last_name.clone()),
            "name" => FieldValue::Text(self.full_name()),
            "role" => FieldValue::Text(self.role.to_string()),
            "status" => FieldValue::Text(self.status.to_string()),
            "department" => FieldValue::Text(self.department.clone()),
            "location" => FieldValue::Text(self.location.clone()),
            "email" => FieldValue::Text(self.email.clone()),
            "contract_type" => FieldValue::Text(self.contract_type.to_string()),
            "locked" => FieldValue::Bool(self.is_locked()),
            _ => FieldValue::Text(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee::new(101, "Joel", "Miller")
            .with_role(EmployeeRole::Supervisor)
            .with_teams(vec![1])
            .with_plant(1)
            .with_department("Operations")
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample().full_name(), "Joel Miller");
        // Single-word display names keep no trailing space
        let e = Employee::new(998, "Werknemer", "");
        assert_eq!(e.full_name(), "Werknemer");
    }

    #[test]
    fn test_lock_cascade() {
        let locked = sample().lock();
        assert!(locked.locked);
        assert_eq!(locked.status, AvailabilityStatus::Locked);
        assert_eq!(locked.role, EmployeeRole::Unassigned);
        assert!(locked.team_ids.is_empty());
        assert_eq!(locked.plant_id, None);
        assert!(locked.is_locked());
    }

    #[test]
    fn test_unlock_does_not_restore() {
        let unlocked = sample().lock().unlock();
        assert!(!unlocked.is_locked());
        assert_eq!(unlocked.status, AvailabilityStatus::Available);
        // One-directional cascade: prior role/teams/plant are gone
        assert_eq!(unlocked.role, EmployeeRole::Unassigned);
        assert!(unlocked.team_ids.is_empty());
        assert_eq!(unlocked.plant_id, None);
    }

    #[test]
    fn test_is_locked_from_status_alone() {
        let e = sample().with_status(AvailabilityStatus::Locked);
        assert!(e.is_locked());
    }

    #[test]
    fn test_supervisory_roles() {
        assert!(EmployeeRole::Manager.is_supervisory());
        assert!(EmployeeRole::Supervisor.is_supervisory());
        assert!(!EmployeeRole::Werknemer.is_supervisory());
        assert!(!EmployeeRole::Unassigned.is_supervisory());
    }

    #[test]
    fn test_table_fields() {
        let e = sample();
        assert_eq!(e.field("id"), FieldValue::Int(101));
        assert_eq!(e.field("role"), FieldValue::Text("Supervisor".into()));
        assert_eq!(e.field("unknown"), FieldValue::Text(String::new()));
    }

    #[test]
    fn test_serde_round_trip() {
        let e = sample();
        let json = serde_json::to_string(&e).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
