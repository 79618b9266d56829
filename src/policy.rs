//! Cross-entity roster invariants and form completeness checks.
//!
//! These rules guard the Employee-edit boundary:
//!
//! - a team referenced by scheduling never loses its last supervisory
//!   member (Supervisor or Manager) through a role change or a team exit;
//! - only managers may belong to more than one team;
//! - creation forms must carry every mandatory field before an entity is
//!   admitted into a collection.
//!
//! Everything here is pure: callers pass the collections in explicitly
//! and get either `Ok(())` or the full violation set back, so a denied
//! save leaves the prior entity unchanged and per-field messages can be
//! rendered from the result.

use chrono::NaiveDate;

use crate::errors::Violation;
use crate::models::{
    AvailabilityStatus, Employee, EmployeeRole, EntityId, Gender, TaskDraft, Team,
};

/// Checks the multi-team rule: non-managers hold at most one team.
pub fn can_assign_teams(role: EmployeeRole, team_ids: &[EntityId]) -> Result<(), Violation> {
    if role != EmployeeRole::Manager && team_ids.len() > 1 {
        return Err(Violation::MultiTeamNotAllowed);
    }
    Ok(())
}

/// Checks whether changing `employee` to `new_role` / `new_team_ids`
/// would strip a team of its last supervisory member.
///
/// Only edits of currently supervisory employees can violate the rule.
/// For every team the employee supervises today, the edit passes if the
/// employee remains a supervisory member of it, or if some other
/// employee in the roster also holds a supervisory role there.
pub fn can_change_role(
    employee: &Employee,
    new_role: EmployeeRole,
    new_team_ids: &[EntityId],
    employees: &[Employee],
    teams: &[Team],
) -> Result<(), Violation> {
    if !employee.role.is_supervisory() {
        return Ok(());
    }

    for &team_id in &employee.team_ids {
        let still_supervising = new_role.is_supervisory() && new_team_ids.contains(&team_id);
        if still_supervising {
            continue;
        }

        let another_supervisor = employees.iter().any(|e| {
            e.id != employee.id && e.role.is_supervisory() && e.team_ids.contains(&team_id)
        });
        if !another_supervisor {
            let team = teams
                .iter()
                .find(|t| t.id == team_id)
                .map(|t| t.name.clone())
                .unwrap_or_else(|| format!("team {team_id}"));
            return Err(Violation::LastSupervisorViolation { team });
        }
    }

    Ok(())
}

/// Employee creation/edit form. All mandatory fields are optional here so
/// the completeness check can report exactly which ones are missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub email: String,
    pub phone: String,
    pub role: Option<EmployeeRole>,
    pub plant_id: Option<EntityId>,
    pub address: String,
    pub status: Option<AvailabilityStatus>,
    pub team_ids: Vec<EntityId>,
}

/// Checks an employee form for mandatory fields and the multi-team rule.
///
/// Returns every violation at once so the caller can render per-field
/// messages in a single pass.
pub fn validate_employee_form(form: &EmployeeForm) -> Result<(), Vec<Violation>> {
    let mut violations = Vec::new();
    let mut require = |present: bool, field: &'static str| {
        if !present {
            violations.push(Violation::ValidationRequired { field });
        }
    };

    require(!form.first_name.trim().is_empty(), "first_name");
    require(!form.last_name.trim().is_empty(), "last_name");
    require(form.birth_date.is_some(), "birth_date");
    require(!form.email.trim().is_empty(), "email");
    require(!form.phone.trim().is_empty(), "phone");
    require(form.role.is_some(), "role");
    require(form.plant_id.is_some(), "plant_id");
    require(!form.address.trim().is_empty(), "address");
    require(form.status.is_some(), "status");

    if let Some(role) = form.role {
        if let Err(v) = can_assign_teams(role, &form.team_ids) {
            violations.push(v);
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Checks a task draft for the fields mandatory at creation time.
pub fn validate_task_form(draft: &TaskDraft) -> Result<(), Vec<Violation>> {
    let mut violations = Vec::new();
    let mut require = |present: bool, field: &'static str| {
        if !present {
            violations.push(Violation::ValidationRequired { field });
        }
    };

    require(!draft.title.trim().is_empty(), "title");
    require(!draft.category.trim().is_empty(), "category");
    require(!draft.specifications.trim().is_empty(), "specifications");
    require(!draft.time_allocation.trim().is_empty(), "time_allocation");
    require(!draft.plant.trim().is_empty(), "plant");
    require(draft.start_date.is_some(), "start_date");
    require(draft.end_date.is_some(), "end_date");

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
