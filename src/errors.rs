//! Recoverable violation taxonomy.
//!
//! Every rule in the crate reports failure through [`Violation`]: assignment
//! denials, deletion guards, cross-entity invariants, and missing form
//! fields. All variants are recoverable and surface to the caller as a
//! denial reason — nothing here is ever raised as a panic, and a denied
//! operation leaves the underlying collections untouched.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{AssignTarget, EntityId, TaskStatus};

/// A rule violation reported by validators and mutation entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// The target employee is locked and cannot receive assignments.
    #[error("target is locked and cannot receive assignments")]
    EntityLocked,

    /// An absence covers the requested date for the target employee.
    #[error("{name} is absent on {date}")]
    EntityAbsent { name: String, date: NaiveDate },

    /// The target employee already carries the daily maximum of tasks.
    #[error("daily limit of 8 tasks reached on {date}")]
    DailyCapacityExceeded { date: NaiveDate },

    /// Only tasks marked unnecessary or cancelled may be deleted.
    #[error("task {id} cannot be deleted while {status}")]
    NotDeletable { id: EntityId, status: TaskStatus },

    /// The edit would leave a team without any supervisory member.
    #[error("cannot save: {team} needs at least one supervisor")]
    LastSupervisorViolation { team: String },

    /// Only managers may belong to more than one team.
    #[error("only managers may belong to multiple teams")]
    MultiTeamNotAllowed,

    /// A mandatory form field is missing.
    #[error("{field} is required")]
    ValidationRequired { field: &'static str },

    /// The referenced task does not exist in the board.
    #[error("unknown task {0}")]
    UnknownTask(EntityId),

    /// The assignment target does not resolve to a known entity.
    #[error("unknown assignment target {0:?}")]
    UnknownTarget(AssignTarget),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_messages() {
        let v = Violation::EntityAbsent {
            name: "Joel Miller".into(),
            date: NaiveDate::from_ymd_opt(2025, 12, 10).unwrap(),
        };
        assert_eq!(v.to_string(), "Joel Miller is absent on 2025-12-10");

        let v = Violation::ValidationRequired { field: "title" };
        assert_eq!(v.to_string(), "title is required");

        let v = Violation::NotDeletable {
            id: 7,
            status: TaskStatus::InProgress,
        };
        assert_eq!(v.to_string(), "task 7 cannot be deleted while in progress");
    }
}
