//! Assignment validation.
//!
//! [`validate_assignment`] is a pure decision function: given a task, a
//! target, a date, and a snapshot of the collections, it answers allow or
//! deny without mutating anything. Checks run in a fixed order and the
//! first failing check wins:
//!
//! 1. employee target locked → [`Violation::EntityLocked`]
//! 2. an absence covers the date → [`Violation::EntityAbsent`]
//! 3. the employee already carries [`MAX_DAILY_TASKS`] tasks on the date
//!    → [`Violation::DailyCapacityExceeded`]
//!
//! Team targets carry no checks: team capacity is not modeled.
//!
//! The task being placed is excluded from its own capacity count, so
//! re-dragging an already-assigned task onto the same day never
//! double-counts itself.

use chrono::NaiveDate;

use super::AssignmentContext;
use crate::errors::Violation;
use crate::models::{AssignTarget, Employee, Task};

/// Maximum number of tasks an employee may carry on a single day.
pub const MAX_DAILY_TASKS: usize = 8;

/// Decides whether `task` may be placed on `target` at `date`.
///
/// Pure: no collection is touched. On deny, the first violated rule is
/// returned. An unresolvable employee target yields
/// [`Violation::UnknownTarget`].
pub fn validate_assignment(
    task: &Task,
    target: AssignTarget,
    date: NaiveDate,
    tasks: &[Task],
    ctx: &AssignmentContext<'_>,
) -> Result<(), Violation> {
    let employee = match target {
        // Teams are explicitly permissive
        AssignTarget::Team(_) => return Ok(()),
        AssignTarget::Employee(id) => ctx
            .employee(id)
            .ok_or(Violation::UnknownTarget(target))?,
    };

    if employee.is_locked() {
        return Err(Violation::EntityLocked);
    }

    if ctx.absences_for(employee).any(|a| a.covers(date)) {
        return Err(Violation::EntityAbsent {
            name: employee.full_name(),
            date,
        });
    }

    if daily_task_count(tasks, employee, date, task) >= MAX_DAILY_TASKS {
        return Err(Violation::DailyCapacityExceeded { date });
    }

    Ok(())
}

/// Tasks already occupying `date` for `employee`, excluding the task
/// being placed.
fn daily_task_count(tasks: &[Task], employee: &Employee, date: NaiveDate, moving: &Task) -> usize {
    tasks
        .iter()
        .filter(|t| t.id != moving.id)
        .filter(|t| t.is_assigned_to(AssignTarget::Employee(employee.id)))
        .filter(|t| t.is_active_on(date))
        .count()
}
