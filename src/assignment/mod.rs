//! Task assignment: validation and mutation.
//!
//! Validation ([`validator`]) and mutation ([`engine`]) are deliberately
//! separate: the validator is a pure decision function that can be tested
//! against any collection snapshot, while the [`TaskBoard`] owns the task
//! collection and applies accepted assignments, emitting an event per
//! outcome.
//!
//! Reference data (employees, teams, absences) reaches both through an
//! explicit [`AssignmentContext`] — never through ambient globals.

mod context;
mod engine;
mod validator;

pub use context::AssignmentContext;
pub use engine::TaskBoard;
pub use validator::{validate_assignment, MAX_DAILY_TASKS};
