//! Domain types for the planning core.
//!
//! Entities mirror the two consoles the crate backs: the master-data
//! admin grids (employees, teams, plants, absences, task definitions)
//! and the operational planning timeline. The task collection is the
//! single mutable source of scheduling truth; the other collections are
//! reference data owned by the caller and passed in explicitly.
//!
//! All types derive `Serialize`/`Deserialize` and implement
//! [`TableRecord`](crate::table::TableRecord) so every admin grid runs
//! through the same table state engine.

mod absence;
mod employee;
mod plant;
mod task;
mod team;

pub use absence::{Absence, AbsenceType, ApprovalStatus};
pub use employee::{AvailabilityStatus, ContractType, Employee, EmployeeRole, Gender};
pub use plant::{Plant, PlantStatus, PlantType};
pub use task::{AssignTarget, Assignee, Priority, Task, TaskDraft, TaskStatus};
pub use team::{MemberRole, Team, TeamMember, TeamStatus};

/// Identifier shared by every entity kind.
pub type EntityId = u32;
