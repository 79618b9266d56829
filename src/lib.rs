//! In-memory workforce planning core.
//!
//! Provides the domain model and decision logic behind a workforce
//! planning product: a master-data side (employees, teams, plants, task
//! definitions, absences, each browsable through a sortable/filterable
//! table state) and an operational side (a drag-and-drop assignment
//! timeline with validation, capacity limits, and notifications).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Employee`, `Team`, `Plant`, `Task`,
//!   `Absence`, and the `AssignTarget` union
//! - **`table`**: Generic sort/filter state for the admin grids
//! - **`policy`**: Roster integrity rules (team membership, role changes,
//!   form validation)
//! - **`assignment`**: Drag-and-drop validation and the task board
//!   mutation engine
//! - **`timeline`**: Projection of teams, employees, tasks, and absences
//!   onto a date-window grid
//! - **`events`**: The notification log written by the mutation engine
//! - **`export`**: CSV export of derived table views
//! - **`actor`**: The signed-in user's role/read-only context
//!
//! # Architecture
//!
//! Everything is in-memory and synchronous: collections are plain `Vec`s
//! owned by the caller, decision functions are pure over borrowed
//! snapshots ([`assignment::AssignmentContext`]), and the only stateful
//! pieces are [`table::TableState`], [`assignment::TaskBoard`], and
//! [`events::NotificationLog`]. There is no persistence or network
//! layer.

pub mod actor;
pub mod assignment;
pub mod errors;
pub mod events;
pub mod export;
pub mod models;
pub mod policy;
pub mod table;
pub mod timeline;

pub use errors::Violation;
