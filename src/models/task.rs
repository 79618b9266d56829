//! Task model.
//!
//! A task moves through a simple lifecycle: created unassigned (pending,
//! no dates), placed on an employee or team via the assignment engine
//! (gains an assignee and a single-day span, becomes in-progress), and
//! possibly unassigned back into the backlog. Deletion is only allowed
//! for tasks marked unnecessary or cancelled.
//!
//! The assignment target is a tagged union ([`AssignTarget`]) rather than
//! an id plus a type string, so the validator and the timeline projector
//! can match on it exhaustively.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::EntityId;
use crate::table::{FieldValue, TableRecord};

/// A unit of work to be placed on the planning timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: EntityId,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    /// Mandatory free-text work instructions.
    pub specifications: String,
    pub priority: Priority,
    pub status: TaskStatus,
    /// Current placement, if any.
    pub assignee: Option<Assignee>,
    /// First day of the scheduled span.
    pub start_date: Option<NaiveDate>,
    /// Last day of the span, inclusive. `None` with a start date means
    /// the task stays visible on every later day.
    pub end_date: Option<NaiveDate>,
    /// Time-of-day hint for the single-employee day grid.
    pub start_time: Option<NaiveTime>,
    pub due_date: Option<NaiveDate>,
    /// Free-text effort estimate (e.g. "2h").
    pub time_allocation: String,
    /// Name of the plant the task belongs to.
    pub plant: String,
}

/// Where a task is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignee {
    pub target: AssignTarget,
    /// Denormalized display name of the target at assignment time.
    pub name: String,
}

/// Assignment target: an employee or a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignTarget {
    Employee(EntityId),
    Team(EntityId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Blocked,
    Unnecessary,
    Cancelled,
}

/// Input for task creation; the board allocates the id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub specifications: String,
    pub priority: Option<Priority>,
    pub target: Option<AssignTarget>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub due_date: Option<NaiveDate>,
    pub time_allocation: String,
    pub plant: String,
}

impl Task {
    /// Creates a pending, unassigned task.
    pub fn new(id: EntityId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            category: String::new(),
            specifications: String::new(),
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            assignee: None,
            start_date: None,
            end_date: None,
            start_time: None,
            due_date: None,
            time_allocation: String::new(),
            plant: String::new(),
        }
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the work instructions.
    pub fn with_specifications(mut self, specifications: impl Into<String>) -> Self {
        self.specifications = specifications.into();
        self
    }

    /// Places the task on a target with a denormalized display name.
    pub fn with_assignee(mut self, target: AssignTarget, name: impl Into<String>) -> Self {
        self.assignee = Some(Assignee {
            target,
            name: name.into(),
        });
        self
    }

    /// Sets the scheduled span (inclusive).
    pub fn with_span(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Sets the plant name.
    pub fn with_plant(mut self, plant: impl Into<String>) -> Self {
        self.plant = plant.into();
        self
    }

    /// Sets the effort estimate.
    pub fn with_time_allocation(mut self, allocation: impl Into<String>) -> Self {
        self.time_allocation = allocation.into();
        self
    }

    /// Whether the task occupies `date`.
    ///
    /// The span is inclusive on both ends; a task with a start date but no
    /// end date remains active on every date at or after the start.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= date && date <= end,
            (Some(start), None) => date >= start,
            (None, _) => false,
        }
    }

    /// Whether the task sits in the backlog (werkvoorraad).
    pub fn is_backlog(&self) -> bool {
        self.assignee.is_none()
    }

    /// Whether the task is currently placed on `target`.
    pub fn is_assigned_to(&self, target: AssignTarget) -> bool {
        self.assignee.as_ref().is_some_and(|a| a.target == target)
    }
}

impl AssignTarget {
    /// The target's entity id, regardless of kind.
    pub fn id(self) -> EntityId {
        match self {
            AssignTarget::Employee(id) | AssignTarget::Team(id) => id,
        }
    }
}

impl TaskStatus {
    /// Only unnecessary or cancelled tasks may be removed from the board.
    pub fn is_deletable(self) -> bool {
        matches!(self, TaskStatus::Unnecessary | TaskStatus::Cancelled)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Blocked => "blocked",
            TaskStatus::Unnecessary => "unnecessary",
            TaskStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        };
        f.write_str(s)
    }
}

impl TableRecord for Task {
    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => FieldValue::Int(self.id as i64),
            "title" => FieldValue::Text(self.title.clone()),
            "category" => FieldValue::Text(self.category.clone()),
            "status" => FieldValue::Text(self.status.to_string()),
            "priority" => FieldValue::Text(self.priority.to_string()),
            "plant" => FieldValue::Text(self.plant.clone()),
            "assigned_to" => FieldValue::Text(
                self.assignee
                    .as_ref()
                    .map(|a| a.name.clone())
                    .unwrap_or_default(),
            ),
            "start_date" => {
                FieldValue::Text(self.start_date.map(|d| d.to_string()).unwrap_or_default())
            }
            "due_date" => {
                FieldValue::Text(self.due_date.map(|d| d.to_string()).unwrap_or_default())
            }
            _ => FieldValue::Text(String::new()),
        }
    }
}
