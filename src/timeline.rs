//! Timeline/grid projection.
//!
//! Turns the caller-owned collections into the row/cell structure the
//! planning timeline renders: a date window (three weeks by default), a
//! flattened row hierarchy (team header rows followed by their member
//! employee rows while expanded), and per-cell task/absence content.
//!
//! Projection is a pure read: toggling a team's expansion or shifting the
//! window changes which rows come out, never the underlying data. When an
//! absence covers a date, the cell carries the absence and no task ids at
//! all — absence precedence is decided here, not left to the renderer.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{Absence, AbsenceType, AssignTarget, Employee, EmployeeRole, EntityId, Task, Team};

/// The contiguous date range rendered by the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineWindow {
    pub start: NaiveDate,
    pub days: u32,
}

/// Default window length: three weeks.
pub const DEFAULT_WINDOW_DAYS: u32 = 21;

impl TimelineWindow {
    /// Creates a window of the default three-week length.
    pub fn new(start: NaiveDate) -> Self {
        Self {
            start,
            days: DEFAULT_WINDOW_DAYS,
        }
    }

    /// Creates a window of an explicit length.
    pub fn with_days(start: NaiveDate, days: u32) -> Self {
        Self { start, days }
    }

    /// Shifts the window by whole days (negative shifts go back).
    pub fn shift(self, days: i64) -> Self {
        let start = if days >= 0 {
            self.start + Days::new(days as u64)
        } else {
            self.start - Days::new(days.unsigned_abs())
        };
        Self { start, ..self }
    }

    /// The dates in the window, in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.days as u64).map(|i| self.start + Days::new(i))
    }

    /// Whether `date` falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates().any(|d| d == date)
    }
}

/// Per-team expand/collapse state, keyed by team id.
///
/// Teams are expanded by default; only collapsed ids are stored, so a
/// team never seen before renders expanded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpansionState {
    collapsed: HashSet<EntityId>,
}

impl ExpansionState {
    /// Creates the default state (everything expanded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a team's member rows are emitted.
    pub fn is_expanded(&self, team_id: EntityId) -> bool {
        !self.collapsed.contains(&team_id)
    }

    /// Flips a team between expanded and collapsed.
    pub fn toggle(&mut self, team_id: EntityId) {
        if !self.collapsed.remove(&team_id) {
            self.collapsed.insert(team_id);
        }
    }

    /// Collapses a team.
    pub fn collapse(&mut self, team_id: EntityId) {
        self.collapsed.insert(team_id);
    }

    /// Expands a team.
    pub fn expand(&mut self, team_id: EntityId) {
        self.collapsed.remove(&team_id);
    }
}

/// The projected grid: ordered rows, one cell per window date each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineProjection {
    pub window: TimelineWindow,
    pub rows: Vec<TimelineRow>,
}

/// One emitted row: a team header or an employee line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineRow {
    pub kind: RowKind,
    /// Display label: team name or employee full name.
    pub label: String,
    /// 0 for top-level rows, 1 for team members.
    pub indent: u8,
    pub cells: Vec<TimelineCell>,
}

/// What kind of entity a row represents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RowKind {
    Team {
        id: EntityId,
        member_count: usize,
        expanded: bool,
        color: Option<String>,
    },
    Employee {
        id: EntityId,
        role: EmployeeRole,
        /// Color inherited from the enclosing team row, if any.
        team_color: Option<String>,
    },
}

/// The (row, date) intersection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineCell {
    pub date: NaiveDate,
    pub weekend: bool,
    /// Tasks active on this date for the row's entity. Empty whenever an
    /// absence covers the date.
    pub task_ids: Vec<EntityId>,
    /// Covering absence, employee rows only.
    pub absence: Option<AbsenceType>,
}

impl TimelineRow {
    /// The row's entity id.
    pub fn entity_id(&self) -> EntityId {
        match self.kind {
            RowKind::Team { id, .. } | RowKind::Employee { id, .. } => id,
        }
    }

    /// Whether this is a team header row.
    pub fn is_team(&self) -> bool {
        matches!(self.kind, RowKind::Team { .. })
    }
}

/// Projects the timeline grid for a window.
///
/// Row order: each team in input order as a header row, followed by its
/// member employee rows (members resolved against `employees`; entries
/// with no matching employee are skipped) while the team is expanded.
/// With no teams supplied, every employee becomes a top-level row (flat
/// mode).
pub fn project(
    window: TimelineWindow,
    teams: &[Team],
    employees: &[Employee],
    tasks: &[Task],
    absences: &[Absence],
    expansion: &ExpansionState,
) -> TimelineProjection {
    let mut rows = Vec::new();

    if teams.is_empty() {
        for employee in employees {
            rows.push(employee_row(window, employee, None, 0, tasks, absences));
        }
    } else {
        for team in teams {
            let expanded = expansion.is_expanded(team.id);
            rows.push(team_row(window, team, expanded, tasks));
            if !expanded {
                continue;
            }
            for member in &team.members {
                let Some(employee) = employees.iter().find(|e| e.id == member.id) else {
                    continue;
                };
                rows.push(employee_row(
                    window,
                    employee,
                    team.color.clone(),
                    1,
                    tasks,
                    absences,
                ));
            }
        }
    }

    TimelineProjection { window, rows }
}

fn team_row(window: TimelineWindow, team: &Team, expanded: bool, tasks: &[Task]) -> TimelineRow {
    let target = AssignTarget::Team(team.id);
    let cells = window
        .dates()
        .map(|date| TimelineCell {
            date,
            weekend: is_weekend(date),
            task_ids: active_task_ids(tasks, target, date),
            absence: None,
        })
        .collect();

    TimelineRow {
        kind: RowKind::Team {
            id: team.id,
            member_count: team.member_count(),
            expanded,
            color: team.color.clone(),
        },
        label: team.name.clone(),
        indent: 0,
        cells,
    }
}

fn employee_row(
    window: TimelineWindow,
    employee: &Employee,
    team_color: Option<String>,
    indent: u8,
    tasks: &[Task],
    absences: &[Absence],
) -> TimelineRow {
    let target = AssignTarget::Employee(employee.id);
    let name = employee.full_name();
    let cells = window
        .dates()
        .map(|date| {
            let absence = absences
                .iter()
                .find(|a| a.employee_name == name && a.covers(date))
                .map(|a| a.absence_type);
            // Absence precedence: the cell carries no tasks at all
            let task_ids = if absence.is_some() {
                Vec::new()
            } else {
                active_task_ids(tasks, target, date)
            };
            TimelineCell {
                date,
                weekend: is_weekend(date),
                task_ids,
                absence,
            }
        })
        .collect();

    TimelineRow {
        kind: RowKind::Employee {
            id: employee.id,
            role: employee.role,
            team_color,
        },
        label: name,
        indent,
        cells,
    }
}

fn active_task_ids(tasks: &[Task], target: AssignTarget, date: NaiveDate) -> Vec<EntityId> {
    tasks
        .iter()
        .filter(|t| t.is_assigned_to(target) && t.is_active_on(date))
        .map(|t| t.id)
        .collect()
}

/// Whether a date falls on a weekend.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
