//! Absence model.
//!
//! An absence occupying a date blocks new task assignment to that
//! employee on that date and overrides task cells in the timeline.
//!
//! Absences reference their subject by display name rather than by id —
//! behavior preserved from the system this crate models, where absence
//! requests arrive as free-text names. Name collisions therefore merge
//! absence records; see DESIGN.md.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::EntityId;
use crate::table::{FieldValue, TableRecord};

/// A registered absence period for an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Absence {
    /// Unique absence identifier.
    pub id: EntityId,
    /// Full display name of the absent employee.
    pub employee_name: String,
    pub absence_type: AbsenceType,
    pub start_date: NaiveDate,
    /// Last day of the absence, inclusive.
    pub end_date: NaiveDate,
    pub status: ApprovalStatus,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbsenceType {
    Illness,
    Holiday,
    Personal,
    ParentalLeave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Denied,
}

impl Absence {
    /// Creates a pending absence for the inclusive period [start, end].
    pub fn new(
        id: EntityId,
        employee_name: impl Into<String>,
        absence_type: AbsenceType,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            employee_name: employee_name.into(),
            absence_type,
            start_date,
            end_date,
            status: ApprovalStatus::Pending,
            reason: None,
        }
    }

    /// Sets the approval status.
    pub fn with_status(mut self, status: ApprovalStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the stated reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Whether the absence occupies `date` (inclusive on both ends).
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

impl fmt::Display for AbsenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AbsenceType::Illness => "Illness",
            AbsenceType::Holiday => "Holiday",
            AbsenceType::Personal => "Personal",
            AbsenceType::ParentalLeave => "Parental leave",
        };
        f.write_str(s)
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApprovalStatus::Pending => "Pending",
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Denied => "Denied",
        };
        f.write_str(s)
    }
}

impl TableRecord for Absence {
    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => FieldValue::Int(self.id as i64),
            "employee_name" => FieldValue::Text(self.employee_name.clone()),
            "type" => FieldValue::Text(self.absence_type.to_string()),
            "start_date" => FieldValue::Text(self.start_date.to_string()),
            "end_date" => FieldValue::Text(self.end_date.to_string()),
            "status" => FieldValue::Text(self.status.to_string()),
            _ => FieldValue::Text(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_covers_inclusive() {
        let a = Absence::new(
            1,
            "Joel Miller",
            AbsenceType::Holiday,
            date(2025, 12, 10),
            date(2025, 12, 15),
        );
        assert!(!a.covers(date(2025, 12, 9)));
        assert!(a.covers(date(2025, 12, 10)));
        assert!(a.covers(date(2025, 12, 15)));
        assert!(!a.covers(date(2025, 12, 16)));
    }

    #[test]
    fn test_single_day_absence() {
        let a = Absence::new(
            2,
            "Ellie Williams",
            AbsenceType::Illness,
            date(2025, 12, 4),
            date(2025, 12, 4),
        )
        .with_status(ApprovalStatus::Approved)
        .with_reason("Flu");
        assert!(a.covers(date(2025, 12, 4)));
        assert!(!a.covers(date(2025, 12, 5)));
        assert_eq!(a.status, ApprovalStatus::Approved);
    }

    #[test]
    fn test_table_fields() {
        let a = Absence::new(
            3,
            "Abby Anderson",
            AbsenceType::Illness,
            date(2025, 12, 8),
            date(2025, 12, 9),
        );
        assert_eq!(a.field("type"), FieldValue::Text("Illness".into()));
        assert_eq!(a.field("status"), FieldValue::Text("Pending".into()));
        assert_eq!(a.field("start_date"), FieldValue::Text("2025-12-08".into()));
    }
}
