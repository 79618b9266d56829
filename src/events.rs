//! Notification log: the domain event sink.
//!
//! An append-only, newest-first log of user-facing notifications. The
//! assignment engine writes an entry per outcome (assigned, denied,
//! created, updated, unassigned, deleted); absence workflows append
//! holiday requests with their payload. The log carries no scheduling
//! logic — it only records and counts.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::EntityId;

/// A user-facing notification entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: EntityId,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub kind: NotificationKind,
    pub read: bool,
    /// Subject of a holiday request, when applicable.
    pub person: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reason: Option<String>,
}

/// How the UI renders the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Alert,
    Info,
    HolidayRequest,
}

/// Append-only notification log, newest entries first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationLog {
    entries: Vec<Notification>,
    next_id: EntityId,
}

impl NotificationLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends an unread entry at the front and returns its id.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(
            0,
            Notification {
                id,
                title: title.into(),
                message: message.into(),
                timestamp: Utc::now(),
                kind,
                read: false,
                person: None,
                start_date: None,
                end_date: None,
                reason: None,
            },
        );
        id
    }

    /// Appends a holiday request entry with its payload.
    pub fn add_holiday_request(
        &mut self,
        person: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: Option<String>,
    ) -> EntityId {
        let id = self.add(
            "Holiday request",
            "Wants to take leave.",
            NotificationKind::HolidayRequest,
        );
        // add() prepends, so the new entry is at the front
        let entry = &mut self.entries[0];
        entry.person = Some(person.into());
        entry.start_date = Some(start_date);
        entry.end_date = Some(end_date);
        entry.reason = reason;
        id
    }

    /// Marks one entry as read.
    pub fn mark_read(&mut self, id: EntityId) {
        if let Some(entry) = self.entries.iter_mut().find(|n| n.id == id) {
            entry.read = true;
        }
    }

    /// Marks every entry as read.
    pub fn mark_all_read(&mut self) {
        for entry in &mut self.entries {
            entry.read = true;
        }
    }

    /// Removes one entry.
    pub fn delete(&mut self, id: EntityId) {
        self.entries.retain(|n| n.id != id);
    }

    /// Number of unread entries.
    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
