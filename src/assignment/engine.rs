//! Task board: the mutation engine over the task collection.
//!
//! The board is the single owner of scheduling state. Every mutation
//! consults the validator first where the rules apply, appends a
//! notification describing the outcome, and leaves the collection
//! untouched on any denial.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::{validate_assignment, AssignmentContext};
use crate::errors::Violation;
use crate::events::{NotificationKind, NotificationLog};
use crate::models::{AssignTarget, Assignee, EntityId, Task, TaskDraft, TaskStatus};

/// The mutable task collection plus id allocation.
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    next_id: EntityId,
}

impl TaskBoard {
    /// Creates a board over a seed collection. New ids continue after the
    /// highest seeded id.
    pub fn new(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self { tasks, next_id }
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    pub fn get(&self, task_id: EntityId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// The backlog (werkvoorraad): unassigned tasks awaiting placement.
    pub fn backlog(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.is_backlog()).collect()
    }

    /// Number of unassigned tasks.
    pub fn backlog_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_backlog()).count()
    }

    /// Places a task on an employee or team at `date` (drag-drop or
    /// click-to-assign).
    ///
    /// The validator runs first; a denial leaves the board unchanged and
    /// appends an alert. On success the task gets the target, the
    /// resolved display name, a single-day span at `date` (regardless of
    /// any prior duration), and moves to in-progress.
    pub fn assign(
        &mut self,
        task_id: EntityId,
        target: AssignTarget,
        date: NaiveDate,
        ctx: &AssignmentContext<'_>,
        log: &mut NotificationLog,
    ) -> Result<(), Violation> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or(Violation::UnknownTask(task_id))?;

        if let Err(violation) = validate_assignment(&self.tasks[pos], target, date, &self.tasks, ctx)
        {
            warn!(task = task_id, ?target, %date, %violation, "assignment denied");
            log.add(
                "Assignment failed",
                format!("Cannot assign task: {violation}."),
                NotificationKind::Alert,
            );
            return Err(violation);
        }

        let name = ctx
            .display_name(target)
            .ok_or(Violation::UnknownTarget(target))?;

        let task = &mut self.tasks[pos];
        task.assignee = Some(Assignee {
            target,
            name: name.clone(),
        });
        task.start_date = Some(date);
        task.end_date = Some(date);
        task.status = TaskStatus::InProgress;
        let title = task.title.clone();

        info!(task = task_id, ?target, %date, "task assigned");
        log.add(
            "Task assigned",
            format!("Task \"{title}\" was assigned to {name} on {date}."),
            NotificationKind::Info,
        );
        Ok(())
    }

    /// Returns a task to the backlog. Never blocked: assignee and span
    /// are cleared and the status resets to pending.
    pub fn unassign(
        &mut self,
        task_id: EntityId,
        log: &mut NotificationLog,
    ) -> Result<(), Violation> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(Violation::UnknownTask(task_id))?;

        task.assignee = None;
        task.start_date = None;
        task.end_date = None;
        task.status = TaskStatus::Pending;
        let title = task.title.clone();

        debug!(task = task_id, "task unassigned");
        log.add(
            "Assignment removed",
            format!("Task \"{title}\" was returned to the backlog."),
            NotificationKind::Info,
        );
        Ok(())
    }

    /// Creates a task from a draft and returns its id.
    ///
    /// Assignment rules apply only when the draft already carries a
    /// target and a start date; otherwise the task is inserted pending
    /// and unassigned.
    pub fn create(
        &mut self,
        draft: TaskDraft,
        ctx: &AssignmentContext<'_>,
        log: &mut NotificationLog,
    ) -> Result<EntityId, Violation> {
        let id = self.next_id;

        let mut task = Task::new(id, draft.title)
            .with_category(draft.category)
            .with_specifications(draft.specifications)
            .with_plant(draft.plant)
            .with_time_allocation(draft.time_allocation);
        task.description = draft.description;
        if let Some(priority) = draft.priority {
            task.priority = priority;
        }
        task.start_date = draft.start_date;
        task.end_date = draft.end_date;
        task.start_time = draft.start_time;
        task.due_date = draft.due_date;

        if let (Some(target), Some(start)) = (draft.target, draft.start_date) {
            if let Err(violation) = validate_assignment(&task, target, start, &self.tasks, ctx) {
                warn!(?target, %start, %violation, "task creation denied");
                log.add(
                    "Assignment failed",
                    format!("Cannot create task: {violation}."),
                    NotificationKind::Alert,
                );
                return Err(violation);
            }
            let name = ctx
                .display_name(target)
                .ok_or(Violation::UnknownTarget(target))?;
            task.assignee = Some(Assignee { target, name });
            task.status = TaskStatus::InProgress;
        }

        info!(task = id, assigned = task.assignee.is_some(), "task created");
        log.add(
            "Task created",
            format!("Task \"{}\" was created.", task.title),
            NotificationKind::Info,
        );
        self.tasks.push(task);
        self.next_id += 1;
        Ok(id)
    }

    /// Replaces a task wholesale (edit-modal save). The id must already
    /// exist on the board.
    pub fn update(&mut self, task: Task, log: &mut NotificationLog) -> Result<(), Violation> {
        let slot = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or(Violation::UnknownTask(task.id))?;

        let title = task.title.clone();
        *slot = task;

        debug!(task = slot.id, "task updated");
        log.add(
            "Task updated",
            format!("Task \"{title}\" was updated."),
            NotificationKind::Info,
        );
        Ok(())
    }

    /// Removes a task. Only unnecessary or cancelled tasks may go; any
    /// other status is denied and the board stays unchanged.
    pub fn delete(
        &mut self,
        task_id: EntityId,
        log: &mut NotificationLog,
    ) -> Result<(), Violation> {
        let task = self
            .tasks
            .iter()
            .find(|t| t.id == task_id)
            .ok_or(Violation::UnknownTask(task_id))?;

        if !task.status.is_deletable() {
            let violation = Violation::NotDeletable {
                id: task_id,
                status: task.status,
            };
            warn!(task = task_id, status = %task.status, "deletion denied");
            log.add(
                "Deletion failed",
                format!("{violation}."),
                NotificationKind::Alert,
            );
            return Err(violation);
        }

        let title = task.title.clone();
        self.tasks.retain(|t| t.id != task_id);

        info!(task = task_id, "task deleted");
        log.add(
            "Task deleted",
            format!("Task \"{title}\" was removed."),
            NotificationKind::Info,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Absence, AbsenceType, Employee, EmployeeRole, Priority, Team};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn roster() -> (Vec<Employee>, Vec<Team>, Vec<Absence>) {
        let employees = vec![
            Employee::new(101, "Joel", "Miller").with_role(EmployeeRole::Werknemer),
            Employee::new(109, "Lara", "Croft").lock(),
        ];
        let teams = vec![Team::new(2, "WLF")];
        let absences = vec![Absence::new(
            1,
            "Joel Miller",
            AbsenceType::Holiday,
            date(20),
            date(22),
        )];
        (employees, teams, absences)
    }

    fn seeded_board() -> TaskBoard {
        let mut t1 = Task::new(1, "Perimeter Check");
        t1.priority = Priority::High;
        let existing: Vec<Task> = (2..=4)
            .map(|i| {
                Task::new(i, format!("Existing {i}"))
                    .with_assignee(AssignTarget::Employee(101), "Joel Miller")
                    .with_span(date(10), date(10))
            })
            .collect();
        let mut tasks = vec![t1];
        tasks.extend(existing);
        TaskBoard::new(tasks)
    }

    #[test]
    fn test_drag_drop_assignment_scenario() {
        let (employees, teams, absences) = roster();
        let ctx = AssignmentContext::new(&employees, &teams, &absences);
        let mut board = seeded_board();
        let mut log = NotificationLog::new();

        // Backlog task dropped onto an employee with 3 existing tasks
        board
            .assign(1, AssignTarget::Employee(101), date(10), &ctx, &mut log)
            .unwrap();

        let task = board.get(1).unwrap();
        assert!(task.is_assigned_to(AssignTarget::Employee(101)));
        assert_eq!(task.assignee.as_ref().unwrap().name, "Joel Miller");
        assert_eq!(task.start_date, Some(date(10)));
        assert_eq!(task.end_date, Some(date(10)));
        assert_eq!(task.status, TaskStatus::InProgress);

        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].kind, NotificationKind::Info);
        assert_eq!(log.entries()[0].title, "Task assigned");
    }

    #[test]
    fn test_denied_assignment_leaves_board_unchanged() {
        let (employees, teams, absences) = roster();
        let ctx = AssignmentContext::new(&employees, &teams, &absences);
        let mut board = seeded_board();
        let before = board.tasks().to_vec();
        let mut log = NotificationLog::new();

        // Locked target
        let result = board.assign(1, AssignTarget::Employee(109), date(10), &ctx, &mut log);
        assert_eq!(result, Err(Violation::EntityLocked));
        assert_eq!(board.tasks(), &before[..]);

        // Absent target
        let result = board.assign(1, AssignTarget::Employee(101), date(21), &ctx, &mut log);
        assert!(matches!(result, Err(Violation::EntityAbsent { .. })));
        assert_eq!(board.tasks(), &before[..]);

        // One alert per denial
        assert_eq!(log.len(), 2);
        assert!(log
            .entries()
            .iter()
            .all(|n| n.kind == NotificationKind::Alert));
    }

    #[test]
    fn test_drag_drop_collapses_span_to_one_day() {
        let (employees, teams, absences) = roster();
        let ctx = AssignmentContext::new(&employees, &teams, &absences);
        let mut board = TaskBoard::new(vec![Task::new(1, "Long Task")
            .with_span(date(1), date(5))
            .with_assignee(AssignTarget::Team(2), "WLF")]);
        let mut log = NotificationLog::new();

        board
            .assign(1, AssignTarget::Employee(101), date(12), &ctx, &mut log)
            .unwrap();
        let task = board.get(1).unwrap();
        assert_eq!(task.start_date, Some(date(12)));
        assert_eq!(task.end_date, Some(date(12)));
    }

    #[test]
    fn test_team_assignment_is_permissive() {
        let (employees, teams, absences) = roster();
        let ctx = AssignmentContext::new(&employees, &teams, &absences);
        let mut board = seeded_board();
        let mut log = NotificationLog::new();

        board
            .assign(1, AssignTarget::Team(2), date(10), &ctx, &mut log)
            .unwrap();
        assert_eq!(board.get(1).unwrap().assignee.as_ref().unwrap().name, "WLF");
    }

    #[test]
    fn test_unassign_clears_everything() {
        let (employees, teams, absences) = roster();
        let ctx = AssignmentContext::new(&employees, &teams, &absences);
        let mut board = seeded_board();
        let mut log = NotificationLog::new();

        board
            .assign(1, AssignTarget::Employee(101), date(10), &ctx, &mut log)
            .unwrap();
        board.unassign(1, &mut log).unwrap();

        let task = board.get(1).unwrap();
        assert!(task.is_backlog());
        assert_eq!(task.start_date, None);
        assert_eq!(task.end_date, None);
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_backlog_tracking() {
        let board = seeded_board();
        assert_eq!(board.backlog_count(), 1);
        assert_eq!(board.backlog()[0].id, 1);
    }

    #[test]
    fn test_create_unassigned_inserts_pending() {
        let (employees, teams, absences) = roster();
        let ctx = AssignmentContext::new(&employees, &teams, &absences);
        let mut board = seeded_board();
        let mut log = NotificationLog::new();

        let draft = TaskDraft {
            title: "Fence Painting".into(),
            category: "Maintenance".into(),
            specifications: "Standard procedure.".into(),
            time_allocation: "3h".into(),
            plant: "Ghent Main".into(),
            ..TaskDraft::default()
        };
        let id = board.create(draft, &ctx, &mut log).unwrap();

        assert_eq!(id, 5); // continues after the highest seeded id
        let task = board.get(id).unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.is_backlog());
    }

    #[test]
    fn test_create_with_assignment_validates() {
        let (employees, teams, absences) = roster();
        let ctx = AssignmentContext::new(&employees, &teams, &absences);
        let mut board = seeded_board();
        let mut log = NotificationLog::new();

        // Start date inside Joel's absence → denied, nothing inserted
        let draft = TaskDraft {
            title: "Doomed".into(),
            target: Some(AssignTarget::Employee(101)),
            start_date: Some(date(21)),
            end_date: Some(date(21)),
            ..TaskDraft::default()
        };
        let count_before = board.tasks().len();
        assert!(board.create(draft, &ctx, &mut log).is_err());
        assert_eq!(board.tasks().len(), count_before);

        // Valid assigned creation goes in as in-progress
        let draft = TaskDraft {
            title: "Supply Run".into(),
            target: Some(AssignTarget::Employee(101)),
            start_date: Some(date(11)),
            end_date: Some(date(11)),
            ..TaskDraft::default()
        };
        let id = board.create(draft, &ctx, &mut log).unwrap();
        let task = board.get(id).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.assignee.as_ref().unwrap().name, "Joel Miller");
    }

    #[test]
    fn test_update_replaces_by_id() {
        let (employees, teams, absences) = roster();
        let _ctx = AssignmentContext::new(&employees, &teams, &absences);
        let mut board = seeded_board();
        let mut log = NotificationLog::new();

        let mut edited = board.get(1).unwrap().clone();
        edited.title = "Perimeter Check (north)".into();
        board.update(edited, &mut log).unwrap();
        assert_eq!(board.get(1).unwrap().title, "Perimeter Check (north)");

        let ghost = Task::new(999, "Ghost");
        assert_eq!(
            board.update(ghost, &mut log),
            Err(Violation::UnknownTask(999))
        );
    }

    #[test]
    fn test_delete_guard() {
        let mut board = TaskBoard::new(vec![
            Task::new(1, "Keep").with_status(TaskStatus::InProgress),
            Task::new(2, "Drop").with_status(TaskStatus::Cancelled),
            Task::new(3, "Also keep").with_status(TaskStatus::Completed),
            Task::new(4, "Drop too").with_status(TaskStatus::Unnecessary),
        ]);
        let mut log = NotificationLog::new();

        for id in [1, 3] {
            let result = board.delete(id, &mut log);
            assert!(matches!(result, Err(Violation::NotDeletable { .. })), "id {id}");
        }
        assert_eq!(board.tasks().len(), 4);

        board.delete(2, &mut log).unwrap();
        board.delete(4, &mut log).unwrap();
        assert_eq!(board.tasks().len(), 2);
    }

    #[test]
    fn test_unknown_task_everywhere() {
        let (employees, teams, absences) = roster();
        let ctx = AssignmentContext::new(&employees, &teams, &absences);
        let mut board = seeded_board();
        let mut log = NotificationLog::new();

        assert_eq!(
            board.assign(999, AssignTarget::Team(2), date(10), &ctx, &mut log),
            Err(Violation::UnknownTask(999))
        );
        assert_eq!(board.unassign(999, &mut log), Err(Violation::UnknownTask(999)));
        assert_eq!(board.delete(999, &mut log), Err(Violation::UnknownTask(999)));
    }
}
