//! Reference data passed into assignment operations.

use crate::models::{Absence, AssignTarget, Employee, EntityId, Team};

/// Borrowed view of the roster collections an assignment decision needs.
///
/// Built fresh per call site from caller-owned collections; holding it is
/// cheap and keeps the validator and the board free of global state.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentContext<'a> {
    pub employees: &'a [Employee],
    pub teams: &'a [Team],
    pub absences: &'a [Absence],
}

impl<'a> AssignmentContext<'a> {
    /// Creates a context over the given collections.
    pub fn new(employees: &'a [Employee], teams: &'a [Team], absences: &'a [Absence]) -> Self {
        Self {
            employees,
            teams,
            absences,
        }
    }

    /// Looks up an employee by id.
    pub fn employee(&self, id: EntityId) -> Option<&'a Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Looks up a team by id.
    pub fn team(&self, id: EntityId) -> Option<&'a Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Resolves the display name of an assignment target.
    pub fn display_name(&self, target: AssignTarget) -> Option<String> {
        match target {
            AssignTarget::Employee(id) => self.employee(id).map(|e| e.full_name()),
            AssignTarget::Team(id) => self.team(id).map(|t| t.name.clone()),
        }
    }

    /// Absence records for an employee, matched by display name.
    pub fn absences_for(&self, employee: &Employee) -> impl Iterator<Item = &'a Absence> {
        let name = employee.full_name();
        self.absences
            .iter()
            .filter(move |a| a.employee_name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AbsenceType, MemberRole};
    use chrono::NaiveDate;

    #[test]
    fn test_lookups_and_display_names() {
        let employees = vec![Employee::new(101, "Joel", "Miller")];
        let teams = vec![Team::new(1, "Fireflies").with_member(101, "Joel Miller", MemberRole::Supervisor)];
        let ctx = AssignmentContext::new(&employees, &teams, &[]);

        assert_eq!(
            ctx.display_name(AssignTarget::Employee(101)),
            Some("Joel Miller".into())
        );
        assert_eq!(ctx.display_name(AssignTarget::Team(1)), Some("Fireflies".into()));
        assert_eq!(ctx.display_name(AssignTarget::Employee(999)), None);
    }

    #[test]
    fn test_absences_matched_by_name() {
        let employees = vec![
            Employee::new(101, "Joel", "Miller"),
            Employee::new(102, "Ellie", "Williams"),
        ];
        let d = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap();
        let absences = vec![Absence::new(1, "Joel Miller", AbsenceType::Holiday, d, d)];
        let ctx = AssignmentContext::new(&employees, &[], &absences);

        assert_eq!(ctx.absences_for(&employees[0]).count(), 1);
        assert_eq!(ctx.absences_for(&employees[1]).count(), 0);
    }
}
