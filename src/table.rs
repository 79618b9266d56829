//! Generic table state engine for the admin grids.
//!
//! Every master-data grid (employees, plants, teams, absences, task
//! definitions) shares the same state shape: a live mutable collection,
//! at most one active sort spec, and a map of per-field filters.
//! [`TableState::derive`] produces the filtered-then-sorted view without
//! touching the underlying collection, so it can be recomputed on every
//! render.
//!
//! # Semantics
//!
//! - Filters: case-insensitive substring match against the field's
//!   display string; a record must pass every active filter (AND).
//! - Sort: numeric comparison for integer fields, lexicographic
//!   otherwise; stable, so equal keys keep their pre-sort order.
//!   [`SortDirection::Unsorted`] yields insertion order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// A record that can be shown in a table: exposes a value per field key.
///
/// Unknown keys should return an empty [`FieldValue::Text`], which never
/// matches a non-empty filter and sorts first.
pub trait TableRecord {
    /// The value of the field identified by `key`.
    fn field(&self, key: &str) -> FieldValue;
}

/// A field value as seen by the sort/filter pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Bool(bool),
}

/// Sort direction for the single active sort spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
    /// No ordering applied; the collection's insertion order is kept.
    Unsorted,
}

/// The active sort: one field key and a direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

/// Sort/filter state over a homogeneous record collection.
#[derive(Debug, Clone)]
pub struct TableState<T> {
    records: Vec<T>,
    sort: Option<SortSpec>,
    filters: BTreeMap<String, String>,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Int(n) => write!(f, "{n}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl FieldValue {
    /// Ordering used by the sort pipeline: numeric when both sides are
    /// numeric, lexicographic on display strings otherwise.
    fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (a, b) => a.to_string().cmp(&b.to_string()),
        }
    }
}

impl<T: TableRecord + Clone> TableState<T> {
    /// Creates table state over an initial ordered collection.
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records,
            sort: None,
            filters: BTreeMap::new(),
        }
    }

    /// Sets the active sort, replacing any prior spec. At most one sort
    /// field is active at a time.
    pub fn set_sort(&mut self, key: impl Into<String>, direction: SortDirection) {
        self.sort = Some(SortSpec {
            key: key.into(),
            direction,
        });
    }

    /// Removes the active sort entirely.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Sets the filter for `key`. An empty value removes the filter.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.filters.remove(&key);
        } else {
            self.filters.insert(key, value);
        }
    }

    /// Removes the filter for `key`.
    pub fn clear_filter(&mut self, key: &str) {
        self.filters.remove(key);
    }

    /// The active sort spec, if any.
    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// The active filters.
    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    /// The underlying collection in insertion order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record.
    pub fn add(&mut self, record: T) {
        self.records.push(record);
    }

    /// Applies `apply` to every record matching `matches`. Returns the
    /// number of records updated.
    pub fn update_where(
        &mut self,
        matches: impl Fn(&T) -> bool,
        apply: impl Fn(&mut T),
    ) -> usize {
        let mut updated = 0;
        for record in self.records.iter_mut().filter(|r| matches(r)) {
            apply(record);
            updated += 1;
        }
        updated
    }

    /// Removes every record matching `matches`. Returns the number removed.
    pub fn remove_where(&mut self, matches: impl Fn(&T) -> bool) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !matches(r));
        before - self.records.len()
    }

    /// Produces the filtered-then-sorted view.
    ///
    /// Pure with respect to the underlying collection: calling this any
    /// number of times with unchanged state yields identical output.
    pub fn derive(&self) -> Vec<T> {
        let mut view: Vec<T> = self
            .records
            .iter()
            .filter(|r| self.passes_filters(r))
            .cloned()
            .collect();

        if let Some(spec) = &self.sort {
            match spec.direction {
                SortDirection::Unsorted => {}
                direction => {
                    // Vec::sort_by is stable: equal keys keep insertion order
                    view.sort_by(|a, b| {
                        let ord = a.field(&spec.key).compare(&b.field(&spec.key));
                        if direction == SortDirection::Desc {
                            ord.reverse()
                        } else {
                            ord
                        }
                    });
                }
            }
        }

        view
    }

    fn passes_filters(&self, record: &T) -> bool {
        self.filters.iter().all(|(key, value)| {
            record
                .field(key)
                .to_string()
                .to_lowercase()
                .contains(&value.to_lowercase())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: &'static str,
        city: &'static str,
    }

    impl TableRecord for Row {
        fn field(&self, key: &str) -> FieldValue {
            match key {
                "id" => FieldValue::Int(self.id),
                "name" => FieldValue::Text(self.name.to_string()),
                "city" => FieldValue::Text(self.city.to_string()),
                _ => FieldValue::Text(String::new()),
            }
        }
    }

    fn sample() -> TableState<Row> {
        TableState::new(vec![
            Row { id: 3, name: "Tommy", city: "Ghent" },
            Row { id: 1, name: "Joel", city: "Ghent" },
            Row { id: 2, name: "Ellie", city: "Antwerp" },
        ])
    }

    #[test]
    fn test_derive_without_state_keeps_order() {
        let state = sample();
        let view = state.derive();
        assert_eq!(view.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_filter_case_insensitive_substring() {
        let mut state = sample();
        state.set_filter("city", "GHE");
        let view = state.derive();
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|r| r.city == "Ghent"));
    }

    #[test]
    fn test_filters_and_across_fields() {
        let mut state = sample();
        state.set_filter("city", "ghent");
        state.set_filter("name", "jo");
        let view = state.derive();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Joel");
    }

    #[test]
    fn test_clearing_filter_restores_original_order() {
        let mut state = sample();
        let original = state.derive();
        state.set_filter("name", "el");
        assert_ne!(state.derive(), original);
        state.set_filter("name", "");
        assert_eq!(state.derive(), original);
    }

    #[test]
    fn test_numeric_sort() {
        let mut state = sample();
        state.set_sort("id", SortDirection::Asc);
        let view = state.derive();
        assert_eq!(view.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        state.set_sort("id", SortDirection::Desc);
        let view = state.derive();
        assert_eq!(view.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_replaces_prior_spec() {
        let mut state = sample();
        state.set_sort("id", SortDirection::Asc);
        state.set_sort("name", SortDirection::Asc);
        let view = state.derive();
        assert_eq!(view[0].name, "Ellie");
        assert_eq!(state.sort().unwrap().key, "name");
    }

    #[test]
    fn test_unsorted_direction_keeps_insertion_order() {
        let mut state = sample();
        state.set_sort("id", SortDirection::Unsorted);
        let view = state.derive();
        assert_eq!(view.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut state = TableState::new(vec![
            Row { id: 1, name: "B", city: "Ghent" },
            Row { id: 2, name: "A", city: "Ghent" },
            Row { id: 3, name: "C", city: "Antwerp" },
        ]);
        state.set_sort("city", SortDirection::Asc);
        let view = state.derive();
        // Antwerp first, then the two Ghent rows in their original order
        assert_eq!(view.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_derive_is_idempotent_and_pure() {
        let mut state = sample();
        state.set_filter("city", "ghent");
        state.set_sort("id", SortDirection::Asc);
        assert_eq!(state.derive(), state.derive());
        // Underlying collection untouched by derivation
        assert_eq!(state.records().len(), 3);
        assert_eq!(state.records()[0].id, 3);
    }

    #[test]
    fn test_mutation_operations() {
        let mut state = sample();
        state.add(Row { id: 4, name: "Dina", city: "Ghent" });
        assert_eq!(state.len(), 4);

        let updated = state.update_where(|r| r.id == 4, |r| r.city = "Brussels");
        assert_eq!(updated, 1);
        assert_eq!(state.records()[3].city, "Brussels");

        let removed = state.remove_where(|r| r.city == "Ghent");
        assert_eq!(removed, 2);
        assert_eq!(state.len(), 2);
    }
}
