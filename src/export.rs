//! CSV export for the admin grids.
//!
//! Two entry points: [`export_csv`] takes pre-rendered header and row
//! strings, [`export_records`] drives a [`TableRecord`] collection
//! through a column list so a grid exports exactly the fields it shows.
//! Quoting and escaping follow RFC 4180 via the `csv` writer.

use thiserror::Error;

use crate::table::TableRecord;

/// Errors surfaced while building a CSV document.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Write(#[from] csv::Error),
    #[error("csv flush failed: {0}")]
    Flush(#[from] std::io::Error),
    #[error("csv output was not valid utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Renders a header row plus data rows as one CSV document.
///
/// Rows shorter or longer than the header are written as-is; the caller
/// is responsible for shaping them.
pub fn export_csv(headers: &[&str], rows: &[Vec<String>]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// A column in a record export: the field key to read and the header to
/// print for it.
#[derive(Debug, Clone, Copy)]
pub struct ExportColumn<'a> {
    pub key: &'a str,
    pub header: &'a str,
}

impl<'a> ExportColumn<'a> {
    pub fn new(key: &'a str, header: &'a str) -> Self {
        Self { key, header }
    }
}

/// Exports a record collection, one row per record, reading each column's
/// field via [`TableRecord::field`].
pub fn export_records<T: TableRecord>(
    records: &[T],
    columns: &[ExportColumn<'_>],
) -> Result<String, ExportError> {
    let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|c| record.field(c.key).to_string())
                .collect()
        })
        .collect();
    export_csv(&headers, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, EmployeeRole};

    #[test]
    fn test_header_plus_rows() {
        let rows = vec![
            vec!["Joel".to_string(), "Miller".to_string()],
            vec!["Ellie".to_string(), "Williams".to_string()],
            vec!["Tommy".to_string(), "Miller".to_string()],
        ];
        let csv = export_csv(&["First", "Last"], &rows).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "First,Last");
        assert_eq!(lines[2], "Ellie,Williams");
        // Every line has the same field count
        assert!(lines.iter().all(|l| l.matches(',').count() == 1));
    }

    #[test]
    fn test_fields_with_commas_and_quotes_are_escaped() {
        let rows = vec![vec![
            "Miller, Joel".to_string(),
            "says \"hi\"".to_string(),
        ]];
        let csv = export_csv(&["Name", "Note"], &rows).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], "\"Miller, Joel\",\"says \"\"hi\"\"\"");
    }

    #[test]
    fn test_record_export_follows_column_list() {
        let employees = vec![
            Employee::new(101, "Joel", "Miller").with_role(EmployeeRole::Supervisor),
            Employee::new(102, "Ellie", "Williams"),
        ];
        let columns = [
            ExportColumn::new("id", "ID"),
            ExportColumn::new("name", "Name"),
            ExportColumn::new("role", "Role"),
        ];
        let csv = export_records(&employees, &columns).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "ID,Name,Role");
        assert_eq!(lines[1], "101,Joel Miller,Supervisor");
        assert_eq!(lines[2], "102,Ellie Williams,Werknemer");
    }

    #[test]
    fn test_empty_collection_exports_header_only() {
        let columns = [ExportColumn::new("id", "ID")];
        let csv = export_records::<Employee>(&[], &columns).unwrap();
        assert_eq!(csv, "ID\n");
    }
}
