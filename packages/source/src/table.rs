//! The fetched records as a loosely-typed table.
//!
//! [`RawTable`] keeps every field the source returned so it can be written
//! out verbatim. Columns are the union of all keys seen, in first-seen
//! order; a row that lacks a key has an empty cell in that column.

use std::collections::HashSet;
use std::path::Path;

use serde_json::{Map, Value};

use crate::SourceError;

/// A table of JSON objects with a column list covering every key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Map<String, Value>>,
}

impl RawTable {
    /// Loads records into a table.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Normalization`] if any record is not a JSON
    /// object.
    pub fn from_records(records: Vec<Value>) -> Result<Self, SourceError> {
        let mut columns = Vec::new();
        let mut seen = HashSet::new();
        let mut rows = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let Value::Object(row) = record else {
                return Err(SourceError::Normalization {
                    message: format!("record {index} is not a JSON object"),
                });
            };
            for key in row.keys() {
                if seen.insert(key.clone()) {
                    columns.push(key.clone());
                }
            }
            rows.push(row);
        }

        log::debug!(
            "Loaded table with {} rows and {} columns",
            rows.len(),
            columns.len()
        );

        Ok(Self { columns, rows })
    }

    #[must_use]
    pub fn rows(&self) -> &[Map<String, Value>] {
        &self.rows
    }

    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Checks that every named column appears in the table.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::MissingColumn`] naming the first absent column.
    pub fn require_columns(&self, columns: &[&str]) -> Result<(), SourceError> {
        match columns.iter().find(|c| !self.has_column(c)) {
            Some(column) => Err(SourceError::MissingColumn {
                column: (*column).to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Writes the table as CSV: one header row, then one row per record,
    /// with no index column. Overwrites any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the file cannot be created or written,
    /// including when its parent directory does not exist.
    pub fn write_csv(&self, path: &Path) -> Result<(), SourceError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.columns)?;

        for row in &self.rows {
            writer.write_record(
                self.columns
                    .iter()
                    .map(|column| row.get(column).and_then(cell_text).unwrap_or_default()),
            )?;
        }

        writer.flush()?;
        log::info!("Wrote {} rows to {}", self.rows.len(), path.display());
        Ok(())
    }
}

/// Renders a JSON value as the text of one table cell.
///
/// `null` has no text. Strings are returned as-is, numbers and booleans as
/// their JSON text, and nested objects or arrays as compact JSON.
#[must_use]
pub fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => {
            Some(value.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> RawTable {
        RawTable::from_records(vec![
            json!({"id": "1", "primary_type": "BATTERY", "arrest": false}),
            json!({"id": "2", "latitude": "41.8", "location": {"type": "Point"}}),
            json!({"id": "3", "primary_type": null}),
        ])
        .unwrap()
    }

    #[test]
    fn columns_are_union_in_first_seen_order() {
        let table = sample();
        assert_eq!(
            table.columns,
            ["id", "primary_type", "arrest", "latitude", "location"]
        );
        assert_eq!(table.rows().len(), 3);
    }

    #[test]
    fn columns_follow_response_key_order_not_alphabetical() {
        let body = r#"[
            {"id": "9", "date": "2024-01-01T00:00:00.000", "case_number": "JH1", "arrest": true},
            {"zone": "7", "id": "10", "beat": "0111"}
        ]"#;
        let records: Vec<Value> = serde_json::from_str(body).unwrap();
        let table = RawTable::from_records(records).unwrap();
        assert_eq!(
            table.columns,
            ["id", "date", "case_number", "arrest", "zone", "beat"]
        );
    }

    #[test]
    fn rejects_non_object_record() {
        let err = RawTable::from_records(vec![json!({"id": "1"}), json!([1, 2])]).unwrap_err();
        assert!(matches!(err, SourceError::Normalization { .. }));
    }

    #[test]
    fn require_columns_names_the_missing_column() {
        let table = sample();
        assert!(table.require_columns(&["id", "latitude"]).is_ok());
        match table.require_columns(&["id", "date"]) {
            Err(SourceError::MissingColumn { column }) => assert_eq!(column, "date"),
            other => panic!("expected missing column, got {other:?}"),
        }
    }

    #[test]
    fn cell_text_renders_each_json_kind() {
        assert_eq!(cell_text(&Value::Null), None);
        assert_eq!(cell_text(&json!("STREET")), Some("STREET".to_string()));
        assert_eq!(cell_text(&json!(true)), Some("true".to_string()));
        assert_eq!(cell_text(&json!(12.5)), Some("12.5".to_string()));
        assert_eq!(
            cell_text(&json!({"type": "Point"})),
            Some(r#"{"type":"Point"}"#.to_string())
        );
    }

    #[test]
    fn writes_header_and_one_row_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.csv");
        sample().write_csv(&path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            ["id", "primary_type", "arrest", "latitude", "location"]
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0].iter().collect::<Vec<_>>(),
            ["1", "BATTERY", "false", "", ""]
        );
        assert_eq!(&rows[1][4], r#"{"type":"Point"}"#);
        assert_eq!(&rows[2][1], "");
    }

    #[test]
    fn write_fails_when_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("sample.csv");
        assert!(sample().write_csv(&path).is_err());
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.csv");
        std::fs::write(&path, "stale,content\nx,y\nx,y\nx,y\nx,y\n").unwrap();
        sample().write_csv(&path).unwrap();

        let reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.into_records().count(), 3);
    }
}
