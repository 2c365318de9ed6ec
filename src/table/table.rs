//! In-memory tables

use std::collections::HashSet;

use super::errors::{TableError, TableResult};
use super::row::Row;

/// A named table with ordered column titles and rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table
    ///
    /// Column titles must be unique within the table.
    pub fn new<I, S>(name: impl Into<String>, columns: I) -> TableResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(TableError::DuplicateColumn {
                    table: name,
                    column: column.clone(),
                });
            }
        }

        Ok(Self {
            name,
            columns,
            rows: Vec::new(),
        })
    }

    /// Create a table and load `rows` into it
    pub fn with_rows<I, S>(
        name: impl Into<String>,
        columns: I,
        rows: impl IntoIterator<Item = Row>,
    ) -> TableResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(name, columns)?;
        for row in rows {
            table.add(row)?;
        }
        Ok(table)
    }

    /// Append a row; its width must match the column count
    pub fn add(&mut self, row: Row) -> TableResult<()> {
        if row.len() != self.columns.len() {
            return Err(TableError::RowArity {
                table: self.name.clone(),
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Index of the column titled `name`
    pub fn find_column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_column() {
        let table = Table::new("students", ["sid", "name", "age"]).unwrap();
        assert_eq!(table.find_column("age"), Some(2));
        assert_eq!(table.find_column("major"), None);
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let err = Table::new("t", ["a", "b", "a"]).unwrap_err();
        assert_eq!(
            err,
            TableError::DuplicateColumn {
                table: "t".into(),
                column: "a".into()
            }
        );
    }

    #[test]
    fn test_row_arity_checked() {
        let mut table = Table::new("t", ["a", "b"]).unwrap();
        table.add(Row::new(["1", "2"])).unwrap();

        let err = table.add(Row::new(["1"])).unwrap_err();
        assert!(matches!(err, TableError::RowArity { expected: 2, actual: 1, .. }));
        assert_eq!(table.len(), 1);
    }
}
