//! Column designators bound to a source table

use std::cmp::Ordering;

use super::errors::{TableError, TableResult};
use super::ordering::ValueOrdering;
use super::table::Table;
use super::tuple::RowTuple;

/// A column name resolved to a source table and a position within its rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    table: String,
    index: usize,
    ordering: ValueOrdering,
}

impl Column {
    /// Resolve `name` against the joined `tables`
    ///
    /// The first table, in join order, that declares the column is the
    /// column's source.
    pub fn resolve(name: &str, tables: &[Table], ordering: ValueOrdering) -> TableResult<Self> {
        tables
            .iter()
            .find_map(|table| {
                table.find_column(name).map(|index| Self {
                    name: name.to_string(),
                    table: table.name().to_string(),
                    index,
                    ordering,
                })
            })
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
    }

    /// Build a column directly from its parts
    pub fn new(
        name: impl Into<String>,
        table: impl Into<String>,
        index: usize,
        ordering: ValueOrdering,
    ) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            index,
            ordering,
        }
    }

    /// This column's value in `tuple`
    ///
    /// `None` when the tuple holds no row from the source table.
    pub fn get_from<'a>(&self, tuple: &RowTuple<'a>) -> Option<&'a str> {
        tuple.row_for(&self.table)?.get(self.index)
    }

    /// Three-way comparison of two values of this column
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.ordering.compare(left, right)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn ordering(&self) -> ValueOrdering {
        self.ordering
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Row;

    fn tables() -> Vec<Table> {
        vec![
            Table::new("students", ["sid", "name", "year"]).unwrap(),
            Table::new("enrolled", ["sid", "ccn", "grade"]).unwrap(),
        ]
    }

    #[test]
    fn test_resolve_picks_declaring_table() {
        let col = Column::resolve("grade", &tables(), ValueOrdering::Lexical).unwrap();
        assert_eq!(col.table(), "enrolled");
        assert_eq!(col.index(), 2);
    }

    #[test]
    fn test_resolve_shared_name_uses_first_table() {
        let col = Column::resolve("sid", &tables(), ValueOrdering::Lexical).unwrap();
        assert_eq!(col.table(), "students");
        assert_eq!(col.index(), 0);
    }

    #[test]
    fn test_resolve_unknown() {
        let err = Column::resolve("major", &tables(), ValueOrdering::Lexical).unwrap_err();
        assert_eq!(err, TableError::UnknownColumn("major".into()));
    }

    #[test]
    fn test_get_from_tuple() {
        let student = Row::new(["101", "Jason", "2"]);
        let enrolled = Row::new(["101", "21228", "B"]);
        let mut tuple = RowTuple::new();
        tuple.push("students", &student);
        tuple.push("enrolled", &enrolled);

        let grade = Column::resolve("grade", &tables(), ValueOrdering::Lexical).unwrap();
        assert_eq!(grade.get_from(&tuple), Some("B"));

        let only_students = RowTuple::single("students", &student);
        assert_eq!(grade.get_from(&only_students), None);
    }
}
