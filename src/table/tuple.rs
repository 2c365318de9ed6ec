//! Row tuples: one candidate row per table taking part in a join

use super::row::Row;

/// An ordered collection of rows, each tagged with its source table
#[derive(Debug, Clone, Default)]
pub struct RowTuple<'a> {
    entries: Vec<(&'a str, &'a Row)>,
}

impl<'a> RowTuple<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tuple over a single table's row
    pub fn single(table: &'a str, row: &'a Row) -> Self {
        Self {
            entries: vec![(table, row)],
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Appends the row drawn from `table`
    pub fn push(&mut self, table: &'a str, row: &'a Row) {
        self.entries.push((table, row));
    }

    /// Returns the row belonging to `table`; the first entry wins
    pub fn row_for(&self, table: &str) -> Option<&'a Row> {
        self.entries
            .iter()
            .find(|(name, _)| *name == table)
            .map(|(_, row)| *row)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_table() {
        let student = Row::new(["1", "Alice"]);
        let course = Row::new(["1", "CS61B"]);

        let mut tuple = RowTuple::new();
        tuple.push("students", &student);
        tuple.push("enrolled", &course);

        assert_eq!(tuple.len(), 2);
        assert_eq!(tuple.row_for("enrolled"), Some(&course));
        assert_eq!(tuple.row_for("students"), Some(&student));
        assert_eq!(tuple.row_for("teachers"), None);
    }
}
