//! Table and column resolution errors

use thiserror::Error;

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised while building tables or resolving column names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Duplicate column name in table '{table}': {column}")]
    DuplicateColumn { table: String, column: String },

    #[error("Row has {actual} values but table '{table}' has {expected} columns")]
    RowArity {
        table: String,
        expected: usize,
        actual: usize,
    },
}

impl TableError {
    /// Returns the string code reported to clients
    pub fn code(&self) -> &'static str {
        match self {
            TableError::UnknownColumn(_) => "REL_UNKNOWN_COLUMN",
            TableError::DuplicateColumn { .. } => "REL_DUPLICATE_COLUMN",
            TableError::RowArity { .. } => "REL_ROW_ARITY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = TableError::UnknownColumn("age".into());
        assert_eq!(err.to_string(), "Unknown column: age");
        assert_eq!(err.code(), "REL_UNKNOWN_COLUMN");
    }
}
