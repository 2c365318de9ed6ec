//! Selection errors

use thiserror::Error;

use crate::condition::ConditionError;
use crate::table::TableError;

/// Result type for selections
pub type SelectResult<T> = Result<T, SelectError>;

/// Errors raised while compiling or running a selection
#[derive(Debug, Clone, Error)]
pub enum SelectError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Condition(#[from] ConditionError),

    #[error("Selection names no tables")]
    NoTables,

    #[error("Table '{0}' appears more than once in the join")]
    DuplicateTable(String),

    #[error("Selection names no columns")]
    EmptyProjection,

    #[error("Join of {tuples} tuples exceeds the limit of {limit}")]
    JoinLimit { tuples: u128, limit: u64 },
}

impl SelectError {
    /// Returns the string code reported to clients
    pub fn code(&self) -> &'static str {
        match self {
            SelectError::Table(e) => e.code(),
            SelectError::Condition(e) => e.code().code(),
            SelectError::NoTables => "REL_NO_TABLES",
            SelectError::DuplicateTable(_) => "REL_DUPLICATE_TABLE",
            SelectError::EmptyProjection => "REL_EMPTY_PROJECTION",
            SelectError::JoinLimit { .. } => "REL_JOIN_LIMIT",
        }
    }

    /// Returns whether the caller broke the evaluation contract
    pub fn is_fatal(&self) -> bool {
        matches!(self, SelectError::Condition(e) if e.is_fatal())
    }
}
