//! Condition error types
//!
//! Error codes:
//! - REL_UNRECOGNIZED_OPERATOR (REJECT)
//! - REL_COLUMN_NOT_IN_SCOPE (FATAL)

use std::fmt;

/// Severity levels for condition errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Query rejected at compile time
    Reject,
    /// Caller broke the evaluation contract
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Condition error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionErrorCode {
    /// Operator token is not one of the six relations
    UnrecognizedOperator,
    /// A column's source table is missing from the row tuple
    ColumnNotInScope,
}

impl ConditionErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ConditionErrorCode::UnrecognizedOperator => "REL_UNRECOGNIZED_OPERATOR",
            ConditionErrorCode::ColumnNotInScope => "REL_COLUMN_NOT_IN_SCOPE",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            ConditionErrorCode::UnrecognizedOperator => Severity::Reject,
            ConditionErrorCode::ColumnNotInScope => Severity::Fatal,
        }
    }
}

impl fmt::Display for ConditionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Condition error with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionError {
    code: ConditionErrorCode,
    message: String,
}

impl ConditionError {
    /// Create an unrecognized operator error
    pub fn unrecognized_operator(token: &str) -> Self {
        Self {
            code: ConditionErrorCode::UnrecognizedOperator,
            message: format!("Unknown comparator: '{}'", token),
        }
    }

    /// Create a column-not-in-scope error (FATAL)
    pub fn column_not_in_scope(column: &str, table: &str) -> Self {
        Self {
            code: ConditionErrorCode::ColumnNotInScope,
            message: format!(
                "Column '{}' reads from table '{}', which has no row in the tuple",
                column, table
            ),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ConditionErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for ConditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for ConditionError {}

/// Result type for condition operations
pub type ConditionResult<T> = Result<T, ConditionError>;
