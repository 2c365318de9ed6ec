//! Selection requests
//!
//! The parsed form of `select <columns> from <tables> where <conditions>`,
//! as it arrives from a client.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::condition::{Condition, Operand};
use crate::config::FilterConfig;
use crate::table::{Column, Table};

use super::errors::{SelectError, SelectResult};
use super::scan::CompiledSelect;

/// Right-hand side of a `where` condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperandSpec {
    /// `{"column": "name"}`
    Column(String),
    /// `{"literal": "value"}`
    Literal(String),
}

/// One `where` condition, unresolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSpec {
    /// Left column name
    pub left: String,
    /// Operator token
    pub op: String,
    /// Right operand
    pub right: OperandSpec,
}

impl ConditionSpec {
    pub fn literal(left: impl Into<String>, op: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            op: op.into(),
            right: OperandSpec::Literal(value.into()),
        }
    }

    pub fn column(left: impl Into<String>, op: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            op: op.into(),
            right: OperandSpec::Column(right.into()),
        }
    }

    /// Resolve column names against `tables` and build the condition
    pub fn compile(&self, tables: &[Table], config: &FilterConfig) -> SelectResult<Condition> {
        let left = Column::resolve(&self.left, tables, config.value_ordering)?;
        let right = match &self.right {
            OperandSpec::Column(name) => {
                Operand::Column(Column::resolve(name, tables, config.value_ordering)?)
            }
            OperandSpec::Literal(value) => Operand::Literal(value.clone()),
        };
        Ok(Condition::new(left, &self.op, right)?)
    }
}

/// A selection over one or more joined tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectQuery {
    /// Projected column names, in output order
    pub columns: Vec<String>,
    /// Conditions combined with AND
    #[serde(default, rename = "where")]
    pub conditions: Vec<ConditionSpec>,
}

impl SelectQuery {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            conditions: Vec::new(),
        }
    }

    /// Adds a condition
    pub fn with_condition(mut self, condition: ConditionSpec) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Resolve every column and condition against `tables`
    pub fn compile<'t>(
        &self,
        tables: &'t [Table],
        config: &FilterConfig,
    ) -> SelectResult<CompiledSelect<'t>> {
        if tables.is_empty() {
            return Err(SelectError::NoTables);
        }
        // Rows are looked up by table name, so names must be unique
        let mut names = HashSet::new();
        for table in tables {
            if !names.insert(table.name()) {
                return Err(SelectError::DuplicateTable(table.name().to_string()));
            }
        }
        if self.columns.is_empty() {
            return Err(SelectError::EmptyProjection);
        }

        let columns = self
            .columns
            .iter()
            .map(|name| Column::resolve(name, tables, config.value_ordering))
            .collect::<Result<Vec<_>, _>>()?;

        let conditions = self
            .conditions
            .iter()
            .map(|spec| spec.compile(tables, config))
            .collect::<SelectResult<Vec<_>>>()?;

        CompiledSelect::new(tables, columns, conditions, config.clone())
    }
}
