//! A single `where` comparison

use std::borrow::Cow;

use super::errors::{ConditionError, ConditionResult};
use super::relation::{Relation, Sign};
use crate::table::{Column, RowTuple};

/// Right-hand side of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Another column, resolved against the row tuple
    Column(Column),
    /// A fixed value
    Literal(String),
}

impl From<Column> for Operand {
    fn from(column: Column) -> Self {
        Operand::Column(column)
    }
}

/// `left RELATION right`, where `right` is a column or a literal
///
/// Immutable once built; `test` only reads, so one condition can be
/// evaluated concurrently against different tuples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    left: Column,
    relation: Relation,
    right: Operand,
    expected: Sign,
    negate: bool,
}

impl Condition {
    /// Build a condition from an operator token
    pub fn new(left: Column, token: &str, right: Operand) -> ConditionResult<Self> {
        let relation = Relation::parse(token)?;
        Ok(Self::from_relation(left, relation, right))
    }

    /// `left RELATION right` with `right` a column
    pub fn with_column(left: Column, token: &str, right: Column) -> ConditionResult<Self> {
        Self::new(left, token, Operand::Column(right))
    }

    /// `left RELATION 'literal'`
    pub fn with_literal(
        left: Column,
        token: &str,
        literal: impl Into<String>,
    ) -> ConditionResult<Self> {
        Self::new(left, token, Operand::Literal(literal.into()))
    }

    /// Build from an already parsed relation
    pub fn from_relation(left: Column, relation: Relation, right: Operand) -> Self {
        let (expected, negate) = relation.encoding();
        Self {
            left,
            relation,
            right,
            expected,
            negate,
        }
    }

    /// Whether the rows in `tuple` satisfy this condition
    ///
    /// `tuple` must hold a row for every table this condition reads from.
    pub fn test(&self, tuple: &RowTuple<'_>) -> ConditionResult<bool> {
        let right = match &self.right {
            Operand::Literal(value) => value.as_str(),
            Operand::Column(column) => resolve(column, tuple)?,
        };
        let left = resolve(&self.left, tuple)?;

        let diff = self.left.compare(left, right);
        Ok(self.expected.matches(diff) ^ self.negate)
    }

    pub fn left(&self) -> &Column {
        &self.left
    }

    pub fn right(&self) -> &Operand {
        &self.right
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn expected_sign(&self) -> Sign {
        self.expected
    }

    pub fn negate(&self) -> bool {
        self.negate
    }

    /// Human readable form, e.g. `age >= '18'`
    pub fn describe(&self) -> String {
        let right: Cow<'_, str> = match &self.right {
            Operand::Column(column) => Cow::Borrowed(column.name()),
            Operand::Literal(value) => Cow::Owned(format!("'{}'", value)),
        };
        format!("{} {} {}", self.left.name(), self.relation, right)
    }
}

fn resolve<'a>(column: &Column, tuple: &RowTuple<'a>) -> ConditionResult<&'a str> {
    column
        .get_from(tuple)
        .ok_or_else(|| ConditionError::column_not_in_scope(column.name(), column.table()))
}
