//! Relational operators and their sign encoding
//!
//! Each of the six relations reduces to "does the three-way comparison land
//! on this sign?", optionally inverted:
//!
//! | operator | sign    | negate |
//! |----------|---------|--------|
//! | `>`      | Greater | false  |
//! | `<=`     | Greater | true   |
//! | `<`      | Less    | false  |
//! | `>=`     | Less    | true   |
//! | `=`      | Equal   | false  |
//! | `!=`     | Equal   | true   |
//!
//! `<=` is "not `>`" and `>=` is "not `<`", so each pair are exact
//! complements on every input, ties included.

use std::cmp::Ordering;
use std::fmt;

use super::errors::{ConditionError, ConditionResult};

/// Target outcome of a three-way comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Less,
    Equal,
    Greater,
}

impl Sign {
    /// True iff `diff` lands exactly on this sign
    pub fn matches(self, diff: Ordering) -> bool {
        matches!(
            (self, diff),
            (Sign::Less, Ordering::Less)
                | (Sign::Equal, Ordering::Equal)
                | (Sign::Greater, Ordering::Greater)
        )
    }

    /// Numeric sign: -1, 0 or 1
    pub fn as_i8(self) -> i8 {
        match self {
            Sign::Less => -1,
            Sign::Equal => 0,
            Sign::Greater => 1,
        }
    }
}

/// The six supported relations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    Neq,
}

impl Relation {
    /// Every supported relation
    pub const ALL: [Relation; 6] = [
        Relation::Lt,
        Relation::Lte,
        Relation::Gt,
        Relation::Gte,
        Relation::Eq,
        Relation::Neq,
    ];

    /// Parse an operator token
    pub fn parse(token: &str) -> ConditionResult<Self> {
        match token {
            "<" => Ok(Relation::Lt),
            "<=" => Ok(Relation::Lte),
            ">" => Ok(Relation::Gt),
            ">=" => Ok(Relation::Gte),
            "=" => Ok(Relation::Eq),
            "!=" => Ok(Relation::Neq),
            other => Err(ConditionError::unrecognized_operator(other)),
        }
    }

    /// The operator token
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Lt => "<",
            Relation::Lte => "<=",
            Relation::Gt => ">",
            Relation::Gte => ">=",
            Relation::Eq => "=",
            Relation::Neq => "!=",
        }
    }

    /// Expected sign and negate flag for this relation
    pub fn encoding(&self) -> (Sign, bool) {
        match self {
            Relation::Gt => (Sign::Greater, false),
            Relation::Lte => (Sign::Greater, true),
            Relation::Lt => (Sign::Less, false),
            Relation::Gte => (Sign::Less, true),
            Relation::Eq => (Sign::Equal, false),
            Relation::Neq => (Sign::Equal, true),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
