//! Value ordering used by column comparisons
//!
//! Column values are stored as strings. The ordering decides how two of
//! them compare; the condition evaluator only ever looks at the sign.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Three-way comparison over column values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueOrdering {
    /// Byte-wise string order
    #[default]
    Lexical,
    /// Numbers first, by value; everything else after them, as text
    Numeric,
}

impl ValueOrdering {
    /// Compares `left` against `right`
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match self {
            ValueOrdering::Lexical => left.cmp(right),
            ValueOrdering::Numeric => match (as_number(left), as_number(right)) {
                (Some(l), Some(r)) => l.partial_cmp(&r).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => left.cmp(right),
            },
        }
    }

    /// Returns the config name
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueOrdering::Lexical => "lexical",
            ValueOrdering::Numeric => "numeric",
        }
    }
}

/// The value as a number; NaN counts as text
fn as_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| !n.is_nan())
}
