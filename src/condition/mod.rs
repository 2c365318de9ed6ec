//! Condition evaluation for `select ... where ...`
//!
//! A `Condition` compares a column against another column or a literal.
//! Construction parses the operator token once into an expected sign plus
//! a negate flag; every later `test` is a single three-way comparison.
//!
//! # Evaluation
//!
//! 1. Resolve the right operand (literal, or column read from the tuple)
//! 2. Resolve the left column from the tuple
//! 3. Compare the two values three-way
//! 4. Match the result against the expected sign
//! 5. Invert when the negate flag is set
//!
//! `Condition::test_all` ANDs a list of conditions, stopping at the first
//! failure.

mod comparator;
mod conjunction;
mod errors;
mod relation;

pub use comparator::{Condition, Operand};
pub use errors::{ConditionError, ConditionErrorCode, ConditionResult, Severity};
pub use relation::{Relation, Sign};
