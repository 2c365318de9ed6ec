//! Selections over joined tables
//!
//! # Flow
//!
//! 1. `SelectQuery::compile` resolves column names and builds conditions
//! 2. `CompiledSelect::execute` checks the join size against the limit
//! 3. Every row combination is tested against the conjunction
//! 4. Matching tuples are projected into a result table of distinct rows

mod errors;
mod query;
mod scan;

pub use errors::{SelectError, SelectResult};
pub use query::{ConditionSpec, OperandSpec, SelectQuery};
pub use scan::{CompiledSelect, RESULT_TABLE};
