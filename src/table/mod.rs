//! Tables, rows and column designators
//!
//! These are the collaborators the condition evaluator reads through:
//! - `Row`: a tuple of string values
//! - `Table`: named rows under ordered column titles
//! - `RowTuple`: one row per joined table, looked up by source table
//! - `Column`: a column name resolved to its source table
//! - `ValueOrdering`: the three-way comparison over values

mod column;
mod errors;
mod ordering;
mod row;
mod table;
mod tuple;

pub use column::Column;
pub use errors::{TableError, TableResult};
pub use ordering::ValueOrdering;
pub use row::Row;
pub use table::Table;
pub use tuple::RowTuple;
