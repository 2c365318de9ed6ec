//! relcond - relational `where` condition evaluation
//!
//! Decides whether a tuple of rows drawn from one or more joined tables
//! satisfies a conjunction of comparisons between columns and literals.

pub mod cli;
pub mod condition;
pub mod config;
pub mod observability;
pub mod select;
pub mod table;
