//! Nested-loop join scan
//!
//! Enumerates every combination of one row per joined table (first table
//! outermost), keeps the combinations that satisfy the `where` clause and
//! projects the selected columns. Result rows are distinct, in first-seen
//! order.

use std::collections::HashSet;

use crate::condition::{Condition, ConditionError};
use crate::config::FilterConfig;
use crate::observability::{log_event, Event, FilterMetrics, Logger};
use crate::table::{Column, Row, RowTuple, Table};

use super::errors::{SelectError, SelectResult};

/// Name given to result tables
pub const RESULT_TABLE: &str = "result";

/// A selection with every name resolved against its tables
#[derive(Debug)]
pub struct CompiledSelect<'t> {
    tables: &'t [Table],
    columns: Vec<Column>,
    conditions: Vec<Condition>,
    config: FilterConfig,
}

impl<'t> CompiledSelect<'t> {
    pub(crate) fn new(
        tables: &'t [Table],
        columns: Vec<Column>,
        conditions: Vec<Condition>,
        config: FilterConfig,
    ) -> SelectResult<Self> {
        // Result titles must be unique
        Table::new(RESULT_TABLE, columns.iter().map(Column::name))?;

        Ok(Self {
            tables,
            columns,
            conditions,
            config,
        })
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of tuples the scan will test
    pub fn join_size(&self) -> u128 {
        self.tables
            .iter()
            .try_fold(1u128, |acc, t| acc.checked_mul(t.len() as u128))
            .unwrap_or(u128::MAX)
    }

    /// Run the scan and collect matching rows
    pub fn execute(&self, metrics: &FilterMetrics) -> SelectResult<Table> {
        let tuples = self.join_size();
        if tuples > u128::from(self.config.max_join_tuples) {
            metrics.increment_selects_rejected();
            let err = SelectError::JoinLimit {
                tuples,
                limit: self.config.max_join_tuples,
            };
            Logger::warn(
                Event::SelectRejected.as_str(),
                &[("code", err.code()), ("reason", &err.to_string())],
            );
            return Err(err);
        }

        let table_count = self.tables.len().to_string();
        let condition_count = self.conditions.len().to_string();
        log_event(
            Event::SelectBegin,
            &[("tables", &table_count), ("conditions", &condition_count)],
        );

        let mut result = Table::new(RESULT_TABLE, self.columns.iter().map(Column::name))?;
        let mut seen = HashSet::new();

        let mut cursor = JoinCursor::new(self.tables);
        while let Some(tuple) = cursor.next_tuple() {
            metrics.increment_tuples_tested();

            let keep = match Condition::test_all(Some(self.conditions.as_slice()), &tuple) {
                Ok(keep) => keep,
                Err(e) => {
                    log_event(
                        Event::ConditionOutOfScope,
                        &[("code", e.code().code()), ("reason", e.message())],
                    );
                    return Err(e.into());
                }
            };

            if !keep {
                if self.config.log_rejections {
                    Logger::trace(Event::TupleRejected.as_str(), &[]);
                }
                continue;
            }

            metrics.increment_tuples_accepted();
            let row = self.project(&tuple)?;
            if seen.insert(row.clone()) {
                result.add(row)?;
            }
        }

        metrics.increment_selects_executed();
        let rows = result.len().to_string();
        log_event(Event::SelectComplete, &[("rows", &rows)]);

        Ok(result)
    }

    fn project(&self, tuple: &RowTuple<'_>) -> SelectResult<Row> {
        let values = self
            .columns
            .iter()
            .map(|column| {
                column
                    .get_from(tuple)
                    .ok_or_else(|| ConditionError::column_not_in_scope(column.name(), column.table()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Row::new(values))
    }
}

/// Odometer over row indices, last table fastest
struct JoinCursor<'t> {
    tables: &'t [Table],
    positions: Vec<usize>,
    exhausted: bool,
}

impl<'t> JoinCursor<'t> {
    fn new(tables: &'t [Table]) -> Self {
        Self {
            tables,
            positions: vec![0; tables.len()],
            exhausted: tables.is_empty() || tables.iter().any(Table::is_empty),
        }
    }

    fn next_tuple(&mut self) -> Option<RowTuple<'t>> {
        if self.exhausted {
            return None;
        }

        let tables = self.tables;
        let mut tuple = RowTuple::with_capacity(tables.len());
        for (table, &pos) in tables.iter().zip(&self.positions) {
            tuple.push(table.name(), &table.rows()[pos]);
        }

        self.advance();
        Some(tuple)
    }

    fn advance(&mut self) {
        for i in (0..self.positions.len()).rev() {
            self.positions[i] += 1;
            if self.positions[i] < self.tables[i].len() {
                return;
            }
            self.positions[i] = 0;
        }
        self.exhausted = true;
    }
}
