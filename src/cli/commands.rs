//! CLI command implementations

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::condition::Operand;
use crate::config::FilterConfig;
use crate::observability::{log_event, Event, FilterMetrics, Logger};
use crate::select::{SelectError, SelectQuery, SelectResult};
use crate::table::{Row, Table};

use super::args::Command;
use super::errors::CliResult;
use super::io::{read_request, write_error, write_response};

/// A table shipped inline with a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSpec {
    pub name: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl TableSpec {
    fn build(&self) -> SelectResult<Table> {
        Ok(Table::with_rows(
            self.name.as_str(),
            self.columns.iter().map(String::as_str),
            self.rows.iter().cloned(),
        )?)
    }
}

/// Request body read by `select` and `explain`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectRequest {
    /// Joined tables, in join order
    pub tables: Vec<TableSpec>,
    #[serde(flatten)]
    pub query: SelectQuery,
}

impl SelectRequest {
    fn build_tables(&self) -> SelectResult<Vec<Table>> {
        self.tables.iter().map(TableSpec::build).collect()
    }
}

/// Parse CLI arguments and run the command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Select { config } => select(config.as_deref()),
        Command::Explain { config } => explain(config.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> CliResult<FilterConfig> {
    let config = match path {
        Some(path) => {
            let config = FilterConfig::load(path)?;
            let display = path.display().to_string();
            log_event(
                Event::ConfigLoaded,
                &[("path", &display), ("value_ordering", config.value_ordering.as_str())],
            );
            config
        }
        None => FilterConfig::default(),
    };
    Ok(config)
}

/// Run one selection read from stdin
///
/// Rejected selections are reported as error responses; a broken
/// evaluation contract ends the process.
pub fn select(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let request: SelectRequest = read_request()?;
    let metrics = FilterMetrics::new();

    match run_select(&request, &config, &metrics) {
        Ok(data) => write_response(data),
        Err(e) if e.is_fatal() => Err(e.into()),
        Err(e) => write_error(e.code(), &e.to_string()),
    }
}

/// Print how a selection read from stdin compiles
pub fn explain(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let request: SelectRequest = read_request()?;

    match explain_select(&request, &config) {
        Ok(data) => {
            log_event(Event::ExplainComplete, &[]);
            write_response(data)
        }
        Err(e) => write_error(e.code(), &e.to_string()),
    }
}

/// Compile and execute `request`, returning the response payload
pub fn run_select(
    request: &SelectRequest,
    config: &FilterConfig,
    metrics: &FilterMetrics,
) -> SelectResult<Value> {
    let tables = request.build_tables().map_err(|e| {
        reject(metrics, &e);
        e
    })?;
    let compiled = request.query.compile(&tables, config).map_err(|e| {
        reject(metrics, &e);
        e
    })?;
    let result = compiled.execute(metrics)?;

    Ok(json!({
        "columns": result.columns(),
        "rows": result.rows(),
        "metrics": metrics.snapshot(),
    }))
}

/// Compile `request` and describe every condition
pub fn explain_select(request: &SelectRequest, config: &FilterConfig) -> SelectResult<Value> {
    let tables = request.build_tables()?;
    let compiled = request.query.compile(&tables, config)?;

    let conditions: Vec<Value> = compiled
        .conditions()
        .iter()
        .map(|cond| {
            let right = match cond.right() {
                Operand::Column(c) => json!({"column": c.name(), "table": c.table()}),
                Operand::Literal(v) => json!({"literal": v}),
            };
            json!({
                "condition": cond.describe(),
                "operator": cond.relation().as_str(),
                "left": {"column": cond.left().name(), "table": cond.left().table()},
                "right": right,
                "expected_sign": cond.expected_sign().as_i8(),
                "negate": cond.negate(),
            })
        })
        .collect();

    let columns: Vec<&str> = compiled.columns().iter().map(|c| c.name()).collect();
    let join_size = compiled.join_size().to_string();
    Ok(json!({
        "columns": columns,
        "conditions": conditions,
        "join_size": join_size,
        "value_ordering": config.value_ordering.as_str(),
    }))
}

fn reject(metrics: &FilterMetrics, err: &SelectError) {
    metrics.increment_selects_rejected();
    let reason = err.to_string();
    Logger::warn(
        Event::SelectRejected.as_str(),
        &[("code", err.code()), ("reason", &reason)],
    );
}
