//! Observability: structured logs and counters
//!
//! Observability is read-only. It never changes what a selection returns,
//! and the condition evaluator itself never logs.

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{FilterMetrics, MetricsSnapshot};

/// Log a lifecycle event with fields
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}
