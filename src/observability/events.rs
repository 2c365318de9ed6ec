//! Observable events
//!
//! Events are explicit and typed; the logger only ever sees their names.

use std::fmt;

/// Events emitted while compiling and running selections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration file read and validated
    ConfigLoaded,
    /// Selection compiled, scan starting
    SelectBegin,
    /// Scan finished
    SelectComplete,
    /// Selection could not be compiled or exceeded its limits
    SelectRejected,
    /// A candidate tuple failed the `where` clause
    TupleRejected,
    /// A condition read from a table missing in the tuple (FATAL)
    ConditionOutOfScope,
    /// Explain finished
    ExplainComplete,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SelectBegin => "SELECT_BEGIN",
            Event::SelectComplete => "SELECT_COMPLETE",
            Event::SelectRejected => "SELECT_REJECTED",
            Event::TupleRejected => "TUPLE_REJECTED",
            Event::ConditionOutOfScope => "CONDITION_OUT_OF_SCOPE",
            Event::ExplainComplete => "EXPLAIN_COMPLETE",
        }
    }

    /// Returns true if this event ends the process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ConditionOutOfScope)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
