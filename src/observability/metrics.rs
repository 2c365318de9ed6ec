//! Selection counters
//!
//! Monotonic atomic counters, `Relaxed` ordering. Safe to share between
//! threads scanning different tuples.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters for selection work
#[derive(Debug, Default)]
pub struct FilterMetrics {
    /// Candidate tuples handed to the `where` clause
    tuples_tested: AtomicU64,
    /// Tuples that satisfied every condition
    tuples_accepted: AtomicU64,
    /// Selections completed
    selects_executed: AtomicU64,
    /// Selections rejected at compile time or by limits
    selects_rejected: AtomicU64,
}

impl FilterMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_tuples_tested(&self) {
        self.tuples_tested.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_tuples_accepted(&self) {
        self.tuples_accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_selects_executed(&self) {
        self.selects_executed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_selects_rejected(&self) {
        self.selects_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            tuples_tested: self.tuples_tested.load(Ordering::Relaxed),
            tuples_accepted: self.tuples_accepted.load(Ordering::Relaxed),
            selects_executed: self.selects_executed.load(Ordering::Relaxed),
            selects_rejected: self.selects_rejected.load(Ordering::Relaxed),
        }
    }
}

/// A snapshot of `FilterMetrics`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub tuples_tested: u64,
    pub tuples_accepted: u64,
    pub selects_executed: u64,
    pub selects_rejected: u64,
}
