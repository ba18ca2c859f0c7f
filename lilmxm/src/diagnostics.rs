//! Process-wide diagnostic sink
//!
//! When a sink is installed, every completed multiply hands it the operation
//! name and a textual snapshot of the final `C`. The sink is purely
//! observational: it is consulted after the result is written and cannot
//! change it. Snapshots are only formatted while a sink is installed.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Receiver of post-call snapshots
pub trait DiagnosticSink: Send + Sync {
    /// Called once per completed multiply
    fn record(&self, operation: &str, snapshot: &str);
}

static SINK: RwLock<Option<Arc<dyn DiagnosticSink>>> = RwLock::new(None);

/// Install `sink`, returning the one it replaces
pub fn install_sink<S: DiagnosticSink + 'static>(sink: S) -> Option<Arc<dyn DiagnosticSink>> {
    let mut slot = SINK.write().unwrap_or_else(PoisonError::into_inner);
    slot.replace(Arc::new(sink))
}

/// Remove the installed sink, if any
pub fn remove_sink() -> Option<Arc<dyn DiagnosticSink>> {
    SINK.write().unwrap_or_else(PoisonError::into_inner).take()
}

/// Whether a sink is currently installed
pub fn is_enabled() -> bool {
    SINK.read().unwrap_or_else(PoisonError::into_inner).is_some()
}

pub(crate) fn emit(operation: &str, output: &dyn fmt::Display) {
    let sink = SINK.read().unwrap_or_else(PoisonError::into_inner).clone();
    if let Some(sink) = sink {
        sink.record(operation, &output.to_string());
    }
}

/// Forwards snapshots to the `log` facade
#[derive(Debug, Clone, Copy)]
pub struct LogSink {
    level: log::Level,
}

impl LogSink {
    pub fn new(level: log::Level) -> Self {
        Self { level }
    }
}

impl DiagnosticSink for LogSink {
    fn record(&self, operation: &str, snapshot: &str) {
        log::log!(self.level, "{operation}: C = {snapshot}");
    }
}

/// Collects snapshots in memory; clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every `(operation, snapshot)` recorded so far
    pub fn records(&self) -> Vec<(String, String)> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, operation: &str, snapshot: &str) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((operation.to_string(), snapshot.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_clones_share_records() {
        let sink = MemorySink::new();
        let handle = sink.clone();
        sink.record("mxm_abt", "(1x1, 0 values)");
        assert_eq!(
            handle.records(),
            vec![("mxm_abt".to_string(), "(1x1, 0 values)".to_string())]
        );
    }
}
