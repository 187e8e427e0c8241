//! Port for structured discussion logging.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures produced
//! utterances and derived artifacts in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured discussion event for logging.
///
/// Each event has a type string and a JSON payload with event-specific
/// fields; the adapter adds the timestamp when it writes the record.
pub struct DiscussionEvent {
    /// Event type identifier (e.g., "utterance", "summary", "guidance").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl DiscussionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging discussion events to a structured log.
///
/// The `log` method is intentionally synchronous and non-fallible to avoid
/// disrupting the main execution flow — logging failures are silently
/// ignored.
pub trait DiscussionLogger: Send + Sync {
    /// Record a discussion event.
    fn log(&self, event: DiscussionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoDiscussionLogger;

impl DiscussionLogger for NoDiscussionLogger {
    fn log(&self, _event: DiscussionEvent) {}
}
