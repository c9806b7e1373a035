//! Port for structured provider-exchange logging.
//!
//! Defines the [`ExchangeLogger`] trait for recording provider
//! exchanges (prompts sent, responses received, fallbacks taken) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing
//! carries human-readable diagnostics, while this port captures the
//! raw exchange payloads in a machine-readable format for later
//! inspection of what a provider was actually asked and actually said.

use serde_json::Value;

/// A structured exchange event for logging.
pub struct ExchangeEvent {
    /// Event type identifier (e.g. "industry_analysis",
    /// "recommendation_response").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ExchangeEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging exchange events to a structured log.
///
/// Implementations write each event as a single record (e.g. one JSONL
/// line). The `record` method is intentionally synchronous and
/// non-fallible: a broken log must never disturb a recommendation run.
pub trait ExchangeLogger: Send + Sync {
    fn record(&self, event: ExchangeEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoExchangeLogger;

impl ExchangeLogger for NoExchangeLogger {
    fn record(&self, _event: ExchangeEvent) {}
}
