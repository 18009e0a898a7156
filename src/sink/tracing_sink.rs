//! Tracing library adapter implementation.

use crate::domain::{LogContext, LogLevel};
use crate::error::SinkError;
use crate::port::LogSink;
use serde_json::Value;

/// Sink that delegates to the `tracing` crate.
///
/// The merged context is attached as a JSON `context` field, with `mfe_id`
/// lifted into its own field so subscribers can filter on it. `Log` events are
/// emitted at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl TracingLogSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingLogSink {
    fn log(&self, level: LogLevel, message: &str, context: &LogContext) -> Result<(), SinkError> {
        let context_json = serde_json::to_string(context)?;
        let mfe_id = context.get("mfe_id").and_then(Value::as_str).unwrap_or("");

        match level {
            LogLevel::Debug => tracing::debug!(mfe_id, context = %context_json, "{message}"),
            LogLevel::Info | LogLevel::Log => {
                tracing::info!(mfe_id, context = %context_json, "{message}");
            }
            LogLevel::Warn => tracing::warn!(mfe_id, context = %context_json, "{message}"),
            LogLevel::Error => tracing::error!(mfe_id, context = %context_json, "{message}"),
        }
        Ok(())
    }
}
