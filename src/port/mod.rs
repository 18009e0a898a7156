use crate::domain::{LogContext, LogLevel};
use crate::error::SinkError;

/// Destination for enriched log events (console, vendor client, fan-out, ...).
///
/// Calls are synchronous. The context is read-only input; implementations
/// must not rely on retaining it past the call.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, message: &str, context: &LogContext) -> Result<(), SinkError>;
}
