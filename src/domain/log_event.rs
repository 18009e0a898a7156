use super::LogLevel;
use serde::{Deserialize, Serialize};

/// Open key/value context attached to a log call.
///
/// Values are untyped on purpose: the destinations behind a sink (consoles,
/// vendor clients) accept arbitrary JSON-like payloads.
pub type LogContext = serde_json::Map<String, serde_json::Value>;

/// One event as delivered to a sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    pub level: LogLevel,
    pub message: String,
    pub context: LogContext,
}

impl LogEvent {
    pub fn new(level: LogLevel, message: impl Into<String>, context: LogContext) -> Self {
        Self {
            level,
            message: message.into(),
            context,
        }
    }

    /// Convenience accessor for a string-valued context entry.
    pub fn context_str(&self, key: &str) -> Option<&str> {
        self.context.get(key).and_then(serde_json::Value::as_str)
    }
}
