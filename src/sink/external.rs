//! Sink forwarding to an injected third-party logging client.

use crate::domain::{LogContext, LogLevel};
use crate::error::{ObservabilityError, SinkError};
use crate::port::LogSink;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

/// Minimal surface of a vendor logging client (browser-logs SDK and similar).
///
/// `handles` reports whether the client has a dedicated method for a level;
/// levels it does not handle are routed to the generic `log` method.
#[cfg_attr(test, automock)]
pub trait ExternalLogger: Send + Sync {
    fn debug(&self, message: &str, context: &LogContext) -> Result<(), SinkError>;
    fn info(&self, message: &str, context: &LogContext) -> Result<(), SinkError>;
    fn warn(&self, message: &str, context: &LogContext) -> Result<(), SinkError>;
    fn error(&self, message: &str, context: &LogContext) -> Result<(), SinkError>;
    fn log(&self, message: &str, context: &LogContext) -> Result<(), SinkError>;

    fn handles(&self, _level: LogLevel) -> bool {
        true
    }
}

type ClientMethod = fn(&dyn ExternalLogger, &str, &LogContext) -> Result<(), SinkError>;

/// Level to client method table. `Log` is also the fallback entry.
fn client_method(level: LogLevel) -> ClientMethod {
    match level {
        LogLevel::Debug => |c, m, ctx| c.debug(m, ctx),
        LogLevel::Info => |c, m, ctx| c.info(m, ctx),
        LogLevel::Warn => |c, m, ctx| c.warn(m, ctx),
        LogLevel::Error => |c, m, ctx| c.error(m, ctx),
        LogLevel::Log => |c, m, ctx| c.log(m, ctx),
    }
}

/// Sink that forwards events to an `ExternalLogger`.
#[derive(Clone)]
pub struct ExternalLogSink {
    client: Arc<dyn ExternalLogger>,
}

impl ExternalLogSink {
    pub fn new(client: Option<Arc<dyn ExternalLogger>>) -> Result<Self, ObservabilityError> {
        let client = client.ok_or_else(|| {
            ObservabilityError::Validation("ExternalLogSink requires a logger instance".into())
        })?;
        Ok(Self { client })
    }
}

impl LogSink for ExternalLogSink {
    fn log(&self, level: LogLevel, message: &str, context: &LogContext) -> Result<(), SinkError> {
        let client = self.client.as_ref();
        let method = if client.handles(level) {
            client_method(level)
        } else {
            client_method(LogLevel::Log)
        };
        method(client, message, context)
    }
}
