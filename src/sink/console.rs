//! Console sink.
//!
//! Writes `[<level>] <message>` followed by the context to a `Console`. Each
//! level prefers the console method of the same name and falls back to the
//! generic `Log` method when the console does not provide it.

use crate::domain::{LogContext, LogLevel};
use crate::error::SinkError;
use crate::port::LogSink;
use std::io::{self, Write};
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

/// Output methods a console may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleMethod {
    Debug,
    Info,
    Warn,
    Error,
    Log,
}

impl ConsoleMethod {
    /// Preferred console method for a level.
    pub fn for_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => ConsoleMethod::Debug,
            LogLevel::Info => ConsoleMethod::Info,
            LogLevel::Warn => ConsoleMethod::Warn,
            LogLevel::Error => ConsoleMethod::Error,
            LogLevel::Log => ConsoleMethod::Log,
        }
    }
}

/// A console-like output facility.
#[cfg_attr(test, automock)]
pub trait Console: Send + Sync {
    fn has_method(&self, method: ConsoleMethod) -> bool;

    fn write(&self, method: ConsoleMethod, payload: &str, context: &LogContext) -> Result<(), SinkError>;
}

/// Process console: debug/info/log to stdout, warn/error to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn has_method(&self, _method: ConsoleMethod) -> bool {
        true
    }

    fn write(&self, method: ConsoleMethod, payload: &str, context: &LogContext) -> Result<(), SinkError> {
        let context_json = serde_json::to_string(context)?;
        match method {
            ConsoleMethod::Warn | ConsoleMethod::Error => {
                writeln!(io::stderr().lock(), "{payload} {context_json}")?;
            }
            ConsoleMethod::Debug | ConsoleMethod::Info | ConsoleMethod::Log => {
                writeln!(io::stdout().lock(), "{payload} {context_json}")?;
            }
        }
        Ok(())
    }
}

/// Sink writing to a console; a no-op when none is attached.
#[derive(Clone)]
pub struct ConsoleLogSink {
    console: Option<Arc<dyn Console>>,
}

impl ConsoleLogSink {
    /// Sink writing to the process console.
    pub fn new() -> Self {
        Self::with_console(Arc::new(StdConsole))
    }

    pub fn with_console(console: Arc<dyn Console>) -> Self {
        Self {
            console: Some(console),
        }
    }

    /// Sink with no console attached; every call is silently dropped.
    pub fn detached() -> Self {
        Self { console: None }
    }

    fn select_method(console: &dyn Console, level: LogLevel) -> Option<ConsoleMethod> {
        let preferred = ConsoleMethod::for_level(level);
        if console.has_method(preferred) {
            Some(preferred)
        } else if console.has_method(ConsoleMethod::Log) {
            Some(ConsoleMethod::Log)
        } else {
            None
        }
    }
}

impl Default for ConsoleLogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for ConsoleLogSink {
    fn log(&self, level: LogLevel, message: &str, context: &LogContext) -> Result<(), SinkError> {
        let Some(console) = self.console.as_deref() else {
            return Ok(());
        };
        let Some(method) = Self::select_method(console, level) else {
            return Ok(());
        };

        let payload = format!("[{level}] {message}");
        console.write(method, &payload, context)
    }
}
