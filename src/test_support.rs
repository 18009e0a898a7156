//! Shared test support utilities
//!
//! Provides recording sinks implementing `LogSink` for use in unit and
//! integration tests, and by hosts that want to assert on emitted events.

use crate::domain::{LogContext, LogEvent, LogLevel};
use crate::error::SinkError;
use crate::port::LogSink;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Sink that captures every delivered event in memory.
#[derive(Debug, Default)]
pub struct MemoryLogSink {
    entries: Mutex<Vec<LogEvent>>,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEvent> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn last(&self) -> Option<LogEvent> {
        self.entries.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl LogSink for MemoryLogSink {
    fn log(&self, level: LogLevel, message: &str, context: &LogContext) -> Result<(), SinkError> {
        self.entries
            .lock()
            .push(LogEvent::new(level, message, context.clone()));
        Ok(())
    }
}

/// Sink that fails every call while `should_fail` is set, counting attempts.
#[derive(Debug)]
pub struct FailingLogSink {
    should_fail: AtomicBool,
    attempts: AtomicUsize,
    delivered: MemoryLogSink,
}

impl FailingLogSink {
    pub fn new() -> Self {
        Self {
            should_fail: AtomicBool::new(true),
            attempts: AtomicUsize::new(0),
            delivered: MemoryLogSink::new(),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Events accepted while the sink was not failing.
    pub fn delivered(&self) -> Vec<LogEvent> {
        self.delivered.entries()
    }
}

impl Default for FailingLogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for FailingLogSink {
    fn log(&self, level: LogLevel, message: &str, context: &LogContext) -> Result<(), SinkError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SinkError::Write("Mock sink failure".to_string()));
        }
        self.delivered.log(level, message, context)
    }
}
