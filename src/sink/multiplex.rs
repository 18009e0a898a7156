//! Fan-out sink.
//!
//! Delivers every event to each wrapped sink in order. A sink that returns an
//! error or panics is reported to a `DiagnosticReporter` and never stops
//! delivery to the rest.

use crate::domain::{LogContext, LogLevel};
use crate::error::{ObservabilityError, SinkError};
use crate::port::LogSink;
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use tracing::error;

/// Best-effort channel for sink failures swallowed by the fan-out.
pub trait DiagnosticReporter: Send + Sync {
    fn sink_failed(&self, sink_index: usize, level: LogLevel, message: &str, error: &SinkError);
}

/// Reports sink failures as `tracing` error events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticReporter for TracingDiagnostics {
    fn sink_failed(&self, sink_index: usize, level: LogLevel, message: &str, err: &SinkError) {
        error!(
            sink_index,
            %level,
            log_message = message,
            error = %err,
            "[MultiplexLogSink] Sink threw while handling log; continuing with others"
        );
    }
}

/// Discards sink failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl DiagnosticReporter for NoopDiagnostics {
    fn sink_failed(&self, _sink_index: usize, _level: LogLevel, _message: &str, _error: &SinkError) {}
}

pub struct MultiplexLogSink {
    sinks: Vec<Arc<dyn LogSink>>,
    diagnostics: Arc<dyn DiagnosticReporter>,
}

impl MultiplexLogSink {
    /// Fan-out reporting failures through `TracingDiagnostics`.
    pub fn new(sinks: Vec<Arc<dyn LogSink>>) -> Result<Self, ObservabilityError> {
        Self::with_diagnostics(sinks, Arc::new(TracingDiagnostics))
    }

    pub fn with_diagnostics(
        sinks: Vec<Arc<dyn LogSink>>,
        diagnostics: Arc<dyn DiagnosticReporter>,
    ) -> Result<Self, ObservabilityError> {
        if sinks.is_empty() {
            return Err(ObservabilityError::Validation(
                "MultiplexLogSink requires at least one sink".into(),
            ));
        }
        Ok(Self { sinks, diagnostics })
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl LogSink for MultiplexLogSink {
    fn log(&self, level: LogLevel, message: &str, context: &LogContext) -> Result<(), SinkError> {
        for (index, sink) in self.sinks.iter().enumerate() {
            let outcome = catch_unwind(AssertUnwindSafe(|| sink.log(level, message, context)))
                .unwrap_or_else(|payload| Err(SinkError::Panicked(panic_message(payload.as_ref()))));
            if let Err(err) = outcome {
                self.diagnostics.sink_failed(index, level, message, &err);
            }
        }
        Ok(())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
