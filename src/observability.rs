//! Microfrontend-aware logging facade.
//!
//! `MicrofrontendObservability` owns the metadata registry and the configured
//! sink. `create_logger` hands out `MfeLogger` handles that stamp the
//! microfrontend's metadata onto every event before delegating to the sink.

use crate::domain::{LogContext, LogLevel, MicrofrontendInfo};
use crate::error::{ObservabilityError, SinkError};
use crate::port::LogSink;
use crate::registry::MicrofrontendRegistry;
use std::sync::Arc;

/// Registry plus sink; the entry point host applications wire up once.
pub struct MicrofrontendObservability {
    registry: MicrofrontendRegistry,
    sink: Arc<dyn LogSink>,
}

impl MicrofrontendObservability {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            registry: MicrofrontendRegistry::new(),
            sink,
        }
    }

    /// Register or replace the metadata for `info.id`.
    pub fn register_microfrontend(&self, info: MicrofrontendInfo) -> Result<(), ObservabilityError> {
        self.registry.register(info)
    }

    /// Create a logger bound to the metadata currently registered for `mfe_id`.
    ///
    /// The handle keeps that metadata even if the id is re-registered later;
    /// call `create_logger` again to pick up the new values.
    pub fn create_logger(&self, mfe_id: &str) -> Result<MfeLogger, ObservabilityError> {
        let info = self
            .registry
            .get(mfe_id)
            .ok_or_else(|| ObservabilityError::NotFound {
                id: mfe_id.to_string(),
            })?;

        Ok(MfeLogger {
            info,
            sink: Arc::clone(&self.sink),
        })
    }

    pub fn registry(&self) -> &MicrofrontendRegistry {
        &self.registry
    }
}

/// Convenience factory for creating the observability registry.
pub fn create_microfrontend_observability(sink: Arc<dyn LogSink>) -> MicrofrontendObservability {
    MicrofrontendObservability::new(sink)
}

/// Logger with microfrontend metadata baked in.
#[derive(Clone)]
pub struct MfeLogger {
    info: Arc<MicrofrontendInfo>,
    sink: Arc<dyn LogSink>,
}

impl MfeLogger {
    pub fn debug(&self, message: &str, ctx: Option<LogContext>) -> Result<(), SinkError> {
        self.log_at(LogLevel::Debug, message, ctx)
    }

    pub fn info(&self, message: &str, ctx: Option<LogContext>) -> Result<(), SinkError> {
        self.log_at(LogLevel::Info, message, ctx)
    }

    pub fn warn(&self, message: &str, ctx: Option<LogContext>) -> Result<(), SinkError> {
        self.log_at(LogLevel::Warn, message, ctx)
    }

    pub fn error(&self, message: &str, ctx: Option<LogContext>) -> Result<(), SinkError> {
        self.log_at(LogLevel::Error, message, ctx)
    }

    pub fn log(&self, message: &str, ctx: Option<LogContext>) -> Result<(), SinkError> {
        self.log_at(LogLevel::Log, message, ctx)
    }

    /// Merge metadata into `ctx` and hand the event to the sink.
    ///
    /// Sink failures are returned as-is.
    pub fn log_at(&self, level: LogLevel, message: &str, ctx: Option<LogContext>) -> Result<(), SinkError> {
        let merged = self.merge_context(ctx);
        self.sink.log(level, message, &merged)
    }

    /// Metadata this logger stamps onto events.
    pub fn microfrontend(&self) -> &MicrofrontendInfo {
        &self.info
    }

    fn merge_context(&self, ctx: Option<LogContext>) -> LogContext {
        let mut merged = ctx.unwrap_or_default();
        for (key, value) in self.info.metadata_fields() {
            merged.insert(key.to_string(), value);
        }
        merged
    }
}

impl std::fmt::Debug for MfeLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MfeLogger")
            .field("mfe_id", &self.info.id)
            .finish_non_exhaustive()
    }
}
