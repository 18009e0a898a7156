use std::env;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::ObservabilityError;
use crate::port::LogSink;
use crate::sink::{ConsoleLogSink, MultiplexLogSink, TracingLogSink};

const SINKS_VAR: &str = "MFEO_SINKS";
const LOG_FORMAT_VAR: &str = "RUST_LOG_FORMAT";
const DEFAULT_SINKS: &str = "console";

/// Built-in destinations selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Console,
    Tracing,
}

impl FromStr for SinkKind {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(SinkKind::Console),
            "tracing" => Ok(SinkKind::Tracing),
            other => Err(ObservabilityError::Config(format!("Unknown sink '{other}'"))),
        }
    }
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(ObservabilityError::Config(format!(
                "Unknown log format '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Destinations, in delivery order
    pub sinks: Vec<SinkKind>,
    pub log_format: LogFormat,
}

impl Settings {
    /// Build settings from a variable lookup (the process environment in
    /// `get_configuration`).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ObservabilityError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sinks = parse_sinks(&lookup(SINKS_VAR).unwrap_or_else(|| DEFAULT_SINKS.to_string()))?;
        let log_format = lookup(LOG_FORMAT_VAR)
            .map(|v| v.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        let settings = Settings { sinks, log_format };
        settings.validate()?;
        Ok(settings)
    }

    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), ObservabilityError> {
        if self.sinks.is_empty() {
            return Err(ObservabilityError::Config(
                "At least one sink must be configured".into(),
            ));
        }
        Ok(())
    }

    /// Instantiate the configured sinks; several are wrapped in a fan-out.
    pub fn build_sink(&self) -> Result<Arc<dyn LogSink>, ObservabilityError> {
        self.validate()?;

        let mut sinks: Vec<Arc<dyn LogSink>> = self
            .sinks
            .iter()
            .map(|kind| -> Arc<dyn LogSink> {
                match kind {
                    SinkKind::Console => Arc::new(ConsoleLogSink::new()),
                    SinkKind::Tracing => Arc::new(TracingLogSink::new()),
                }
            })
            .collect();

        if sinks.len() == 1
            && let Some(sink) = sinks.pop()
        {
            return Ok(sink);
        }
        Ok(Arc::new(MultiplexLogSink::new(sinks)?))
    }
}

fn parse_sinks(raw: &str) -> Result<Vec<SinkKind>, ObservabilityError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(SinkKind::from_str)
        .collect()
}

pub fn get_configuration() -> Result<Settings, ObservabilityError> {
    Settings::from_lookup(|key| env::var(key).ok())
}
