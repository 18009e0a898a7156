use crate::config::LogFormat;
use crate::error::ObservabilityError;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber for the crate's own diagnostics and for
/// `TracingLogSink` output.
pub fn init_tracing(format: LogFormat) -> Result<(), ObservabilityError> {
    let filter = EnvFilter::from_default_env().add_directive(Level::INFO.into());

    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true),
            )
            .with(filter)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .try_init(),
    };

    result.map_err(|e| ObservabilityError::Tracing(e.to_string()))
}
