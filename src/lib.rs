#![warn(rust_2018_idioms)]

pub mod config;
pub mod domain;
pub mod error;
pub mod observability;
pub mod port;
pub mod registry;
pub mod sink;
pub mod telemetry;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use domain::{LogContext, LogEvent, LogLevel, MicrofrontendInfo};
pub use error::{ObservabilityError, SinkError};
pub use observability::{MfeLogger, MicrofrontendObservability, create_microfrontend_observability};
pub use port::LogSink;
pub use sink::{ConsoleLogSink, ExternalLogSink, MultiplexLogSink, TracingLogSink};
