//! Domain layer for mfe-observability.
//!
//! Contains the types shared across the registry, the facade and every sink:
//! - `MicrofrontendInfo`: Metadata registered per microfrontend
//! - `LogLevel`: Closed set of levels a logger handle exposes
//! - `LogContext`: Open key/value context attached to each event
//! - `LogEvent`: Owned snapshot of one delivered event

pub mod log_event;
pub mod log_level;
pub mod microfrontend;

pub use log_event::{LogContext, LogEvent};
pub use log_level::LogLevel;
pub use microfrontend::MicrofrontendInfo;
