use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObservabilityError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown microfrontend id \"{id}\". Did you call register_microfrontend?")]
    NotFound { id: String },

    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("Failed to initialize tracing: {0}")]
    Tracing(String),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Failure raised by a sink while delivering a single event.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Sink write failed: {0}")]
    Write(String),

    #[error("Sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode log context: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Sink panicked: {0}")]
    Panicked(String),
}
