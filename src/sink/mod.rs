pub mod console;
pub mod external;
pub mod multiplex;
pub mod tracing_sink;

pub use console::{Console, ConsoleLogSink, ConsoleMethod, StdConsole};
pub use external::{ExternalLogSink, ExternalLogger};
pub use multiplex::{DiagnosticReporter, MultiplexLogSink, NoopDiagnostics, TracingDiagnostics};
pub use tracing_sink::TracingLogSink;
