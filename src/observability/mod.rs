//! Tracing with file-based OTLP export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → JsonLinesExporter → rotating JSON file
//! ```
//!
//! Each exported batch is one OTLP/JSON document per line. The live file
//! rotates at 10 MB and three backups are kept. The filter level comes from
//! the `trace_level` plugin option (default `info`).

mod exporter;
mod init;
mod otlp;
mod rotating;

pub use init::{init_tracing, SERVICE_NAME};
