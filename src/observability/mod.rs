//! Tracing with OpenTelemetry spans exported to a local JSON file.
//!
//! The terminal is owned by the UI, so diagnostics never go to stdout or
//! stderr. Instead, when a trace level is configured, spans and events from
//! the `tracing` macros flow through this pipeline:
//!
//! ```text
//! tracing macros → tracing-opentelemetry → TracerProvider → FileSpanExporter
//!                                                              │
//!                              {data_dir}/wealthwagon/wealthwagon-otlp.json
//! ```
//!
//! One line per export, each a complete OTLP `resourceSpans` document. The
//! file rotates at 10 MB and keeps three numbered backups.
//!
//! Level resolution: `WEALTHWAGON_TRACE_LEVEL`, then `RUST_LOG`; with neither
//! set tracing stays off.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::RotatingFileWriter;
pub use init::{init_tracing, TRACE_FILE_NAME};
