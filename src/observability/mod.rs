//! OpenTelemetry-based observability with file-based trace export.
//!
//! Every `tracing` span in the crate is bridged into OpenTelemetry and written
//! as OTLP JSON to a local file, since a sandboxed plugin has no collector to
//! talk to.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → OtlpFileExporter → RotatingFile
//! ```
//!
//! # Configuration
//!
//! Trace level comes from the `trace_level` plugin option (default `"info"`)
//! and accepts any `EnvFilter` directive, e.g. `bookcase=debug`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: OTLP JSON span export
//! - [`rotating`]: Size-rotated trace file with numbered backups

mod exporter;
mod init;
mod rotating;

pub use init::{init_tracing, TRACE_FILE_NAME};
