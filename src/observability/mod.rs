//! OpenTelemetry-based observability with file-based trace export.
//!
//! A Zellij pane owns stdout, so the usual logging sinks are unavailable;
//! spans are instead exported as OTLP JSON lines to a size-rotated file under
//! the plugin data directory, where they can be inspected offline or fed to
//! any OTLP-speaking tool.
//!
//! # Pipeline
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK
//!                → FileSpanExporter → OTLP JSON → rotating file
//! ```
//!
//! # Configuration
//!
//! The span filter comes from the `trace_level` plugin configuration value
//! (default `"info"`), using `tracing_subscriber`'s `EnvFilter` syntax.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - `tracer`: Tracer provider with the file-based span exporter
//! - `otlp`: OTLP JSON span encoding
//! - `trace_log`: Rotating file writer with size-based rotation

mod init;
mod otlp;
mod trace_log;
mod tracer;

pub use init::init_tracing;
