//! Tracer provider with file-based span export.
//!
//! Implements a custom `SpanExporter` that writes spans to the rotating
//! trace file instead of a network collector, which is the only sink
//! available inside the plugin sandbox.

use super::otlp::OtlpEncoder;
use super::trace_log::RotatingLogFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Span exporter writing OTLP JSON lines to the rotating trace file.
#[derive(Debug)]
struct FileSpanExporter {
    log: RotatingLogFile,
    encoder: OtlpEncoder,
    is_shutdown: AtomicBool,
}

impl SpanExporter for FileSpanExporter {
    /// Writes one batch as a single OTLP JSON line.
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let document = self.encoder.encode_batch(&batch).to_string();
        let result = self
            .log
            .append_line(&document)
            .map_err(|e| TraceError::from(e.to_string()));

        Box::pin(std::future::ready(result))
    }

    /// Marks the exporter shut down; later exports fail fast.
    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    /// Resource metadata is fixed at construction.
    fn set_resource(&mut self, res: &Resource) {
        let _ = res;
    }
}

/// Builds a tracer provider exporting spans to `file_path`.
///
/// Uses the simple (immediate, non-batched) export strategy: a pane produces
/// few spans and immediate writes keep the trace file current when the pane
/// is closed abruptly.
pub fn build_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter {
        log: RotatingLogFile::new(file_path),
        encoder: OtlpEncoder::new(resource.clone()),
        is_shutdown: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
