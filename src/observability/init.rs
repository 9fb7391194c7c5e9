//! Tracing initialization and subscriber setup.
//!
//! Wires the complete observability pipeline: an `EnvFilter` built from the
//! configured trace level, the OpenTelemetry layer, and the file-exporting
//! tracer provider.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace export file inside the plugin data directory.
const TRACE_FILE_NAME: &str = "zinema-traces.json";

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// The filter level comes from `config.trace_level`, defaulting to `"info"`.
/// Creates the plugin data directory if needed; when that fails the function
/// returns silently, since observability is optional and the pane must still
/// come up. Idempotent: only the first successful call installs a subscriber.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::plugin_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", "zinema")]);

    let provider = tracer::build_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer("zinema"));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
