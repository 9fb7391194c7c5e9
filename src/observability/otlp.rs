//! OTLP JSON span encoding.
//!
//! Converts OpenTelemetry span data into OTLP (OpenTelemetry Protocol) JSON
//! documents for file export. Each exported batch becomes one complete
//! document with `resourceSpans` → `scopeSpans` → `spans` nesting, readable
//! by standard OTLP tooling.

use opentelemetry::trace::{SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::SystemTime;

/// Instrumentation scope name stamped on every exported batch.
const SCOPE_NAME: &str = "zinema";

/// Encodes span batches as OTLP JSON documents.
pub struct OtlpEncoder {
    /// Resource metadata (service name, etc.) included in every document.
    resource: Resource,
}

impl OtlpEncoder {
    /// Creates an encoder carrying the given resource metadata.
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Encodes one batch as a complete OTLP JSON document.
    pub fn encode_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attrs: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| json!({ "key": key.to_string(), "value": encode_value(value) }))
            .collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attrs },
                "scopeSpans": [{
                    "scope": { "name": SCOPE_NAME },
                    "spans": batch.iter().map(encode_span).collect::<Vec<_>>()
                }]
            }]
        })
    }
}

impl std::fmt::Debug for OtlpEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtlpEncoder").finish()
    }
}

/// Encodes a single span: hex IDs, nanosecond timestamps, attributes,
/// events, links, and status per the OTLP field layout.
fn encode_span(span: &SpanData) -> JsonValue {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            json!({
                "timeUnixNano": nanos_since_epoch(event.timestamp),
                "name": event.name,
                "attributes": encode_attributes(&event.attributes),
            })
        })
        .collect();

    let links: Vec<JsonValue> = span
        .links
        .iter()
        .map(|link| {
            json!({
                "traceId": format!("{:032x}", link.span_context.trace_id()),
                "spanId": format!("{:016x}", link.span_context.span_id()),
                "attributes": encode_attributes(&link.attributes),
            })
        })
        .collect();

    let (status_code, status_message) = encode_status(&span.status);

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": kind_code(&span.span_kind),
        "startTimeUnixNano": nanos_since_epoch(span.start_time),
        "endTimeUnixNano": nanos_since_epoch(span.end_time),
        "attributes": encode_attributes(&span.attributes),
        "events": events,
        "links": links,
        "status": { "code": status_code, "message": status_message },
    })
}

/// Encodes a key-value list as the OTLP attribute array.
fn encode_attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| json!({ "key": kv.key.to_string(), "value": encode_value(&kv.value) }))
        .collect()
}

/// Encodes one attribute value as its OTLP typed wrapper.
///
/// Integers are serialized as strings and arrays fall back to their debug
/// rendering, matching the OTLP JSON mapping rules.
fn encode_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.to_string() }),
        Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
    }
}

/// OTLP status mapping: unset 0, ok 1, error 2 with its description.
fn encode_status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

/// OTLP span kind codes.
const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

/// Formats a timestamp as nanoseconds since the Unix epoch, as a string.
fn nanos_since_epoch(time: SystemTime) -> String {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        .to_string()
}
