//! Subscriber setup: `tracing` macros → OpenTelemetry → trace file.

use super::span_formatter::SCOPE_NAME;
use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the live trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "wealthwagon-otlp.json";

/// Installs the global tracing subscriber if a trace level is configured.
///
/// Returns the path traces are written to, or `None` when tracing stays
/// disabled (no level configured, or the data directory cannot be created).
/// Nothing is ever written to stdout or stderr, which belong to the UI.
///
/// Safe to call more than once; only the first successful call installs a
/// subscriber.
///
/// # Example
///
/// ```rust
/// use wealthwagon::observability::init_tracing;
/// use wealthwagon::Config;
///
/// let config = Config {
///     api_url: "http://localhost:5000".to_string(),
///     theme_name: None,
///     theme_file: None,
///     trace_level: None,
/// };
///
/// assert!(init_tracing(&config).is_none());
/// ```
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let level = config.trace_level.as_deref()?;

    let data_dir = crate::infrastructure::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok()?;
    let trace_file = data_dir.join(TRACE_FILE_NAME);

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SCOPE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(trace_file.clone(), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init()
        .ok()?;

    Some(trace_file)
}
