//! Tracing initialization and subscriber setup.

use super::exporter::file_tracer_provider;
use super::rotating::{RotatingFile, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
use crate::infrastructure::data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name attached to every exported batch.
const SERVICE_NAME: &str = "Bookcase";

/// File name of the live trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "bookcase-otlp.json";

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Spans are filtered by `config.trace_level` (default `"info"`) and written
/// to `~/.local/share/zellij/bookcase/bookcase-otlp.json` (`/host/...` inside
/// the sandbox), rotating at 10 MB with 3 numbered backups.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if that fails (observability is optional)
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use bookcase::observability::init_tracing;
/// use bookcase::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let file = RotatingFile::new(
        data_dir.join(TRACE_FILE_NAME),
        MAX_FILE_SIZE_BYTES,
        MAX_BACKUP_FILES,
    );
    let provider = file_tracer_provider(file, resource);

    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
