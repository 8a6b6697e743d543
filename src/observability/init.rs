use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::exporter::file_tracer_provider;
use crate::infrastructure::trace_file;
use crate::Config;

/// Service name attached to every exported span.
pub const SERVICE_NAME: &str = "TravelAuthority";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber: `EnvFilter` → OpenTelemetry → OTLP file.
///
/// The filter directive comes from `config.trace_level`, defaulting to
/// `info`. Spans land in `<data_dir>/travel-authority-otlp.json`.
///
/// Tracing is optional: if the data directory cannot be created the call
/// does nothing, and calling it twice keeps the first subscriber.
///
/// ```rust
/// use travel_authority::observability::init_tracing;
/// use travel_authority::Config;
///
/// let dir = std::env::temp_dir().join("travel-authority-doc");
/// let config = Config {
///     data_dir: dir,
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing ready");
/// ```
pub fn init_tracing(config: &Config) {
    let directive = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    if std::fs::create_dir_all(&config.data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = file_tracer_provider(trace_file(&config.data_dir), resource);
    let layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(layer)
        .try_init();
}
