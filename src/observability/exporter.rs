//! `SpanExporter` that appends OTLP/JSON lines to a local file.
//!
//! The plugin sandbox has no network collector, so spans are exported
//! synchronously to disk and inspected offline.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};

use super::otlp;
use super::rotating::RotatingFile;

struct JsonLinesExporter {
    output: RotatingFile,
    resource: Resource,
    stopped: AtomicBool,
}

impl JsonLinesExporter {
    fn new(path: PathBuf, resource: Resource) -> Self {
        Self {
            output: RotatingFile::new(path),
            resource,
            stopped: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.stopped.load(Ordering::SeqCst) {
            return Err(TraceError::from("trace exporter already shut down"));
        }
        let line = otlp::encode_batch(&self.resource, batch).to_string();
        self.output
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

impl std::fmt::Debug for JsonLinesExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesExporter")
            .field("output", &self.output)
            .field("stopped", &self.stopped)
            .finish_non_exhaustive()
    }
}

/// Builds a provider exporting every finished span to `path`.
///
/// Uses the simple (unbatched) processor: the plugin is single-threaded and
/// has no async runtime to drive a batch worker.
pub fn file_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = JsonLinesExporter::new(path, resource.clone());

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
