//! Trace export over OTLP, wired into `tracing` through `tracing-opentelemetry`

use axum::http::HeaderMap;
use opentelemetry::propagation::Extractor;
use opentelemetry::propagation::TextMapPropagator;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::Sampler;
use opentelemetry_sdk::trace::Tracer;
use opentelemetry_sdk::trace::TracerProvider;
use opentelemetry_sdk::Resource;
use tracing::Subscriber;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::registry::LookupSpan;

/// Handle on the tracer provider, `None` when exporting is disabled
pub struct Telemetry {
    provider: Option<TracerProvider>,
}

impl Telemetry {
    /// Build a batch exporter towards `endpoint`, must run inside the tokio runtime
    pub fn new(
        endpoint: Option<&str>,
        service_name: &str,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let Some(endpoint) = endpoint else {
            return Ok(Telemetry { provider: None });
        };
        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_http()
            .with_endpoint(endpoint)
            .build()?;
        let resource = Resource::new(vec![
            KeyValue::new("service.name", service_name.to_owned()),
            KeyValue::new("exporter", "otlp"),
        ]);
        let provider = TracerProvider::builder()
            .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
            .with_config(
                opentelemetry_sdk::trace::Config::default()
                    .with_sampler(Sampler::AlwaysOn)
                    .with_resource(resource),
            )
            .build();
        Ok(Telemetry {
            provider: Some(provider),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Layer turning `tracing` spans into exported traces
    pub fn layer<S>(&self) -> Option<OpenTelemetryLayer<S, Tracer>>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        self.provider.as_ref().map(|provider| {
            tracing_opentelemetry::layer().with_tracer(provider.tracer(env!("CARGO_PKG_NAME")))
        })
    }

    /// Flush pending spans
    pub fn shutdown(self) {
        if let Some(provider) = self.provider {
            if let Err(error) = provider.shutdown() {
                tracing::warn!("Could not flush traces `{}`", error);
            }
        }
    }
}

/// Read W3C trace context from request headers
struct HeaderExtractor<'a>(&'a HeaderMap);

impl Extractor for HeaderExtractor<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(|key| key.as_str()).collect()
    }
}

/// Remote parent context carried by `traceparent`, empty when absent
pub fn remote_context(headers: &HeaderMap) -> opentelemetry::Context {
    TraceContextPropagator::new().extract(&HeaderExtractor(headers))
}
