use crate::error::AppError;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{Resource, runtime, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Flushes and shuts down the OTLP pipeline when dropped.
///
/// Hold it for the lifetime of the process; dropping it early stops span
/// export.
#[must_use = "dropping the guard shuts down span export"]
#[derive(Debug)]
pub struct TracingGuard {
    exports_spans: bool,
}

impl TracingGuard {
    pub fn exports_spans(&self) -> bool {
        self.exports_spans
    }
}

impl Drop for TracingGuard {
    fn drop(&mut self) {
        if self.exports_spans {
            opentelemetry::global::shutdown_tracer_provider();
        }
    }
}

/// Installs the global subscriber: JSON logs on stdout, plus OTLP span export
/// when `otlp_endpoint` is set. `RUST_LOG` takes precedence over `log_level`.
pub fn init_tracing(
    service_name: &str,
    log_level: &str,
    otlp_endpoint: Option<&str>,
) -> Result<TracingGuard, AppError> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let telemetry = match otlp_endpoint {
        Some(endpoint) => {
            let tracer = otlp_tracer(service_name, endpoint)?;
            Some(tracing_opentelemetry::layer().with_tracer(tracer))
        }
        None => None,
    };
    let guard = TracingGuard {
        exports_spans: telemetry.is_some(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(telemetry)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .try_init()
        .map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("Failed to install subscriber: {}", e))
        })?;

    Ok(guard)
}

fn otlp_tracer(service_name: &str, endpoint: &str) -> Result<sdktrace::Tracer, AppError> {
    let otlp_exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(endpoint);

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(otlp_exporter)
        .with_trace_config(sdktrace::config().with_resource(Resource::new(vec![
            KeyValue::new("service.name", service_name.to_string()),
        ])))
        .install_batch(runtime::Tokio)
        .map_err(|e| {
            AppError::InternalError(anyhow::anyhow!(
                "Failed to initialize OTLP tracer for service '{}' at endpoint '{}': {}",
                service_name,
                endpoint,
                e
            ))
        })
}
