use crate::utils::{Metrics, Status};
use anyhow::{Context as _, Result};
use opentelemetry::{
    Context, KeyValue, global,
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use opentelemetry_otlp::{LogExporter, MetricExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    Resource, logs::SdkLoggerProvider, metrics::SdkMeterProvider, trace::SdkTracerProvider,
};
use tokio::time::Instant;
use tracing::{error, info};

/// OTLP providers for one process. Without an endpoint nothing is
/// exported and the global providers stay no-ops.
pub struct Telemetry {
    service_name: String,
    tracer: Option<SdkTracerProvider>,
    meter: Option<SdkMeterProvider>,
    logger: Option<SdkLoggerProvider>,
}

impl Telemetry {
    pub fn init(service_name: impl Into<String>, otel_endpoint: Option<&str>) -> Result<Self> {
        let service_name = service_name.into();

        let Some(endpoint) = otel_endpoint else {
            return Ok(Self {
                service_name,
                tracer: None,
                meter: None,
                logger: None,
            });
        };

        let resource = Resource::builder()
            .with_service_name(service_name.clone())
            .build();

        let span_exporter = SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()
            .context("Failed to create span exporter")?;

        let tracer = SdkTracerProvider::builder()
            .with_resource(resource.clone())
            .with_batch_exporter(span_exporter)
            .build();
        global::set_tracer_provider(tracer.clone());

        let metric_exporter = MetricExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()
            .context("Failed to create metric exporter")?;

        let meter = SdkMeterProvider::builder()
            .with_resource(resource.clone())
            .with_periodic_exporter(metric_exporter)
            .build();
        global::set_meter_provider(meter.clone());

        let log_exporter = LogExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()
            .context("Failed to create log exporter")?;

        let logger = SdkLoggerProvider::builder()
            .with_resource(resource)
            .with_batch_exporter(log_exporter)
            .build();

        Ok(Self {
            service_name,
            tracer: Some(tracer),
            meter: Some(meter),
            logger: Some(logger),
        })
    }

    pub fn is_exporting(&self) -> bool {
        self.tracer.is_some()
    }

    pub fn logger_provider(&self) -> Option<&SdkLoggerProvider> {
        self.logger.as_ref()
    }

    pub fn shutdown(self) -> Result<()> {
        let mut errors = Vec::new();

        if let Some(tracer) = self.tracer
            && let Err(e) = tracer.shutdown()
        {
            errors.push(format!("tracer provider: {e}"));
        }
        if let Some(meter) = self.meter
            && let Err(e) = meter.shutdown()
        {
            errors.push(format!("meter provider: {e}"));
        }
        if let Some(logger) = self.logger
            && let Err(e) = logger.shutdown()
        {
            errors.push(format!("logger provider: {e}"));
        }

        if !errors.is_empty() {
            anyhow::bail!(
                "Failed to shutdown providers for {}:\n{}",
                self.service_name,
                errors.join("\n")
            );
        }

        Ok(())
    }
}

pub struct TracingContext {
    pub cx: Context,
    pub operation: String,
    pub start_time: Instant,
}

/// Wraps service operations in a server span and records their outcome.
#[derive(Clone, Debug)]
pub struct OperationTracer {
    tracer_name: &'static str,
    metrics: Metrics,
}

impl OperationTracer {
    pub fn new(tracer_name: &'static str, metrics: Metrics) -> Self {
        Self {
            tracer_name,
            metrics,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn start(&self, operation: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = global::tracer(self.tracer_name);
        let mut span = tracer
            .span_builder(operation.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation.to_string())],
        );

        TracingContext {
            cx: Context::current_with_span(span),
            operation: operation.to_string(),
            start_time,
        }
    }

    pub fn complete_success(&self, ctx: &TracingContext, message: &str) {
        self.complete(ctx, true, message);
    }

    pub fn complete_error(&self, ctx: &TracingContext, message: &str) {
        self.complete(ctx, false, message);
    }

    fn complete(&self, ctx: &TracingContext, is_success: bool, message: &str) {
        let (status_str, status) = if is_success {
            ("SUCCESS", Status::Success)
        } else {
            ("ERROR", Status::Error)
        };
        let elapsed = ctx.start_time.elapsed().as_secs_f64();

        ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(&ctx.operation, status, elapsed);

        ctx.cx.span().end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Labels;

    #[test]
    fn telemetry_without_endpoint_is_inert() {
        let telemetry = Telemetry::init("reporting", None).unwrap();

        assert!(!telemetry.is_exporting());
        assert!(telemetry.logger_provider().is_none());
        telemetry.shutdown().unwrap();
    }

    #[tokio::test]
    async fn completed_operations_are_counted() {
        let tracer = OperationTracer::new("test-service", Metrics::new());

        let ctx = tracer.start("find_all", vec![KeyValue::new("page", "1")]);
        tracer.complete_success(&ctx, "done");

        let ctx = tracer.start("find_all", vec![]);
        tracer.complete_error(&ctx, "boom");

        let counter = &tracer.metrics().request_counter;
        let success = Labels {
            operation: "find_all".into(),
            status: Status::Success,
        };
        let failure = Labels {
            operation: "find_all".into(),
            status: Status::Error,
        };

        assert_eq!(counter.get_or_create(&success).get(), 1);
        assert_eq!(counter.get_or_create(&failure).get(), 1);
    }
}
