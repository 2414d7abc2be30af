use anyhow::{Context, Result};
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{InitError, RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Clone)]
pub struct LogOptions {
    pub component: String,
    pub is_dev: bool,
    pub console: bool,
    pub file: bool,
}

impl LogOptions {
    /// Reads `DEV_MODE` and `ENABLE_FILE_LOG`.
    pub fn from_env(component: impl Into<String>) -> Self {
        Self::from_lookup(component, |key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(component: impl Into<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| {
            lookup(key)
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false)
        };

        Self {
            component: component.into(),
            is_dev: flag("DEV_MODE"),
            console: true,
            file: flag("ENABLE_FILE_LOG"),
        }
    }

    pub fn without_console(mut self) -> Self {
        self.console = false;
        self
    }

    pub fn log_dir(&self) -> &'static str {
        if self.is_dev { "./logs" } else { "/var/log/app" }
    }
}

/// Daily rolling `rust_app_<component>.<date>.log` writer in `dir`.
pub fn file_writer(dir: &str, component: &str) -> Result<(NonBlocking, WorkerGuard), InitError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(format!("rust_app_{component}"))
        .filename_suffix("log")
        .build(dir)?;

    Ok(tracing_appender::non_blocking(appender))
}

/// Installs the global subscriber. The returned guard flushes the file
/// writer on drop and must live until shutdown.
pub fn init_logger(
    options: &LogOptions,
    sdk_logger_provider: Option<&SdkLoggerProvider>,
) -> Result<Option<WorkerGuard>> {
    let mut guard = None;

    let file_layer = if options.file {
        match file_writer(options.log_dir(), &options.component) {
            Ok((file_writer, file_guard)) => {
                guard = Some(file_guard);

                Some(
                    fmt::layer()
                        .with_writer(file_writer)
                        .with_ansi(false)
                        .json()
                        .with_filter(EnvFilter::new("info")),
                )
            }
            Err(e) => {
                eprintln!(
                    "⚠️ File logging disabled, cannot open {}: {e}",
                    options.log_dir()
                );
                None
            }
        }
    } else {
        None
    };

    let console_layer = options.console.then(|| {
        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_ansi(true)
            .with_filter(console_filter)
    });

    let otel_layer = sdk_logger_provider.map(|provider| {
        let otel_filter =
            EnvFilter::new("info,hyper=off,opentelemetry=off,tonic=off,h2=off,reqwest=off");

        OpenTelemetryTracingBridge::new(provider).with_filter(otel_filter)
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(otel_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
