use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family, gauge::Gauge};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use std::{
    fs,
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use sysinfo::{Pid, ProcessesToUpdate, System};
use tokio::sync::Mutex;

const LATENCY_BUCKETS: [f64; 11] = [
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

fn read_thread_count(pid: u32) -> Option<i64> {
    let contents = fs::read_to_string(format!("/proc/{pid}/status")).ok()?;
    contents
        .lines()
        .find_map(|line| line.strip_prefix("Threads:"))
        .and_then(|count| count.trim().parse().ok())
}

/// Process gauges refreshed by [`run_metrics_collector`].
#[derive(Debug, Clone, Default)]
pub struct SystemMetrics {
    pub resident_memory_bytes: Gauge,
    pub virtual_memory_bytes: Gauge,
    pub available_memory_bytes: Gauge,
    pub thread_count: Gauge,
    pub cpu_usage_percent: Gauge,
    pub process_start_time: Gauge,
    system: Arc<Mutex<Option<System>>>,
}

impl SystemMetrics {
    pub fn new() -> Self {
        let metrics = Self::default();

        let start_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();
        metrics.process_start_time.set(start_time);

        metrics
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "process_resident_memory_bytes",
            "Resident memory of the process in bytes",
            self.resident_memory_bytes.clone(),
        );
        registry.register(
            "process_virtual_memory_bytes",
            "Virtual memory of the process in bytes",
            self.virtual_memory_bytes.clone(),
        );
        registry.register(
            "system_available_memory_bytes",
            "Memory available to new processes in bytes",
            self.available_memory_bytes.clone(),
        );
        registry.register(
            "process_threads",
            "Number of OS threads in the process",
            self.thread_count.clone(),
        );
        registry.register(
            "process_cpu_usage_percent",
            "Process CPU usage since the previous sample",
            self.cpu_usage_percent.clone(),
        );
        registry.register(
            "process_start_time_seconds",
            "Start time of the process since unix epoch in seconds",
            self.process_start_time.clone(),
        );
    }

    pub async fn update_metrics(&self) {
        let pid = std::process::id();
        let mut guard = self.system.lock().await;
        let sys = guard.get_or_insert_with(System::new);

        sys.refresh_memory();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]), true);

        self.available_memory_bytes
            .set(sys.available_memory() as i64);

        if let Some(process) = sys.process(Pid::from_u32(pid)) {
            self.resident_memory_bytes.set(process.memory() as i64);
            self.virtual_memory_bytes.set(process.virtual_memory() as i64);
            self.cpu_usage_percent.set(process.cpu_usage().round() as i64);
        }

        if let Some(threads) = read_thread_count(pid) {
            self.thread_count.set(threads);
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub operation: String,
    pub status: Status,
}

/// Per-service request counter and latency histogram, labelled by operation.
#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(LATENCY_BUCKETS.into_iter())
            }),
        }
    }

    /// Registers both families as `<service>_requests` and
    /// `<service>_request_duration_seconds`.
    pub fn register(&self, registry: &mut Registry, service: &str) {
        registry.register(
            format!("{service}_requests"),
            format!("Total number of requests handled by {service}"),
            self.request_counter.clone(),
        );
        registry.register(
            format!("{service}_request_duration_seconds"),
            format!("Histogram of request durations for {service}"),
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, operation: &str, status: Status, duration_secs: f64) {
        let labels = Labels {
            operation: operation.to_string(),
            status,
        };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}

pub async fn run_metrics_collector(system_metrics: Arc<SystemMetrics>) {
    let mut interval = tokio::time::interval(Duration::from_secs(15));
    loop {
        interval.tick().await;
        system_metrics.update_metrics().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus_client::encoding::text::encode;

    #[test]
    fn record_counts_per_operation_and_status() {
        let metrics = Metrics::new();

        metrics.record("find_all", Status::Success, 0.01);
        metrics.record("find_all", Status::Success, 0.02);
        metrics.record("find_by_id", Status::Error, 0.5);

        let ok = Labels {
            operation: "find_all".into(),
            status: Status::Success,
        };
        let failed = Labels {
            operation: "find_by_id".into(),
            status: Status::Error,
        };

        assert_eq!(metrics.request_counter.get_or_create(&ok).get(), 2);
        assert_eq!(metrics.request_counter.get_or_create(&failed).get(), 1);
    }

    #[test]
    fn registered_families_are_encoded() {
        let metrics = Metrics::new();
        let mut registry = Registry::default();
        metrics.register(&mut registry, "customer_service");
        metrics.record("find_all", Status::Success, 0.01);

        let mut buffer = String::new();
        encode(&mut buffer, &registry).unwrap();

        assert!(buffer.contains("customer_service_requests_total"));
        assert!(buffer.contains("customer_service_request_duration_seconds_bucket"));
        assert!(buffer.contains("operation=\"find_all\""));
        assert!(buffer.contains("status=\"Success\""));
    }

    #[tokio::test]
    async fn system_metrics_sample_the_current_process() {
        let metrics = SystemMetrics::new();
        metrics.update_metrics().await;

        assert!(metrics.process_start_time.get() > 0);
        assert!(metrics.resident_memory_bytes.get() >= 0);
    }
}
