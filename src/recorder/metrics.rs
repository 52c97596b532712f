use std::collections::BTreeMap;
use std::time::Duration;

use hdrhistogram::CreationError;

use super::histogram::LatencyHistogram;

/// Run-level accumulator. Only ever touched under the recorder lock.
#[derive(Debug)]
pub(super) struct AggregateMetrics {
    total_latency: Duration,
    count: u64,
    min_latency: Option<Duration>,
    max_latency: Duration,
    histogram: LatencyHistogram,
    status_counts: BTreeMap<u16, u64>,
    write_failures: u64,
}

impl AggregateMetrics {
    pub(super) fn new() -> Result<Self, CreationError> {
        Ok(Self {
            total_latency: Duration::ZERO,
            count: 0,
            min_latency: None,
            max_latency: Duration::ZERO,
            histogram: LatencyHistogram::new()?,
            status_counts: BTreeMap::new(),
            write_failures: 0,
        })
    }

    pub(super) fn observe(&mut self, status: u16, latency: Duration) {
        self.total_latency = self.total_latency.saturating_add(latency);
        self.count = self.count.saturating_add(1);
        self.min_latency = Some(self.min_latency.map_or(latency, |min| min.min(latency)));
        self.max_latency = self.max_latency.max(latency);
        self.histogram.record(latency);
        let entry = self.status_counts.entry(status).or_insert(0);
        *entry = entry.saturating_add(1);
    }

    pub(super) fn note_write_failure(&mut self) {
        self.write_failures = self.write_failures.saturating_add(1);
    }

    pub(super) fn snapshot(&self) -> MetricsSnapshot {
        let (p50, p90, p99) = self.histogram.percentiles();
        MetricsSnapshot {
            total_latency: self.total_latency,
            count: self.count,
            min_latency: self.min_latency.unwrap_or(Duration::ZERO),
            max_latency: self.max_latency,
            p50,
            p90,
            p99,
            status_counts: self.status_counts.clone(),
            write_failures: self.write_failures,
        }
    }
}

/// Point-in-time copy of the aggregate metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub total_latency: Duration,
    pub count: u64,
    pub min_latency: Duration,
    pub max_latency: Duration,
    pub p50: Duration,
    pub p90: Duration,
    pub p99: Duration,
    pub status_counts: BTreeMap<u16, u64>,
    pub write_failures: u64,
}

impl MetricsSnapshot {
    /// `total_latency / count`, or zero when nothing was recorded.
    #[must_use]
    pub fn average_latency(&self) -> Duration {
        self.total_latency
            .as_nanos()
            .checked_div(u128::from(self.count))
            .map_or(Duration::ZERO, |nanos| {
                Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
            })
    }
}
