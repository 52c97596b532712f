use std::path::PathBuf;
use std::time::Duration;

use crate::dispatch::PoolStats;
use crate::recorder::MetricsSnapshot;

/// Final numbers of a run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub elapsed: Duration,
    /// Jobs handed to the queue.
    pub dispatched: usize,
    /// Candidates dropped as invalid JSON.
    pub skipped: usize,
    pub pool: PoolStats,
    pub metrics: MetricsSnapshot,
    pub output: PathBuf,
}

impl RunReport {
    #[must_use]
    pub const fn recorded(&self) -> u64 {
        self.metrics.count
    }

    #[must_use]
    pub fn average_latency(&self) -> Duration {
        self.metrics.average_latency()
    }
}

pub fn print_report(report: &RunReport) {
    let metrics = &report.metrics;

    println!("Done.");
    println!("Total time: {:?}", report.elapsed);
    println!("Average response time: {:?}", report.average_latency());
    println!(
        "Requests: {} dispatched, {} recorded, {} failed, {} skipped (invalid JSON)",
        report.dispatched,
        report.recorded(),
        report.pool.failed,
        report.skipped
    );
    if metrics.count > 0 {
        println!(
            "Min/Max response time: {:?} / {:?}",
            metrics.min_latency, metrics.max_latency
        );
        println!(
            "P50/P90/P99 response time: {:?} / {:?} / {:?}",
            metrics.p50, metrics.p90, metrics.p99
        );
        let breakdown: Vec<String> = metrics
            .status_counts
            .iter()
            .map(|(status, count)| format!("{}={}", status, count))
            .collect();
        println!("Status codes: {}", breakdown.join(", "));
    }
    if metrics.write_failures > 0 {
        println!("Result log write failures: {}", metrics.write_failures);
    }
    if report.pool.lost_workers > 0 {
        println!("Workers lost: {}", report.pool.lost_workers);
    }
    println!("Responses saved to {}", report.output.display());
}
