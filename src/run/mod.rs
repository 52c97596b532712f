//! Run orchestration: load payloads, dispatch them through the worker pool,
//! wait for the pool, report.
mod config;
mod report;


use std::sync::Arc;

use tokio::time::Instant;
use tracing::{debug, error, info};

use crate::dispatch::{DispatchContext, Job, PoolStats, build_client, job_queue, spawn_pool};
use crate::error::AppResult;
use crate::payload::{PayloadSet, load_payloads};
use crate::recorder::{Recorder, reset_log};

pub use config::{RunConfig, normalize_target};
pub use report::{RunReport, print_report};

/// Executes one complete run and prints the summary.
///
/// Nothing is sent and the result log is left untouched when the payload
/// file is unreadable or holds no valid payload.
///
/// # Errors
///
/// Returns an error on unreadable or empty payload sources, when the HTTP
/// client cannot be built, or when the previous result log cannot be cleared.
pub async fn run(config: RunConfig) -> AppResult<RunReport> {
    let payloads = load_payloads(&config.payload_file).await?;
    let report = execute(&config, payloads).await?;
    print_report(&report);
    Ok(report)
}

/// Dispatches an already loaded payload set.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built or the previous
/// result log cannot be cleared.
pub async fn execute(config: &RunConfig, payloads: PayloadSet) -> AppResult<RunReport> {
    let client = build_client(config.request_timeout)?;
    reset_log(&config.output).await?;
    let recorder = Arc::new(Recorder::new(&config.output)?);

    info!(
        "Sending {} payloads to {} (concurrency={})",
        payloads.len(),
        config.target,
        config.concurrency
    );
    let started = Instant::now();

    let context = Arc::new(DispatchContext {
        client,
        target: config.target.clone(),
        recorder: Arc::clone(&recorder),
    });
    let (sender, receiver) = job_queue(payloads.len());
    let pool = spawn_pool(&context, config.concurrency, &receiver);
    drop(receiver);

    let skipped = payloads.skipped.len();
    let mut dispatched: usize = 0;
    for (idx, body) in payloads.payloads.into_iter().enumerate() {
        if let Err(job) = sender.enqueue(Job::new(idx.saturating_add(1), body)).await {
            error!("Job #{} could not be queued: no workers left", job.seq);
            break;
        }
        dispatched = dispatched.saturating_add(1);
    }
    sender.close();
    debug!(dispatched, "Queue closed");

    let pool_stats: PoolStats = pool.join().await;
    let elapsed = started.elapsed();
    let metrics = recorder.snapshot().await;

    Ok(RunReport {
        elapsed,
        dispatched,
        skipped,
        pool: pool_stats,
        metrics,
        output: config.output.clone(),
    })
}
