//! Job dispatch: the shared job queue, the worker pool and per-job request
//! execution.
mod client;
mod execution;
mod job;
mod pool;
mod queue;
mod worker;


use std::sync::Arc;

use reqwest::{Client, Url};

use crate::recorder::Recorder;

pub use client::build_client;
pub use job::{Job, Outcome};
pub use pool::{PoolStats, WorkerPool, spawn_pool};
pub use queue::{JobReceiver, JobSender, job_queue};
pub use worker::WorkerStats;

/// Everything a worker needs besides the queue. Shared read-only.
#[derive(Debug)]
pub struct DispatchContext {
    pub client: Client,
    pub target: Url,
    pub recorder: Arc<Recorder>,
}
