use std::time::Duration;

/// One request body, sent once by exactly one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// 1-based position in the payload file.
    pub seq: usize,
    pub body: String,
}

impl Job {
    #[must_use]
    pub const fn new(seq: usize, body: String) -> Self {
        Self { seq, body }
    }
}

/// Result of a completed round trip, handed to the recorder.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub job: Job,
    pub response_body: String,
    pub status: u16,
    pub latency: Duration,
    pub worker_id: usize,
}
