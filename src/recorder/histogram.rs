use std::time::Duration;

use hdrhistogram::{CreationError, Histogram};

/// Latency distribution with microsecond resolution.
#[derive(Debug)]
pub(super) struct LatencyHistogram {
    hist: Histogram<u64>,
}

impl LatencyHistogram {
    /// Create a new latency histogram.
    ///
    /// # Errors
    ///
    /// Returns an error if the histogram cannot be created.
    pub fn new() -> Result<Self, CreationError> {
        let hist = Histogram::<u64>::new(3)?;
        Ok(Self { hist })
    }

    pub fn record(&mut self, latency: Duration) {
        let micros = u64::try_from(latency.as_micros()).unwrap_or(u64::MAX).max(1);
        self.hist.saturating_record(micros);
    }

    /// p50, p90 and p99, or zeros when nothing was recorded.
    #[must_use]
    pub fn percentiles(&self) -> (Duration, Duration, Duration) {
        if self.count() == 0 {
            return (Duration::ZERO, Duration::ZERO, Duration::ZERO);
        }

        (
            Duration::from_micros(self.hist.value_at_quantile(0.5)),
            Duration::from_micros(self.hist.value_at_quantile(0.9)),
            Duration::from_micros(self.hist.value_at_quantile(0.99)),
        )
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.hist.len()
    }
}
