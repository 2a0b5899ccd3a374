//! Response latency assertions.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{AssertionError, Result};

/// Anything carrying an already-measured request duration.
pub trait Elapsed {
    fn elapsed(&self) -> Duration;
}

impl Elapsed for Duration {
    fn elapsed(&self) -> Duration {
        *self
    }
}

impl<T: Elapsed + ?Sized> Elapsed for &T {
    fn elapsed(&self) -> Duration {
        (**self).elapsed()
    }
}

/// Minimal response record: just the elapsed time, in fractional seconds
/// on the wire (`{"elapsed": 0.25}`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ResponseTiming {
    #[serde(deserialize_with = "seconds")]
    pub elapsed: Duration,
}

impl ResponseTiming {
    pub fn new(elapsed: Duration) -> Self {
        Self { elapsed }
    }
}

impl Elapsed for ResponseTiming {
    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

fn seconds<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let secs = f64::deserialize(deserializer)?;
    Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
}

/// Assert that `response` took at most `max_time_ms` milliseconds.
///
/// A response exactly at the limit passes.
pub fn validate_response_time<R: Elapsed + ?Sized>(response: &R, max_time_ms: u64) -> Result<bool> {
    // Dividing whole nanoseconds keeps integral millisecond durations exact.
    let elapsed_ms = response.elapsed().as_nanos() as f64 / 1_000_000.0;

    if elapsed_ms > max_time_ms as f64 {
        tracing::debug!(elapsed_ms, max_time_ms, "response time over limit");
        return Err(AssertionError::ResponseTooSlow {
            elapsed_ms,
            max_ms: max_time_ms,
        });
    }
    Ok(true)
}
