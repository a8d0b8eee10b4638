//! Bounded exponential backoff for reads.

use folio_config::RetryConfig;
use std::future::Future;
use std::time::Duration;

use crate::error::Result;

/// How often, and how patiently, a failed read is attempted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, the first one included.
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}
impl RetryPolicy {
    /// Delay after the failure of attempt `attempt` (zero-based):
    /// `base_delay * 2^attempt`, capped at `max_delay`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2_u32.checked_pow(attempt).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }

    /// Run `operation` until it succeeds, fails with an error that isn't
    /// [retryable](crate::error::ErrorKind::is_retryable), or runs out of
    /// attempts. The last error is returned.
    pub async fn run<F, Fut, T>(&self, label: &str, mut operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt + 1 < max_attempts => {
                    let delay = self.delay_for(attempt);
                    tracing::warn!(
                        label,
                        attempt = attempt + 1,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %*err,
                        "Retrying after failure"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                },
                Err(err) => {
                    tracing::warn!(label, attempts = attempt + 1, error = %*err, "Giving up");
                    return Err(err);
                },
            }
        }
    }
}
impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}
impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            base_delay: Duration::from_millis(config.base_delay_ms),
            max_delay: Duration::from_millis(config.max_delay_ms),
        }
    }
}
