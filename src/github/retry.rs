// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bounded retry with exponential backoff and jitter.
//!
//! ```text
//! attempt 0 ──fail──> wait unit*(2^0 + U[1,2)) ──> attempt 1
//!           ──fail──> wait unit*(2^1 + U[1,2)) ──> attempt 2
//!           ...       at most max_retries waits, then the last error
//! ```

use bon::Builder;
use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

use crate::config::types::FetchConfig;
use crate::error::MirrorResult;

/// How often and how patiently a retrieval call is repeated.
#[derive(Debug, Clone, Builder)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    #[builder(default = 3)]
    max_retries: u32,
    /// Scale of one backoff step; one second in production.
    #[builder(default = Duration::from_secs(1))]
    unit: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&FetchConfig> for RetryPolicy {
    fn from(config: &FetchConfig) -> Self {
        Self::builder()
            .max_retries(config.max_retries)
            .unit(config.backoff_unit())
            .build()
    }
}

impl RetryPolicy {
    /// Wait before retry number `retry` (1-based).
    ///
    /// Always within `[2^(retry-1) + 1, 2^(retry-1) + 2)` units, saturating
    /// at `Duration::MAX`.
    #[must_use]
    pub fn backoff(&self, retry: u32) -> Duration {
        // 2^1023 is the largest finite power of two in an f64
        let exponent = i32::try_from(retry.saturating_sub(1)).map_or(1023, |e| e.min(1023));
        let jitter: f64 = rand::rng().random_range(1.0..2.0);
        let secs = self.unit.as_secs_f64() * (2_f64.powi(exponent) + jitter);
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }

    /// Run `op` until it succeeds, fails with a non-retryable error, or the
    /// retry budget is spent.
    ///
    /// # Errors
    ///
    /// Returns the error of the last attempt.
    pub async fn run<T, F, Fut>(&self, what: &str, mut op: F) -> MirrorResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = MirrorResult<T>>,
    {
        let mut retry = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && retry < self.max_retries => {
                    retry += 1;
                    let wait = self.backoff(retry);
                    warn!(
                        error = %e,
                        retry,
                        max_retries = self.max_retries,
                        "{what} failed, retrying in {:.1}s",
                        wait.as_secs_f64()
                    );
                    tokio::time::sleep(wait).await;
                }
                Err(e) => {
                    if retry > 0 {
                        warn!(error = %e, retries = retry, "{what} failed after retries");
                    }
                    return Err(e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MirrorError, NetworkError};
    use std::cell::Cell;

    fn http_error() -> MirrorError {
        NetworkError::HttpError {
            status: 503,
            url: "http://example.invalid".to_string(),
        }
        .into()
    }

    #[test]
    fn test_backoff_stays_in_window() {
        let policy = RetryPolicy::default();
        for retry in 1..=5_u32 {
            let base = f64::from(1_u32 << (retry - 1));
            for _ in 0..50 {
                let secs = policy.backoff(retry).as_secs_f64();
                assert!(
                    secs >= base + 1.0 && secs < base + 2.0,
                    "retry {retry}: {secs}s outside [{}, {})",
                    base + 1.0,
                    base + 2.0
                );
            }
        }
    }

    #[test]
    fn test_backoff_scales_with_unit() {
        let policy = RetryPolicy::builder().unit(Duration::ZERO).build();
        assert_eq!(policy.backoff(3), Duration::ZERO);
    }

    #[test]
    fn test_backoff_saturates_for_huge_retry_counts() {
        let zero = RetryPolicy::builder().unit(Duration::ZERO).build();
        let second = RetryPolicy::default();
        for retry in [100, 1025, 2000, u32::MAX] {
            assert_eq!(zero.backoff(retry), Duration::ZERO);
            assert_eq!(second.backoff(retry), Duration::MAX);
        }
    }

    #[tokio::test]
    async fn test_run_never_exceeds_max_retries() {
        let policy = RetryPolicy::builder()
            .max_retries(3)
            .unit(Duration::ZERO)
            .build();
        let calls = Cell::new(0);

        let result: MirrorResult<()> = policy
            .run("lookup", || {
                calls.set(calls.get() + 1);
                async { Err(http_error()) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.get(), 4, "one attempt plus three retries");
    }

    #[tokio::test]
    async fn test_run_stops_on_success() {
        let policy = RetryPolicy::builder().unit(Duration::ZERO).build();
        let calls = Cell::new(0);

        let result = policy
            .run("lookup", || {
                calls.set(calls.get() + 1);
                let n = calls.get();
                async move { if n < 2 { Err(http_error()) } else { Ok(n) } }
            })
            .await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_run_does_not_retry_unsupported() {
        let policy = RetryPolicy::builder().unit(Duration::ZERO).build();
        let calls = Cell::new(0);

        let result: MirrorResult<()> = policy
            .run("lookup", || {
                calls.set(calls.get() + 1);
                async { Err(NetworkError::Unsupported("repository".to_string()).into()) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }
}
