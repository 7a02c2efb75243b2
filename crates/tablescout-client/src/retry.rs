//! Retry with exponential back-off and jitter.
//!
//! Reads (`GET`) are retried on any transient failure. Writes such as the
//! auth `POST`s are only retried when the connection was never established,
//! so a login or registration is not replayed after the backend saw it.

use std::future::Future;
use std::time::Duration;

use crate::error::ApiError;

const MAX_DELAY_MS: u64 = 60_000;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:** timeouts, connection failures, HTTP 5xx and HTTP 429.
///
/// **Not retriable:** 404 and other 4xx statuses, malformed bodies, bad base
/// URLs and local storage failures. Retrying would give the same answer.
pub(crate) fn is_retriable(err: &ApiError) -> bool {
    match err {
        ApiError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        ApiError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
        ApiError::NotFound { .. }
        | ApiError::Deserialize { .. }
        | ApiError::InvalidBaseUrl { .. }
        | ApiError::Storage(_) => false,
    }
}

/// `true` when the request cannot have reached the backend.
fn never_sent(err: &ApiError) -> bool {
    matches!(err, ApiError::Http(e) if e.is_connect())
}

/// How many times, and how patiently, one request is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RetryPolicy {
    pub(crate) max_retries: u32,
    pub(crate) backoff_base_ms: u64,
    /// Replaying the request has no extra effect on the backend.
    pub(crate) idempotent: bool,
}

impl RetryPolicy {
    fn should_retry(&self, err: &ApiError, attempt: u32) -> bool {
        if attempt >= self.max_retries {
            return false;
        }
        if self.idempotent {
            is_retriable(err)
        } else {
            never_sent(err)
        }
    }

    /// Delay before retry number `attempt` (1-based): `backoff_base_ms *
    /// 2^(attempt - 1)` with ±25 % jitter, capped at 60 s.
    fn delay(&self, attempt: u32) -> Duration {
        let computed = self
            .backoff_base_ms
            .saturating_mul(1u64 << attempt.saturating_sub(1).min(10));
        let capped = computed.min(MAX_DELAY_MS);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let jittered = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
        Duration::from_millis(jittered)
    }
}

/// Runs `operation`, retrying as `policy` allows.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    policy: RetryPolicy,
    mut operation: F,
) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 0u32;
    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if !policy.should_retry(&err, attempt) {
            return Err(err);
        }
        attempt += 1;
        let delay = policy.delay(attempt);
        tracing::warn!(
            attempt,
            max_retries = policy.max_retries,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            error = %err,
            "transient API error, retrying after back-off"
        );
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    fn reads(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            backoff_base_ms: 0,
            idempotent: true,
        }
    }

    fn status(status: u16) -> ApiError {
        ApiError::UnexpectedStatus {
            status,
            url: "http://localhost/api/restaurants".to_owned(),
        }
    }

    #[test]
    fn server_errors_and_rate_limits_are_retriable() {
        assert!(is_retriable(&status(500)));
        assert!(is_retriable(&status(503)));
        assert!(is_retriable(&status(429)));
    }

    #[test]
    fn client_errors_are_not_retriable() {
        assert!(!is_retriable(&status(400)));
        assert!(!is_retriable(&status(401)));
        assert!(!is_retriable(&ApiError::NotFound {
            url: "http://localhost/api/restaurants/9".to_owned()
        }));
    }

    #[test]
    fn deserialize_error_is_not_retriable() {
        let source = serde_json::from_str::<()>("invalid").unwrap_err();
        assert!(!is_retriable(&ApiError::Deserialize {
            context: "test".to_owned(),
            source,
        }));
    }

    #[tokio::test]
    async fn succeeds_immediately_on_first_try() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(reads(3), || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, ApiError>(42)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn does_not_retry_not_found() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(reads(3), || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, _>(ApiError::NotFound {
                    url: "http://localhost/api/restaurants/9".to_owned(),
                })
            }
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1, "404 must not be retried");
        assert!(matches!(result, Err(ApiError::NotFound { .. })));
    }

    #[tokio::test]
    async fn retries_then_succeeds() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(reads(3), || {
            let c = Arc::clone(&c);
            async move {
                let attempt = c.fetch_add(1, Ordering::SeqCst) + 1;
                if attempt < 3 {
                    Err::<u32, _>(status(503))
                } else {
                    Ok(99)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 99);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(reads(2), || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, _>(status(429))
            }
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 3, "1 attempt + 2 retries");
        assert!(matches!(
            result,
            Err(ApiError::UnexpectedStatus { status: 429, .. })
        ));
    }

    #[tokio::test]
    async fn writes_are_not_replayed_after_a_server_error() {
        let policy = RetryPolicy {
            idempotent: false,
            ..reads(3)
        };
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(policy, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, _>(status(503))
            }
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(matches!(
            result,
            Err(ApiError::UnexpectedStatus { status: 503, .. })
        ));
    }

    #[test]
    fn delay_doubles_and_is_capped() {
        let policy = RetryPolicy {
            backoff_base_ms: 1000,
            ..reads(5)
        };
        let first = policy.delay(1).as_millis();
        assert!((750..=1250).contains(&first), "got {first}");
        let third = policy.delay(3).as_millis();
        assert!((3000..=5000).contains(&third), "got {third}");
        let huge = RetryPolicy {
            backoff_base_ms: 50_000,
            ..reads(5)
        };
        assert!(huge.delay(4).as_millis() <= 75_000);
    }
}
