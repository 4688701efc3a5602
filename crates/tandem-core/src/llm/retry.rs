//! Timeout-bounded, retrying call wrapper shared by both pipeline stages.
//!
//! Each attempt runs under a hard timeout. Only timeout-class failures
//! are retried; every other error is returned to the caller after the
//! first attempt. The final timeout is returned as-is once the policy's
//! attempt budget is spent.

use std::future::Future;
use std::time::Duration;

use tandem_types::llm::LlmError;
use tandem_types::retry::RetryPolicy;

/// Run `op` under `timeout`, retrying timeouts per `policy`.
///
/// `op` is invoked once per attempt. An elapsed timer counts as
/// [`LlmError::Timeout`], the same class a provider reports when its own
/// transport timer fires first.
pub async fn call_with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    timeout: Duration,
    mut op: F,
) -> Result<T, LlmError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, LlmError>>,
{
    let mut attempt: u32 = 1;
    loop {
        let result = match tokio::time::timeout(timeout, op()).await {
            Ok(inner) => inner,
            Err(_) => Err(LlmError::Timeout),
        };

        match result {
            Ok(value) => return Ok(value),
            Err(err) if err.is_timeout() && attempt < policy.max_attempts => {
                let delay = policy.delay_after(attempt);
                tracing::warn!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "call timed out, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(4),
        }
    }

    #[tokio::test]
    async fn test_success_on_first_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result = call_with_retry(&fast_policy(3), Duration::from_secs(1), move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, LlmError>("done")
            }
        })
        .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_timeout_twice_then_success_makes_three_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result = call_with_retry(&fast_policy(3), Duration::from_secs(1), move || {
            let counter = counter.clone();
            async move {
                let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                if n < 3 {
                    Err(LlmError::Timeout)
                } else {
                    Ok("third time")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "third time");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_timeout_exhausts_attempt_budget() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result: Result<(), _> =
            call_with_retry(&fast_policy(3), Duration::from_secs(1), move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err(LlmError::Timeout)
                }
            })
            .await;

        assert!(matches!(result, Err(LlmError::Timeout)));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_non_timeout_error_is_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result: Result<(), _> =
            call_with_retry(&fast_policy(3), Duration::from_secs(1), move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err(LlmError::RateLimited {
                        retry_after_ms: None,
                    })
                }
            })
            .await;

        assert!(matches!(result, Err(LlmError::RateLimited { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_slow_operation_is_cut_off_by_the_timer() {
        let result: Result<(), _> =
            call_with_retry(&fast_policy(1), Duration::from_millis(5), || async {
                tokio::time::sleep(Duration::from_millis(250)).await;
                Ok(())
            })
            .await;

        assert!(matches!(result, Err(LlmError::Timeout)));
    }
}
