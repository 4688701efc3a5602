//! Retry policy for timeout-class failures.
//!
//! Both pipeline stages share one policy value instead of declaring their
//! own copies of the same numbers. The schedule is exponential: the delay
//! after the n-th attempt is `base_delay * 2^(n-1)`, capped at `max_delay`.

use std::time::Duration;

/// Retry policy applied by the call wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Delay after the first failed attempt.
    pub base_delay: Duration,
    /// Upper bound on any single delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Delay to sleep after `attempt` attempts have failed (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        let delay = self.base_delay.saturating_mul(2u32.saturating_pow(exponent));
        delay.min(self.max_delay)
    }
}
