//! Fixed-delay retry policy shared by the network client crates.
//!
//! [`RetryPolicy::run`] wraps any fallible async operation. Transient
//! errors are retried after a fixed pause; anything else is returned
//! immediately. Each client supplies its own classifier because each owns
//! its error enum.

use std::future::Future;
use std::time::Duration;

/// Retry budget for one network operation: at most `max_attempts` tries
/// with a fixed `delay` between them.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    #[must_use]
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Runs `operation` until it succeeds, fails in a non-transient way, or
    /// the attempt budget is spent.
    ///
    /// `is_transient` classifies errors: transient ones are retried after
    /// `delay`, all others are returned to the caller at once. Once
    /// `max_attempts` tries have failed, the last transient error is
    /// returned. A `max_attempts` of zero is treated as one attempt.
    ///
    /// # Errors
    ///
    /// Returns the first non-transient error, or the final transient error
    /// once the budget is exhausted.
    pub async fn run<T, E, F, Fut, C>(&self, is_transient: C, mut operation: F) -> Result<T, E>
    where
        E: std::fmt::Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        C: Fn(&E) -> bool,
    {
        let budget = self.max_attempts.max(1);
        let mut attempt = 0_u32;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempt += 1;
                    if !is_transient(&err) || attempt >= budget {
                        return Err(err);
                    }
                    tracing::warn!(
                        attempt,
                        budget,
                        delay = ?self.delay,
                        error = %err,
                        "transient service error — retrying"
                    );
                    tokio::time::sleep(self.delay).await;
                }
            }
        }
    }
}
