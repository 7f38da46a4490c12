//! Exponential backoff for remote catalog mutations.

use aurum_core::Result;
use aurum_core::config::RetryPolicy;
use std::future::Future;

/// Runs `operation` until it succeeds, fails with a non-retryable error, or
/// the policy's attempts are used up.
pub async fn with_backoff<T, F, Fut>(policy: &RetryPolicy, name: &str, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    tracing::info!("[Retry] {} succeeded after {} retries", name, attempt);
                }
                return Ok(value);
            }
            Err(err) if err.is_retryable() && attempt + 1 < max_attempts => {
                let delay = policy.delay_for(attempt);
                tracing::warn!(
                    "[Retry] {} failed (attempt {}/{}): {}; retrying in {:?}",
                    name,
                    attempt + 1,
                    max_attempts,
                    err,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
