use crate::error::ApiError;
use backoff::{ExponentialBackoff, backoff::Backoff};
use std::future::Future;
use std::time::Duration;

/// Retry configuration for API operations
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (1 = no retry)
    pub max_attempts: u32,
    /// Initial retry delay
    pub initial_delay: Duration,
    /// Maximum retry delay
    pub max_delay: Duration,
    /// Multiplier for exponential backoff
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
            multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Create a config with the given attempt budget
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            // Zero attempts would never issue the request
            max_attempts: max_attempts.max(1),
            ..Self::default()
        }
    }

    /// Create a config that issues the request exactly once
    pub fn none() -> Self {
        Self::with_max_attempts(1)
    }
}

/// Retry executor with a configurable policy
#[derive(Debug, Clone)]
pub struct RetryExecutor {
    config: RetryConfig,
}

impl RetryExecutor {
    /// Create a new retry executor with the given config
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Execute an async operation with retry logic
    pub async fn execute<F, Fut, T>(&self, operation: F) -> Result<T, ApiError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let mut backoff = ExponentialBackoff {
            initial_interval: self.config.initial_delay,
            max_interval: self.config.max_delay,
            multiplier: self.config.multiplier,
            max_elapsed_time: None,
            ..Default::default()
        };

        let mut attempt = 0;

        loop {
            attempt += 1;

            match operation().await {
                Ok(result) => return Ok(result),
                Err(error) => {
                    if !self.should_retry(&error, attempt) {
                        return Err(error);
                    }

                    if let Some(delay) = backoff.next_backoff() {
                        log::debug!("Retrying operation after {:?} (attempt {})", delay, attempt);
                        tokio::time::sleep(delay).await;
                    } else {
                        log::warn!(
                            "Max retry attempts reached ({}), giving up",
                            self.config.max_attempts
                        );
                        return Err(error);
                    }
                }
            }
        }
    }

    /// Determine if an error should trigger a retry
    ///
    /// Only outcomes the backend never saw or could not serve are retried, so
    /// every surfaced error message stays the same with retries enabled.
    fn should_retry(&self, error: &ApiError, attempt: u32) -> bool {
        if attempt >= self.config.max_attempts {
            return false;
        }

        match error {
            ApiError::Timeout { .. } | ApiError::Network { .. } | ApiError::Server { .. } => true,
            ApiError::Unexpected { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
