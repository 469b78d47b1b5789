use crate::api::models::{LinkStats, ShortenResult};
use crate::core::services::traits::UrlShortenerService;
use crate::error::ServiceError;
use crate::utils::validation::is_valid_url;
use async_trait::async_trait;
use chrono::Utc;
use rand::{Rng, distr::Alphanumeric};
use serde_json::{Value, json};
use std::time::Duration;

const SHORT_CODE_LEN: usize = 6;
const SHORT_BASE_URL: &str = "https://short.ly";
const SHORTEN_DELAY: Duration = Duration::from_millis(1000);
const LOOKUP_DELAY: Duration = Duration::from_millis(500);
const PLACEHOLDER_ORIGINAL_URL: &str = "https://example.com/very/long/original/url";

/// Drop-in substitute for [`super::shorten_service::ShortenService`].
///
/// Used for offline development: no network, simulated latency, fabricated
/// short codes. Lookup data is intentionally randomized demo data; only its
/// shape is contractual.
pub struct MockShortenerService {
    shorten_delay: Duration,
    lookup_delay: Duration,
}

impl MockShortenerService {
    pub fn new() -> Self {
        Self {
            shorten_delay: SHORTEN_DELAY,
            lookup_delay: LOOKUP_DELAY,
        }
    }

    /// Override the simulated latencies (tests should not sleep for real).
    pub fn with_delays(shorten_delay: Duration, lookup_delay: Duration) -> Self {
        Self {
            shorten_delay,
            lookup_delay,
        }
    }

    fn generate_short_code() -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(SHORT_CODE_LEN)
            .map(char::from)
            .collect()
    }
}

impl Default for MockShortenerService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlShortenerService for MockShortenerService {
    async fn shorten_url(&self, original_url: &str) -> Result<ShortenResult, ServiceError> {
        tokio::time::sleep(self.shorten_delay).await;

        if !is_valid_url(original_url) {
            return Err(ServiceError::InvalidUrl {
                input: original_url.to_string(),
            });
        }

        let code = Self::generate_short_code();
        log::debug!("mock shortened {} -> {}", original_url, code);

        Ok(ShortenResult {
            short_url: format!("{}/{}", SHORT_BASE_URL, code),
            original_url: original_url.to_string(),
            id: code,
            created_at: Utc::now(),
            clicks: 0,
        })
    }

    async fn get_original_url(&self, short_code: &str) -> Result<LinkStats, ServiceError> {
        tokio::time::sleep(self.lookup_delay).await;

        Ok(LinkStats {
            original_url: PLACEHOLDER_ORIGINAL_URL.to_string(),
            short_url: format!("{}/{}", SHORT_BASE_URL, short_code),
            clicks: rand::rng().random_range(0..500),
            created_at: Utc::now(),
        })
    }

    async fn get_analytics(&self, short_code: &str) -> Result<Value, ServiceError> {
        tokio::time::sleep(self.lookup_delay).await;

        Ok(json!({
            "short_code": short_code,
            "clicks": rand::rng().random_range(0..500),
            "created_at": Utc::now().to_rfc3339(),
        }))
    }
}
