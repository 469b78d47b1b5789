use crate::api::client::ApiClient;
use crate::api::models::{
    LinkStats, RawLinkResponse, RawShortenResponse, ShortenRequest, ShortenResult,
};
use crate::error::ServiceError;
use crate::core::services::traits::UrlShortenerService;
use crate::utils::validation::is_valid_url;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

/// Shortening service backed by the real HTTP API.
pub struct ShortenService {
    client: ApiClient,
}

impl ShortenService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UrlShortenerService for ShortenService {
    async fn shorten_url(&self, original_url: &str) -> Result<ShortenResult, ServiceError> {
        if !is_valid_url(original_url) {
            return Err(ServiceError::InvalidUrl {
                input: original_url.to_string(),
            });
        }

        log::debug!("shortening {}", original_url);

        // Captured before the call so missing created_at defaults to call time
        let requested_at = Utc::now();
        let request = ShortenRequest {
            original_url: original_url.to_string(),
        };
        let raw: RawShortenResponse = self.client.post("/", &request).await?;

        Ok(raw.normalize(original_url, requested_at))
    }

    async fn get_original_url(&self, short_code: &str) -> Result<LinkStats, ServiceError> {
        let requested_at = Utc::now();
        let raw: RawLinkResponse = self.client.get(&format!("/{}", short_code)).await?;
        Ok(raw.normalize(requested_at))
    }

    async fn get_analytics(&self, short_code: &str) -> Result<Value, ServiceError> {
        let payload = self
            .client
            .get(&format!("/analytics/{}", short_code))
            .await?;
        Ok(payload)
    }
}
