use crate::api::models::{LinkStats, ShortenResult};
use crate::error::ServiceError;
use async_trait::async_trait;
use serde_json::Value;

/// The uniform contract of the shortening service.
///
/// Every operation resolves to a tagged outcome: `Ok` with normalized data or
/// `Err` with a user-displayable [`ServiceError`]. Implementations never panic
/// and never leak transport errors past this boundary, so callers can render
/// whichever arm they get.
#[async_trait]
pub trait UrlShortenerService: Send + Sync {
    /// Shorten a long URL.
    ///
    /// Rejects locally, with no network call, when the input is not an
    /// absolute `http`/`https` URL.
    async fn shorten_url(&self, original_url: &str) -> Result<ShortenResult, ServiceError>;

    /// Fetch the stored data behind a short code.
    async fn get_original_url(&self, short_code: &str) -> Result<LinkStats, ServiceError>;

    /// Fetch the raw analytics payload for a short code.
    async fn get_analytics(&self, short_code: &str) -> Result<Value, ServiceError>;
}
