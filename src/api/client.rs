use crate::config::AppConfig;
use crate::error::ApiError;
use crate::utils::retry::{RetryConfig, RetryExecutor};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

const USER_AGENT: &str = concat!("shortly-cli/", env!("CARGO_PKG_VERSION"));

/// HTTP adapter for the shortener API.
///
/// Holds a fixed base URL and timeout, attaches the `x-api-key` header when
/// one is configured, and maps every transport or HTTP-status failure into an
/// [`ApiError`] whose message is safe to show to the user.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    retry: RetryExecutor,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        api_key: Option<String>,
        retry: RetryConfig,
    ) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Unexpected {
                status: 0,
                endpoint: "client_init".to_string(),
                message: Some(format!("Failed to create HTTP client: {}", e)),
            })?;

        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            retry: RetryExecutor::new(retry),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        Self::new(
            &config.api_url,
            config.api_timeout,
            config.api_key.clone(),
            RetryConfig::with_max_attempts(config.api_retry_attempts),
        )
    }

    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);

        let mut request = self.client.request(method, url);

        match &self.api_key {
            Some(api_key) => request = request.header("x-api-key", api_key),
            None => log::warn!("API key is not configured; requests may fail authentication"),
        }

        request
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.retry
            .execute(|| async {
                self.send(self.build_request(Method::POST, path).json(body), path)
                    .await
            })
            .await
    }

    pub async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.retry
            .execute(|| async { self.send(self.build_request(Method::GET, path), path).await })
            .await
    }

    async fn send<T>(&self, request: RequestBuilder, endpoint: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|error| Self::transport_error(error, endpoint))?;

        Self::handle_response(response, endpoint).await
    }

    fn transport_error(error: reqwest::Error, endpoint: &str) -> ApiError {
        if error.is_timeout() {
            ApiError::Timeout {
                endpoint: endpoint.to_string(),
            }
        } else {
            log::debug!("request to {} failed: {}", endpoint, error);
            ApiError::Network {
                endpoint: endpoint.to_string(),
            }
        }
    }

    async fn handle_response<T>(response: Response, endpoint: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if status.is_success() {
            log::debug!("{} -> {}", endpoint, status);
            return response
                .json::<T>()
                .await
                .map_err(|error| ApiError::Unexpected {
                    status: status.as_u16(),
                    endpoint: endpoint.to_string(),
                    message: Some(format!("Failed to parse response: {}", error)),
                });
        }

        let endpoint = endpoint.to_string();
        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body);
        log::debug!("{} -> {} {:?}", endpoint, status, message);

        Err(match status.as_u16() {
            400 => ApiError::InvalidRequest { endpoint, message },
            401 => ApiError::Unauthorized { endpoint },
            403 => ApiError::Forbidden { endpoint },
            404 => ApiError::NotFound { endpoint },
            429 => ApiError::RateLimited { endpoint },
            500 => ApiError::Server { endpoint },
            status => ApiError::Unexpected {
                status,
                endpoint,
                message,
            },
        })
    }
}

/// Pull the `message` field out of a JSON error body, if there is one.
fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: Option<String>) -> ApiClient {
        ApiClient::new(
            "http://example.test",
            Duration::from_secs(10),
            api_key,
            RetryConfig::none(),
        )
        .expect("client creation failed")
    }

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new(
            "http://example.test/",
            Duration::from_secs(10),
            None,
            RetryConfig::default(),
        );
        assert!(client.is_ok());
    }

    #[test]
    fn test_build_request_url_and_content_type() {
        let client = client(None);
        let request = client.build_request(Method::POST, "/");

        let built_request = request.build().expect("Failed to build request");

        assert_eq!(built_request.url().as_str(), "http://example.test/");
        assert_eq!(built_request.method(), Method::POST);
        assert!(built_request.headers().get("x-api-key").is_none());
    }

    #[test]
    fn test_build_request_with_api_key() {
        let client = client(Some("test_api_key_123".to_string()));
        let request = client.build_request(Method::GET, "/abc123");
        let built_request = request.build().expect("Failed to build request");

        assert_eq!(
            built_request
                .headers()
                .get("x-api-key")
                .unwrap()
                .to_str()
                .unwrap(),
            "test_api_key_123"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = ApiClient::new(
            "http://example.test///",
            Duration::from_secs(10),
            None,
            RetryConfig::none(),
        )
        .expect("client creation failed");

        let built_request = client
            .build_request(Method::GET, "/analytics/abc123")
            .build()
            .expect("Failed to build request");
        assert_eq!(
            built_request.url().as_str(),
            "http://example.test/analytics/abc123"
        );
    }

    #[test]
    fn test_extract_message() {
        assert_eq!(
            extract_message(r#"{"message": "original_url is required"}"#),
            Some("original_url is required".to_string())
        );
        assert_eq!(extract_message(r#"{"error": "nope"}"#), None);
        assert_eq!(extract_message("not json"), None);
        assert_eq!(extract_message(""), None);
    }
}
