pub mod mock_service;
pub mod shorten_service;
pub mod traits;

use crate::api::client::ApiClient;
use crate::config::AppConfig;
use mock_service::MockShortenerService;
use shorten_service::ShortenService;
use traits::UrlShortenerService;

/// Select the service implementation once at startup.
///
/// The choice between the real backend and the mock is static configuration;
/// it is never switched at runtime.
pub fn build_service(config: &AppConfig) -> crate::Result<Box<dyn UrlShortenerService>> {
    if config.use_mock_api {
        log::debug!("using mock shortener service");
        return Ok(Box::new(MockShortenerService::new()));
    }

    let client = ApiClient::from_config(config)?;
    Ok(Box::new(ShortenService::new(client)))
}
