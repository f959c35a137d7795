use std::time::Duration;

use stockview_market_data::provider::DEFAULT_BASE_URL;
use stockview_market_data::ProviderConfig;

pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub request_timeout: Duration,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = ProviderConfig::default();
        let api_key = std::env::var("SV_API_KEY")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.api_key);
        let base_url = std::env::var("SV_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let timeout_ms: u64 = std::env::var("SV_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let log_format = std::env::var("SV_LOG_FORMAT").unwrap_or_else(|_| "text".into());
        Self {
            api_key,
            base_url,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
        }
    }

    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig::new(self.api_key.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout(self.request_timeout)
    }
}
