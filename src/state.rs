//! Shared application state, passed to handlers via `web::Data`.

use std::time::Duration;

use anyhow::Result;
use reqwest::Client;

use crate::config::AppConfig;
use crate::services::equity::YahooClient;
use crate::services::rates::FredClient;

/// The two data-source clients, built once at startup.
pub struct AppState {
    pub equities: YahooClient,
    pub rates: FredClient,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self> {
        // One shared HTTP client; both sources inherit its timeouts.
        let http = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .connect_timeout(Duration::from_secs(config.api.connect_timeout_secs))
            .gzip(true)
            .build()?;

        Ok(Self {
            equities: YahooClient::new(http.clone()),
            rates: FredClient::new(http, config.api.fred_api_key.clone()),
        })
    }
}
