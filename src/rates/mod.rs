use reqwest::Client;
use std::time::Duration;

use crate::api::build_http_client;
use crate::config::Config;
use crate::{Error, Result};

const TARGET_CURRENCY: &str = "EGP";

/// Fetches the USD based conversion table from exchangerate-api.com.
pub struct ExchangeRateClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ExchangeRateClient {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(
            &config.exchange_base_url,
            &config.exchange_api_key,
            config.request_timeout(),
        )
    }

    pub fn with_base_url(base_url: &str, api_key: &str, timeout: Option<Duration>) -> Result<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn latest_usd_url(&self) -> String {
        format!("{}/v6/{}/latest/USD", self.base_url, self.api_key)
    }

    /// USD to EGP multiplier. Every failure is folded into `Error::ExchangeRate`.
    pub async fn usd_to_egp_rate(&self) -> Result<f64> {
        log::info!("Fetching USD to {} exchange rate", TARGET_CURRENCY);

        let response = self
            .client
            .get(self.latest_usd_url())
            .send()
            .await
            .map_err(|e| Error::ExchangeRate(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Exchange rate request returned {}", status);
            return Err(Error::ExchangeRate(format!("HTTP {}", status)));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::ExchangeRate(e.to_string()))?;

        let rate = extract_rate(&data, TARGET_CURRENCY)?;
        log::info!("USD to {} rate: {}", TARGET_CURRENCY, rate);

        Ok(rate)
    }
}

fn extract_rate(data: &serde_json::Value, currency: &str) -> Result<f64> {
    data.get("conversion_rates")
        .and_then(|rates| rates.get(currency))
        .and_then(|rate| rate.as_f64())
        .ok_or_else(|| {
            Error::ExchangeRate(format!("conversion_rates.{} missing from response", currency))
        })
}
