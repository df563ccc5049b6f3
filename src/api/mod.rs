//! IsThereAnyDeal (ITAD) catalog client.
//!
//! Two endpoints are used:
//! - `GET /games/search/v1` to look games up by title
//! - `POST /games/overview/v2` to fetch current and historical-low prices
//!
//! Requests are issued once. Any status other than 200 is reported to the
//! caller with the status code attached.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::config::Config;
use crate::rates::ExchangeRateClient;
use crate::tracker::PriceBackend;
use crate::{Error, Result};

const USER_AGENT: &str = concat!("game-tracker/", env!("CARGO_PKG_VERSION"));

const SEARCH_PATH: &str = "/games/search/v1";
const OVERVIEW_PATH: &str = "/games/overview/v2";

/// Build the shared HTTP client. Without a timeout the client default applies.
pub(crate) fn build_http_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// One hit from the title search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceOverview {
    #[serde(default)]
    pub prices: Vec<GamePrices>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GamePrices {
    #[serde(default)]
    pub current: Option<Deal>,
    #[serde(default)]
    pub lowest: Option<HistoricalLow>,
}

/// The best offer currently available.
#[derive(Debug, Clone, Deserialize)]
pub struct Deal {
    pub shop: Named,
    pub price: Money,
    pub regular: Money,
    pub cut: i64,
    #[serde(default)]
    pub drm: Vec<Named>,
    #[serde(default)]
    pub platforms: Vec<Named>,
    pub url: String,
}

/// The historical low. `price` is null when the catalog has no record.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalLow {
    #[serde(default)]
    pub price: Option<Money>,
    #[serde(default)]
    pub cut: Option<i64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Money {
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Named {
    pub name: String,
}

pub struct ItadClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ItadClient {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(
            &config.itad_base_url,
            &config.itad_api_key,
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

    /// Search the catalog by free-text title.
    pub async fn search_games(&self, title: &str) -> Result<Vec<SearchHit>> {
        log::info!("Searching catalog for '{}'", title);

        let response = self
            .client
            .get(format!("{}{}", self.base_url, SEARCH_PATH))
            .query(&[("key", self.api_key.as_str()), ("title", title)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            log::warn!("Catalog search for '{}' returned {}", title, status);
            return Err(Error::SearchFailed(status.as_u16()));
        }

        let hits: Vec<SearchHit> = response.json().await?;
        log::debug!("Catalog returned {} hit(s) for '{}'", hits.len(), title);

        Ok(hits)
    }

    /// Fetch the price overview for a single game id.
    pub async fn price_overview(&self, game_id: &str) -> Result<PriceOverview> {
        log::info!("Fetching price overview for {}", game_id);

        let response = self
            .client
            .post(format!("{}{}", self.base_url, OVERVIEW_PATH))
            .query(&[("key", self.api_key.as_str())])
            .json(&[game_id])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            log::warn!("Price overview for {} returned {}", game_id, status);
            return Err(Error::PriceFetchFailed(status.as_u16()));
        }

        let overview: PriceOverview = response.json().await?;
        log::debug!(
            "Price overview for {} has {} entr(y/ies)",
            game_id,
            overview.prices.len()
        );

        Ok(overview)
    }
}

/// The live backend: ITAD for the catalog, exchangerate-api for the rate.
pub struct HttpBackend {
    catalog: ItadClient,
    rates: ExchangeRateClient,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            catalog: ItadClient::new(config)?,
            rates: ExchangeRateClient::new(config)?,
        })
    }

    pub fn from_clients(catalog: ItadClient, rates: ExchangeRateClient) -> Self {
        Self { catalog, rates }
    }
}

#[async_trait]
impl PriceBackend for HttpBackend {
    async fn search_games(&self, title: &str) -> Result<Vec<SearchHit>> {
        self.catalog.search_games(title).await
    }

    async fn price_overview(&self, game_id: &str) -> Result<PriceOverview> {
        self.catalog.price_overview(game_id).await
    }

    async fn usd_to_egp_rate(&self) -> Result<f64> {
        self.rates.usd_to_egp_rate().await
    }
}
