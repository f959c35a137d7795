//! Alpha Vantage market data provider implementation.
//!
//! This module provides stock data from the Alpha Vantage API:
//! - Latest quote via the GLOBAL_QUOTE endpoint
//! - Company fundamentals via the OVERVIEW endpoint
//!
//! Alpha Vantage answers HTTP 200 for almost everything and reports problems
//! through sentinel fields in the JSON body (`Note`, `Error Message`,
//! `Information`), so most error handling happens after parsing.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::{OverviewRecord, QuoteRecord, TickerSymbol};
use crate::provider::{MarketDataProvider, ProviderConfig};

const PROVIDER_ID: &str = "ALPHA_VANTAGE";

/// Alpha Vantage stock data provider.
pub struct AlphaVantageProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

// ============================================================================
// Response structures for Alpha Vantage API
// ============================================================================

/// GLOBAL_QUOTE response
#[derive(Debug, Default, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<QuoteRecord>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

/// OVERVIEW response. The company fields sit at the top level next to the
/// sentinels.
#[derive(Debug, Default, Deserialize)]
struct OverviewResponse {
    #[serde(flatten)]
    record: OverviewRecord,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

// ============================================================================
// AlphaVantageProvider implementation
// ============================================================================

impl AlphaVantageProvider {
    /// Create a provider from the injected configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ProviderConfig) -> Result<Self, MarketDataError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Make a request to the Alpha Vantage API and return the raw body.
    async fn fetch(&self, params: &[(&str, &str)]) -> Result<String, MarketDataError> {
        let mut all_params: Vec<(&str, &str)> = params.to_vec();
        all_params.push(("apikey", &self.api_key));

        let url = reqwest::Url::parse_with_params(&self.base_url, &all_params)
            .map_err(|e| MarketDataError::provider(format!("Failed to build URL: {}", e)))?;

        debug!("Alpha Vantage request: {}", redacted_url(&url));

        let response = self.client.get(url).send().await.map_err(transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited);
        }

        if !status.is_success() {
            return Err(MarketDataError::provider(format!("HTTP {}", status)));
        }

        response.text().await.map_err(transport_error)
    }

    /// Parse a response body. A JSON `null` body yields the default value.
    fn parse_body<T>(text: &str, endpoint: &str) -> Result<T, MarketDataError>
    where
        T: DeserializeOwned + Default,
    {
        serde_json::from_str::<Option<T>>(text)
            .map(Option::unwrap_or_default)
            .map_err(|e| {
                MarketDataError::provider(format!("Failed to parse {} response: {}", endpoint, e))
            })
    }

    /// Returns the throttling notice, if the body carries one.
    ///
    /// `Note` always means throttling. `Information` is also used for demo key
    /// and premium-endpoint notices, so only rate-limit wording counts.
    fn rate_limit_notice<'a>(
        note: &'a Option<String>,
        information: &'a Option<String>,
    ) -> Option<&'a str> {
        if let Some(msg) = non_empty(note) {
            return Some(msg);
        }

        let msg = non_empty(information)?;
        let lower = msg.to_lowercase();
        if lower.contains("rate limit")
            || lower.contains("api call frequency")
            || lower.contains("requests per day")
        {
            return Some(msg);
        }

        warn!("Alpha Vantage info: {}", msg);
        None
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// The request URL with the `apikey` value replaced by `***`.
fn redacted_url(url: &reqwest::Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "apikey" {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(&pairs);
    redacted.to_string()
}

/// reqwest errors carry the request URL, key included; it is dropped here.
fn transport_error(e: reqwest::Error) -> MarketDataError {
    if e.is_timeout() {
        MarketDataError::Timeout
    } else {
        MarketDataError::Network(e.without_url())
    }
}

// ============================================================================
// MarketDataProvider trait implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for AlphaVantageProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_quote(&self, symbol: &TickerSymbol) -> Result<QuoteRecord, MarketDataError> {
        let params = [("function", "GLOBAL_QUOTE"), ("symbol", symbol.as_str())];

        let text = self.fetch(&params).await?;
        let response: GlobalQuoteResponse = Self::parse_body(&text, "GLOBAL_QUOTE")?;

        // Throttling wins over every other sentinel
        if let Some(note) = non_empty(&response.note) {
            debug!("Alpha Vantage: quote for {} rate limited: {}", symbol, note);
            return Err(MarketDataError::RateLimited);
        }

        if let Some(msg) = non_empty(&response.error_message) {
            debug!("Alpha Vantage: quote for {} rejected: {}", symbol, msg);
            return Err(MarketDataError::InvalidSymbol(symbol.to_string()));
        }

        if Self::rate_limit_notice(&None, &response.information).is_some() {
            return Err(MarketDataError::RateLimited);
        }

        let quote = response.global_quote.unwrap_or_default();
        debug!(
            "Alpha Vantage: fetched quote for {} (empty: {})",
            symbol,
            quote.is_empty()
        );

        Ok(quote)
    }

    async fn get_overview(
        &self,
        symbol: &TickerSymbol,
    ) -> Result<OverviewRecord, MarketDataError> {
        let params = [("function", "OVERVIEW"), ("symbol", symbol.as_str())];

        let text = match self.fetch(&params).await {
            Err(e) if e.is_rate_limited() => {
                warn!(
                    "Alpha Vantage: overview for {} throttled (HTTP 429), showing quote only",
                    symbol
                );
                return Ok(OverviewRecord::default());
            }
            other => other?,
        };
        let response: OverviewResponse = Self::parse_body(&text, "OVERVIEW")?;

        if let Some(notice) = Self::rate_limit_notice(&response.note, &response.information) {
            warn!(
                "Alpha Vantage: overview for {} rate limited, showing quote only: {}",
                symbol, notice
            );
            return Ok(OverviewRecord::default());
        }

        if let Some(msg) = non_empty(&response.error_message) {
            debug!("Alpha Vantage: overview for {} returned error: {}", symbol, msg);
        }

        debug!("Alpha Vantage: fetched company overview for {}", symbol);

        Ok(response.record)
    }
}
