//! Quote + overview lookup for one ticker.

use std::sync::Arc;

use log::debug;
use stockview_market_data::{
    MarketDataError, MarketDataProvider, OverviewRecord, QuoteRecord, TickerSymbol,
};

/// Quote and overview fetched for the same search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedResult {
    pub symbol: TickerSymbol,
    pub quote: QuoteRecord,
    pub overview: OverviewRecord,
}

impl MergedResult {
    /// Only a result with a quote can be shown; a missing overview just
    /// means placeholders.
    pub fn is_displayable(&self) -> bool {
        !self.quote.is_empty()
    }
}

/// Runs both fetches for a ticker and decides whether the search succeeded.
#[derive(Clone)]
pub struct StockLookup {
    provider: Arc<dyn MarketDataProvider>,
}

impl StockLookup {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Fetch quote and overview concurrently.
    ///
    /// Both requests always run to completion. Failures are reported in this
    /// order: a quote error, then an empty quote (`NotFound`), then an
    /// overview error. A rate-limited overview is not an error, the provider
    /// already hands back an empty record for it.
    pub async fn lookup(&self, symbol: &TickerSymbol) -> Result<MergedResult, MarketDataError> {
        debug!("Looking up {} via {}", symbol, self.provider.id());

        let (quote, overview) = tokio::join!(
            self.provider.get_quote(symbol),
            self.provider.get_overview(symbol),
        );

        let quote = quote?;
        if quote.is_empty() {
            return Err(MarketDataError::NotFound(symbol.to_string()));
        }
        let overview = overview?;

        let result = MergedResult {
            symbol: symbol.clone(),
            quote,
            overview,
        };
        debug_assert!(result.is_displayable());
        Ok(result)
    }
}
