//! In-memory provider for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use stockview_market_data::{
    MarketDataError, MarketDataProvider, OverviewRecord, QuoteRecord, TickerSymbol,
};

type Respond<T> = Box<dyn Fn(&TickerSymbol) -> Result<T, MarketDataError> + Send + Sync>;

pub(crate) struct FakeProvider {
    quote: Respond<QuoteRecord>,
    overview: Respond<OverviewRecord>,
    delay: Duration,
    delays: HashMap<String, Duration>,
    quote_calls: AtomicUsize,
    overview_calls: AtomicUsize,
}

impl FakeProvider {
    pub fn new(
        quote: impl Fn(&TickerSymbol) -> Result<QuoteRecord, MarketDataError> + Send + Sync + 'static,
        overview: impl Fn(&TickerSymbol) -> Result<OverviewRecord, MarketDataError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            quote: Box::new(quote),
            overview: Box::new(overview),
            delay: Duration::ZERO,
            delays: HashMap::new(),
            quote_calls: AtomicUsize::new(0),
            overview_calls: AtomicUsize::new(0),
        }
    }

    /// Every response waits this long.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Responses for `symbol` wait this long instead of the default delay.
    pub fn with_symbol_delay(mut self, symbol: &str, delay: Duration) -> Self {
        self.delays.insert(symbol.to_string(), delay);
        self
    }

    pub fn quote_calls(&self) -> usize {
        self.quote_calls.load(Ordering::SeqCst)
    }

    pub fn overview_calls(&self) -> usize {
        self.overview_calls.load(Ordering::SeqCst)
    }

    async fn wait(&self, symbol: &TickerSymbol) {
        let delay = self
            .delays
            .get(symbol.as_str())
            .copied()
            .unwrap_or(self.delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl MarketDataProvider for FakeProvider {
    fn id(&self) -> &'static str {
        "FAKE"
    }

    async fn get_quote(&self, symbol: &TickerSymbol) -> Result<QuoteRecord, MarketDataError> {
        self.quote_calls.fetch_add(1, Ordering::SeqCst);
        self.wait(symbol).await;
        (self.quote)(symbol)
    }

    async fn get_overview(
        &self,
        symbol: &TickerSymbol,
    ) -> Result<OverviewRecord, MarketDataError> {
        self.overview_calls.fetch_add(1, Ordering::SeqCst);
        self.wait(symbol).await;
        (self.overview)(symbol)
    }
}

pub(crate) fn apple_quote() -> QuoteRecord {
    QuoteRecord {
        symbol: Some("AAPL".to_string()),
        price: Some("150.00".to_string()),
        change: Some("2.50".to_string()),
        change_percent: Some("1.69%".to_string()),
        volume: Some("51234567".to_string()),
        ..Default::default()
    }
}

pub(crate) fn apple_overview() -> OverviewRecord {
    OverviewRecord {
        name: Some("Apple Inc.".to_string()),
        exchange: Some("NASDAQ".to_string()),
        ..Default::default()
    }
}

/// A quote whose price identifies which symbol it was fetched for.
pub(crate) fn quote_for(symbol: &TickerSymbol) -> QuoteRecord {
    QuoteRecord {
        symbol: Some(symbol.to_string()),
        price: Some("10.00".to_string()),
        ..Default::default()
    }
}
