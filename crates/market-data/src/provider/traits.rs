//! Market data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{OverviewRecord, QuoteRecord, TickerSymbol};

/// Source of quotes and company overviews.
///
/// Each call issues exactly one request; implementations never retry.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use stockview_market_data::{MarketDataError, MarketDataProvider, OverviewRecord, QuoteRecord, TickerSymbol};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn get_quote(&self, _: &TickerSymbol) -> Result<QuoteRecord, MarketDataError> {
///         Ok(QuoteRecord { price: Some("1.00".into()), ..Default::default() })
///     }
///
///     async fn get_overview(&self, _: &TickerSymbol) -> Result<OverviewRecord, MarketDataError> {
///         Ok(OverviewRecord::default())
///     }
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Constant identifier like "ALPHA_VANTAGE", used in logs.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote.
    ///
    /// # Returns
    ///
    /// The quote record, empty when the provider knows nothing about the
    /// symbol. Fails with [`MarketDataError::RateLimited`] or
    /// [`MarketDataError::InvalidSymbol`] on the provider's sentinels.
    async fn get_quote(&self, symbol: &TickerSymbol) -> Result<QuoteRecord, MarketDataError>;

    /// Fetch the company overview.
    ///
    /// # Returns
    ///
    /// The overview record. Rate limiting is not an error here: the record
    /// comes back empty so the quote can still be shown.
    async fn get_overview(&self, symbol: &TickerSymbol)
        -> Result<OverviewRecord, MarketDataError>;
}
