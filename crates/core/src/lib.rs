//! Stockview core: everything between the provider and the screen.
//!
//! - [`format`] turns raw provider strings into display strings
//! - [`lookup`] fetches quote and overview together and decides success
//! - [`presenter`] maps a merged result onto named display fields
//! - [`view`] is the boundary to whatever draws those fields
//! - [`search`] drives the view through one search, guarding against stale responses

pub mod format;
pub mod lookup;
pub mod presenter;
pub mod search;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use lookup::{MergedResult, StockLookup};
pub use presenter::{ChangeDirection, StockDisplay};
pub use search::{SearchController, SearchOutcome};
pub use view::{MemoryView, StockView, ViewEvent, ViewState};

pub use stockview_market_data::{
    AlphaVantageProvider, MarketDataError, MarketDataProvider, OverviewRecord, ProviderConfig,
    QuoteRecord, TickerSymbol,
};
