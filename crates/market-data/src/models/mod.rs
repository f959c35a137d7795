//! Market data models
//!
//! This module contains the data types exchanged with the provider:
//! - `symbol` - User-supplied ticker (TickerSymbol)
//! - `quote` - Raw `Global Quote` payload (QuoteRecord)
//! - `overview` - Raw company overview payload (OverviewRecord)

mod overview;
mod quote;
mod raw;
mod symbol;

pub use overview::OverviewRecord;
pub use quote::QuoteRecord;
pub use symbol::TickerSymbol;
