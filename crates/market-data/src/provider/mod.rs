//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait the lookup pipeline depends on
//! - `ProviderConfig`, the injected credential/endpoint settings
//! - The Alpha Vantage implementation

mod config;
mod traits;

pub mod alpha_vantage;

// Re-exports
pub use config::{ProviderConfig, DEFAULT_BASE_URL, DEMO_API_KEY};
pub use traits::MarketDataProvider;
