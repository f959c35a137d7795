//! Stockview Market Data Crate
//!
//! This crate talks to the Alpha Vantage API and normalizes its loosely typed
//! responses into the records the rest of stockview works with.
//!
//! # Overview
//!
//! A stock lookup needs two calls per ticker:
//! - `GLOBAL_QUOTE` for the latest price and daily statistics
//! - `OVERVIEW` for the company profile and fundamentals
//!
//! Both are exposed through the [`MarketDataProvider`] trait so the lookup
//! pipeline can run against a fake provider in tests.
//!
//! # Core Types
//!
//! - [`TickerSymbol`] - Trimmed, uppercased, non-empty ticker
//! - [`QuoteRecord`] - Raw quote fields as received
//! - [`OverviewRecord`] - Raw company overview fields as received
//! - [`MarketDataError`] - Failures surfaced to the user as one line of text
//! - [`ProviderConfig`] - API key, endpoint and timeout injected at startup

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{OverviewRecord, QuoteRecord, TickerSymbol};
pub use provider::alpha_vantage::AlphaVantageProvider;
pub use provider::{MarketDataProvider, ProviderConfig};
