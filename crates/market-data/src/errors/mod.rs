//! Error types for the market data crate.
//!
//! The `Display` text of every [`MarketDataError`] variant is the single-line
//! message shown to the user, so it is written for people, not logs.

use thiserror::Error;

/// Errors that can occur while looking up a ticker.
///
/// None of these are retried. The overview fetch swallows
/// [`RateLimited`](Self::RateLimited) and returns an empty record instead.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider throttled the request, either through a `Note` sentinel
    /// in the body or an HTTP 429.
    #[error("API rate limit reached. The free tier allows 25 requests/day. Please try again later or use your own API key.")]
    RateLimited,

    /// The provider rejected the symbol with an `Error Message` sentinel.
    #[error("Invalid ticker symbol \"{0}\".")]
    InvalidSymbol(String),

    /// The symbol is well formed but the provider returned no quote for it.
    #[error("No data found for ticker \"{0}\". Please check the symbol and try again.")]
    NotFound(String),

    /// The user submitted an empty ticker.
    #[error("Ticker symbol must not be empty")]
    EmptySymbol,

    /// The request to the provider timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provider answered with something we could not use
    /// (non-success status, unparsable body).
    #[error("Provider error: {message}")]
    Provider {
        /// What went wrong
        message: String,
    },

    /// A transport-level failure (DNS, connection refused, TLS, ...).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Shorthand for [`MarketDataError::Provider`].
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Whether this failure came from provider throttling.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }
}
