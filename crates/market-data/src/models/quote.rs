use serde::{Deserialize, Serialize};

use super::raw::raw_string;

/// The `Global Quote` object of a `GLOBAL_QUOTE` response.
///
/// Values are kept as the raw strings the provider sent; formatting decides
/// later what counts as missing. An unknown ticker comes back as `{}`, which
/// deserializes to the empty record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    #[serde(
        rename = "01. symbol",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub symbol: Option<String>,

    #[serde(
        rename = "02. open",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub open: Option<String>,

    #[serde(
        rename = "03. high",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub high: Option<String>,

    #[serde(
        rename = "04. low",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub low: Option<String>,

    /// Latest traded price
    #[serde(
        rename = "05. price",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<String>,

    #[serde(
        rename = "06. volume",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub volume: Option<String>,

    /// Trading day the quote belongs to (YYYY-MM-DD)
    #[serde(
        rename = "07. latest trading day",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub latest_trading_day: Option<String>,

    #[serde(
        rename = "08. previous close",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub previous_close: Option<String>,

    /// Absolute change against the previous close
    #[serde(
        rename = "09. change",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub change: Option<String>,

    /// Relative change, already suffixed with `%` by the provider
    #[serde(
        rename = "10. change percent",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub change_percent: Option<String>,
}

impl QuoteRecord {
    /// True when the provider sent no quote fields at all.
    pub fn is_empty(&self) -> bool {
        self.symbol.is_none()
            && self.open.is_none()
            && self.high.is_none()
            && self.low.is_none()
            && self.price.is_none()
            && self.volume.is_none()
            && self.latest_trading_day.is_none()
            && self.previous_close.is_none()
            && self.change.is_none()
            && self.change_percent.is_none()
    }
}
