use serde::{Deserialize, Serialize};

use super::raw::raw_string;

/// Company fundamentals from the `OVERVIEW` endpoint.
///
/// Only the fields stockview displays are mapped; the API returns many more
/// (CIK, fiscal year end, analyst ratings, ...) which are ignored. Every
/// field may be absent, and the provider often sends the literal `"None"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewRecord {
    // Company identification
    #[serde(
        rename = "Symbol",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub symbol: Option<String>,
    #[serde(
        rename = "AssetType",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub asset_type: Option<String>,
    #[serde(
        rename = "Name",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        rename = "Description",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        rename = "Exchange",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub exchange: Option<String>,
    #[serde(
        rename = "Currency",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub currency: Option<String>,
    #[serde(
        rename = "Country",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub country: Option<String>,
    #[serde(
        rename = "Sector",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub sector: Option<String>,
    #[serde(
        rename = "Industry",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub industry: Option<String>,

    // Valuation
    #[serde(
        rename = "MarketCapitalization",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub market_capitalization: Option<String>,
    #[serde(
        rename = "PERatio",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub pe_ratio: Option<String>,
    #[serde(
        rename = "EPS",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub eps: Option<String>,
    /// Ratio, e.g. "0.0044" for 0.44%
    #[serde(
        rename = "DividendYield",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub dividend_yield: Option<String>,
    #[serde(
        rename = "Beta",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub beta: Option<String>,

    // Trading range
    #[serde(
        rename = "52WeekHigh",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub week_52_high: Option<String>,
    #[serde(
        rename = "52WeekLow",
        default,
        deserialize_with = "raw_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub week_52_low: Option<String>,
}

impl OverviewRecord {
    /// True when no mapped field is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
