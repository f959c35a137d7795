//! Mapping of a merged lookup result onto named display fields.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::format::{
    format_change, format_currency, format_decimal, format_large_number, format_number,
    format_percent, parse_amount, PLACEHOLDER,
};
use crate::lookup::MergedResult;

/// Shown when the overview has no description.
pub const NO_DESCRIPTION: &str = "No description available for this company.";

/// Whether the day's change is drawn as a gain or a loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Positive,
    Negative,
}

impl ChangeDirection {
    /// Zero and unparsable changes count as positive.
    pub fn from_change(change: Option<&str>) -> Self {
        match parse_amount(change) {
            Some(amount) if amount < Decimal::ZERO => Self::Negative,
            _ => Self::Positive,
        }
    }

    /// Style class name, as a stylesheet would use it.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// Everything a stock card shows, already formatted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StockDisplay {
    // Header
    pub company_name: String,
    pub ticker: String,
    /// Empty when the exchange is unknown
    pub exchange: String,

    // Price
    pub price: String,
    pub change: String,
    pub change_direction: ChangeDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<String>,

    // Key stats
    pub open: String,
    pub previous_close: String,
    pub high: String,
    pub low: String,
    pub week_52_high: String,
    pub week_52_low: String,
    pub volume: String,
    /// The provider has no average volume; this repeats the current volume.
    pub average_volume: String,

    // Company details
    pub market_cap: String,
    pub pe_ratio: String,
    pub eps: String,
    pub dividend_yield: String,
    pub beta: String,
    pub sector: String,
    pub industry: String,
    pub country: String,
    pub description: String,
}

impl StockDisplay {
    pub fn from_result(result: &MergedResult) -> Self {
        let quote = &result.quote;
        let overview = &result.overview;
        let ticker = result.symbol.to_string();

        let company_name = non_empty(overview.name.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| ticker.clone());

        Self {
            company_name,
            ticker,
            exchange: non_empty(overview.exchange.as_deref())
                .unwrap_or_default()
                .to_string(),

            price: format_price(quote.price.as_deref()),
            change: format_change(quote.change.as_deref(), quote.change_percent.as_deref()),
            change_direction: ChangeDirection::from_change(quote.change.as_deref()),
            as_of: non_empty(quote.latest_trading_day.as_deref()).map(str::to_string),

            open: format_currency(quote.open.as_deref()),
            previous_close: format_currency(quote.previous_close.as_deref()),
            high: format_currency(quote.high.as_deref()),
            low: format_currency(quote.low.as_deref()),
            week_52_high: format_currency(overview.week_52_high.as_deref()),
            week_52_low: format_currency(overview.week_52_low.as_deref()),
            volume: format_number(quote.volume.as_deref()),
            average_volume: format_number(quote.volume.as_deref()),

            market_cap: format_large_number(overview.market_capitalization.as_deref()),
            pe_ratio: format_decimal(overview.pe_ratio.as_deref()),
            eps: format_currency(overview.eps.as_deref()),
            dividend_yield: format_percent(overview.dividend_yield.as_deref()),
            beta: format_decimal(overview.beta.as_deref()),
            sector: text_or_placeholder(overview.sector.as_deref()),
            industry: text_or_placeholder(overview.industry.as_deref()),
            country: text_or_placeholder(overview.country.as_deref()),
            description: non_empty(overview.description.as_deref())
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
        }
    }
}

/// The headline price: a zero price means the provider had nothing.
fn format_price(price: Option<&str>) -> String {
    match parse_amount(price) {
        Some(amount) if !amount.is_zero() => format_currency(price),
        _ => PLACEHOLDER.to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn text_or_placeholder(value: Option<&str>) -> String {
    non_empty(value).unwrap_or(PLACEHOLDER).to_string()
}
