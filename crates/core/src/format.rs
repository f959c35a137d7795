//! Display formatting for raw provider values.
//!
//! Every function here is total: a missing value, an empty string, the
//! provider's literal `"None"`, or anything that does not parse as a number
//! renders as [`PLACEHOLDER`]. Numbers are handled as exact decimals so that
//! `"150.005"` rounds the way a person expects.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Shown wherever a value is missing or unusable.
pub const PLACEHOLDER: &str = "--";

const SCALES: [(u64, &str); 3] = [
    (1_000_000_000_000, "T"),
    (1_000_000_000, "B"),
    (1_000_000, "M"),
];

/// Parse a raw provider value into a decimal.
pub(crate) fn parse_amount(value: Option<&str>) -> Option<Decimal> {
    let raw = value?.trim();
    // Decimal::from_str accepts `_` digit separators; the provider never sends them
    if raw.is_empty() || raw == "None" || raw.contains('_') {
        return None;
    }
    Decimal::from_str(raw).ok()
}

/// Round half away from zero and pad to exactly `dp` fraction digits.
fn fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded.to_string()
}

/// Insert `,` every three digits of the integer part of a plain decimal string.
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(number.len() + int_part.len() / 3);
    grouped.push_str(sign);
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

/// `"1234.5"` -> `"$1,234.50"`
pub fn format_currency(value: Option<&str>) -> String {
    match parse_amount(value) {
        Some(amount) => format!("${}", group_thousands(&fixed(amount, 2))),
        None => PLACEHOLDER.to_string(),
    }
}

/// `"51234567"` -> `"51,234,567"`. Fractions are truncated.
pub fn format_number(value: Option<&str>) -> String {
    match parse_amount(value) {
        Some(amount) => group_thousands(&amount.trunc().normalize().to_string()),
        None => PLACEHOLDER.to_string(),
    }
}

/// `"28.456"` -> `"28.46"`.
///
/// Zero renders as the placeholder: the provider reports an undefined ratio
/// (no earnings, no beta) as `"0"`.
pub fn format_decimal(value: Option<&str>) -> String {
    match parse_amount(value) {
        Some(amount) if !amount.is_zero() => fixed(amount, 2),
        _ => PLACEHOLDER.to_string(),
    }
}

/// `"2950000000000"` -> `"$2.95T"`; below a million falls back to a plain
/// grouped amount with up to three fraction digits.
pub fn format_large_number(value: Option<&str>) -> String {
    let Some(amount) = parse_amount(value) else {
        return PLACEHOLDER.to_string();
    };

    for (scale, suffix) in SCALES {
        let scale = Decimal::from(scale);
        if amount >= scale {
            return match amount.checked_div(scale) {
                Some(scaled) => format!("${}{}", fixed(scaled, 2), suffix),
                None => PLACEHOLDER.to_string(),
            };
        }
    }

    let plain = amount
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    format!("${}", group_thousands(&plain.to_string()))
}

/// A ratio as a percentage: `"0.0044"` -> `"0.44%"`.
pub fn format_percent(value: Option<&str>) -> String {
    match parse_amount(value).and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED)) {
        Some(percent) => format!("{}%", fixed(percent, 2)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Signed change with the provider's percent text: `"+2.50 (1.69%)"`.
///
/// An unusable change counts as zero and a missing percent as `0%`, so this
/// never renders the placeholder.
pub fn format_change(change: Option<&str>, change_percent: Option<&str>) -> String {
    let amount = parse_amount(change).unwrap_or(Decimal::ZERO);
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        ""
    } else {
        "+"
    };
    let percent = change_percent.filter(|p| !p.is_empty()).unwrap_or("0%");
    format!("{}{} ({})", sign, fixed(amount, 2), percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(Some("150.25")), Some(dec!(150.25)));
        assert_eq!(parse_amount(Some(" 42 ")), Some(dec!(42)));
        assert_eq!(parse_amount(Some("-1.5")), Some(dec!(-1.5)));
        assert_eq!(parse_amount(Some("None")), None);
        assert_eq!(parse_amount(Some("")), None);
        assert_eq!(parse_amount(Some("-")), None);
        assert_eq!(parse_amount(Some("abc")), None);
        assert_eq!(parse_amount(Some("1_000")), None);
        assert_eq!(parse_amount(Some("_5")), None);
        assert_eq!(parse_amount(None), None);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567.891"), "1,234,567.891");
        assert_eq!(group_thousands("-123456"), "-123,456");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Some("150.5")), "$150.50");
        assert_eq!(format_currency(Some("150.00")), "$150.00");
        assert_eq!(format_currency(Some("1234567.891")), "$1,234,567.89");
        assert_eq!(format_currency(Some("0.005")), "$0.01");
        assert_eq!(format_currency(Some("0")), "$0.00");
        assert_eq!(format_currency(Some("-3.2")), "$-3.20");
    }

    #[test]
    fn test_format_currency_placeholder() {
        assert_eq!(format_currency(None), PLACEHOLDER);
        assert_eq!(format_currency(Some("")), PLACEHOLDER);
        assert_eq!(format_currency(Some("None")), PLACEHOLDER);
        assert_eq!(format_currency(Some("n/a")), PLACEHOLDER);
        assert_eq!(format_currency(Some("1_000")), PLACEHOLDER);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(Some("51234567")), "51,234,567");
        assert_eq!(format_number(Some("999")), "999");
        assert_eq!(format_number(Some("1000.9")), "1,000");
        assert_eq!(format_number(Some("0")), "0");
        assert_eq!(format_number(Some("None")), PLACEHOLDER);
        assert_eq!(format_number(None), PLACEHOLDER);
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(Some("28.456")), "28.46");
        assert_eq!(format_decimal(Some("1.2")), "1.20");
        assert_eq!(format_decimal(Some("-0.35")), "-0.35");
        assert_eq!(format_decimal(Some("12345.678")), "12345.68");
    }

    #[test]
    fn test_format_decimal_zero_is_missing() {
        assert_eq!(format_decimal(Some("0")), PLACEHOLDER);
        assert_eq!(format_decimal(Some("0.00")), PLACEHOLDER);
        assert_eq!(format_decimal(Some("None")), PLACEHOLDER);
        assert_eq!(format_decimal(Some("-")), PLACEHOLDER);
    }

    #[test]
    fn test_format_large_number() {
        assert_eq!(format_large_number(Some("1500000000000")), "$1.50T");
        assert_eq!(format_large_number(Some("2500000000")), "$2.50B");
        assert_eq!(format_large_number(Some("7250000")), "$7.25M");
        assert_eq!(format_large_number(Some("1000000")), "$1.00M");
        assert_eq!(format_large_number(Some("999")), "$999");
        assert_eq!(format_large_number(Some("999999")), "$999,999");
        assert_eq!(format_large_number(Some("1234.5678")), "$1,234.568");
        assert_eq!(format_large_number(Some("None")), PLACEHOLDER);
        assert_eq!(format_large_number(None), PLACEHOLDER);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some("0.0044")), "0.44%");
        assert_eq!(format_percent(Some("0.0455")), "4.55%");
        assert_eq!(format_percent(Some("0")), "0.00%");
        assert_eq!(format_percent(Some("None")), PLACEHOLDER);
        assert_eq!(format_percent(Some("")), PLACEHOLDER);
        assert_eq!(format_percent(None), PLACEHOLDER);
    }

    #[test]
    fn test_format_percent_overflow_is_placeholder() {
        assert_eq!(
            format_percent(Some("79228162514264337593543950335")),
            PLACEHOLDER
        );
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(Some("2.50"), Some("1.69%")), "+2.50 (1.69%)");
        assert_eq!(
            format_change(Some("-1.2345"), Some("-0.8123%")),
            "-1.23 (-0.8123%)"
        );
        assert_eq!(format_change(Some("0"), Some("0.0000%")), "+0.00 (0.0000%)");
        assert_eq!(format_change(None, None), "+0.00 (0%)");
        assert_eq!(format_change(Some("None"), Some("")), "+0.00 (0%)");
    }
}
