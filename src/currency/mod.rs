use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

/// Symbol and minor-unit count for a recognized currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub symbol: &'static str,
    pub minor_units: u8,
}

/// Looks up formatting metadata for a currency code. Codes outside the table
/// are unknown, and formatting with one fails rather than defaulting.
pub fn currency_info(code: &str) -> Option<CurrencyInfo> {
    let info = |symbol, minor_units| CurrencyInfo {
        symbol,
        minor_units,
    };
    match code {
        "USD" => Some(info("$", 2)),
        "EUR" => Some(info("€", 2)),
        "GBP" => Some(info("£", 2)),
        "JPY" => Some(info("¥", 0)),
        "CNY" => Some(info("¥", 2)),
        "INR" => Some(info("₹", 2)),
        "CAD" => Some(info("CA$", 2)),
        "AUD" => Some(info("A$", 2)),
        "CHF" => Some(info("CHF", 2)),
        "SEK" => Some(info("kr", 2)),
        "BRL" => Some(info("R$", 2)),
        "KWD" => Some(info("KD", 3)),
        "BHD" => Some(info("BD", 3)),
        _ => None,
    }
}

/// Formats an amount in the given currency, e.g. `$1,234.50`.
///
/// Unknown currency codes return [`TrackerError::InvalidCurrency`] instead of
/// silently falling back to a default.
pub fn format_amount(
    amount: f64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
) -> Result<String, TrackerError> {
    let info = currency_info(code.as_str())
        .ok_or_else(|| TrackerError::InvalidCurrency(code.as_str().to_string()))?;
    let body = format_number(locale, amount.abs(), info.minor_units);
    let sign = if amount < 0.0 { "-" } else { "" };
    Ok(format!("{}{}{}", sign, info.symbol, body))
}

/// Renders a bare number with the locale's separators and fixed precision.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(locale.decimal_separator) {
        let mut int_part = body[..pos].to_string();
        int_part = group_digits(&int_part, locale.grouping_separator);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        body = group_digits(&body, locale.grouping_separator);
    }
    body
}

fn group_digits(digits: &str, separator: char) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    format!("{}{}", sign, grouped)
}
