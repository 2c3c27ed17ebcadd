use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// ISO 4217-style currency code.
///
/// Codes are normalized to upper case so `"try"` and `"TRY"` compare equal.
///
/// # Examples
///
/// ```
/// use tour_pricing::core::currency::CurrencyCode;
///
/// let lira = CurrencyCode::new("try");
/// assert_eq!(lira.as_str(), "TRY");
/// assert_ne!(lira, CurrencyCode::new("EUR"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display symbol for well-known codes, `None` for everything else.
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self.0.as_str() {
            "USD" => "$",
            "EUR" => "€",
            "GBP" => "£",
            "TRY" => "₺",
            "JPY" => "¥",
            "CNY" => "¥",
            "CHF" => "CHF",
            "RUB" => "₽",
            "INR" => "₹",
            "AED" => "AED",
            "SAR" => "SAR",
            _ => return None,
        };
        Some(symbol)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CurrencyCode {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Error parsing a `BASE/QUOTE` pair string.
#[derive(Debug, Error)]
#[error("invalid currency pair '{0}', expected BASE/QUOTE")]
pub struct ParsePairError(String);

/// A pair of currencies an exchange rate is quoted for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub base: CurrencyCode,
    pub quote: CurrencyCode,
}

impl CurrencyPair {
    pub fn new(base: CurrencyCode, quote: CurrencyCode) -> Self {
        Self { base, quote }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl FromStr for CurrencyPair {
    type Err = ParsePairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, quote) = s
            .split_once('/')
            .ok_or_else(|| ParsePairError(s.to_string()))?;
        if base.trim().is_empty() || quote.trim().is_empty() {
            return Err(ParsePairError(s.to_string()));
        }
        Ok(Self::new(CurrencyCode::new(base), CurrencyCode::new(quote)))
    }
}
