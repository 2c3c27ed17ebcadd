use crate::core::currency::CurrencyPair;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One exchange-rate observation as stored by the rate tables.
///
/// Only the calendar date matters for selection; a record built from a
/// timestamp keeps its date and drops the time of day.
///
/// The rate is not validated here. A non-positive rate is only an error
/// once the selector actually picks it.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use tour_pricing::core::rate::ExchangeRateRecord;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let record = ExchangeRateRecord::new(date, dec!(30.25));
/// assert_eq!(record.rate(), dec!(30.25));
/// assert!(record.pair().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateRecord {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    rate_date: NaiveDate,
    rate: Decimal,
    #[serde(flatten)]
    pair: Option<CurrencyPair>,
}

impl ExchangeRateRecord {
    pub fn new(rate_date: NaiveDate, rate: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            rate_date,
            rate,
            pair: None,
        }
    }

    /// Build a record from a timestamp, truncated to its UTC calendar date.
    pub fn from_timestamp(timestamp: DateTime<Utc>, rate: Decimal) -> Self {
        Self::new(timestamp.date_naive(), rate)
    }

    /// Create a record with a specific ID (useful for testing / determinism).
    pub fn with_id(id: Uuid, rate_date: NaiveDate, rate: Decimal) -> Self {
        Self {
            id,
            rate_date,
            rate,
            pair: None,
        }
    }

    /// Tag the record with the currency pair it was quoted for.
    pub fn with_pair(mut self, pair: CurrencyPair) -> Self {
        self.pair = Some(pair);
        self
    }

    // --- Accessors ---

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn rate_date(&self) -> NaiveDate {
        self.rate_date
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn pair(&self) -> Option<&CurrencyPair> {
        self.pair.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::CurrencyCode;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_timestamp_drops_time_of_day() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 23, 59, 59).unwrap();
        let record = ExchangeRateRecord::from_timestamp(ts, dec!(1.5));
        assert_eq!(
            record.rate_date(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_non_positive_rate_is_accepted_at_construction() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let record = ExchangeRateRecord::new(date, dec!(-1));
        assert_eq!(record.rate(), dec!(-1));
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{"rate_date": "2024-01-01", "rate": "30.5", "base": "try", "quote": "EUR"}"#;
        let record: ExchangeRateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.rate(), dec!(30.5));
        let pair = record.pair().unwrap();
        assert_eq!(pair.base, CurrencyCode::new("TRY"));
        assert_eq!(pair.quote, CurrencyCode::new("EUR"));

        let untagged: ExchangeRateRecord =
            serde_json::from_str(r#"{"rate_date": "2024-01-01", "rate": "1.1"}"#).unwrap();
        assert!(untagged.pair().is_none());
    }
}
