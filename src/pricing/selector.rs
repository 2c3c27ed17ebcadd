use crate::core::currency::CurrencyPair;
use crate::core::error::PricingError;
use crate::core::rate::ExchangeRateRecord;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Pick the record in effect on `target_date`.
///
/// The record in effect is the one with the latest `rate_date` that is on
/// or before `target_date`. When several records share that date the last
/// one in input order wins, so a caller passing rows in insertion order
/// gets the most recently entered correction.
///
/// # Errors
///
/// - `NoRatesAvailable` if `rates` is empty.
/// - `NoApplicableRate` if every record is dated after `target_date`.
/// - `InvalidRate` if the selected record's rate is zero or negative.
pub fn select_record_by_date(
    rates: &[ExchangeRateRecord],
    target_date: NaiveDate,
) -> Result<&ExchangeRateRecord, PricingError> {
    if rates.is_empty() {
        return Err(PricingError::NoRatesAvailable);
    }

    let mut selected: Option<&ExchangeRateRecord> = None;
    for record in rates {
        if record.rate_date() > target_date {
            continue;
        }
        // Equal dates fall through: the later record replaces the earlier one.
        match selected {
            Some(current) if record.rate_date() < current.rate_date() => {}
            _ => selected = Some(record),
        }
    }

    let record = selected.ok_or(PricingError::NoApplicableRate { target_date })?;
    if record.rate() <= Decimal::ZERO {
        return Err(PricingError::InvalidRate {
            rate: record.rate(),
            rate_date: record.rate_date(),
        });
    }

    log::debug!(
        "selected rate {} from record {} dated {} for {}",
        record.rate(),
        record.id(),
        record.rate_date(),
        target_date
    );
    Ok(record)
}

/// The exchange rate in effect on `target_date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use tour_pricing::core::rate::ExchangeRateRecord;
/// use tour_pricing::pricing::selector::select_rate_by_date;
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let rates = vec![
///     ExchangeRateRecord::new(day(1), dec!(30.10)),
///     ExchangeRateRecord::new(day(10), dec!(30.40)),
///     ExchangeRateRecord::new(day(20), dec!(30.90)),
/// ];
///
/// assert_eq!(select_rate_by_date(&rates, day(15)).unwrap(), dec!(30.40));
/// ```
pub fn select_rate_by_date(
    rates: &[ExchangeRateRecord],
    target_date: NaiveDate,
) -> Result<Decimal, PricingError> {
    select_record_by_date(rates, target_date).map(ExchangeRateRecord::rate)
}

/// Same as [`select_rate_by_date`] for a timestamp; the time of day is ignored.
pub fn select_rate_at(
    rates: &[ExchangeRateRecord],
    at: DateTime<Utc>,
) -> Result<Decimal, PricingError> {
    select_rate_by_date(rates, at.date_naive())
}

/// Select among the records tagged with `pair` only.
///
/// Untagged records and records for other pairs are ignored. If no record
/// carries the pair the result is `NoRatesAvailable`.
pub fn select_rate_for_pair(
    rates: &[ExchangeRateRecord],
    pair: &CurrencyPair,
    target_date: NaiveDate,
) -> Result<Decimal, PricingError> {
    let candidates: Vec<ExchangeRateRecord> = rates
        .iter()
        .filter(|r| r.pair() == Some(pair))
        .cloned()
        .collect();
    log::debug!(
        "{} of {} records quoted for {}",
        candidates.len(),
        rates.len(),
        pair
    );
    select_rate_by_date(&candidates, target_date)
}
