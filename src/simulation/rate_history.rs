//! Synthetic exchange-rate histories.
//!
//! Generates daily rate series to benchmark rate selection and to exercise
//! quotation pricing against realistic, drifting rates.

use crate::core::currency::{CurrencyCode, CurrencyPair};
use crate::core::rate::ExchangeRateRecord;
use chrono::{Days, NaiveDate};
use rand::Rng;
use rust_decimal::prelude::*;

/// Decimal places kept on generated rates.
const RATE_SCALE: u32 = 6;

/// Longest history generated, one hundred years of daily records.
pub const MAX_HISTORY_DAYS: usize = 36_525;

/// Configuration for generating a random daily rate series.
#[derive(Debug, Clone)]
pub struct RateHistoryConfig {
    /// Pair every generated record is tagged with.
    pub pair: CurrencyPair,
    /// Date of the first record.
    pub start_date: NaiveDate,
    /// Number of consecutive daily records.
    pub days: usize,
    /// Rate on `start_date`.
    pub initial_rate: Decimal,
    /// Largest day-to-day move, in percent of the previous rate.
    pub daily_volatility_pct: Decimal,
}

impl Default for RateHistoryConfig {
    fn default() -> Self {
        Self {
            pair: CurrencyPair::new(CurrencyCode::new("TRY"), CurrencyCode::new("EUR")),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN),
            days: 365,
            initial_rate: Decimal::from(30),
            daily_volatility_pct: Decimal::ONE,
        }
    }
}

/// Generate one record per day starting at `config.start_date`.
///
/// Each rate moves at most `daily_volatility_pct` from the previous one and
/// never drops to zero. At most [`MAX_HISTORY_DAYS`] records are produced.
pub fn generate_rate_history(config: &RateHistoryConfig) -> Vec<ExchangeRateRecord> {
    let mut rng = rand::thread_rng();
    let floor = Decimal::new(1, RATE_SCALE);
    let max_move = config
        .daily_volatility_pct
        .abs()
        .to_f64()
        .unwrap_or(0.0)
        / 100.0;

    let mut rate = config.initial_rate.max(floor).round_dp(RATE_SCALE);
    let days = config.days.min(MAX_HISTORY_DAYS);
    if days < config.days {
        log::warn!(
            "rate history of {} days requested, generating {}",
            config.days,
            days
        );
    }
    let mut records = Vec::with_capacity(days);

    for day in 0..days {
        let Some(date) = config.start_date.checked_add_days(Days::new(day as u64)) else {
            log::warn!("rate history truncated at {} days: date out of range", day);
            break;
        };
        records.push(ExchangeRateRecord::new(date, rate).with_pair(config.pair.clone()));

        if max_move > 0.0 {
            let change = rng.gen_range(-max_move..=max_move);
            let factor = Decimal::from_f64(1.0 + change).unwrap_or(Decimal::ONE);
            // Keep the previous rate if the move would overflow.
            rate = rate
                .checked_mul(factor)
                .unwrap_or(rate)
                .round_dp(RATE_SCALE)
                .max(floor);
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::selector::select_rate_for_pair;
    use rust_decimal_macros::dec;

    #[test]
    fn test_generates_consecutive_days() {
        let config = RateHistoryConfig {
            days: 30,
            ..Default::default()
        };
        let history = generate_rate_history(&config);
        assert_eq!(history.len(), 30);
        assert_eq!(history[0].rate_date(), config.start_date);
        assert_eq!(history[0].rate(), dec!(30));
        for window in history.windows(2) {
            assert_eq!(
                window[1].rate_date(),
                window[0].rate_date().succ_opt().unwrap()
            );
        }
    }

    #[test]
    fn test_rates_stay_positive_and_bounded() {
        let config = RateHistoryConfig {
            days: 200,
            initial_rate: dec!(0.05),
            daily_volatility_pct: dec!(5),
            ..Default::default()
        };
        let history = generate_rate_history(&config);
        for window in history.windows(2) {
            let prev = window[0].rate();
            let next = window[1].rate();
            assert!(next > Decimal::ZERO);
            // 5% plus rounding slack
            assert!((next - prev).abs() <= prev * dec!(0.05) + dec!(0.000001));
        }
    }

    #[test]
    fn test_zero_volatility_is_flat() {
        let config = RateHistoryConfig {
            days: 10,
            daily_volatility_pct: Decimal::ZERO,
            ..Default::default()
        };
        let history = generate_rate_history(&config);
        assert!(history.iter().all(|r| r.rate() == dec!(30)));
    }

    #[test]
    fn test_oversized_request_is_capped() {
        let config = RateHistoryConfig {
            days: usize::MAX,
            daily_volatility_pct: Decimal::ZERO,
            ..Default::default()
        };
        let history = generate_rate_history(&config);
        assert_eq!(history.len(), MAX_HISTORY_DAYS);
    }

    #[test]
    fn test_huge_initial_rate_does_not_overflow() {
        let config = RateHistoryConfig {
            days: 20,
            initial_rate: Decimal::MAX,
            daily_volatility_pct: dec!(5),
            ..Default::default()
        };
        let history = generate_rate_history(&config);
        assert_eq!(history.len(), 20);
        assert!(history.iter().all(|r| r.rate() > Decimal::ZERO));
    }

    #[test]
    fn test_generated_history_is_selectable() {
        let config = RateHistoryConfig {
            days: 60,
            ..Default::default()
        };
        let history = generate_rate_history(&config);
        let target = config.start_date.checked_add_days(Days::new(45)).unwrap();
        let rate = select_rate_for_pair(&history, &config.pair, target).unwrap();
        assert_eq!(rate, history[45].rate());
    }
}
