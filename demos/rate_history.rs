//! Generating a synthetic rate history and pricing against it.
//!
//! Prices the same service on the first of every month to show how the
//! customer price follows the exchange rate while the supplier cost stays
//! fixed.

use chrono::{Datelike, NaiveDate};
use rust_decimal_macros::dec;
use tour_pricing::prelude::*;
use tour_pricing::simulation::rate_history::{generate_rate_history, RateHistoryConfig};

fn main() {
    println!("╔════════════════════════════════════════════╗");
    println!("║  tour-pricing: Rate History Example        ║");
    println!("╚════════════════════════════════════════════╝\n");

    let config = RateHistoryConfig {
        days: 366,
        daily_volatility_pct: dec!(0.8),
        ..Default::default()
    };
    let history = generate_rate_history(&config);

    println!(
        "Generated {} daily {} rates from {}",
        history.len(),
        config.pair,
        config.start_date
    );
    if let (Some(first), Some(last)) = (history.first(), history.last()) {
        println!("First: {} on {}", first.rate(), first.rate_date());
        println!("Last:  {} on {}", last.rate(), last.rate_date());
    }
    println!();

    let cost = dec!(3500);
    let markup = dec!(20);
    println!("━━━ 3500 TRY day tour, 20% markup ━━━\n");
    println!("{:<12} {:>12} {:>12} {:>8}", "Date", "Rate", "Price", "Margin");

    for month in 1..=12 {
        let Some(date) = NaiveDate::from_ymd_opt(config.start_date.year(), month, 1) else {
            continue;
        };
        match select_rate_for_pair(&history, &config.pair, date) {
            Ok(rate) => {
                let price = price_from_cost(cost, markup, rate).expect("valid inputs");
                let margin = calculate_margin(price, cost, rate).expect("valid rate");
                println!(
                    "{:<12} {:>12} {:>12} {:>7}%",
                    date.to_string(),
                    rate.to_string(),
                    format_currency(price, &config.pair.quote, None),
                    margin
                );
            }
            Err(e) => println!("{:<12} {}", date.to_string(), e),
        }
    }

    // Before the first record there is nothing to select.
    let before = config.start_date.pred_opt().expect("valid date");
    println!();
    println!(
        "On {}: {}",
        before,
        select_rate_for_pair(&history, &config.pair, before).expect_err("no rate yet")
    );
}
