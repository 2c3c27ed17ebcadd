//! Pricing a tour quotation step by step.
//!
//! Shows how a supplier cost becomes a customer price, how margin and VAT
//! follow from it, and how a whole quotation is priced and formatted.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tour_pricing::format::format_summary;
use tour_pricing::format::locale::Locale;
use tour_pricing::prelude::*;

fn main() {
    println!("╔════════════════════════════════════════════╗");
    println!("║  tour-pricing: Quotation Walkthrough       ║");
    println!("╚════════════════════════════════════════════╝\n");

    // --- Step 1: Rate on the quotation date ---
    println!("━━━ Step 1: Rate on the quotation date ━━━\n");

    let pair: CurrencyPair = "TRY/EUR".parse().expect("valid pair");
    let day = |m, d| NaiveDate::from_ymd_opt(2024, m, d).expect("valid date");
    let rates = vec![
        ExchangeRateRecord::new(day(5, 1), dec!(34.62)).with_pair(pair.clone()),
        ExchangeRateRecord::new(day(5, 15), dec!(34.85)).with_pair(pair.clone()),
        ExchangeRateRecord::new(day(6, 1), dec!(35.10)).with_pair(pair.clone()),
    ];
    let quote_date = day(5, 20);
    let rate = select_rate_for_pair(&rates, &pair, quote_date).expect("rate on file");
    println!("{} on {}: {}", pair, quote_date, rate);
    println!();

    // --- Step 2: One line by hand ---
    println!("━━━ Step 2: One hotel night by hand ━━━\n");

    let cost = dec!(4500);
    let markup = dec!(25);
    let price = price_from_cost(cost, markup, rate).expect("valid inputs");
    println!("Supplier cost:  {} TRY", cost);
    println!("Markup:         {}%", markup);
    println!("Sell price:     {}", format_currency(price, &pair.quote, None));
    println!(
        "Back to cost:   {} TRY",
        cost_from_price(price, markup, rate).expect("valid inputs")
    );
    println!(
        "Profit:         {}",
        format_currency(calculate_profit(price, cost, rate).expect("valid rate"), &pair.quote, None)
    );
    println!("Margin:         {}%", calculate_margin(price, cost, rate).expect("valid rate"));
    println!(
        "Gross (20%):    {}",
        format_currency(calculate_gross(price, dec!(20)).expect("valid inputs"), &pair.quote, None)
    );
    println!();

    // --- Step 3: Whole quotation ---
    println!("━━━ Step 3: Whole quotation ━━━\n");

    let input = QuoteInput {
        base_currency: pair.base.clone(),
        target_currency: pair.quote.clone(),
        rate: None,
        vat_rate_pct: dec!(20),
        lines: vec![
            QuoteLine::new("Hotel night, sea view", cost, markup).with_quantity(5),
            QuoteLine::new("Private transfer", dec!(2200), dec!(15)).with_quantity(2),
            QuoteLine::new("Ephesus guided tour", dec!(3100), dec!(30)).with_quantity(2),
            QuoteLine::new("Welcome dinner", dec!(1800), dec!(20)).with_quantity(2),
        ],
    };
    let rate = input.resolve_rate(&rates, quote_date).expect("rate on file");
    let summary = QuoteSummary::compute(&input, rate).expect("valid quotation");

    println!("{}", summary);

    // --- Step 4: Localized document ---
    println!("━━━ Step 4: Localized document ━━━\n");

    for locale in [Locale::EnGb, Locale::DeDe, Locale::FrFr] {
        println!("{}", format_summary(&summary, locale));
    }
}
