//! tour-pricing CLI
//!
//! Run pricing calculations from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Rate in effect on a date
//! tour-pricing rate --input rates.json --date 2024-03-15 --pair TRY/EUR
//!
//! # Sell price for a supplier cost
//! tour-pricing price --cost 3000 --markup 20 --rate 30
//!
//! # Price a whole quotation
//! tour-pricing quote --input quote.json --locale de-DE
//!
//! # Generate a random rate history for testing
//! tour-pricing generate --days 90 --pair TRY/EUR
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::process;
use tour_pricing::core::currency::CurrencyPair;
use tour_pricing::core::error::PricingError;
use tour_pricing::core::rate::ExchangeRateRecord;
use tour_pricing::format::{format_summary, resolve_locale};
use tour_pricing::pricing::breakdown::{QuoteInput, QuoteSummary};
use tour_pricing::pricing::conversion::{cost_from_price, price_from_cost};
use tour_pricing::pricing::margin::{calculate_margin, calculate_profit};
use tour_pricing::pricing::selector::{select_rate_for_pair, select_record_by_date};
use tour_pricing::pricing::tax::{calculate_gross, calculate_vat};
use tour_pricing::simulation::rate_history::{
    generate_rate_history, RateHistoryConfig, MAX_HISTORY_DAYS,
};

fn print_usage() {
    eprintln!(
        r#"tour-pricing — exchange rates, markup, margin and VAT for tour quotations

USAGE:
    tour-pricing <COMMAND> [OPTIONS]

COMMANDS:
    rate        Select the exchange rate in effect on a date
    price       Sell price from a supplier cost
    cost        Supplier cost from a sell price
    margin      Margin and profit of a sell price against a cost
    vat         VAT and gross amount for a net amount
    quote       Price a quotation file
    generate    Generate a random daily rate history (for testing)
    help        Show this message

OPTIONS (rate):
    --input <FILE>      Path to JSON rates file
    --date <DATE>       Target date, YYYY-MM-DD
    --pair <BASE/QUOTE> Only consider records quoted for this pair

OPTIONS (price, cost, margin):
    --cost <N>          Cost in base currency
    --price <N>         Sell price in target currency
    --markup <PCT>      Markup percentage (default: 0)
    --rate <R>          Exchange rate

OPTIONS (vat):
    --net <N>           Net amount
    --vat-rate <PCT>    VAT percentage

OPTIONS (quote):
    --input <FILE>      Path to JSON quotation file
    --format <FORMAT>   Output format: text (default) or json
    --locale <LOCALE>   Locale for text output (default: en-US)
    --rates <FILE>      Take the rate from this rates file ...
    --date <DATE>       ... as in effect on this date (both or neither)

OPTIONS (generate):
    --days <N>          Number of daily records (default: 365, max: 36525)
    --start <DATE>      First date (default: 2024-01-01)
    --pair <BASE/QUOTE> Currency pair (default: TRY/EUR)
    --initial <R>       Starting rate (default: 30)
    --output <FILE>     Write to file instead of stdout

EXAMPLES:
    tour-pricing rate --input rates.json --date 2024-03-15
    tour-pricing price --cost 3000 --markup 20 --rate 30
    tour-pricing margin --price 100 --cost 8000 --rate 30
    tour-pricing vat --net 100 --vat-rate 20
    tour-pricing quote --input quote.json --locale de-DE
    tour-pricing generate --days 90 --output rates.json"#
    );
}

/// JSON schema for rate files.
#[derive(serde::Deserialize, serde::Serialize)]
struct RatesFile {
    rates: Vec<ExchangeRateRecord>,
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn next_value(args: &[String], i: &mut usize, flag: &str) -> String {
    *i += 1;
    args.get(*i)
        .cloned()
        .unwrap_or_else(|| fail(format!("{} requires a value", flag)))
}

fn parse_decimal(flag: &str, value: &str) -> Decimal {
    value
        .parse()
        .unwrap_or_else(|e| fail(format!("invalid number '{}' for {}: {}", value, flag, e)))
}

fn parse_date(flag: &str, value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|e| fail(format!("invalid date '{}' for {}: {}", value, flag, e)))
}

fn parse_pair(value: &str) -> CurrencyPair {
    value.parse().unwrap_or_else(|e| fail(e))
}

fn required<T>(value: Option<T>, flag: &str) -> T {
    value.unwrap_or_else(|| fail(format!("{} is required", flag)))
}

fn or_fail<T>(result: Result<T, PricingError>) -> T {
    result.unwrap_or_else(|e| fail(e))
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| fail(e))
}

fn load_rates(path: &str) -> Vec<ExchangeRateRecord> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("reading file '{}': {}", path, e)));

    let file: RatesFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "rates": [
    {{ "rate_date": "2024-01-01", "rate": "30.25", "base": "TRY", "quote": "EUR" }}
  ]
}}"#
        );
        process::exit(1);
    });
    log::info!("loaded {} rate records from {}", file.rates.len(), path);
    file.rates
}

fn cmd_rate(args: &[String]) {
    let mut input_path = None;
    let mut date = None;
    let mut pair = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => input_path = Some(next_value(args, &mut i, "--input")),
            "--date" => date = Some(parse_date("--date", &next_value(args, &mut i, "--date"))),
            "--pair" => pair = Some(parse_pair(&next_value(args, &mut i, "--pair"))),
            other => fail(format!("unknown option: {}", other)),
        }
        i += 1;
    }

    let rates = load_rates(&required(input_path, "--input <FILE>"));
    let date = required(date, "--date <DATE>");

    match pair {
        Some(pair) => {
            let rate = or_fail(select_rate_for_pair(&rates, &pair, date));
            println!("{} on {}: {}", pair, date, rate);
        }
        None => {
            let record = or_fail(select_record_by_date(&rates, date));
            println!(
                "{}: {} (from record {} dated {})",
                date,
                record.rate(),
                record.id(),
                record.rate_date()
            );
        }
    }
}

/// Options shared by `price`, `cost` and `margin`.
#[derive(Default)]
struct AmountArgs {
    cost: Option<Decimal>,
    price: Option<Decimal>,
    markup: Decimal,
    rate: Option<Decimal>,
}

fn parse_amount_args(args: &[String]) -> AmountArgs {
    let mut parsed = AmountArgs::default();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--cost" => parsed.cost = Some(parse_decimal(flag, &next_value(args, &mut i, flag))),
            "--price" => parsed.price = Some(parse_decimal(flag, &next_value(args, &mut i, flag))),
            "--markup" => parsed.markup = parse_decimal(flag, &next_value(args, &mut i, flag)),
            "--rate" => parsed.rate = Some(parse_decimal(flag, &next_value(args, &mut i, flag))),
            other => fail(format!("unknown option: {}", other)),
        }
        i += 1;
    }
    parsed
}

fn cmd_price(args: &[String]) {
    let a = parse_amount_args(args);
    let cost = required(a.cost, "--cost <N>");
    let rate = required(a.rate, "--rate <R>");
    println!("{}", or_fail(price_from_cost(cost, a.markup, rate)));
}

fn cmd_cost(args: &[String]) {
    let a = parse_amount_args(args);
    let price = required(a.price, "--price <N>");
    let rate = required(a.rate, "--rate <R>");
    println!("{}", or_fail(cost_from_price(price, a.markup, rate)));
}

fn cmd_margin(args: &[String]) {
    let a = parse_amount_args(args);
    let price = required(a.price, "--price <N>");
    let cost = required(a.cost, "--cost <N>");
    let rate = required(a.rate, "--rate <R>");
    println!("Margin: {}%", or_fail(calculate_margin(price, cost, rate)));
    println!("Profit: {}", or_fail(calculate_profit(price, cost, rate)));
}

fn cmd_vat(args: &[String]) {
    let mut net = None;
    let mut vat_rate = None;
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--net" => net = Some(parse_decimal(flag, &next_value(args, &mut i, flag))),
            "--vat-rate" => vat_rate = Some(parse_decimal(flag, &next_value(args, &mut i, flag))),
            other => fail(format!("unknown option: {}", other)),
        }
        i += 1;
    }

    let net = required(net, "--net <N>");
    let vat_rate = required(vat_rate, "--vat-rate <PCT>");
    println!("VAT:   {}", or_fail(calculate_vat(net, vat_rate)));
    println!("Gross: {}", or_fail(calculate_gross(net, vat_rate)));
}

/// Where `quote` takes its exchange rate from.
#[derive(Debug, PartialEq)]
enum RateSource {
    /// The `rate` field of the quotation file.
    Quotation,
    /// The rate in effect on `date` in a rates file.
    History { path: String, date: NaiveDate },
}

impl RateSource {
    /// `--rates` and `--date` only make sense together.
    fn from_flags(rates_path: Option<String>, date: Option<NaiveDate>) -> Result<Self, &'static str> {
        match (rates_path, date) {
            (None, None) => Ok(Self::Quotation),
            (Some(path), Some(date)) => Ok(Self::History { path, date }),
            (Some(_), None) => Err("--rates requires --date <DATE>"),
            (None, Some(_)) => Err("--date requires --rates <FILE>"),
        }
    }
}

fn cmd_quote(args: &[String]) {
    let mut input_path = None;
    let mut format = "text".to_string();
    let mut locale = None;
    let mut rates_path = None;
    let mut date = None;
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--input" => input_path = Some(next_value(args, &mut i, flag)),
            "--format" => format = next_value(args, &mut i, flag),
            "--locale" => locale = Some(next_value(args, &mut i, flag)),
            "--rates" => rates_path = Some(next_value(args, &mut i, flag)),
            "--date" => date = Some(parse_date(flag, &next_value(args, &mut i, flag))),
            other => fail(format!("unknown option: {}", other)),
        }
        i += 1;
    }

    let path = required(input_path, "--input <FILE>");
    let source = RateSource::from_flags(rates_path, date).unwrap_or_else(|e| fail(e));
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| fail(format!("reading file '{}': {}", path, e)));
    let input: QuoteInput = serde_json::from_str(&content)
        .unwrap_or_else(|e| fail(format!("parsing quotation JSON: {}", e)));

    let summary = match source {
        RateSource::History { path, date } => {
            let rates = load_rates(&path);
            let rate = or_fail(input.resolve_rate(&rates, date));
            or_fail(QuoteSummary::compute(&input, rate))
        }
        RateSource::Quotation => or_fail(QuoteSummary::from_input(&input, None)),
    };

    match format.as_str() {
        "json" => println!("{}", to_json(&summary)),
        "text" => print!("{}", format_summary(&summary, resolve_locale(locale.as_deref()))),
        other => fail(format!("--format must be 'text' or 'json', got '{}'", other)),
    }
}

fn cmd_generate(args: &[String]) {
    let mut config = RateHistoryConfig::default();
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--days" => {
                let value = next_value(args, &mut i, flag);
                config.days = value
                    .parse()
                    .unwrap_or_else(|_| fail("--days requires a number"));
                if config.days > MAX_HISTORY_DAYS {
                    fail(format!("--days must be at most {}", MAX_HISTORY_DAYS));
                }
            }
            "--start" => config.start_date = parse_date(flag, &next_value(args, &mut i, flag)),
            "--pair" => config.pair = parse_pair(&next_value(args, &mut i, flag)),
            "--initial" => config.initial_rate = parse_decimal(flag, &next_value(args, &mut i, flag)),
            "--output" => output_path = Some(next_value(args, &mut i, flag)),
            other => fail(format!("unknown option: {}", other)),
        }
        i += 1;
    }

    let rates = generate_rate_history(&config);
    let json = to_json(&RatesFile { rates });

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| fail(format!("writing to '{}': {}", path, e)));
        eprintln!(
            "Generated {} daily {} rates from {} → {}",
            config.days, config.pair, config.start_date, path
        );
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "rate" => cmd_rate(rest),
        "price" => cmd_price(rest),
        "cost" => cmd_cost(rest),
        "margin" => cmd_margin(rest),
        "vat" => cmd_vat(rest),
        "quote" => cmd_quote(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
