//! Display formatting of money amounts for quotation documents and reports.

pub mod locale;

use crate::core::currency::CurrencyCode;
use crate::core::money::round_money;
use crate::pricing::breakdown::QuoteSummary;
use locale::{Locale, SymbolPosition};
use rust_decimal::Decimal;
use std::fmt::Write;

/// Resolve an optional locale identifier, falling back to `en-US`.
pub fn resolve_locale(locale: Option<&str>) -> Locale {
    match locale {
        None => Locale::default(),
        Some(tag) => tag.parse().unwrap_or_else(|e| {
            log::warn!("{}, formatting as {}", e, Locale::default());
            Locale::default()
        }),
    }
}

/// Format `amount` in `currency` with the conventions of `locale`.
///
/// Always two fraction digits, rounded half away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tour_pricing::core::currency::CurrencyCode;
/// use tour_pricing::format::format_currency;
///
/// let eur = CurrencyCode::new("EUR");
/// assert_eq!(format_currency(dec!(1234.5), &eur, None), "€1,234.50");
/// assert_eq!(format_currency(dec!(1234.5), &eur, Some("de-DE")), "1.234,50\u{a0}€");
/// ```
pub fn format_currency(amount: Decimal, currency: &CurrencyCode, locale: Option<&str>) -> String {
    format_with_locale(amount, currency, resolve_locale(locale))
}

/// [`format_currency`] with an already resolved [`Locale`].
pub fn format_with_locale(amount: Decimal, currency: &CurrencyCode, locale: Locale) -> String {
    let conventions = locale.conventions();
    let rounded = round_money(amount);
    let digits = rounded.abs().to_string();
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut number = group_digits(whole, conventions.group_separator);
    number.push_str(conventions.decimal_separator);
    number.push_str(fraction);

    let symbol = currency.symbol().unwrap_or(currency.as_str());
    // Codes used as symbols ("CHF", "TRY") always need a space.
    let spacing = if symbol.chars().all(|c| c.is_ascii_alphabetic()) {
        "\u{a0}"
    } else {
        conventions.symbol_spacing
    };
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    match conventions.symbol_position {
        SymbolPosition::Prefix => format!("{sign}{symbol}{spacing}{number}"),
        SymbolPosition::Suffix => format!("{sign}{number}{spacing}{symbol}"),
    }
}

fn group_digits(whole: &str, separator: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Render a priced quotation as a text report with localized amounts.
pub fn format_summary(summary: &QuoteSummary, locale: Locale) -> String {
    let money = |amount: Decimal| format_with_locale(amount, &summary.target_currency, locale);
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "Quotation {}/{} at {} ({})",
        summary.base_currency, summary.target_currency, summary.rate, locale
    );
    for line in &summary.lines {
        let _ = writeln!(
            out,
            "  {:<28} {:>3} x {:>14}  {:>16}",
            line.description,
            line.quantity,
            money(line.unit_price),
            money(line.net)
        );
    }
    let _ = writeln!(out, "  {:<20} {:>16}", "Net", money(summary.total_net));
    let _ = writeln!(out, "  {:<20} {:>16}", "Cost", money(summary.total_cost_in_target));
    let _ = writeln!(out, "  {:<20} {:>16}", "Profit", money(summary.total_profit));
    let _ = writeln!(out, "  {:<20} {:>15}%", "Margin", summary.margin_pct);
    let _ = writeln!(
        out,
        "  {:<20} {:>16}",
        format!("VAT {}%", summary.vat_rate_pct),
        money(summary.total_vat)
    );
    let _ = writeln!(out, "  {:<20} {:>16}", "Gross", money(summary.total_gross));
    out
}
