use crate::core::currency::{CurrencyCode, CurrencyPair};
use crate::core::error::{ensure_positive_rate, InvalidArgument, PricingError};
use crate::core::money::{round_money, try_div, try_mul, try_sum};
use crate::core::rate::ExchangeRateRecord;
use crate::pricing::conversion::price_from_cost;
use crate::pricing::margin::{calculate_margin, calculate_profit};
use crate::pricing::selector::{select_rate_by_date, select_rate_for_pair};
use crate::pricing::tax::{calculate_gross, calculate_vat};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_quantity() -> u32 {
    1
}

/// One priced service on a quotation: a hotel night, a transfer, a guide day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub description: String,
    /// Supplier cost per unit, in the quotation's base currency.
    pub cost_in_base: Decimal,
    #[serde(default)]
    pub markup_pct: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl QuoteLine {
    pub fn new(description: impl Into<String>, cost_in_base: Decimal, markup_pct: Decimal) -> Self {
        Self {
            description: description.into(),
            cost_in_base,
            markup_pct,
            quantity: 1,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// A manual quotation as submitted for pricing.
///
/// `rate` is optional so a quotation can instead take its rate from a rate
/// history with [`QuoteInput::resolve_rate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteInput {
    pub base_currency: CurrencyCode,
    pub target_currency: CurrencyCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    #[serde(default)]
    pub vat_rate_pct: Decimal,
    #[serde(default)]
    pub lines: Vec<QuoteLine>,
}

impl QuoteInput {
    pub fn pair(&self) -> CurrencyPair {
        CurrencyPair::new(self.base_currency.clone(), self.target_currency.clone())
    }

    /// The rate in effect on `date` for this quotation's currencies.
    ///
    /// If any record is tagged with a currency pair only records for
    /// `base/target` are considered; an untagged history is taken as
    /// already being for this pair.
    pub fn resolve_rate(
        &self,
        rates: &[ExchangeRateRecord],
        date: NaiveDate,
    ) -> Result<Decimal, PricingError> {
        if rates.iter().any(|r| r.pair().is_some()) {
            select_rate_for_pair(rates, &self.pair(), date)
        } else {
            select_rate_by_date(rates, date)
        }
    }
}

/// Pricing of a single quotation line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub description: String,
    pub quantity: u32,
    /// Sell price per unit in the target currency.
    pub unit_price: Decimal,
    /// `unit_price * quantity`.
    pub net: Decimal,
    /// Total supplier cost, base currency.
    pub cost_in_base: Decimal,
    /// Total supplier cost converted to the target currency.
    pub cost_in_target: Decimal,
    pub profit: Decimal,
    pub margin_pct: Decimal,
    pub vat: Decimal,
    pub gross: Decimal,
}

impl PriceBreakdown {
    /// Price one line at `rate` and `vat_rate_pct`.
    ///
    /// The unit price is rounded before it is multiplied by the quantity,
    /// so the line net is always what the customer sees per unit times the
    /// number of units.
    pub fn compute(
        line: &QuoteLine,
        rate: Decimal,
        vat_rate_pct: Decimal,
    ) -> Result<Self, PricingError> {
        if line.quantity == 0 {
            return Err(InvalidArgument::ZeroQuantity {
                line: line.description.clone(),
            }
            .into());
        }

        let unit_price = price_from_cost(line.cost_in_base, line.markup_pct, rate)?;
        let quantity = Decimal::from(line.quantity);
        let net = round_money(try_mul(unit_price, quantity)?);
        let cost_in_base = try_mul(line.cost_in_base, quantity)?;

        Ok(Self {
            description: line.description.clone(),
            quantity: line.quantity,
            unit_price,
            net,
            cost_in_base,
            cost_in_target: round_money(try_div(cost_in_base, rate)?),
            profit: calculate_profit(net, cost_in_base, rate)?,
            margin_pct: calculate_margin(net, cost_in_base, rate)?,
            vat: calculate_vat(net, vat_rate_pct)?,
            gross: calculate_gross(net, vat_rate_pct)?,
        })
    }
}

/// Priced quotation: every line plus the totals a quotation document shows.
///
/// Net, VAT and gross totals are sums of the line values. Profit and
/// margin are recomputed from the total net and total cost so the margin
/// is weighted by line value rather than averaged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub base_currency: CurrencyCode,
    pub target_currency: CurrencyCode,
    pub rate: Decimal,
    pub vat_rate_pct: Decimal,
    pub lines: Vec<PriceBreakdown>,
    pub total_net: Decimal,
    pub total_cost_in_base: Decimal,
    pub total_cost_in_target: Decimal,
    pub total_profit: Decimal,
    pub margin_pct: Decimal,
    pub total_vat: Decimal,
    pub total_gross: Decimal,
}

impl QuoteSummary {
    /// Price every line of `input` at `rate`.
    ///
    /// An empty quotation is valid and prices to zero.
    pub fn compute(input: &QuoteInput, rate: Decimal) -> Result<Self, PricingError> {
        ensure_positive_rate(rate)?;

        let lines = input
            .lines
            .iter()
            .map(|line| PriceBreakdown::compute(line, rate, input.vat_rate_pct))
            .collect::<Result<Vec<_>, _>>()?;

        let total_net = try_sum(lines.iter().map(|l| l.net))?;
        let total_cost_in_base = try_sum(lines.iter().map(|l| l.cost_in_base))?;
        let total_vat = try_sum(lines.iter().map(|l| l.vat))?;
        let total_gross = try_sum(lines.iter().map(|l| l.gross))?;

        log::debug!(
            "priced {} lines at {} {}: net {}, gross {}",
            lines.len(),
            rate,
            input.pair(),
            total_net,
            total_gross
        );

        Ok(Self {
            base_currency: input.base_currency.clone(),
            target_currency: input.target_currency.clone(),
            rate,
            vat_rate_pct: input.vat_rate_pct,
            total_cost_in_target: round_money(try_div(total_cost_in_base, rate)?),
            total_profit: calculate_profit(total_net, total_cost_in_base, rate)?,
            margin_pct: calculate_margin(total_net, total_cost_in_base, rate)?,
            lines,
            total_net,
            total_cost_in_base,
            total_vat,
            total_gross,
        })
    }

    /// Price `input` at its own `rate`, falling back to `fallback_rate`.
    ///
    /// With neither rate set the result is `InvalidArgument::MissingRate`.
    pub fn from_input(input: &QuoteInput, fallback_rate: Option<Decimal>) -> Result<Self, PricingError> {
        let rate = input
            .rate
            .or(fallback_rate)
            .ok_or(InvalidArgument::MissingRate)?;
        Self::compute(input, rate)
    }
}

impl std::fmt::Display for QuoteSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Quotation ({}/{} @ {}) ===", self.base_currency, self.target_currency, self.rate)?;
        for line in &self.lines {
            writeln!(
                f,
                "  {:<28} {:>3} x {:>10} = {:>12} {}",
                line.description, line.quantity, line.unit_price, line.net, self.target_currency
            )?;
        }
        writeln!(f, "Net:      {} {}", self.total_net, self.target_currency)?;
        writeln!(f, "Cost:     {} {}", self.total_cost_in_target, self.target_currency)?;
        writeln!(f, "Profit:   {} {}", self.total_profit, self.target_currency)?;
        writeln!(f, "Margin:   {}%", self.margin_pct)?;
        writeln!(f, "VAT {}%: {} {}", self.vat_rate_pct, self.total_vat, self.target_currency)?;
        writeln!(f, "Gross:    {} {}", self.total_gross, self.target_currency)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_input() -> QuoteInput {
        QuoteInput {
            base_currency: CurrencyCode::new("TRY"),
            target_currency: CurrencyCode::new("EUR"),
            rate: Some(dec!(30)),
            vat_rate_pct: dec!(20),
            lines: vec![
                QuoteLine::new("Hotel night", dec!(3000), dec!(20)).with_quantity(3),
                QuoteLine::new("Airport transfer", dec!(1500), dec!(10)),
            ],
        }
    }

    #[test]
    fn test_line_breakdown() {
        let line = QuoteLine::new("Hotel night", dec!(3000), dec!(20)).with_quantity(3);
        let b = PriceBreakdown::compute(&line, dec!(30), dec!(20)).unwrap();
        assert_eq!(b.unit_price, dec!(120));
        assert_eq!(b.net, dec!(360));
        assert_eq!(b.cost_in_base, dec!(9000));
        assert_eq!(b.cost_in_target, dec!(300));
        assert_eq!(b.profit, dec!(60));
        assert_eq!(b.margin_pct, dec!(16.67));
        assert_eq!(b.vat, dec!(72));
        assert_eq!(b.gross, dec!(432));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let line = QuoteLine::new("Guide", dec!(100), dec!(10)).with_quantity(0);
        assert_eq!(
            PriceBreakdown::compute(&line, dec!(30), dec!(20)),
            Err(PricingError::InvalidArgument(InvalidArgument::ZeroQuantity {
                line: "Guide".to_string()
            }))
        );
    }

    #[test]
    fn test_summary_totals() {
        let summary = QuoteSummary::from_input(&sample_input(), None).unwrap();
        // transfer: 1650 / 30 = 55
        assert_eq!(summary.lines[1].net, dec!(55));
        assert_eq!(summary.total_net, dec!(415));
        assert_eq!(summary.total_cost_in_base, dec!(10500));
        assert_eq!(summary.total_cost_in_target, dec!(350));
        assert_eq!(summary.total_profit, dec!(65));
        // 65 / 415 = 15.66%
        assert_eq!(summary.margin_pct, dec!(15.66));
        assert_eq!(summary.total_vat, dec!(83));
        assert_eq!(summary.total_gross, dec!(498));
    }

    #[test]
    fn test_empty_quote_prices_to_zero() {
        let mut input = sample_input();
        input.lines.clear();
        let summary = QuoteSummary::from_input(&input, None).unwrap();
        assert_eq!(summary.total_net, Decimal::ZERO);
        assert_eq!(summary.total_gross, Decimal::ZERO);
        assert_eq!(summary.margin_pct, Decimal::ZERO);
    }

    #[test]
    fn test_missing_rate() {
        let mut input = sample_input();
        input.rate = None;
        assert_eq!(
            QuoteSummary::from_input(&input, None),
            Err(PricingError::InvalidArgument(InvalidArgument::MissingRate))
        );
        let summary = QuoteSummary::from_input(&input, Some(dec!(30))).unwrap();
        assert_eq!(summary.rate, dec!(30));
    }

    #[test]
    fn test_line_overflow_is_an_error() {
        let line = QuoteLine::new("Charter yacht", Decimal::MAX, dec!(0)).with_quantity(2);
        assert_eq!(
            PriceBreakdown::compute(&line, dec!(1), dec!(0)),
            Err(PricingError::AmountOutOfRange)
        );
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        // each line fits on its own, the totals do not
        let big = dec!(50000000000000000000000000000);
        let mut input = sample_input();
        input.rate = Some(dec!(1));
        input.vat_rate_pct = Decimal::ZERO;
        input.lines = vec![
            QuoteLine::new("Villa season A", big, dec!(0)),
            QuoteLine::new("Villa season B", big, dec!(0)),
        ];
        assert_eq!(
            QuoteSummary::from_input(&input, None),
            Err(PricingError::AmountOutOfRange)
        );
    }

    #[test]
    fn test_resolve_rate_from_history() {
        let input = sample_input();
        let d = |day| NaiveDate::from_ymd_opt(2024, 5, day).unwrap();

        let untagged = vec![
            ExchangeRateRecord::new(d(1), dec!(34.5)),
            ExchangeRateRecord::new(d(10), dec!(35)),
        ];
        assert_eq!(input.resolve_rate(&untagged, d(9)).unwrap(), dec!(34.5));

        let tagged = vec![
            ExchangeRateRecord::new(d(1), dec!(34.5)).with_pair(input.pair()),
            ExchangeRateRecord::new(d(2), dec!(32)).with_pair("TRY/USD".parse().unwrap()),
        ];
        assert_eq!(input.resolve_rate(&tagged, d(9)).unwrap(), dec!(34.5));
    }

    #[test]
    fn test_summary_json_uses_string_amounts() {
        let summary = QuoteSummary::from_input(&sample_input(), None).unwrap();
        let json: serde_json::Value = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total_gross"], "498.00");
        assert_eq!(json["target_currency"], "EUR");
        assert_eq!(json["lines"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_quote_input_from_json_defaults() {
        let json = r#"{
            "base_currency": "TRY",
            "target_currency": "EUR",
            "lines": [{ "description": "Boat tour", "cost_in_base": "900" }]
        }"#;
        let input: QuoteInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.rate, None);
        assert_eq!(input.vat_rate_pct, Decimal::ZERO);
        assert_eq!(input.lines[0].quantity, 1);
        assert_eq!(input.lines[0].markup_pct, Decimal::ZERO);
    }
}
