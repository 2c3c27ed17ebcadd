//! # tour-pricing
//!
//! Currency and pricing engine for tour-operator quotations.
//!
//! Given dated exchange-rate records and supplier costs, this crate picks
//! the rate in effect on a date, converts costs into marked-up sell prices
//! and back, and derives profit, margin, VAT and gross amounts. Every money
//! result is a `rust_decimal::Decimal` rounded to cents, ties away from zero.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: currencies, rate records, errors, money rounding
//! - **pricing** — Rate selection, cost/price conversion, margin/profit, VAT, quotation breakdowns
//! - **format** — Locale-aware currency display strings
//! - **simulation** — Synthetic rate histories for benchmarks and tests

pub mod core;
pub mod format;
pub mod pricing;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::currency::{CurrencyCode, CurrencyPair};
    pub use crate::core::error::{InvalidArgument, PricingError};
    pub use crate::core::money::round_money;
    pub use crate::core::rate::ExchangeRateRecord;
    pub use crate::format::format_currency;
    pub use crate::pricing::breakdown::{PriceBreakdown, QuoteInput, QuoteLine, QuoteSummary};
    pub use crate::pricing::conversion::{cost_from_price, price_from_cost};
    pub use crate::pricing::margin::{calculate_margin, calculate_profit};
    pub use crate::pricing::selector::{select_rate_by_date, select_rate_for_pair};
    pub use crate::pricing::tax::{calculate_gross, calculate_vat};
}
