//! Cost ↔ sell-price conversion with markup.
//!
//! A cost in the supplier's base currency is marked up first and then
//! divided by the exchange rate to give the customer-facing price in the
//! target currency. `cost_from_price` walks the same path backwards.

use crate::core::error::{
    ensure_non_negative, ensure_non_negative_pct, ensure_positive_rate, PricingError,
};
use crate::core::money::{markup_factor, round_money, try_div, try_mul, MINIMUM_UNIT};
use rust_decimal::Decimal;

/// Sell price in the target currency for a cost in the base currency.
///
/// `price = cost * (1 + markup/100) / rate`, rounded to cents. A positive
/// cost never prices to zero: a result that would round to `0.00` is
/// raised to `0.01`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tour_pricing::pricing::conversion::price_from_cost;
///
/// // 3000 TRY hotel night, 20% markup, 30 TRY per EUR
/// assert_eq!(price_from_cost(dec!(3000), dec!(20), dec!(30)).unwrap(), dec!(120.00));
/// assert_eq!(price_from_cost(dec!(0.01), dec!(25), dec!(30)).unwrap(), dec!(0.01));
/// ```
pub fn price_from_cost(
    cost_in_base: Decimal,
    markup_pct: Decimal,
    rate: Decimal,
) -> Result<Decimal, PricingError> {
    ensure_non_negative("cost", cost_in_base)?;
    ensure_non_negative_pct("markup", markup_pct)?;
    ensure_positive_rate(rate)?;

    let cost_with_markup = try_mul(cost_in_base, markup_factor(markup_pct))?;
    let price = round_money(try_div(cost_with_markup, rate)?);

    if price.is_zero() && cost_in_base > Decimal::ZERO {
        log::trace!(
            "price for cost {} rounds to zero at rate {}, using minimum unit",
            cost_in_base,
            rate
        );
        return Ok(MINIMUM_UNIT);
    }
    Ok(price)
}

/// Cost in the base currency that `sell_price` was derived from.
///
/// `cost = price * rate / (1 + markup/100)`, rounded to cents. Inverse of
/// [`price_from_cost`] for the same markup and rate, up to rounding.
pub fn cost_from_price(
    sell_price: Decimal,
    markup_pct: Decimal,
    rate: Decimal,
) -> Result<Decimal, PricingError> {
    ensure_non_negative("sell price", sell_price)?;
    ensure_non_negative_pct("markup", markup_pct)?;
    ensure_positive_rate(rate)?;

    let price_in_base = try_mul(sell_price, rate)?;
    Ok(round_money(try_div(price_in_base, markup_factor(markup_pct))?))
}
