use crate::core::error::{ensure_positive_rate, PricingError};
use crate::core::money::{round_money, try_div, try_mul, try_sub};
use rust_decimal::Decimal;

/// Profit as a percentage of the sell price.
///
/// The cost is converted into the sell currency with `rate` before
/// comparing. A zero or negative sell price has no meaningful margin and
/// yields `0`. Selling below cost gives a negative margin.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tour_pricing::pricing::margin::calculate_margin;
///
/// assert_eq!(calculate_margin(dec!(120), dec!(3000), dec!(30)).unwrap(), dec!(16.67));
/// assert_eq!(calculate_margin(dec!(100), dec!(8000), dec!(30)).unwrap(), dec!(-166.67));
/// ```
pub fn calculate_margin(
    sell_price: Decimal,
    cost_in_base: Decimal,
    rate: Decimal,
) -> Result<Decimal, PricingError> {
    ensure_positive_rate(rate)?;
    if sell_price <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    let cost_in_target = try_div(cost_in_base, rate)?;
    let profit = try_sub(sell_price, cost_in_target)?;
    let margin = try_mul(try_div(profit, sell_price)?, Decimal::ONE_HUNDRED)?;
    Ok(round_money(margin))
}

/// Absolute profit in the sell currency: `sell_price - cost / rate`.
pub fn calculate_profit(
    sell_price: Decimal,
    cost_in_base: Decimal,
    rate: Decimal,
) -> Result<Decimal, PricingError> {
    ensure_positive_rate(rate)?;
    let cost_in_target = try_div(cost_in_base, rate)?;
    Ok(round_money(try_sub(sell_price, cost_in_target)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::InvalidArgument;
    use rust_decimal_macros::dec;

    #[test]
    fn test_margin_negative_when_selling_below_cost() {
        assert_eq!(
            calculate_margin(dec!(100), dec!(8000), dec!(30)).unwrap(),
            dec!(-166.67)
        );
    }

    #[test]
    fn test_margin_positive() {
        // cost in target = 2400 / 30 = 80; (100 - 80) / 100 = 20%
        assert_eq!(
            calculate_margin(dec!(100), dec!(2400), dec!(30)).unwrap(),
            dec!(20)
        );
    }

    #[test]
    fn test_margin_zero_or_negative_price() {
        assert_eq!(
            calculate_margin(dec!(0), dec!(100), dec!(30)).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            calculate_margin(dec!(-5), dec!(100), dec!(30)).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_margin_checks_rate_before_price() {
        assert_eq!(
            calculate_margin(dec!(0), dec!(100), dec!(0)),
            Err(PricingError::InvalidArgument(
                InvalidArgument::NonPositiveRate { value: dec!(0) }
            ))
        );
    }

    #[test]
    fn test_margin_full_when_free() {
        assert_eq!(
            calculate_margin(dec!(50), dec!(0), dec!(30)).unwrap(),
            dec!(100)
        );
    }

    #[test]
    fn test_profit() {
        assert_eq!(
            calculate_profit(dec!(120), dec!(3000), dec!(30)).unwrap(),
            dec!(20)
        );
        // 100 - 266.666... = -166.666...
        assert_eq!(
            calculate_profit(dec!(100), dec!(8000), dec!(30)).unwrap(),
            dec!(-166.67)
        );
    }

    #[test]
    fn test_profit_defined_for_zero_price() {
        assert_eq!(
            calculate_profit(dec!(0), dec!(300), dec!(30)).unwrap(),
            dec!(-10)
        );
    }

    #[test]
    fn test_overflow_is_an_error() {
        let tiny_rate = dec!(0.0000000000000000000001);
        assert_eq!(
            calculate_profit(dec!(1), dec!(1000000000000), tiny_rate),
            Err(PricingError::AmountOutOfRange)
        );
        assert_eq!(
            calculate_margin(dec!(1), dec!(1000000000000), tiny_rate),
            Err(PricingError::AmountOutOfRange)
        );
        // cost/rate fits, but dividing the loss by a tiny price does not
        assert_eq!(
            calculate_margin(dec!(0.0000000000000000000001), dec!(1000000000), dec!(1)),
            Err(PricingError::AmountOutOfRange)
        );
    }

    #[test]
    fn test_profit_rejects_bad_rate() {
        assert!(matches!(
            calculate_profit(dec!(10), dec!(10), dec!(-1)),
            Err(PricingError::InvalidArgument(InvalidArgument::NonPositiveRate { .. }))
        ));
    }
}
