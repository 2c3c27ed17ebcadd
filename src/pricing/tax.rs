use crate::core::error::{ensure_non_negative, ensure_non_negative_pct, PricingError};
use crate::core::money::{pct_fraction, round_money, try_add, try_mul};
use rust_decimal::Decimal;

/// VAT due on a net amount.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tour_pricing::pricing::tax::{calculate_gross, calculate_vat};
///
/// assert_eq!(calculate_vat(dec!(100), dec!(20)).unwrap(), dec!(20.00));
/// assert_eq!(calculate_gross(dec!(100), dec!(20)).unwrap(), dec!(120.00));
/// ```
pub fn calculate_vat(net_amount: Decimal, vat_rate_pct: Decimal) -> Result<Decimal, PricingError> {
    ensure_non_negative("net amount", net_amount)?;
    ensure_non_negative_pct("VAT rate", vat_rate_pct)?;
    Ok(round_money(try_mul(net_amount, pct_fraction(vat_rate_pct))?))
}

/// Net amount plus the VAT from [`calculate_vat`].
pub fn calculate_gross(
    net_amount: Decimal,
    vat_rate_pct: Decimal,
) -> Result<Decimal, PricingError> {
    let vat = calculate_vat(net_amount, vat_rate_pct)?;
    Ok(round_money(try_add(net_amount, vat)?))
}
