//! Money rounding helpers shared by every pricing operation.

use crate::core::error::PricingError;
use rust_decimal::prelude::*;

/// Number of fraction digits every money result carries.
pub const MONEY_SCALE: u32 = 2;

/// The smallest representable money amount (one cent).
pub const MINIMUM_UNIT: Decimal = Decimal::from_parts(1, 0, 0, false, MONEY_SCALE);

/// Round to cents, ties away from zero.
///
/// This is the final step of every money-valued operation; intermediate
/// values keep full `Decimal` precision. The result always carries exactly
/// two fraction digits, so `120` comes back as `120.00`.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use tour_pricing::core::money::round_money;
///
/// assert_eq!(round_money(dec!(2.345)), dec!(2.35));
/// assert_eq!(round_money(dec!(-2.345)), dec!(-2.35));
/// assert_eq!(round_money(dec!(1.234)), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// `pct` on the 0–100 scale as a fraction, e.g. `20` -> `0.20`.
pub(crate) fn pct_fraction(pct: Decimal) -> Decimal {
    pct / Decimal::ONE_HUNDRED
}

/// `1 + pct/100`, the multiplier a markup applies to a cost.
pub(crate) fn markup_factor(markup_pct: Decimal) -> Decimal {
    Decimal::ONE + pct_fraction(markup_pct)
}

// Checked arithmetic: overflow becomes `AmountOutOfRange` instead of a panic.

pub(crate) fn try_add(a: Decimal, b: Decimal) -> Result<Decimal, PricingError> {
    a.checked_add(b).ok_or(PricingError::AmountOutOfRange)
}

pub(crate) fn try_sub(a: Decimal, b: Decimal) -> Result<Decimal, PricingError> {
    a.checked_sub(b).ok_or(PricingError::AmountOutOfRange)
}

pub(crate) fn try_mul(a: Decimal, b: Decimal) -> Result<Decimal, PricingError> {
    a.checked_mul(b).ok_or(PricingError::AmountOutOfRange)
}

pub(crate) fn try_div(a: Decimal, b: Decimal) -> Result<Decimal, PricingError> {
    a.checked_div(b).ok_or(PricingError::AmountOutOfRange)
}

/// Sum of `amounts`, failing on the first overflow.
pub(crate) fn try_sum(amounts: impl IntoIterator<Item = Decimal>) -> Result<Decimal, PricingError> {
    amounts.into_iter().try_fold(Decimal::ZERO, try_add)
}
