use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// A violated precondition on one of the numeric inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("{name} must not be negative, got {value}")]
    NegativeAmount { name: &'static str, value: Decimal },
    #[error("{name} percentage must not be negative, got {value}")]
    NegativePercentage { name: &'static str, value: Decimal },
    #[error("exchange rate must be positive, got {value}")]
    NonPositiveRate { value: Decimal },
    #[error("quote line '{line}' must have a quantity of at least 1")]
    ZeroQuantity { line: String },
    #[error("quotation has no exchange rate and none was supplied")]
    MissingRate,
}

/// Errors raised by the pricing engine.
///
/// Each variant is a distinct failure kind so callers can branch on it
/// (for example widen the rate-date window on `NoApplicableRate`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("no exchange rates available")]
    NoRatesAvailable,
    #[error("no exchange rate dated on or before {target_date}")]
    NoApplicableRate { target_date: NaiveDate },
    #[error("exchange rate dated {rate_date} is not positive: {rate}")]
    InvalidRate { rate: Decimal, rate_date: NaiveDate },
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("amount out of range: result exceeds the representable decimal range")]
    AmountOutOfRange,
}

/// Reject a negative money amount.
pub(crate) fn ensure_non_negative(name: &'static str, value: Decimal) -> Result<(), PricingError> {
    if value < Decimal::ZERO {
        return Err(InvalidArgument::NegativeAmount { name, value }.into());
    }
    Ok(())
}

/// Reject a negative percentage.
pub(crate) fn ensure_non_negative_pct(
    name: &'static str,
    value: Decimal,
) -> Result<(), PricingError> {
    if value < Decimal::ZERO {
        return Err(InvalidArgument::NegativePercentage { name, value }.into());
    }
    Ok(())
}

/// Reject a zero or negative exchange rate used as a divisor.
pub(crate) fn ensure_positive_rate(value: Decimal) -> Result<(), PricingError> {
    if value <= Decimal::ZERO {
        return Err(InvalidArgument::NonPositiveRate { value }.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_is_accepted() {
        assert!(ensure_non_negative("cost", dec!(0)).is_ok());
        assert!(ensure_non_negative_pct("markup", dec!(0)).is_ok());
    }

    #[test]
    fn test_negative_amount_reports_name() {
        let err = ensure_non_negative("cost", dec!(-1)).unwrap_err();
        assert_eq!(
            err,
            PricingError::InvalidArgument(InvalidArgument::NegativeAmount {
                name: "cost",
                value: dec!(-1),
            })
        );
        assert_eq!(
            err.to_string(),
            "invalid argument: cost must not be negative, got -1"
        );
    }

    #[test]
    fn test_rate_checks() {
        assert!(ensure_positive_rate(dec!(0.0001)).is_ok());
        assert!(matches!(
            ensure_positive_rate(dec!(0)),
            Err(PricingError::InvalidArgument(InvalidArgument::NonPositiveRate { .. }))
        ));
    }
}
