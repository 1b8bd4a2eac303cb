use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::BuyVsRentError;
use crate::types::{Money, Percent};
use crate::BuyVsRentResult;

const MONTHS_PER_YEAR: u32 = 12;

/// Convert a percentage to a growth factor: 5 -> 1.05.
fn growth_factor(rate: Percent) -> Decimal {
    Decimal::ONE + rate / dec!(100)
}

/// Number of monthly payments in `tenure` years.
pub fn tenure_months(tenure: u32) -> BuyVsRentResult<u32> {
    tenure.checked_mul(MONTHS_PER_YEAR).ok_or_else(|| {
        BuyVsRentError::invalid("loan_tenure", "Loan tenure is too long to count in months")
    })
}

fn compound(base: Decimal, periods: u32, context: &str) -> BuyVsRentResult<Decimal> {
    base.checked_powu(u64::from(periods))
        .ok_or_else(|| BuyVsRentError::overflow(context))
}

/// Equated monthly installment for a loan of `principal` at an annual
/// `rate` (percent) repaid over `tenure` years.
///
/// `P * r(1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate and `n` the
/// number of monthly payments. An interest-free loan amortises straight-line
/// (`P / n`). A non-positive principal needs no loan, so the installment is 0.
pub fn emi(principal: Money, rate: Percent, tenure: u32) -> BuyVsRentResult<Money> {
    if principal <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    if rate < Decimal::ZERO {
        return Err(BuyVsRentError::invalid(
            "loan_interest_rate",
            "Loan interest rate cannot be negative",
        ));
    }
    if tenure == 0 {
        return Err(BuyVsRentError::invalid(
            "loan_tenure",
            "Loan tenure must be at least one year",
        ));
    }

    let total_months = tenure_months(tenure)?;
    // Rates below Decimal's resolution round to zero here
    let monthly_rate = rate / dec!(1200);
    if monthly_rate.is_zero() {
        return Ok(principal / Decimal::from(total_months));
    }

    let factor = compound(Decimal::ONE + monthly_rate, total_months, "EMI compounding factor")?;

    let numerator = principal
        .checked_mul(monthly_rate)
        .and_then(|v| v.checked_mul(factor))
        .ok_or_else(|| BuyVsRentError::overflow("EMI numerator"))?;
    let denominator = factor - Decimal::ONE;

    if denominator.is_zero() {
        return Err(BuyVsRentError::DivisionByZero {
            context: "EMI denominator".into(),
        });
    }

    Ok(numerator / denominator)
}

/// Compound `value` at an annual `rate` (percent) over `period` years.
pub fn appreciate(value: Money, rate: Percent, period: u32) -> BuyVsRentResult<Money> {
    let factor = compound(growth_factor(rate), period, "appreciation factor")?;
    value
        .checked_mul(factor)
        .ok_or_else(|| BuyVsRentError::overflow("appreciated value"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_emi_home_loan() {
        // 40L at 8% over 20 years => ~33,457.60 per month
        let result = emi(dec!(4000000), dec!(8), 20).unwrap();
        assert!((result - dec!(33457.60)).abs() < dec!(0.01), "got {result}");
    }

    #[test]
    fn test_emi_zero_rate_is_straight_line() {
        let result = emi(dec!(4000000), dec!(0), 20).unwrap();
        assert_eq!(result, dec!(4000000) / dec!(240));
    }

    #[test]
    fn test_emi_no_principal() {
        assert_eq!(emi(dec!(0), dec!(8), 20).unwrap(), Decimal::ZERO);
        assert_eq!(emi(dec!(-250000), dec!(8), 20).unwrap(), Decimal::ZERO);
        // tenure is irrelevant when nothing is borrowed
        assert_eq!(emi(dec!(0), dec!(8), 0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_emi_rejects_negative_rate() {
        let err = emi(dec!(100000), dec!(-1), 10).unwrap_err();
        assert!(matches!(err, BuyVsRentError::InvalidInput { ref field, .. } if field == "loan_interest_rate"));
    }

    #[test]
    fn test_emi_rejects_zero_tenure() {
        let err = emi(dec!(100000), dec!(8), 0).unwrap_err();
        assert!(matches!(err, BuyVsRentError::InvalidInput { ref field, .. } if field == "loan_tenure"));
    }

    #[test]
    fn test_emi_rate_below_resolution_is_straight_line() {
        let result = emi(dec!(1200), Decimal::new(1, 28), 10).unwrap();
        assert_eq!(result, dec!(10));
    }

    #[test]
    fn test_emi_tenure_too_long_for_months() {
        let err = emi(dec!(100000), dec!(8), 400_000_000).unwrap_err();
        assert!(matches!(err, BuyVsRentError::InvalidInput { ref field, .. } if field == "loan_tenure"));
    }

    #[test]
    fn test_tenure_months() {
        assert_eq!(tenure_months(20).unwrap(), 240);
        assert!(tenure_months(u32::MAX / 12 + 1).is_err());
    }

    #[test]
    fn test_appreciate_one_period() {
        assert_eq!(appreciate(dec!(20000), dec!(5), 1).unwrap(), dec!(21000));
    }

    #[test]
    fn test_appreciate_zero_period_is_identity() {
        assert_eq!(appreciate(dec!(123.45), dec!(12), 0).unwrap(), dec!(123.45));
    }

    #[test]
    fn test_appreciate_negative_rate_depreciates() {
        assert_eq!(appreciate(dec!(1000), dec!(-10), 2).unwrap(), dec!(810));
    }

    #[test]
    fn test_appreciate_overflow_is_reported() {
        let err = appreciate(Decimal::MAX, dec!(100), 1).unwrap_err();
        assert!(matches!(err, BuyVsRentError::Overflow { .. }));
    }
}
