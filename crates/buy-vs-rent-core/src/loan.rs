use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::BuyVsRentError;
use crate::time_value::{emi, tenure_months};
use crate::types::*;
use crate::BuyVsRentResult;

/// A fixed-rate home loan repaid in equal monthly instalments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    /// Annual interest rate (percent)
    pub rate: Percent,
    /// Repayment period in years
    pub tenure: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanOutput {
    pub monthly_emi: Money,
    pub tenure_months: u32,
    pub total_paid: Money,
    pub total_interest: Money,
}

/// Instalment and lifetime cost of a loan.
pub fn summarize_loan(input: &LoanInput) -> BuyVsRentResult<ComputationOutput<LoanOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let monthly_emi = emi(input.principal, input.rate, input.tenure)?;
    if input.principal <= Decimal::ZERO {
        warnings.push("Principal is not positive; no loan is required".into());
    } else if input.rate.is_zero() {
        warnings.push("Interest-free loan; principal is repaid in equal instalments".into());
    }

    let tenure_months = tenure_months(input.tenure)?;
    let total_paid = monthly_emi
        .checked_mul(Decimal::from(tenure_months))
        .ok_or_else(|| BuyVsRentError::overflow("total loan repayment"))?;
    let total_interest = total_paid - input.principal.max(Decimal::ZERO);

    let output = LoanOutput {
        monthly_emi,
        tenure_months,
        total_paid,
        total_interest,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Equated monthly instalment: P * r(1+r)^n / ((1+r)^n - 1)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_loan_totals() {
        let input = LoanInput {
            principal: dec!(4000000),
            rate: dec!(8),
            tenure: 20,
        };
        let result = summarize_loan(&input).unwrap();
        let out = &result.result;

        assert_eq!(out.tenure_months, 240);
        assert_eq!(out.total_paid, out.monthly_emi * dec!(240));
        // 240 * 33,457.60 - 40L
        assert!((out.total_interest - dec!(4029824.66)).abs() < dec!(1));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_interest_free_loan_has_no_interest() {
        let input = LoanInput {
            principal: dec!(120000),
            rate: Decimal::ZERO,
            tenure: 10,
        };
        let result = summarize_loan(&input).unwrap();
        assert_eq!(result.result.monthly_emi, dec!(1000));
        assert_eq!(result.result.total_interest, Decimal::ZERO);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_tenure_too_long_for_months_rejected() {
        let input = LoanInput {
            principal: Decimal::ZERO,
            rate: dec!(8),
            tenure: 400_000_000,
        };
        let err = summarize_loan(&input).unwrap_err();
        assert!(matches!(err, BuyVsRentError::InvalidInput { ref field, .. } if field == "loan_tenure"));
    }

    #[test]
    fn test_no_principal_costs_nothing() {
        let input = LoanInput {
            principal: dec!(-5000),
            rate: dec!(8),
            tenure: 5,
        };
        let result = summarize_loan(&input).unwrap();
        assert_eq!(result.result.total_paid, Decimal::ZERO);
        assert_eq!(result.result.total_interest, Decimal::ZERO);
    }
}
