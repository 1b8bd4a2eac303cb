use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use buy_vs_rent_core::loan::{self, LoanInput};

/// Arguments for the loan instalment calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Loan amount
    #[arg(long)]
    pub principal: Decimal,

    /// Annual interest rate in percent
    #[arg(long, default_value = "8")]
    pub rate: Decimal,

    /// Years over which the loan is repaid
    #[arg(long)]
    pub tenure: u32,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input = LoanInput {
        principal: args.principal,
        rate: args.rate,
        tenure: args.tenure,
    };
    let result = loan::summarize_loan(&loan_input)?;

    for warning in &result.warnings {
        tracing::warn!("{warning}");
    }
    tracing::info!("Monthly EMI instalments: {:.2}", result.result.monthly_emi);
    Ok(serde_json::to_value(result)?)
}
