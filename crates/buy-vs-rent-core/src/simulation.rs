use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::BuyVsRentError;
use crate::time_value::{appreciate, emi};
use crate::types::*;
use crate::BuyVsRentResult;

/// Longest horizon a single run accepts.
pub const MAX_YEARS: u32 = 1_000;

const METHODOLOGY: &str = "Rent vs buy net worth simulation: the downpayment is invested when \
                           renting, and the yearly difference between rent and EMI is reinvested \
                           at the end of the year by whichever side paid less";

fn default_rent_appreciation() -> Percent {
    dec!(5)
}

fn default_flat_cost_appreciation() -> Percent {
    dec!(5)
}

fn default_loan_interest_rate() -> Percent {
    dec!(8)
}

fn default_investment_return() -> Percent {
    dec!(12)
}

fn default_years() -> u32 {
    30
}

/// Assumptions for a single rent-vs-buy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Monthly rent at year 0
    pub starting_rent: Money,
    /// Yearly rent increase (percent)
    #[serde(default = "default_rent_appreciation")]
    pub rent_appreciation: Percent,
    /// Property price at year 0
    pub flat_cost: Money,
    /// Yearly property price increase (percent)
    #[serde(default = "default_flat_cost_appreciation")]
    pub flat_cost_appreciation: Percent,
    /// Cash paid upfront when buying; invested instead when renting
    pub initial_downpayment: Money,
    /// Home loan interest rate (percent per year)
    #[serde(default = "default_loan_interest_rate")]
    pub loan_interest_rate: Percent,
    /// Years over which the loan is repaid
    pub loan_tenure: u32,
    /// Return earned on invested cash in both strategies (percent per year)
    #[serde(default = "default_investment_return")]
    pub investment_return: Percent,
    /// Simulation horizon in years
    #[serde(default = "default_years")]
    pub years: u32,
}

impl SimulationConfig {
    /// Reject configurations the simulation cannot run on. Returns the
    /// non-fatal warnings that still apply.
    pub fn validate(&self) -> BuyVsRentResult<Vec<String>> {
        let mut warnings = Vec::new();

        if self.years == 0 {
            return Err(BuyVsRentError::invalid(
                "years",
                "Simulation must run for at least one year",
            ));
        }
        if self.years > MAX_YEARS {
            return Err(BuyVsRentError::invalid(
                "years",
                format!("Simulation cannot run for more than {MAX_YEARS} years"),
            ));
        }
        if self.loan_tenure == 0 {
            return Err(BuyVsRentError::invalid(
                "loan_tenure",
                "Loan tenure must be at least one year",
            ));
        }
        if self.years < self.loan_tenure {
            return Err(BuyVsRentError::invalid(
                "years",
                "Number of simulation years should be greater than or equal to loan tenure",
            ));
        }
        if self.starting_rent <= Decimal::ZERO {
            return Err(BuyVsRentError::invalid(
                "starting_rent",
                "Starting rent must be positive",
            ));
        }
        if self.flat_cost <= Decimal::ZERO {
            return Err(BuyVsRentError::invalid(
                "flat_cost",
                "Flat cost must be positive",
            ));
        }
        if self.initial_downpayment < Decimal::ZERO {
            return Err(BuyVsRentError::invalid(
                "initial_downpayment",
                "Downpayment cannot be negative",
            ));
        }
        if self.loan_interest_rate < Decimal::ZERO {
            return Err(BuyVsRentError::invalid(
                "loan_interest_rate",
                "Loan interest rate cannot be negative",
            ));
        }
        for (field, rate) in [
            ("rent_appreciation", self.rent_appreciation),
            ("flat_cost_appreciation", self.flat_cost_appreciation),
            ("investment_return", self.investment_return),
        ] {
            if rate <= dec!(-100) {
                return Err(BuyVsRentError::invalid(
                    field,
                    "Rate must be greater than -100%",
                ));
            }
        }

        if self.initial_downpayment >= self.flat_cost {
            warnings.push(
                "Downpayment covers the full flat cost; no loan is taken and EMI is 0".into(),
            );
        } else if self.loan_interest_rate.is_zero() {
            warnings.push("Interest-free loan; principal is repaid in equal instalments".into());
        }

        Ok(warnings)
    }

    pub fn loan_principal(&self) -> Money {
        self.flat_cost - self.initial_downpayment
    }
}

/// Which strategy ends with the higher net worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Rent,
    Buy,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Rent => write!(f, "rent"),
            Strategy::Buy => write!(f, "buy"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub strategy: Strategy,
    /// Absolute difference between the two final net worths
    pub savings: Money,
}

/// Snapshot taken at the end of each simulated year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    pub year: u32,
    /// Rent paid over the year
    pub rental_expense: Money,
    /// EMI paid over the year (0 once the loan is repaid)
    pub emi_expense: Money,
    pub current_money_rent: Money,
    /// Invested money when buying, excluding the flat itself
    pub current_money_buy: Money,
    /// Flat price after this year's appreciation
    pub flat_cost: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub loan_principal: Money,
    pub monthly_emi: Money,
    pub rent_net_worth: Money,
    pub buy_net_worth: Money,
    pub recommendation: Recommendation,
    pub years: Vec<YearRecord>,
}

/// Running balances carried from one year to the next.
struct SimulationState {
    monthly_rent: Money,
    flat_cost: Money,
    current_money_rent: Money,
    current_money_buy: Money,
}

impl SimulationState {
    fn new(config: &SimulationConfig) -> Self {
        SimulationState {
            monthly_rent: config.starting_rent,
            flat_cost: config.flat_cost,
            current_money_rent: config.initial_downpayment,
            current_money_buy: Decimal::ZERO,
        }
    }

    fn advance(
        &mut self,
        config: &SimulationConfig,
        year: u32,
        monthly_emi: Money,
    ) -> BuyVsRentResult<YearRecord> {
        let rental_expense = self
            .monthly_rent
            .checked_mul(dec!(12))
            .ok_or_else(|| BuyVsRentError::overflow("yearly rental expense"))?;
        let emi_expense = if year > config.loan_tenure {
            Decimal::ZERO
        } else {
            monthly_emi
                .checked_mul(dec!(12))
                .ok_or_else(|| BuyVsRentError::overflow("yearly EMI expense"))?
        };

        self.current_money_rent = appreciate(self.current_money_rent, config.investment_return, 1)?;
        self.current_money_buy = appreciate(self.current_money_buy, config.investment_return, 1)?;

        // Whoever paid less this year invests the difference
        // Both expenses are non-negative, so the differences cannot overflow
        self.current_money_buy = self
            .current_money_buy
            .checked_add(Decimal::ZERO.max(rental_expense - emi_expense))
            .ok_or_else(|| BuyVsRentError::overflow("money when buying"))?;
        self.current_money_rent = self
            .current_money_rent
            .checked_add(Decimal::ZERO.max(emi_expense - rental_expense))
            .ok_or_else(|| BuyVsRentError::overflow("money when renting"))?;

        self.monthly_rent = appreciate(self.monthly_rent, config.rent_appreciation, 1)?;
        self.flat_cost = appreciate(self.flat_cost, config.flat_cost_appreciation, 1)?;

        Ok(YearRecord {
            year,
            rental_expense,
            emi_expense,
            current_money_rent: self.current_money_rent,
            current_money_buy: self.current_money_buy,
            flat_cost: self.flat_cost,
        })
    }
}

/// Simulate renting against buying year by year and recommend the strategy
/// with the higher final net worth.
pub fn simulate(
    config: &SimulationConfig,
) -> BuyVsRentResult<ComputationOutput<SimulationOutput>> {
    let start = Instant::now();
    let warnings = config.validate()?;

    let loan_principal = config.loan_principal();
    let monthly_emi = emi(loan_principal, config.loan_interest_rate, config.loan_tenure)?;

    let mut state = SimulationState::new(config);
    let mut years = Vec::with_capacity(config.years.min(MAX_YEARS) as usize);
    for year in 1..=config.years {
        years.push(state.advance(config, year, monthly_emi)?);
    }

    let rent_net_worth = state.current_money_rent;
    let buy_net_worth = state
        .current_money_buy
        .checked_add(state.flat_cost)
        .ok_or_else(|| BuyVsRentError::overflow("net worth when buying"))?;
    let strategy = if buy_net_worth > rent_net_worth {
        Strategy::Buy
    } else {
        Strategy::Rent
    };

    let output = SimulationOutput {
        loan_principal,
        monthly_emi,
        rent_net_worth,
        buy_net_worth,
        recommendation: Recommendation {
            strategy,
            savings: (buy_net_worth - rent_net_worth).abs(),
        },
        years,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(METHODOLOGY, config, warnings, elapsed, output))
}
