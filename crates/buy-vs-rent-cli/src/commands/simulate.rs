use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use buy_vs_rent_core::simulation::{self, SimulationConfig};

use crate::input;
use crate::report;

/// Arguments for the rent vs buy simulation
#[derive(Args)]
pub struct SimulateArgs {
    /// Path to JSON or YAML config file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Starting rent per month
    #[arg(long)]
    pub starting_rent: Option<Decimal>,

    /// Estimated percent rent appreciation per year
    #[arg(long, default_value = "5", allow_hyphen_values = true)]
    pub rent_appreciation: Decimal,

    /// Cost of the flat today
    #[arg(long)]
    pub flat_cost: Option<Decimal>,

    /// Estimated percent increase in the cost of the flat per year
    #[arg(long, default_value = "5", allow_hyphen_values = true)]
    pub flat_cost_appreciation: Decimal,

    /// Initial downpayment when buying the flat
    #[arg(long)]
    pub initial_downpayment: Option<Decimal>,

    /// Interest rate at which the home loan is procured (percent)
    #[arg(long, default_value = "8")]
    pub loan_interest_rate: Decimal,

    /// Years over which the loan is repaid
    #[arg(long)]
    pub loan_tenure: Option<u32>,

    /// Yearly return on invested money, in percent
    #[arg(long, default_value = "12", allow_hyphen_values = true)]
    pub investment_return: Decimal,

    /// Years for which the simulation should run
    #[arg(long, default_value = "30")]
    pub years: u32,
}

fn config_from_flags(args: &SimulateArgs) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    let starting_rent = args
        .starting_rent
        .ok_or("--starting-rent is required (or provide --input)")?;
    let flat_cost = args
        .flat_cost
        .ok_or("--flat-cost is required (or provide --input)")?;
    let initial_downpayment = args
        .initial_downpayment
        .ok_or("--initial-downpayment is required (or provide --input)")?;
    let loan_tenure = args
        .loan_tenure
        .ok_or("--loan-tenure is required (or provide --input)")?;

    Ok(SimulationConfig {
        starting_rent,
        rent_appreciation: args.rent_appreciation,
        flat_cost,
        flat_cost_appreciation: args.flat_cost_appreciation,
        initial_downpayment,
        loan_interest_rate: args.loan_interest_rate,
        loan_tenure,
        investment_return: args.investment_return,
        years: args.years,
    })
}

pub fn run_simulate(args: SimulateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config: SimulationConfig = if let Some(ref path) = args.input {
        input::file::read_config(path)?
    } else if let Some(config) = input::stdin::read_stdin()? {
        config
    } else {
        config_from_flags(&args)?
    };
    tracing::debug!(?config, "configuration loaded");

    let result = simulation::simulate(&config)?;
    report::log_simulation(&result);
    Ok(serde_json::to_value(result)?)
}
