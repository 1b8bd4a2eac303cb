use buy_vs_rent_core::simulation::SimulationOutput;
use buy_vs_rent_core::ComputationOutput;

/// Trace a finished simulation: the headline numbers at info, every
/// simulated year at debug.
pub fn log_simulation(output: &ComputationOutput<SimulationOutput>) {
    tracing::info!("{}", output.methodology);
    for warning in &output.warnings {
        tracing::warn!("{warning}");
    }

    let result = &output.result;
    tracing::info!("Monthly EMI instalments: {:.2}", result.monthly_emi);

    for record in &result.years {
        tracing::debug!(
            year = record.year,
            rent_paid = %record.rental_expense.round_dp(2),
            emi_paid = %record.emi_expense.round_dp(2),
            money_when_renting = %record.current_money_rent.round_dp(2),
            money_when_buying_excl_flat = %record.current_money_buy.round_dp(2),
            flat_cost = %record.flat_cost.round_dp(2),
            "year {} closed",
            record.year
        );
    }

    tracing::debug!("summary after {} years", result.years.len());
    tracing::info!("Net worth when renting: {:.2}", result.rent_net_worth);
    tracing::info!("Net worth when buying: {:.2}", result.buy_net_worth);
    tracing::info!(
        "Recommended to {} flat. Savings: {:.2}",
        result.recommendation.strategy,
        result.recommendation.savings
    );
}
