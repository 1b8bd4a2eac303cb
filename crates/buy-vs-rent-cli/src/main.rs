mod commands;
mod input;
mod logging;
mod output;
mod report;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::emi::EmiArgs;
use commands::simulate::SimulateArgs;
use logging::LogLevel;

/// Rent or buy? Compare the long-term net worth of both strategies
#[derive(Parser)]
#[command(
    name = "bvr",
    version,
    about = "Compare the long-term net worth of renting against buying a home",
    long_about = "Simulates, year by year, renting a home while investing the downpayment \
                  against buying it with a home loan, and recommends the strategy that ends \
                  with the higher net worth. All amounts use decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Diagnostic log level (written to stderr)
    #[arg(long, value_enum, default_value = "info", ignore_case = true, global = true)]
    log_level: LogLevel,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate renting vs buying and recommend a strategy
    Simulate(SimulateArgs),
    /// Calculate the monthly instalment and lifetime cost of a home loan
    Emi(EmiArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Simulate(args) => commands::simulate::run_simulate(args),
        Commands::Emi(args) => commands::emi::run_emi(args),
        Commands::Version => {
            println!("bvr {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
