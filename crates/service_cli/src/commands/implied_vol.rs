//! Implied volatility command implementation

use clap::Args;
use pricer_models::implied_vol::solve_implied_vol;
use pricer_models::instruments::{ExerciseStyle, VanillaOption};
use serde::Serialize;
use tracing::{debug, info};

use super::ContractArgs;
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Arguments for `optcli iv`
#[derive(Debug, Clone, Args)]
pub struct IvArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Observed option price to invert
    #[arg(long, allow_hyphen_values = true)]
    pub price: f64,
}

/// Implied volatility result
#[derive(Debug, Clone, Serialize)]
pub struct IvReport {
    /// Contract the price refers to
    pub option: VanillaOption,
    /// Target premium
    pub target_price: f64,
    /// Black-Scholes implied volatility
    pub implied_vol: f64,
}

/// Run the iv command
pub fn run(args: &IvArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let report = evaluate(args, config)?;

    match format {
        OutputFormat::Table => println!("Implied vol (BS): {:.6}", report.implied_vol),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

/// Solves for the volatility matching `args.price`.
pub fn evaluate(args: &IvArgs, config: &CliConfig) -> Result<IvReport> {
    // The solver overwrites volatility on its own copies
    let market = args.contract.market(0.0);
    let option = args.contract.option(ExerciseStyle::European);

    info!(target_price = args.price, "Solving implied volatility");
    debug!(?market, ?option, params = ?config.implied_vol, "Solver inputs");

    let implied_vol = solve_implied_vol(&market, &option, args.price, &config.implied_vol)?;
    info!(implied_vol, "Implied volatility found");

    Ok(IvReport {
        option,
        target_price: args.price,
        implied_vol,
    })
}
