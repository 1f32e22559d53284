//! Price command implementation
//!
//! European options get the analytic price alongside the CRR tree price;
//! American options are priced on the tree only.

use std::fmt;
use std::time::Instant;

use clap::Args;
use pricer_core::market_data::Market;
use pricer_models::analytical::{black_scholes, Greeks};
use pricer_models::instruments::{ExerciseStyle, VanillaOption};
use pricer_models::lattice::{binomial, TreeParams};
use serde::Serialize;
use tracing::{debug, info};

use super::{ContractArgs, StyleArg};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Arguments for `optcli price`
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    /// Exercise style
    #[arg(long, value_enum)]
    pub style: StyleArg,

    #[command(flatten)]
    pub contract: ContractArgs,

    /// Volatility of the underlying
    #[arg(long, allow_hyphen_values = true)]
    pub vol: f64,

    /// Lattice steps (defaults to the configured value)
    #[arg(long)]
    pub steps: Option<usize>,

    /// Also print analytic Greeks (European only)
    #[arg(long)]
    pub greeks: bool,
}

/// Pricing results for one contract
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    /// Market inputs
    pub market: Market,
    /// Contract priced
    pub option: VanillaOption,
    /// Analytic Black-Scholes price (European only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bs_price: Option<f64>,
    /// CRR lattice price
    pub tree_price: f64,
    /// Lattice steps used
    pub steps: usize,
    /// Analytic Greeks, when requested for a European option
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeks: Option<Greeks>,
    /// Informational note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let report = evaluate(args, config)?;

    match format {
        OutputFormat::Table => print!("{}", render_table(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

/// Prices the contract described by `args`.
pub fn evaluate(args: &PriceArgs, config: &CliConfig) -> Result<PriceReport> {
    let market = args.contract.market(args.vol);
    let option = args.contract.option(args.style.into());
    let params = TreeParams::new(args.steps.unwrap_or(config.steps));

    info!(
        style = %option.exercise,
        option_type = %option.option_type,
        steps = params.steps,
        "Starting pricing"
    );
    debug!(?market, ?option, "Pricing inputs");

    let started = Instant::now();
    let report = match option.exercise {
        ExerciseStyle::European => {
            let bs_price = black_scholes::price(&market, &option)?;
            let tree_price = binomial::price_european(&market, &option, &params)?;
            let greeks = if args.greeks {
                Some(black_scholes::greeks(&market, &option)?)
            } else {
                None
            };
            PriceReport {
                market,
                option,
                bs_price: Some(bs_price),
                tree_price,
                steps: params.steps,
                greeks,
                note: None,
            }
        }
        ExerciseStyle::American => {
            let tree_price = binomial::price_american(&market, &option, &params)?;
            let note = args
                .greeks
                .then(|| "Greeks via BS are for European options only.".to_string());
            PriceReport {
                market,
                option,
                bs_price: None,
                tree_price,
                steps: params.steps,
                greeks: None,
                note,
            }
        }
    };

    info!(elapsed_ms = started.elapsed().as_secs_f64() * 1e3, "Pricing complete");
    Ok(report)
}

/// Human-readable report, six decimals per number.
pub fn render_table(report: &PriceReport) -> String {
    report.to_string()
}

impl fmt::Display for PriceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.option.exercise, self.option.option_type)?;

        if let Some(bs_price) = self.bs_price {
            writeln!(f, "BS price:   {:.6}", bs_price)?;
        }
        writeln!(f, "Tree price: {:.6} (N={})", self.tree_price, self.steps)?;

        if let Some(g) = &self.greeks {
            writeln!(f, "\nGreeks (BS, per unit):")?;
            writeln!(f, "Delta: {:.6}", g.delta)?;
            writeln!(f, "Gamma: {:.6}", g.gamma)?;
            writeln!(f, "Vega:  {:.6}", g.vega)?;
            writeln!(f, "Theta: {:.6} (calendar theta, per year)", g.theta)?;
            writeln!(f, "Rho:   {:.6}", g.rho)?;
        }

        if let Some(note) = &self.note {
            writeln!(f, "\nNote: {}", note)?;
        }
        Ok(())
    }
}
