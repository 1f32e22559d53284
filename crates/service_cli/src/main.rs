//! optcli - Command Line Pricing for Vanilla Equity Options
//!
//! # Commands
//!
//! - `optcli price` - Analytic and CRR lattice prices, optional Greeks
//! - `optcli iv` - Black-Scholes implied volatility from an observed price
//!
//! # Examples
//!
//! ```text
//! optcli price --style euro --type call --spot 100 --strike 105 --expiry 1.5 \
//!     --rate 0.03 --div 0.01 --vol 0.25 --steps 2000 --greeks
//! optcli price --style amer --type put --spot 100 --strike 105 --expiry 1.0 \
//!     --rate 0.05 --div 0.02 --vol 0.20
//! optcli iv --type call --spot 100 --strike 105 --expiry 1.5 \
//!     --rate 0.03 --div 0.01 --price 12.34
//! ```
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate parses arguments, loads
//! configuration and formats results; all numerics live in `pricer_models`.
//! Errors are reported as `[error] <message>` on stderr with exit code 1.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use commands::implied_vol::IvArgs;
use commands::price::PriceArgs;
use config::{CliConfig, OutputFormat};
pub use error::{CliError, Result};

/// Vanilla option pricing CLI
#[derive(Parser)]
#[command(name = "optcli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "optcli.toml")]
    config: PathBuf,

    /// Output format (overrides the configured format)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a vanilla option (European: analytic + tree, American: tree)
    Price(PriceArgs),

    /// Solve Black-Scholes implied volatility (European only)
    Iv(IvArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[error] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::resolve(&cli.config)?;
    init_tracing(if cli.verbose { "debug" } else { config.log_level.as_str() });

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(path = %cli.config.display(), ?config, "Configuration loaded");

    let format = cli.format.unwrap_or(config.format);
    match &cli.command {
        Commands::Price(args) => commands::price::run(args, &config, format),
        Commands::Iv(args) => commands::implied_vol::run(args, &config, format),
    }
}

/// Logs go to stderr so stdout stays parseable; `RUST_LOG` wins over `level`.
fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
