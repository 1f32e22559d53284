//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

use clap::{Args, ValueEnum};
use pricer_core::market_data::Market;
use pricer_models::instruments::{ExerciseStyle, OptionType, VanillaOption};

pub mod implied_vol;
pub mod price;

/// Call or put, as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OptionTypeArg {
    /// Call option
    Call,
    /// Put option
    Put,
}

impl From<OptionTypeArg> for OptionType {
    fn from(arg: OptionTypeArg) -> Self {
        match arg {
            OptionTypeArg::Call => OptionType::Call,
            OptionTypeArg::Put => OptionType::Put,
        }
    }
}

/// Exercise style, as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// European exercise
    Euro,
    /// American exercise
    Amer,
}

impl From<StyleArg> for ExerciseStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Euro => ExerciseStyle::European,
            StyleArg::Amer => ExerciseStyle::American,
        }
    }
}

/// Contract and market flags shared by every command
#[derive(Debug, Clone, Args)]
pub struct ContractArgs {
    /// Option type
    #[arg(long = "type", value_enum)]
    pub option_type: OptionTypeArg,

    /// Spot price of the underlying
    #[arg(long, allow_hyphen_values = true)]
    pub spot: f64,

    /// Strike price
    #[arg(long, allow_hyphen_values = true)]
    pub strike: f64,

    /// Time to maturity in years
    #[arg(long, allow_hyphen_values = true)]
    pub expiry: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, allow_hyphen_values = true)]
    pub rate: f64,

    /// Continuous dividend yield
    #[arg(long, allow_hyphen_values = true)]
    pub div: f64,
}

impl ContractArgs {
    /// Market snapshot at the given volatility.
    pub fn market(&self, volatility: f64) -> Market {
        Market::new(self.spot, self.rate, self.div, volatility)
    }

    /// Option contract with the given exercise style.
    pub fn option(&self, exercise: ExerciseStyle) -> VanillaOption {
        VanillaOption::new(self.strike, self.expiry, self.option_type.into(), exercise)
    }
}

#[cfg(test)]
pub(crate) fn scenario_contract(option_type: OptionTypeArg) -> ContractArgs {
    ContractArgs {
        option_type,
        spot: 100.0,
        strike: 105.0,
        expiry: 1.5,
        rate: 0.03,
        div: 0.01,
    }
}
