//! Implied volatility inversion of the Black-Scholes-Merton price.
//!
//! Given a market premium for a European option, [`solve_implied_vol`]
//! finds the volatility at which the analytic price reproduces it. The
//! search brackets the root, expanding the upper bound when needed, and
//! bisects, relying on the price being strictly increasing in volatility.
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::Market;
//! use pricer_models::implied_vol::{solve_implied_vol, ImpliedVolParams};
//! use pricer_models::instruments::{OptionType, VanillaOption};
//!
//! let market = Market::new(100.0, 0.05, 0.0, 0.0);
//! let call = VanillaOption::european(100.0, 1.0, OptionType::Call);
//!
//! let sigma = solve_implied_vol(&market, &call, 10.450583572185565, &ImpliedVolParams::default())
//!     .unwrap();
//! assert!((sigma - 0.2).abs() < 1e-6);
//! ```

mod params;
mod solver;

pub use params::ImpliedVolParams;
pub use solver::{no_arbitrage_bounds, solve_implied_vol};
