//! Lattice pricing methods.
//!
//! - [`binomial`]: Cox-Ross-Rubinstein recombining tree for European and
//!   American vanilla options
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::Market;
//! use pricer_models::instruments::{OptionType, VanillaOption};
//! use pricer_models::lattice::{binomial, TreeParams};
//!
//! let market = Market::new(100.0, 0.05, 0.0, 0.2);
//! let put = VanillaOption::american(100.0, 1.0, OptionType::Put);
//!
//! let price = binomial::price_american(&market, &put, &TreeParams::new(500)).unwrap();
//! assert!(price > 6.0 && price < 6.2);
//! ```

pub mod binomial;
mod params;

pub use binomial::CrrCoefficients;
pub use params::TreeParams;
