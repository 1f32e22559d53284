//! # Pricer Models (L2: Business Logic)
//!
//! Vanilla option contracts and the three pricing engines built on them.
//!
//! This crate provides:
//! - Contract definitions (`VanillaOption`, `OptionType`, `ExerciseStyle`)
//! - Closed-form Black-Scholes-Merton price and Greeks (`analytical`)
//! - Cox-Ross-Rubinstein binomial lattice with early exercise (`lattice`)
//! - Bisection implied-volatility inversion of the analytic price (`implied_vol`)
//!
//! ## Design Principles
//!
//! - **Free functions over plain value types**: engines are stateless and
//!   take `&Market` / `&VanillaOption` by reference
//! - **Validate first**: every engine checks its preconditions before any
//!   arithmetic and reports the first violation as a `PricingError`
//! - **No shared state**: every call is independent and safe to run concurrently
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::Market;
//! use pricer_models::analytical::black_scholes;
//! use pricer_models::implied_vol::{solve_implied_vol, ImpliedVolParams};
//! use pricer_models::instruments::{OptionType, VanillaOption};
//! use pricer_models::lattice::{binomial, TreeParams};
//!
//! let market = Market::new(100.0, 0.03, 0.01, 0.20);
//! let call = VanillaOption::european(105.0, 1.5, OptionType::Call);
//!
//! let analytic = black_scholes::price(&market, &call).unwrap();
//! let tree = binomial::price_european(&market, &call, &TreeParams::new(2000)).unwrap();
//! assert!((analytic - tree).abs() < 5e-3);
//!
//! let sigma = solve_implied_vol(&market, &call, analytic, &ImpliedVolParams::default()).unwrap();
//! assert!((sigma - 0.20).abs() < 1e-6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod implied_vol;
pub mod instruments;
pub mod lattice;
