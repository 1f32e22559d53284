//! # pricer_core: Mathematical Foundation for Vanilla Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Standard normal distribution functions and `clamp` (`math::distributions`)
//! - Bracketing root-finders (`math::solvers`)
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//! - Flat Black-Scholes-Merton market inputs: `Market` (`market_data`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - libm: Machine-precision `erfc` for the normal CDF
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::Market;
//! use pricer_core::math::distributions::{norm_cdf, norm_pdf};
//!
//! let market = Market::new(100.0, 0.03, 0.01, 0.2);
//! assert_eq!(market.spot, 100.0);
//!
//! assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
//! assert!(norm_pdf(0.0) > norm_pdf(1.0));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Market` and the error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
