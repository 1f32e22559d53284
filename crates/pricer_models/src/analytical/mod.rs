//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes-Merton price with continuous dividend yield
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//!
//! ## Design Principles
//!
//! - **Validate first**: inputs are checked before any arithmetic
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy

pub mod black_scholes;

// Re-export main types at module level
pub use black_scholes::{greeks, price, Greeks};
