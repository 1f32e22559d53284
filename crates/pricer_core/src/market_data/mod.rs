//! Market data structures for Black-Scholes-Merton pricing.
//!
//! # Components
//!
//! - [`Market`]: Flat market inputs (spot, rate, dividend yield, volatility)
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::Market;
//!
//! let market = Market::new(100.0, 0.05, 0.02, 0.20);
//!
//! // Discount factors over one year
//! assert!((market.discount_factor(1.0) - 0.951229).abs() < 1e-5);
//! assert!((market.dividend_discount_factor(1.0) - 0.980199).abs() < 1e-5);
//! ```

mod market;

pub use market::Market;
