//! Flat Black-Scholes-Merton market inputs.

use crate::types::PricingError;

/// Market inputs shared by every pricing engine.
///
/// A plain value type: engines take it by reference and never mutate it.
/// The implied-volatility solver works on copies produced by
/// [`Market::with_volatility`].
///
/// # Example
///
/// ```
/// use pricer_core::market_data::Market;
///
/// let market = Market::new(100.0, 0.03, 0.01, 0.20);
/// let bumped = market.with_volatility(0.25);
///
/// assert_eq!(market.volatility, 0.20);
/// assert_eq!(bumped.volatility, 0.25);
/// assert_eq!(bumped.spot, market.spot);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Market {
    /// Spot price of the underlying (S0)
    pub spot: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Continuous dividend yield (q)
    pub dividend_yield: f64,
    /// Volatility of the underlying (σ)
    pub volatility: f64,
}

impl Market {
    /// Creates a new market snapshot.
    ///
    /// No validation happens here; each engine checks the fields it needs.
    #[inline]
    pub fn new(spot: f64, rate: f64, dividend_yield: f64, volatility: f64) -> Self {
        Self {
            spot,
            rate,
            dividend_yield,
            volatility,
        }
    }

    /// Returns a copy of this market with the volatility replaced.
    #[inline]
    pub fn with_volatility(&self, volatility: f64) -> Self {
        Self { volatility, ..*self }
    }

    /// Risk-free discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self, expiry: f64) -> f64 {
        (-self.rate * expiry).exp()
    }

    /// Dividend discount factor e^(-qT).
    #[inline]
    pub fn dividend_discount_factor(&self, expiry: f64) -> f64 {
        (-self.dividend_yield * expiry).exp()
    }

    /// Checks that the spot price is strictly positive.
    pub fn validate_spot(&self) -> Result<(), PricingError> {
        if self.spot <= 0.0 || self.spot.is_nan() {
            return Err(PricingError::invalid_input(format!(
                "Spot price must be positive (S0 = {})",
                self.spot
            )));
        }
        Ok(())
    }

    /// Checks that the volatility is strictly positive.
    pub fn validate_volatility(&self) -> Result<(), PricingError> {
        if self.volatility <= 0.0 || self.volatility.is_nan() {
            return Err(PricingError::invalid_input(format!(
                "Volatility must be positive (sigma = {})",
                self.volatility
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new() {
        let market = Market::new(100.0, 0.05, 0.02, 0.2);
        assert_eq!(market.spot, 100.0);
        assert_eq!(market.rate, 0.05);
        assert_eq!(market.dividend_yield, 0.02);
        assert_eq!(market.volatility, 0.2);
    }

    #[test]
    fn test_with_volatility_leaves_original_untouched() {
        let market = Market::new(100.0, 0.05, 0.02, 0.2);
        let copy = market.with_volatility(0.35);
        assert_eq!(market.volatility, 0.2);
        assert_eq!(copy.volatility, 0.35);
        assert_eq!(copy.rate, market.rate);
        assert_eq!(copy.dividend_yield, market.dividend_yield);
    }

    #[test]
    fn test_discount_factors() {
        let market = Market::new(100.0, 0.05, 0.02, 0.2);
        assert_relative_eq!(market.discount_factor(2.0), (-0.1_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(
            market.dividend_discount_factor(2.0),
            (-0.04_f64).exp(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_negative_rate_allowed() {
        let market = Market::new(100.0, -0.01, 0.0, 0.2);
        assert!(market.discount_factor(1.0) > 1.0);
    }

    #[test]
    fn test_validate_spot() {
        assert!(Market::new(100.0, 0.0, 0.0, 0.2).validate_spot().is_ok());
        for spot in [0.0, -1.0, f64::NAN] {
            match Market::new(spot, 0.0, 0.0, 0.2).validate_spot() {
                Err(PricingError::InvalidInput(msg)) => assert!(msg.contains("Spot")),
                other => panic!("Expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validate_volatility() {
        assert!(Market::new(100.0, 0.0, 0.0, 0.2)
            .validate_volatility()
            .is_ok());
        match Market::new(100.0, 0.0, 0.0, 0.0).validate_volatility() {
            Err(PricingError::InvalidInput(msg)) => assert!(msg.contains("Volatility")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
