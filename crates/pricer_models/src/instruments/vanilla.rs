//! Vanilla option definitions.
//!
//! This module provides the vanilla option contract combining strike,
//! maturity, payoff type and exercise style.

use pricer_core::types::PricingError;

use super::exercise::ExerciseStyle;
use super::payoff::OptionType;

/// Vanilla option contract.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{ExerciseStyle, OptionType, VanillaOption};
///
/// let put = VanillaOption::american(100.0, 1.0, OptionType::Put);
/// assert_eq!(put.exercise, ExerciseStyle::American);
///
/// // Payoff at expiry
/// assert_eq!(put.payoff(90.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VanillaOption {
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub expiry: f64,
    /// Call or put
    pub option_type: OptionType,
    /// European or American exercise
    pub exercise: ExerciseStyle,
}

impl VanillaOption {
    /// Creates a new vanilla option.
    ///
    /// No validation happens here; engines check strike and expiry
    /// before pricing.
    pub fn new(strike: f64, expiry: f64, option_type: OptionType, exercise: ExerciseStyle) -> Self {
        Self {
            strike,
            expiry,
            option_type,
            exercise,
        }
    }

    /// Creates a new European option.
    pub fn european(strike: f64, expiry: f64, option_type: OptionType) -> Self {
        Self::new(strike, expiry, option_type, ExerciseStyle::European)
    }

    /// Creates a new American option.
    pub fn american(strike: f64, expiry: f64, option_type: OptionType) -> Self {
        Self::new(strike, expiry, option_type, ExerciseStyle::American)
    }

    /// Returns the same contract with a different exercise style.
    pub fn with_exercise(&self, exercise: ExerciseStyle) -> Self {
        Self { exercise, ..*self }
    }

    /// Intrinsic payoff at the given spot.
    #[inline]
    pub fn payoff(&self, spot: f64) -> f64 {
        self.option_type.intrinsic(spot, self.strike)
    }

    /// Checks that the strike price is strictly positive.
    pub fn validate_strike(&self) -> Result<(), PricingError> {
        if self.strike <= 0.0 || self.strike.is_nan() {
            return Err(PricingError::invalid_input(format!(
                "Strike price must be positive (K = {})",
                self.strike
            )));
        }
        Ok(())
    }

    /// Checks that the time to maturity is strictly positive.
    pub fn validate_expiry(&self) -> Result<(), PricingError> {
        if self.expiry <= 0.0 || self.expiry.is_nan() {
            return Err(PricingError::invalid_input(format!(
                "Time to maturity must be positive (T = {})",
                self.expiry
            )));
        }
        Ok(())
    }

    /// Checks that the contract has the exercise style an engine supports.
    ///
    /// `engine` names the caller in the error message.
    pub fn require_exercise(
        &self,
        expected: ExerciseStyle,
        engine: &str,
    ) -> Result<(), PricingError> {
        if self.exercise != expected {
            return Err(PricingError::unsupported_exercise(format!(
                "{} only supports {} options, got {}",
                engine, expected, self.exercise
            )));
        }
        Ok(())
    }
}
