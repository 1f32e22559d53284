//! Solver parameters for implied volatility inversion.

use pricer_core::math::solvers::SolverConfig;
use pricer_core::types::PricingError;

/// Bracket and tolerance settings for [`solve_implied_vol`](super::solve_implied_vol).
///
/// # Examples
/// ```
/// use pricer_models::implied_vol::ImpliedVolParams;
///
/// let params = ImpliedVolParams {
///     max_iter: 500,
///     ..ImpliedVolParams::default()
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImpliedVolParams {
    /// Initial lower volatility bound
    pub sigma_lo: f64,
    /// Initial upper volatility bound, doubled while the root is not bracketed
    pub sigma_hi: f64,
    /// Bracket-width convergence threshold
    pub tol_sigma: f64,
    /// Price-match convergence threshold
    pub tol_price: f64,
    /// Bisection iteration cap
    pub max_iter: usize,
}

impl Default for ImpliedVolParams {
    fn default() -> Self {
        Self {
            sigma_lo: 1e-8,
            sigma_hi: 2.0,
            tol_sigma: 1e-8,
            tol_price: 1e-10,
            max_iter: 200,
        }
    }
}

impl ImpliedVolParams {
    /// Checks that the initial bracket is usable.
    ///
    /// Tolerances only need to be non-negative: a zero price tolerance
    /// leaves the bracket width as the sole stopping rule. An iteration cap
    /// of zero is not rejected here; the search then reports a convergence
    /// failure.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` describing the first bad field.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.sigma_lo <= 0.0 || self.sigma_lo.is_nan() {
            return Err(PricingError::invalid_input(format!(
                "sigma_lo must be positive (sigma_lo = {})",
                self.sigma_lo
            )));
        }
        if self.sigma_hi <= self.sigma_lo || !self.sigma_hi.is_finite() {
            return Err(PricingError::invalid_input(format!(
                "sigma_hi must be finite and greater than sigma_lo ({} <= {})",
                self.sigma_hi, self.sigma_lo
            )));
        }
        if !(self.tol_sigma >= 0.0 && self.tol_price >= 0.0) {
            return Err(PricingError::invalid_input(format!(
                "Tolerances must be non-negative (tol_sigma = {}, tol_price = {})",
                self.tol_sigma, self.tol_price
            )));
        }
        Ok(())
    }

    /// Bisection settings derived from these parameters.
    pub(crate) fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            tolerance: self.tol_price,
            x_tolerance: self.tol_sigma,
            max_iterations: self.max_iter,
        }
    }
}
