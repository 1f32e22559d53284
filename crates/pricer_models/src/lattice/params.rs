//! Lattice resolution parameters.

use pricer_core::types::PricingError;

/// Default number of time steps for production pricing.
pub const DEFAULT_STEPS: usize = 2000;

/// Number of time steps used by [`TreeParams::coarse`].
pub const COARSE_STEPS: usize = 200;

/// Binomial tree configuration.
///
/// # Examples
/// ```
/// use pricer_models::lattice::TreeParams;
///
/// assert_eq!(TreeParams::default().steps, 2000);
/// assert_eq!(TreeParams::coarse().steps, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeParams {
    /// Number of time steps (N)
    pub steps: usize,
}

impl TreeParams {
    /// Creates tree parameters with the given number of steps.
    #[inline]
    pub fn new(steps: usize) -> Self {
        Self { steps }
    }

    /// Fast, low-resolution tree for quick estimates.
    #[inline]
    pub fn coarse() -> Self {
        Self::new(COARSE_STEPS)
    }

    /// Checks that the tree has at least one step.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.steps == 0 {
            return Err(PricingError::invalid_input(
                "Number of steps must be positive (N = 0)",
            ));
        }
        Ok(())
    }
}

impl Default for TreeParams {
    fn default() -> Self {
        Self::new(DEFAULT_STEPS)
    }
}
