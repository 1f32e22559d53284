//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from the pricing engines (analytic, lattice, implied volatility)
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every engine validates its inputs before computing anything and surfaces
/// the first violated condition through one of these variants. Engines never
/// retry and never return a partial result.
///
/// # Variants
/// - `InvalidInput`: A numeric precondition failed (non-positive spot, strike,
///   maturity, volatility or steps; negative target price)
/// - `UnsupportedExercise`: The engine does not handle the contract's exercise style
/// - `ModelInconsistency`: The lattice risk-neutral probability left `[0, 1]`
/// - `ArbitrageViolation`: An implied-volatility target lies outside the no-arbitrage bounds
/// - `ConvergenceFailure`: A root-finder could not bracket or converge
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Spot price must be positive".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Spot price must be positive");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Exercise style not supported by the engine.
    #[error("Unsupported exercise: {0}")]
    UnsupportedExercise(String),

    /// Discretisation produced an invalid risk-neutral measure.
    #[error("Model inconsistency: {0}")]
    ModelInconsistency(String),

    /// Target price outside the model's no-arbitrage bounds.
    #[error("Arbitrage violation: target price {target} outside no-arbitrage bounds [{lower}, {upper}]")]
    ArbitrageViolation {
        /// The rejected target price
        target: f64,
        /// Lower no-arbitrage bound
        lower: f64,
        /// Upper no-arbitrage bound
        upper: f64,
    },

    /// Root-finder failed to bracket or converge.
    #[error("Convergence failure: {0}")]
    ConvergenceFailure(String),
}

impl PricingError {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an unsupported exercise error.
    pub fn unsupported_exercise(msg: impl Into<String>) -> Self {
        Self::UnsupportedExercise(msg.into())
    }

    /// Create a model inconsistency error.
    pub fn model_inconsistency(msg: impl Into<String>) -> Self {
        Self::ModelInconsistency(msg.into())
    }

    /// Create a convergence failure error.
    pub fn convergence_failure(msg: impl Into<String>) -> Self {
        Self::ConvergenceFailure(msg.into())
    }
}

/// Solver-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Bracket endpoints are not ordered (`a >= b`) or not finite.
    #[error("Invalid bracket: [{a}, {b}]")]
    InvalidBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::MaxIterationsExceeded { .. } => {
                PricingError::ConvergenceFailure(err.to_string())
            }
            SolverError::InvalidBracket { .. } => PricingError::InvalidInput(err.to_string()),
        }
    }
}
