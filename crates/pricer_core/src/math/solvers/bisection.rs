//! Bisection root-finding solver for monotone functions.

use super::SolverConfig;
use crate::types::SolverError;

/// Bisection root finder for non-decreasing functions.
///
/// Halves the bracket `[a, b]` each iteration, keeping the half where the
/// root lies: if `f(mid) < 0` the left endpoint moves up to `mid`, otherwise
/// the right endpoint moves down. The caller is responsible for bracketing
/// (`f(a) <= 0 <= f(b)`); the endpoints themselves are never evaluated.
///
/// # Convergence
///
/// Returns the midpoint as soon as `|f(mid)| < tolerance` or the bracket
/// width drops below `x_tolerance`.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::new(1e-12, 1e-12, 200));
///
/// // Solve x² - 2 = 0 in bracket [0, 2]
/// let root = solver.find_root(|x| x * x - 2.0, 0.0, 2.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver {
    config: SolverConfig,
}

impl BisectionSolver {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of the non-decreasing function `f` in `[a, b]`.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Midpoint satisfying either convergence criterion
    /// * `Err(SolverError::InvalidBracket)` - `a >= b` or an endpoint is not finite
    /// * `Err(SolverError::MaxIterationsExceeded)` - Iteration budget exhausted
    pub fn find_root<F>(&self, f: F, a: f64, b: f64) -> Result<f64, SolverError>
    where
        F: Fn(f64) -> f64,
    {
        if !(a.is_finite() && b.is_finite()) || a >= b {
            return Err(SolverError::InvalidBracket { a, b });
        }

        let mut lo = a;
        let mut hi = b;

        for _iteration in 0..self.config.max_iterations {
            let mid = 0.5 * (lo + hi);
            let f_mid = f(mid);

            if f_mid.abs() < self.config.tolerance || (hi - lo) < self.config.x_tolerance {
                return Ok(mid);
            }

            if f_mid < 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }
}
