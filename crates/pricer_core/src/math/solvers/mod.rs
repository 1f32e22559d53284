//! Root-finding solvers for numerical computation.
//!
//! ## Available Solvers
//!
//! - [`BisectionSolver`]: Bracketing bisection for non-decreasing functions,
//!   used by the implied-volatility inversion
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Function-value tolerance (default: 1e-10)
//! - `x_tolerance`: Bracket-width tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
//!
//! // Solve e^x - 3 = 0
//! let solver = BisectionSolver::new(SolverConfig::default());
//! let root = solver.find_root(|x: f64| x.exp() - 3.0, 0.0, 2.0).unwrap();
//! assert!((root - 3.0_f64.ln()).abs() < 1e-9);
//! ```

mod bisection;
mod config;

// Re-export public types at module level
pub use bisection::BisectionSolver;
pub use config::SolverConfig;
