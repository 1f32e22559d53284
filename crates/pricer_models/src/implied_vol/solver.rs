//! Bracketing bisection search for Black-Scholes implied volatility.

use pricer_core::market_data::Market;
use pricer_core::math::solvers::BisectionSolver;
use pricer_core::types::PricingError;

use super::ImpliedVolParams;
use crate::analytical::black_scholes;
use crate::instruments::{ExerciseStyle, OptionType, VanillaOption};

/// Slack on the no-arbitrage interval before a target is rejected.
const BOUNDS_EPSILON: f64 = 1e-12;

/// Maximum number of upper-bracket doublings.
const MAX_BRACKET_EXPANSIONS: usize = 50;

/// Volatility ceiling beyond which bracket expansion stops.
const SIGMA_CEILING: f64 = 10.0;

/// Model-free price bounds `(lower, upper)` for a European option.
///
/// - Call: `[max(0, S·e^(-qT) - K·e^(-rT)), S·e^(-qT)]`
/// - Put: `[max(0, K·e^(-rT) - S·e^(-qT)), K·e^(-rT)]`
///
/// # Examples
/// ```
/// use pricer_core::market_data::Market;
/// use pricer_models::implied_vol::no_arbitrage_bounds;
/// use pricer_models::instruments::{OptionType, VanillaOption};
///
/// let market = Market::new(100.0, 0.0, 0.0, 0.2);
/// let put = VanillaOption::european(120.0, 1.0, OptionType::Put);
///
/// assert_eq!(no_arbitrage_bounds(&market, &put), (20.0, 120.0));
/// ```
pub fn no_arbitrage_bounds(market: &Market, option: &VanillaOption) -> (f64, f64) {
    let discounted_spot = market.spot * market.dividend_discount_factor(option.expiry);
    let discounted_strike = option.strike * market.discount_factor(option.expiry);

    match option.option_type {
        OptionType::Call => ((discounted_spot - discounted_strike).max(0.0), discounted_spot),
        OptionType::Put => ((discounted_strike - discounted_spot).max(0.0), discounted_strike),
    }
}

/// Solves for the volatility reproducing `target` under the analytic price.
///
/// The volatility held in `market` is ignored. The caller's market is never
/// modified; trial volatilities are applied to copies.
///
/// # Algorithm
///
/// 1. Reject targets outside the no-arbitrage bounds (with 1e-12 slack)
/// 2. Return `sigma_lo` when the target sits on the lower bound or the
///    price at `sigma_lo` already exceeds it
/// 3. Double `sigma_hi` until the target is bracketed (at most 50 times,
///    stopping once above 10)
/// 4. Bisect until the price or bracket width converges
///
/// # Errors
/// - `PricingError::InvalidInput` for non-positive spot, strike or maturity,
///   a negative target, or an unusable initial bracket in `params`
/// - `PricingError::UnsupportedExercise` for American options
/// - `PricingError::ArbitrageViolation` if the target is outside the bounds
/// - `PricingError::ConvergenceFailure` if no bracket is found or bisection
///   runs out of iterations
pub fn solve_implied_vol(
    market: &Market,
    option: &VanillaOption,
    target: f64,
    params: &ImpliedVolParams,
) -> Result<f64, PricingError> {
    market.validate_spot()?;
    option.validate_strike()?;
    option.validate_expiry()?;
    if target < 0.0 || target.is_nan() {
        return Err(PricingError::invalid_input(format!(
            "Target option price must be non-negative (price = {})",
            target
        )));
    }
    option.require_exercise(ExerciseStyle::European, "Black-Scholes implied volatility")?;

    let (lower, upper) = no_arbitrage_bounds(market, option);
    if target < lower - BOUNDS_EPSILON || target > upper + BOUNDS_EPSILON {
        return Err(PricingError::ArbitrageViolation {
            target,
            lower,
            upper,
        });
    }
    params.validate()?;

    if (target - lower).abs() < params.tol_price {
        return Ok(params.sigma_lo);
    }

    // Inputs are validated and every trial sigma is positive
    let price_at =
        |sigma: f64| black_scholes::price_unchecked(&market.with_volatility(sigma), option);

    let lo = params.sigma_lo;
    if price_at(lo) > target {
        return Ok(lo);
    }

    let mut hi = params.sigma_hi;
    let mut price_hi = price_at(hi);
    let mut expansions = 0;
    while price_hi + params.tol_price < target && expansions < MAX_BRACKET_EXPANSIONS {
        hi *= 2.0;
        price_hi = price_at(hi);
        expansions += 1;
        if hi > SIGMA_CEILING {
            break;
        }
    }

    if price_hi + params.tol_price < target {
        return Err(PricingError::convergence_failure(format!(
            "Failed to bracket target price {} (price at sigma = {} is {})",
            target, hi, price_hi
        )));
    }

    let solver = BisectionSolver::new(params.solver_config());
    let sigma = solver.find_root(|sigma| price_at(sigma) - target, lo, hi)?;
    Ok(sigma)
}
