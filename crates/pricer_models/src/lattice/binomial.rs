//! Cox-Ross-Rubinstein binomial tree.
//!
//! Prices vanilla options on an N-step recombining lattice with
//! continuous dividend yield:
//!
//! ```text
//! dt   = T / N
//! u    = exp(σ√dt),  d = 1/u
//! disc = exp(-r·dt)
//! pu   = (exp((r - q)·dt) - d) / (u - d),  pd = 1 - pu
//! ```
//!
//! Both entry points share the coefficient setup and the terminal layer.
//! The backward pass runs in place over a single buffer of N+1 values; the
//! American variant compares the discounted expectation against immediate
//! exercise at every node.
//!
//! Time complexity O(N²), space O(N).

use pricer_core::market_data::Market;
use pricer_core::math::distributions::clamp;
use pricer_core::types::PricingError;

use super::TreeParams;
use crate::instruments::{ExerciseStyle, VanillaOption};

/// Slack allowed on the risk-neutral probability before it is clamped.
const PROBABILITY_TOLERANCE: f64 = 1e-12;

/// Per-step lattice coefficients.
///
/// # Examples
/// ```
/// use pricer_core::market_data::Market;
/// use pricer_models::lattice::CrrCoefficients;
///
/// let market = Market::new(100.0, 0.05, 0.0, 0.2);
/// let c = CrrCoefficients::new(&market, 1.0, 100).unwrap();
///
/// assert!((c.u * c.d - 1.0).abs() < 1e-15);
/// assert!((c.pu + c.pd - 1.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrrCoefficients {
    /// Time step length
    pub dt: f64,
    /// Up factor
    pub u: f64,
    /// Down factor (1/u)
    pub d: f64,
    /// Risk-neutral up probability, clamped into [0, 1]
    pub pu: f64,
    /// Risk-neutral down probability (1 - pu)
    pub pd: f64,
    /// One-step discount factor
    pub disc: f64,
}

impl CrrCoefficients {
    /// Derives the lattice coefficients for `steps` steps to `expiry`.
    ///
    /// Inputs are assumed validated; only the risk-neutral probability is
    /// checked here.
    ///
    /// # Errors
    /// `PricingError::ModelInconsistency` if `pu` falls outside
    /// `[-1e-12, 1 + 1e-12]`.
    pub fn new(market: &Market, expiry: f64, steps: usize) -> Result<Self, PricingError> {
        let dt = expiry / steps as f64;
        let u = (market.volatility * dt.sqrt()).exp();
        let d = 1.0 / u;
        let disc = (-market.rate * dt).exp();
        let growth = ((market.rate - market.dividend_yield) * dt).exp();
        let pu = (growth - d) / (u - d);

        if !(-PROBABILITY_TOLERANCE..=1.0 + PROBABILITY_TOLERANCE).contains(&pu) {
            return Err(PricingError::model_inconsistency(format!(
                "CRR risk-neutral probability pu = {} outside [0, 1] with N = {}; \
                 increasing N usually helps",
                pu, steps
            )));
        }

        let pu = clamp(pu, 0.0, 1.0);
        Ok(Self {
            dt,
            u,
            d,
            pu,
            pd: 1.0 - pu,
            disc,
        })
    }
}

/// Prices a European option on the CRR lattice.
///
/// # Errors
/// - `PricingError::InvalidInput` for non-positive spot, strike, maturity,
///   volatility or step count
/// - `PricingError::UnsupportedExercise` if the option is American
/// - `PricingError::ModelInconsistency` if the lattice probability is invalid
///
/// # Examples
/// ```
/// use pricer_core::market_data::Market;
/// use pricer_models::instruments::{OptionType, VanillaOption};
/// use pricer_models::lattice::{binomial, TreeParams};
///
/// let market = Market::new(100.0, 0.05, 0.0, 0.2);
/// let call = VanillaOption::european(100.0, 1.0, OptionType::Call);
///
/// let price = binomial::price_european(&market, &call, &TreeParams::default()).unwrap();
/// assert!((price - 10.4506).abs() < 5e-3);
/// ```
pub fn price_european(
    market: &Market,
    option: &VanillaOption,
    params: &TreeParams,
) -> Result<f64, PricingError> {
    let coeffs = setup(market, option, params, ExerciseStyle::European)?;
    let mut values = terminal_layer(market.spot, option, params.steps, &coeffs);

    let disc_pu = coeffs.disc * coeffs.pu;
    let disc_pd = coeffs.disc * coeffs.pd;

    for step in (0..params.steps).rev() {
        for i in 0..=step {
            values[i] = disc_pu * values[i + 1] + disc_pd * values[i];
        }
    }

    Ok(values[0])
}

/// Prices an American option on the CRR lattice.
///
/// Each node takes the larger of the discounted expectation and the
/// immediate exercise payoff.
///
/// # Errors
/// Same as [`price_european`], with `UnsupportedExercise` raised for
/// European options instead.
pub fn price_american(
    market: &Market,
    option: &VanillaOption,
    params: &TreeParams,
) -> Result<f64, PricingError> {
    let coeffs = setup(market, option, params, ExerciseStyle::American)?;
    let mut values = terminal_layer(market.spot, option, params.steps, &coeffs);

    let disc_pu = coeffs.disc * coeffs.pu;
    let disc_pd = coeffs.disc * coeffs.pd;
    let ratio = coeffs.u / coeffs.d;

    for step in (0..params.steps).rev() {
        let mut node_spot = market.spot * coeffs.d.powf(step as f64);
        for i in 0..=step {
            let hold = disc_pu * values[i + 1] + disc_pd * values[i];
            let exercise = option.payoff(node_spot);
            values[i] = exercise.max(hold);
            node_spot *= ratio;
        }
    }

    Ok(values[0])
}

/// Validates inputs in order (S0, K, T, σ, N, exercise) and derives the
/// coefficients.
fn setup(
    market: &Market,
    option: &VanillaOption,
    params: &TreeParams,
    exercise: ExerciseStyle,
) -> Result<CrrCoefficients, PricingError> {
    market.validate_spot()?;
    option.validate_strike()?;
    option.validate_expiry()?;
    market.validate_volatility()?;
    params.validate()?;

    let engine = match exercise {
        ExerciseStyle::European => "CRR European pricer",
        ExerciseStyle::American => "CRR American pricer",
    };
    option.require_exercise(exercise, engine)?;

    CrrCoefficients::new(market, option.expiry, params.steps)
}

/// Intrinsic values at expiry, lowest terminal spot first.
fn terminal_layer(
    spot: f64,
    option: &VanillaOption,
    steps: usize,
    coeffs: &CrrCoefficients,
) -> Vec<f64> {
    let ratio = coeffs.u / coeffs.d;
    let mut node_spot = spot * coeffs.d.powf(steps as f64);

    let mut values = Vec::with_capacity(steps + 1);
    for _ in 0..=steps {
        values.push(option.payoff(node_spot));
        node_spot *= ratio;
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::black_scholes;
    use crate::instruments::OptionType;
    use approx::assert_relative_eq;

    fn market() -> Market {
        Market::new(100.0, 0.03, 0.01, 0.2)
    }

    // ==========================================================
    // Coefficient Tests
    // ==========================================================

    #[test]
    fn test_coefficients() {
        let m = Market::new(100.0, 0.05, 0.02, 0.2);
        let c = CrrCoefficients::new(&m, 1.0, 4).unwrap();

        assert_relative_eq!(c.dt, 0.25, epsilon = 1e-15);
        assert_relative_eq!(c.u, (0.2_f64 * 0.5).exp(), epsilon = 1e-15);
        assert_relative_eq!(c.d, 1.0 / c.u, epsilon = 1e-15);
        assert_relative_eq!(c.disc, (-0.05_f64 * 0.25).exp(), epsilon = 1e-15);

        let expected_pu = ((0.03_f64 * 0.25).exp() - c.d) / (c.u - c.d);
        assert_relative_eq!(c.pu, expected_pu, epsilon = 1e-15);
        assert_relative_eq!(c.pd, 1.0 - expected_pu, epsilon = 1e-15);
    }

    #[test]
    fn test_probability_above_one_is_inconsistent() {
        // Low vol with high carry over a single coarse step
        let m = Market::new(100.0, 0.5, 0.0, 0.01);
        match CrrCoefficients::new(&m, 1.0, 1) {
            Err(PricingError::ModelInconsistency(msg)) => assert!(msg.contains("increasing N")),
            other => panic!("Expected ModelInconsistency, got {:?}", other),
        }

        // A finer lattice restores a valid probability
        let c = CrrCoefficients::new(&m, 1.0, 10_000).unwrap();
        assert!((0.0..=1.0).contains(&c.pu));
    }

    #[test]
    fn test_probability_below_zero_is_inconsistent() {
        let m = Market::new(100.0, 0.0, 0.5, 0.01);
        let option = VanillaOption::european(100.0, 1.0, OptionType::Call);
        assert!(matches!(
            price_european(&m, &option, &TreeParams::new(1)),
            Err(PricingError::ModelInconsistency(_))
        ));
    }

    // ==========================================================
    // Validation Tests
    // ==========================================================

    #[test]
    fn test_zero_steps_rejected() {
        let option = VanillaOption::european(100.0, 1.0, OptionType::Call);
        assert!(matches!(
            price_european(&market(), &option, &TreeParams::new(0)),
            Err(PricingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let params = TreeParams::new(50);
        let call = VanillaOption::european(100.0, 1.0, OptionType::Call);

        let bad_spot = Market::new(0.0, 0.03, 0.01, 0.2);
        let bad_vol = market().with_volatility(-0.1);
        let bad_strike = VanillaOption::european(-5.0, 1.0, OptionType::Call);
        let bad_expiry = VanillaOption::european(100.0, 0.0, OptionType::Call);

        for result in [
            price_european(&bad_spot, &call, &params),
            price_european(&bad_vol, &call, &params),
            price_european(&market(), &bad_strike, &params),
            price_european(&market(), &bad_expiry, &params),
        ] {
            assert!(matches!(result, Err(PricingError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_exercise_mismatch_rejected() {
        let params = TreeParams::new(50);
        let euro = VanillaOption::european(100.0, 1.0, OptionType::Put);
        let amer = euro.with_exercise(ExerciseStyle::American);

        assert!(matches!(
            price_european(&market(), &amer, &params),
            Err(PricingError::UnsupportedExercise(_))
        ));
        assert!(matches!(
            price_american(&market(), &euro, &params),
            Err(PricingError::UnsupportedExercise(_))
        ));
    }

    #[test]
    fn test_exercise_checked_before_probability() {
        let m = Market::new(100.0, 0.5, 0.0, 0.01);
        let amer = VanillaOption::american(100.0, 1.0, OptionType::Call);
        assert!(matches!(
            price_european(&m, &amer, &TreeParams::new(1)),
            Err(PricingError::UnsupportedExercise(_))
        ));
    }

    // ==========================================================
    // Pricing Tests
    // ==========================================================

    #[test]
    fn test_single_step_by_hand() {
        let m = Market::new(100.0, 0.05, 0.0, 0.2);
        let call = VanillaOption::european(100.0, 1.0, OptionType::Call);
        let c = CrrCoefficients::new(&m, 1.0, 1).unwrap();

        let expected = c.disc * (c.pu * (100.0 * c.u - 100.0).max(0.0) + c.pd * 0.0);
        let price = price_european(&m, &call, &TreeParams::new(1)).unwrap();
        assert_relative_eq!(price, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_european_reference_value() {
        let call = VanillaOption::european(105.0, 1.5, OptionType::Call);
        let price = price_european(&market(), &call, &TreeParams::new(500)).unwrap();
        assert_relative_eq!(price, 8.789408020204448, epsilon = 1e-8);
    }

    #[test]
    fn test_european_matches_analytic() {
        let m = market();
        for option_type in [OptionType::Call, OptionType::Put] {
            let option = VanillaOption::european(105.0, 1.5, option_type);
            let tree = price_european(&m, &option, &TreeParams::default()).unwrap();
            let analytic = black_scholes::price(&m, &option).unwrap();
            assert!((tree - analytic).abs() < 5e-3);
        }
    }

    #[test]
    fn test_american_put_reference_value() {
        let m = Market::new(100.0, 0.05, 0.0, 0.2);
        let put = VanillaOption::american(100.0, 1.0, OptionType::Put);
        let price = price_american(&m, &put, &TreeParams::new(500)).unwrap();
        assert_relative_eq!(price, 6.088810110702636, epsilon = 1e-8);
    }

    #[test]
    fn test_american_put_early_exercise_premium() {
        let m = Market::new(100.0, 0.05, 0.0, 0.2);
        let amer = VanillaOption::american(100.0, 1.0, OptionType::Put);
        let euro = amer.with_exercise(ExerciseStyle::European);
        let params = TreeParams::new(500);

        let american = price_american(&m, &amer, &params).unwrap();
        let european = price_european(&m, &euro, &params).unwrap();
        assert!(american > european + 0.4);
    }

    #[test]
    fn test_deep_itm_american_put_worth_intrinsic() {
        let m = Market::new(50.0, 0.05, 0.0, 0.2);
        let put = VanillaOption::american(100.0, 1.0, OptionType::Put);
        let price = price_american(&m, &put, &TreeParams::new(200)).unwrap();
        assert_relative_eq!(price, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_american_call_with_high_dividend() {
        let m = Market::new(150.0, 0.01, 0.10, 1.0);
        let amer = VanillaOption::american(100.0, 1.0, OptionType::Call);
        let euro = amer.with_exercise(ExerciseStyle::European);
        let params = TreeParams::new(500);

        let american = price_american(&m, &amer, &params).unwrap();
        let european = price_european(&m, &euro, &params).unwrap();
        assert_relative_eq!(american, 69.00097366426671, epsilon = 1e-8);
        assert_relative_eq!(european, 65.33664358084341, epsilon = 1e-8);
    }
}
