//! Cross-engine consistency tests.
//!
//! # Test Categories
//!
//! 1. **Lattice Convergence**: CRR European price approaches the analytic price
//! 2. **Early Exercise**: American lattice vs European prices
//! 3. **Concrete Scenario**: S=100, r=3%, q=1%, σ=20%, K=105, T=1.5 call
//! 4. **Concurrency**: parallel pricing matches sequential pricing

use approx::assert_relative_eq;
use pricer_core::market_data::Market;
use pricer_core::types::PricingError;
use pricer_models::analytical::black_scholes;
use pricer_models::implied_vol::{solve_implied_vol, ImpliedVolParams};
use pricer_models::instruments::{ExerciseStyle, OptionType, VanillaOption};
use pricer_models::lattice::{binomial, TreeParams};
use rayon::prelude::*;

const STEP_LADDER: [usize; 7] = [25, 50, 100, 200, 500, 1000, 2000];

fn scenario_market() -> Market {
    Market::new(100.0, 0.03, 0.01, 0.2)
}

// ============================================================================
// Lattice Convergence Tests
// ============================================================================

fn assert_converges(market: &Market, option: &VanillaOption) {
    let analytic = black_scholes::price(market, option).unwrap();

    let errs: Vec<f64> = STEP_LADDER
        .iter()
        .map(|&n| {
            let tree = binomial::price_european(market, option, &TreeParams::new(n)).unwrap();
            (tree - analytic).abs()
        })
        .collect();

    let first = errs[0];
    let last = errs[errs.len() - 1];
    let min_err = errs.iter().cloned().fold(f64::INFINITY, f64::min);

    assert!(
        last < 0.7 * first + 1e-12,
        "error did not shrink: first={:.3e}, last={:.3e}",
        first,
        last
    );
    assert!(min_err < 0.8 * first + 1e-12);
    assert!(last < 5e-3, "error at N=2000 is {:.3e}", last);
}

#[test]
fn test_call_lattice_convergence() {
    let call = VanillaOption::european(105.0, 0.5, OptionType::Call);
    assert_converges(&scenario_market(), &call);
}

#[test]
fn test_put_lattice_convergence() {
    let put = VanillaOption::european(105.0, 1.5, OptionType::Put);
    assert_converges(&scenario_market(), &put);
}

// ============================================================================
// Early Exercise Tests
// ============================================================================

#[test]
fn test_american_put_dominates_european() {
    let m = Market::new(150.0, 0.05, 0.02, 0.2);
    let amer = VanillaOption::american(100.0, 1.0, OptionType::Put);
    let euro = amer.with_exercise(ExerciseStyle::European);
    let params = TreeParams::default();

    let american = binomial::price_american(&m, &amer, &params).unwrap();
    let european_tree = binomial::price_european(&m, &euro, &params).unwrap();
    let analytic = black_scholes::price(&m, &euro).unwrap();

    assert!(american >= analytic - 5e-3);
    assert!(american >= european_tree - 1e-12);
}

#[test]
fn test_american_call_without_dividends_has_no_premium() {
    let m = Market::new(100.0, 0.05, 0.0, 0.2);
    let amer = VanillaOption::american(100.0, 1.0, OptionType::Call);
    let euro = amer.with_exercise(ExerciseStyle::European);
    let params = TreeParams::default();

    let american = binomial::price_american(&m, &amer, &params).unwrap();
    let european_tree = binomial::price_european(&m, &euro, &params).unwrap();
    let analytic = black_scholes::price(&m, &euro).unwrap();

    assert!((american - analytic).abs() < 5e-3);
    assert!((american - european_tree).abs() < 1e-7);
}

#[test]
fn test_american_call_with_high_dividend_exercises_early() {
    let m = Market::new(150.0, 0.01, 0.10, 1.0);
    let amer = VanillaOption::american(100.0, 1.0, OptionType::Call);
    let euro = amer.with_exercise(ExerciseStyle::European);
    let params = TreeParams::default();

    let american = binomial::price_american(&m, &amer, &params).unwrap();
    let european_tree = binomial::price_european(&m, &euro, &params).unwrap();
    let analytic = black_scholes::price(&m, &euro).unwrap();

    assert!(american >= analytic - 1e-4);
    assert!(american >= european_tree + 1e-4);
}

#[test]
fn test_american_never_below_intrinsic() {
    let m = scenario_market();
    for strike in [60.0, 90.0, 100.0, 110.0, 140.0] {
        for option_type in [OptionType::Call, OptionType::Put] {
            let amer = VanillaOption::american(strike, 1.0, option_type);
            let price = binomial::price_american(&m, &amer, &TreeParams::coarse()).unwrap();
            assert!(price >= amer.payoff(m.spot) - 1e-12);
        }
    }
}

// ============================================================================
// Concrete Scenario
// ============================================================================

#[test]
fn test_reference_scenario() {
    let m = scenario_market();
    let call = VanillaOption::european(105.0, 1.5, OptionType::Call);

    let analytic = black_scholes::price(&m, &call).unwrap();
    assert_relative_eq!(analytic, 8.787713680591303, epsilon = 1e-9);

    let tree = binomial::price_european(&m, &call, &TreeParams::new(2000)).unwrap();
    assert!((tree - analytic).abs() < 5e-3);

    let sigma = solve_implied_vol(&m, &call, analytic, &ImpliedVolParams::default()).unwrap();
    assert!((sigma - 0.2).abs() < 1e-6);
}

#[test]
fn test_error_kinds_per_engine() {
    let m = scenario_market();
    let amer = VanillaOption::american(105.0, 1.5, OptionType::Call);

    assert!(matches!(
        black_scholes::greeks(&m, &amer),
        Err(PricingError::UnsupportedExercise(_))
    ));
    assert!(matches!(
        solve_implied_vol(&m, &amer, 5.0, &ImpliedVolParams::default()),
        Err(PricingError::UnsupportedExercise(_))
    ));
    assert!(matches!(
        binomial::price_american(&m, &amer, &TreeParams::new(0)),
        Err(PricingError::InvalidInput(_))
    ));
}

// ============================================================================
// Concurrency Tests
// ============================================================================

#[test]
fn test_parallel_pricing_matches_sequential() {
    let m = scenario_market();
    let options: Vec<VanillaOption> = (0..64)
        .map(|i| {
            let strike = 80.0 + i as f64;
            let option_type = if i % 2 == 0 {
                OptionType::Call
            } else {
                OptionType::Put
            };
            VanillaOption::american(strike, 1.0, option_type)
        })
        .collect();
    let params = TreeParams::coarse();

    let price_one = |option: &VanillaOption| {
        let tree = binomial::price_american(&m, option, &params).unwrap();
        let euro = option.with_exercise(ExerciseStyle::European);
        let analytic = black_scholes::price(&m, &euro).unwrap();
        let sigma = solve_implied_vol(&m, &euro, analytic, &ImpliedVolParams::default()).unwrap();
        (tree, analytic, sigma)
    };

    let sequential: Vec<_> = options.iter().map(price_one).collect();
    let parallel: Vec<_> = options.par_iter().map(price_one).collect();

    assert_eq!(sequential, parallel);
}
