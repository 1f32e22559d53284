//! Black-Scholes-Merton pricing for European options.
//!
//! Closed-form price and first-order Greeks under lognormal dynamics with a
//! continuous dividend yield.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::market_data::Market;
use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::types::PricingError;

use crate::instruments::{ExerciseStyle, OptionType, VanillaOption};

const ENGINE: &str = "Analytic Black-Scholes";

/// First-order option sensitivities.
///
/// All values are per unit of the underlying variable (not percentage
/// scaled). Theta is per year of calendar time and is usually negative for
/// long positions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Delta: ∂V/∂S
    pub delta: f64,
    /// Gamma: ∂²V/∂S²
    pub gamma: f64,
    /// Vega: ∂V/∂σ
    pub vega: f64,
    /// Theta: -∂V/∂T (calendar decay, per year)
    pub theta: f64,
    /// Rho: ∂V/∂r
    pub rho: f64,
}

/// Intermediate quantities shared by the price and every Greek.
#[derive(Debug, Clone, Copy)]
struct Terms {
    sqrt_t: f64,
    d1: f64,
    d2: f64,
    disc_r: f64,
    disc_q: f64,
}

impl Terms {
    fn new(market: &Market, option: &VanillaOption) -> Self {
        let expiry = option.expiry;
        let sigma = market.volatility;
        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = sigma * sqrt_t;

        let log_moneyness = (market.spot / option.strike).ln();
        let drift = (market.rate - market.dividend_yield + 0.5 * sigma * sigma) * expiry;
        let d1 = (log_moneyness + drift) / vol_sqrt_t;

        Self {
            sqrt_t,
            d1,
            d2: d1 - vol_sqrt_t,
            disc_r: market.discount_factor(expiry),
            disc_q: market.dividend_discount_factor(expiry),
        }
    }
}

/// Checks S0, K, T, σ and European exercise, in that order.
fn validate(market: &Market, option: &VanillaOption) -> Result<(), PricingError> {
    market.validate_spot()?;
    option.validate_strike()?;
    option.validate_expiry()?;
    market.validate_volatility()?;
    option.require_exercise(ExerciseStyle::European, ENGINE)
}

/// Computes the Black-Scholes-Merton price of a European option.
///
/// # Errors
/// - `PricingError::InvalidInput` if spot, strike, maturity or volatility is not positive
/// - `PricingError::UnsupportedExercise` if the option is American
///
/// # Examples
/// ```
/// use pricer_core::market_data::Market;
/// use pricer_models::analytical::black_scholes;
/// use pricer_models::instruments::{OptionType, VanillaOption};
///
/// let market = Market::new(100.0, 0.05, 0.0, 0.2);
/// let call = VanillaOption::european(100.0, 1.0, OptionType::Call);
///
/// let price = black_scholes::price(&market, &call).unwrap();
/// assert!((price - 10.4506).abs() < 1e-3);
/// ```
pub fn price(market: &Market, option: &VanillaOption) -> Result<f64, PricingError> {
    validate(market, option)?;
    Ok(price_unchecked(market, option))
}

/// Price formula without input checks.
///
/// Callers must have validated the inputs; used by the implied-vol solver
/// inside its bisection loop.
pub(crate) fn price_unchecked(market: &Market, option: &VanillaOption) -> f64 {
    let t = Terms::new(market, option);
    let spot = market.spot;
    let strike = option.strike;

    match option.option_type {
        OptionType::Call => spot * t.disc_q * norm_cdf(t.d1) - strike * t.disc_r * norm_cdf(t.d2),
        OptionType::Put => strike * t.disc_r * norm_cdf(-t.d2) - spot * t.disc_q * norm_cdf(-t.d1),
    }
}

/// Computes the closed-form Greeks of a European option.
///
/// # Errors
/// Same as [`price`].
///
/// # Examples
/// ```
/// use pricer_core::market_data::Market;
/// use pricer_models::analytical::black_scholes;
/// use pricer_models::instruments::{OptionType, VanillaOption};
///
/// let market = Market::new(100.0, 0.03, 0.01, 0.2);
/// let call = VanillaOption::european(100.0, 1.0, OptionType::Call);
/// let put = VanillaOption::european(100.0, 1.0, OptionType::Put);
///
/// let gc = black_scholes::greeks(&market, &call).unwrap();
/// let gp = black_scholes::greeks(&market, &put).unwrap();
///
/// // Δc - Δp = e^(-qT)
/// assert!((gc.delta - gp.delta - (-0.01_f64).exp()).abs() < 1e-12);
/// ```
pub fn greeks(market: &Market, option: &VanillaOption) -> Result<Greeks, PricingError> {
    validate(market, option)?;

    let t = Terms::new(market, option);
    let spot = market.spot;
    let strike = option.strike;
    let sigma = market.volatility;
    let expiry = option.expiry;

    let n_d1 = norm_cdf(t.d1);
    let n_d2 = norm_cdf(t.d2);
    let pdf_d1 = norm_pdf(t.d1);

    // Same for calls and puts
    let gamma = t.disc_q * pdf_d1 / (spot * sigma * t.sqrt_t);
    let vega = spot * t.disc_q * pdf_d1 * t.sqrt_t;
    let decay = -(spot * t.disc_q * pdf_d1 * sigma) / (2.0 * t.sqrt_t);

    let greeks = match option.option_type {
        OptionType::Call => Greeks {
            delta: t.disc_q * n_d1,
            gamma,
            vega,
            theta: decay - market.rate * strike * t.disc_r * n_d2
                + market.dividend_yield * spot * t.disc_q * n_d1,
            rho: strike * expiry * t.disc_r * n_d2,
        },
        OptionType::Put => {
            let n_minus_d1 = norm_cdf(-t.d1);
            let n_minus_d2 = norm_cdf(-t.d2);
            Greeks {
                delta: t.disc_q * (n_d1 - 1.0),
                gamma,
                vega,
                theta: decay + market.rate * strike * t.disc_r * n_minus_d2
                    - market.dividend_yield * spot * t.disc_q * n_minus_d1,
                rho: -strike * expiry * t.disc_r * n_minus_d2,
            }
        }
    };
    Ok(greeks)
}
