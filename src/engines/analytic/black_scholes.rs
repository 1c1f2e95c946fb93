//! Black-Scholes-Merton closed-form kernels and the analytic engine.
//!
//! The free functions report textbook units: vega per unit volatility, rho
//! per unit rate, theta per year of maturity decay, all from the long-option
//! perspective. Display-unit scaling and position sign conventions live in
//! [`crate::pricing`].
//!
//! With `d1 = (ln(S/K) + (r - q + sigma^2/2) T) / (sigma sqrt(T))` and
//! `d2 = d1 - sigma sqrt(T)`:
//! - call = `S e^(-qT) N(d1) - K e^(-rT) N(d2)`
//! - put  = `K e^(-rT) N(-d2) - S e^(-qT) N(-d1)`
//!
//! Reference: Hull (11th ed.), Ch. 15 and 17.

use crate::core::{
    DiagKey, Diagnostics, Greeks, OptionType, PricingEngine, PricingError, PricingResult,
};
use crate::instruments::VanillaOption;
use crate::market::Market;
use crate::math::{normal_cdf, normal_pdf};

/// Analytic Black-Scholes-Merton engine for European vanilla options.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesEngine;

impl BlackScholesEngine {
    /// Creates a Black-Scholes engine instance.
    pub fn new() -> Self {
        Self
    }
}

#[inline]
fn intrinsic(option_type: OptionType, spot: f64, strike: f64) -> f64 {
    match option_type {
        OptionType::Call => (spot - strike).max(0.0),
        OptionType::Put => (strike - spot).max(0.0),
    }
}

#[inline]
pub(crate) fn d1_d2(
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    expiry: f64,
) -> (f64, f64) {
    let sig_sqrt_t = vol * expiry.sqrt();
    let d1 =
        ((spot / strike).ln() + (rate - dividend_yield + 0.5 * vol * vol) * expiry) / sig_sqrt_t;
    (d1, d1 - sig_sqrt_t)
}

/// Black-Scholes-Merton price of a long option.
///
/// Edge cases: intrinsic value at `expiry <= 0`; discounted forward intrinsic
/// at `vol <= 0` (the deterministic limit).
#[inline]
pub fn bs_price(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 {
        return intrinsic(option_type, spot, strike);
    }
    let df_r = (-rate * expiry).exp();
    let df_q = (-dividend_yield * expiry).exp();
    if vol <= 0.0 {
        return match option_type {
            OptionType::Call => (spot * df_q - strike * df_r).max(0.0),
            OptionType::Put => (strike * df_r - spot * df_q).max(0.0),
        };
    }

    let (d1, d2) = d1_d2(spot, strike, rate, dividend_yield, vol, expiry);
    match option_type {
        OptionType::Call => spot * df_q * normal_cdf(d1) - strike * df_r * normal_cdf(d2),
        OptionType::Put => strike * df_r * normal_cdf(-d2) - spot * df_q * normal_cdf(-d1),
    }
}

/// Spot sensitivity `dV/dS` of a long option.
#[inline]
pub fn bs_delta(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 {
        return 0.0;
    }
    let (d1, _) = d1_d2(spot, strike, rate, dividend_yield, vol, expiry);
    let df_q = (-dividend_yield * expiry).exp();
    match option_type {
        OptionType::Call => df_q * normal_cdf(d1),
        OptionType::Put => df_q * (normal_cdf(d1) - 1.0),
    }
}

/// Convexity `d2V/dS2`. Identical for calls and puts.
#[inline]
pub fn bs_gamma(
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 || spot <= 0.0 {
        return 0.0;
    }
    let (d1, _) = d1_d2(spot, strike, rate, dividend_yield, vol, expiry);
    let df_q = (-dividend_yield * expiry).exp();
    df_q * normal_pdf(d1) / (spot * vol * expiry.sqrt())
}

/// Volatility sensitivity `dV/dsigma`, per unit vol. Identical for calls and puts.
#[inline]
pub fn bs_vega(
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 || spot <= 0.0 {
        return 0.0;
    }
    let (d1, _) = d1_d2(spot, strike, rate, dividend_yield, vol, expiry);
    let df_q = (-dividend_yield * expiry).exp();
    spot * df_q * normal_pdf(d1) * expiry.sqrt()
}

/// Calendar-time decay `dV/dt`, per year.
#[inline]
pub fn bs_theta(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 || spot <= 0.0 {
        return 0.0;
    }
    let (d1, d2) = d1_d2(spot, strike, rate, dividend_yield, vol, expiry);
    let sqrt_t = expiry.sqrt();
    let df_q = (-dividend_yield * expiry).exp();
    let df_r = (-rate * expiry).exp();
    let decay = -spot * df_q * normal_pdf(d1) * vol / (2.0 * sqrt_t);
    match option_type {
        OptionType::Call => {
            decay - rate * strike * df_r * normal_cdf(d2)
                + dividend_yield * spot * df_q * normal_cdf(d1)
        }
        OptionType::Put => {
            decay + rate * strike * df_r * normal_cdf(-d2)
                - dividend_yield * spot * df_q * normal_cdf(-d1)
        }
    }
}

/// Rate sensitivity `dV/dr`, per unit rate.
#[inline]
pub fn bs_rho(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 || spot <= 0.0 {
        return 0.0;
    }
    let (_, d2) = d1_d2(spot, strike, rate, dividend_yield, vol, expiry);
    let df_r = (-rate * expiry).exp();
    match option_type {
        OptionType::Call => strike * expiry * df_r * normal_cdf(d2),
        OptionType::Put => -strike * expiry * df_r * normal_cdf(-d2),
    }
}

impl PricingEngine<VanillaOption> for BlackScholesEngine {
    /// Prices a vanilla position in textbook units with `d1`/`d2`/`vol`
    /// diagnostics. Position direction flips price, delta, theta, and rho;
    /// gamma and vega stay unsigned.
    fn price(
        &self,
        instrument: &VanillaOption,
        market: &Market,
    ) -> Result<PricingResult, PricingError> {
        instrument.validate()?;
        if market.vol <= 0.0 {
            return Err(PricingError::InvalidInput(
                "market vol must be > 0".to_string(),
            ));
        }

        let direction = instrument.position.sign();
        if instrument.expiry <= 0.0 {
            let exercise_value = intrinsic(instrument.option_type, market.spot, instrument.strike);
            return Ok(PricingResult {
                price: direction * exercise_value,
                greeks: Greeks::zero(),
                diagnostics: Diagnostics::new(),
            });
        }

        let (option_type, spot, strike, rate, q, vol, expiry) = (
            instrument.option_type,
            market.spot,
            instrument.strike,
            market.rate,
            market.dividend_yield,
            market.vol,
            instrument.expiry,
        );
        let (d1, d2) = d1_d2(spot, strike, rate, q, vol, expiry);

        let mut diagnostics = Diagnostics::new();
        diagnostics.insert(DiagKey::D1, d1);
        diagnostics.insert(DiagKey::D2, d2);
        diagnostics.insert(DiagKey::Vol, vol);

        Ok(PricingResult {
            price: direction * bs_price(option_type, spot, strike, rate, q, vol, expiry),
            greeks: Greeks {
                delta: direction * bs_delta(option_type, spot, strike, rate, q, vol, expiry),
                gamma: bs_gamma(spot, strike, rate, q, vol, expiry),
                vega: bs_vega(spot, strike, rate, q, vol, expiry),
                theta: direction * bs_theta(option_type, spot, strike, rate, q, vol, expiry),
                rho: direction * bs_rho(option_type, spot, strike, rate, q, vol, expiry),
            },
            diagnostics,
        })
    }
}
