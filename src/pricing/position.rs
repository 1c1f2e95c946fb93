//! The position-pricing primitive.
//!
//! [`position_value`] is the total-function entry point the strategy layer is
//! built on: it never errors and never panics. Out-of-domain numeric inputs
//! (spot, strike, expiry, or vol non-finite or `<= 0`) return the all-zero
//! [`PricingResult::zero`] sentinel so that a UI recomputing on every
//! keystroke sees a well-formed value for every intermediate input state.
//!
//! Unlike the textbook-unit kernels in [`crate::engines::analytic`], results
//! here use market-display conventions:
//! - vega and rho are quoted per 1 percentage-point move (kernel value / 100),
//! - theta is quoted per calendar day (kernel value / 365),
//! - short positions negate price, delta, theta, and rho, while gamma and
//!   vega keep their long-side sign as direction-independent risk magnitudes.

use crate::core::{DiagKey, Diagnostics, Greeks, PricingResult};
use crate::engines::analytic::black_scholes::{
    bs_delta, bs_gamma, bs_price, bs_rho, bs_theta, bs_vega, d1_d2,
};
use crate::instruments::{StrategyLeg, VanillaOption};
use crate::market::Market;

/// Fair value and display-unit Greeks for one option position.
///
/// Total function: degenerate inputs yield [`PricingResult::zero`] rather
/// than an error. Callers must treat the all-zero result as "no value" and
/// avoid downstream division by its fields.
///
/// # Examples
/// ```
/// use optstrat::instruments::VanillaOption;
/// use optstrat::market::Market;
/// use optstrat::pricing::position_value;
///
/// let market = Market::builder()
///     .spot(100.0)
///     .rate(0.05)
///     .vol(0.20)
///     .build()
///     .unwrap();
/// let value = position_value(&VanillaOption::long_call(100.0, 1.0), &market);
/// assert!((value.price - 10.4506).abs() < 1e-3);
/// assert!((value.greeks.theta - -0.0176).abs() < 1e-3); // per calendar day
/// ```
pub fn position_value(option: &VanillaOption, market: &Market) -> PricingResult {
    let (spot, strike, expiry, vol) = (market.spot, option.strike, option.expiry, market.vol);
    let in_domain = |x: f64| x.is_finite() && x > 0.0;
    if !(in_domain(spot) && in_domain(strike) && in_domain(expiry) && in_domain(vol)) {
        return PricingResult::zero();
    }

    let (option_type, rate, q) = (option.option_type, market.rate, market.dividend_yield);
    let direction = option.position.sign();
    let (d1, d2) = d1_d2(spot, strike, rate, q, vol, expiry);

    let mut diagnostics = Diagnostics::new();
    diagnostics.insert(DiagKey::D1, d1);
    diagnostics.insert(DiagKey::D2, d2);
    diagnostics.insert(DiagKey::Vol, vol);

    PricingResult {
        price: direction * bs_price(option_type, spot, strike, rate, q, vol, expiry),
        greeks: Greeks {
            delta: direction * bs_delta(option_type, spot, strike, rate, q, vol, expiry),
            gamma: bs_gamma(spot, strike, rate, q, vol, expiry),
            vega: bs_vega(spot, strike, rate, q, vol, expiry) / 100.0,
            theta: direction * bs_theta(option_type, spot, strike, rate, q, vol, expiry) / 365.0,
            rho: direction * bs_rho(option_type, spot, strike, rate, q, vol, expiry) / 100.0,
        },
        diagnostics,
    }
}

/// [`position_value`] for a strategy leg, with price and every Greek
/// component scaled by the leg quantity. Diagnostics stay unscaled (they
/// describe the inputs, not the position size).
pub fn leg_value(leg: &StrategyLeg, market: &Market, expiry: f64) -> PricingResult {
    let option = VanillaOption {
        option_type: leg.option_type,
        strike: leg.strike,
        expiry,
        position: leg.position,
    };
    let value = position_value(&option, market);
    PricingResult {
        price: value.price * leg.quantity,
        greeks: value.greeks.scaled(leg.quantity),
        diagnostics: value.diagnostics,
    }
}
