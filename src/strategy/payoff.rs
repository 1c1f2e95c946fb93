//! Expiry payoff sampling and break-even detection.
//!
//! The curve is an intrinsic-value approximation at a synthetic expiry: each
//! grid price is pushed through `max(0, P - K)` / `max(0, K - P)` per leg and
//! the net entry premium is subtracted. No re-pricing happens per grid point.

use crate::core::OptionType;
use crate::instruments::StrategyLeg;

/// Number of samples in a payoff curve.
///
/// Together with the `[0.5 * spot, 1.5 * spot]` range this is normative:
/// downstream consumers and reference tests assume exactly this grid.
pub const PAYOFF_GRID_POINTS: usize = 50;

/// One sample of the expiry profit/loss curve.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PayoffPoint {
    /// Underlying price at expiry.
    pub underlying: f64,
    /// Strategy profit or loss at that price, net of entry premium.
    pub profit: f64,
}

/// Samples the strategy's expiry profit/loss on [`PAYOFF_GRID_POINTS`]
/// equally spaced prices spanning `[0.5 * spot, 1.5 * spot]` inclusive.
///
/// `net_premium` follows the long-pays/short-receives sign convention: it is
/// the signed sum of quantity-scaled leg values, positive for a debit
/// strategy.
pub fn payoff_curve(spot: f64, legs: &[StrategyLeg], net_premium: f64) -> Vec<PayoffPoint> {
    (0..PAYOFF_GRID_POINTS)
        .map(|i| {
            // 0.5 + i/49 hits both endpoints exactly.
            let underlying = spot * (0.5 + i as f64 / (PAYOFF_GRID_POINTS - 1) as f64);
            let intrinsic: f64 = legs
                .iter()
                .map(|leg| {
                    let exercise_value = match leg.option_type {
                        OptionType::Call => (underlying - leg.strike).max(0.0),
                        OptionType::Put => (leg.strike - underlying).max(0.0),
                    };
                    leg.position.sign() * leg.quantity * exercise_value
                })
                .sum();
            PayoffPoint {
                underlying,
                profit: intrinsic - net_premium,
            }
        })
        .collect()
}

/// Locates the zero crossings of a payoff curve.
///
/// Consecutive samples whose profits change sign (touching zero counts) are
/// linearly interpolated; results are rounded to 2 decimal places, ascending,
/// with post-rounding duplicates collapsed. A flat segment that does not
/// bracket zero records nothing, so a flat-at-zero curve reports no
/// break-evens rather than one per sample.
pub fn break_even_points(points: &[PayoffPoint]) -> Vec<f64> {
    let mut out: Vec<f64> = Vec::new();
    for pair in points.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        let same_side = (lo.profit > 0.0) == (hi.profit > 0.0);
        if same_side && lo.profit != 0.0 && hi.profit != 0.0 {
            continue;
        }
        let dy = hi.profit - lo.profit;
        if dy == 0.0 {
            continue;
        }
        let crossing = lo.underlying - lo.profit * (hi.underlying - lo.underlying) / dy;
        let rounded = (crossing * 100.0).round() / 100.0;
        if out.last() != Some(&rounded) {
            out.push(rounded);
        }
    }
    out
}

/// Highest and lowest profit over the sampled curve.
///
/// Either bound is `None` when it is non-finite (NaN propagated from a
/// degenerate input) or when the curve is empty; callers must read absence
/// as "undefined/unbounded", not zero.
pub fn profit_bounds(points: &[PayoffPoint]) -> (Option<f64>, Option<f64>) {
    let mut max_profit = f64::NEG_INFINITY;
    let mut max_loss = f64::INFINITY;
    for point in points {
        // `f64::max` would silently skip NaN; a poisoned sample must poison
        // both bounds instead.
        if point.profit.is_nan() {
            return (None, None);
        }
        max_profit = max_profit.max(point.profit);
        max_loss = max_loss.min(point.profit);
    }
    let keep = |x: f64| x.is_finite().then_some(x);
    (keep(max_profit), keep(max_loss))
}
