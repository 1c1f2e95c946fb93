//! Multi-leg strategy aggregation.
//!
//! A [`Strategy`] bundles one market snapshot and expiry with an ordered set
//! of legs. [`evaluate`] prices every leg through the position primitive,
//! nets prices and Greeks, samples the expiry payoff curve, and locates
//! break-even points. Each call is a full recompute with no retained state.

pub mod payoff;
pub mod templates;

pub use payoff::{PAYOFF_GRID_POINTS, PayoffPoint, break_even_points, payoff_curve, profit_bounds};
pub use templates::{LegBlueprint, StrategyTemplate, TemplateKind, standard_catalog};

use crate::core::{Greeks, PricingError, PricingResult};
use crate::instruments::StrategyLeg;
use crate::market::{Market, MarketBuilder};
use crate::pricing::leg_value;

/// A multi-leg option strategy under one shared market snapshot.
///
/// All legs share spot, volatility, expiry, rate, and dividend yield; only
/// strike, side, direction, and quantity vary per leg. Zero legs is
/// well-formed and evaluates to a flat zero payoff.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Strategy {
    /// Shared market parameters.
    pub market: Market,
    /// Shared expiry in years.
    pub expiry: f64,
    /// Ordered legs.
    pub legs: Vec<StrategyLeg>,
}

impl Strategy {
    /// Starts a strategy builder.
    pub fn builder() -> StrategyBuilder {
        StrategyBuilder::default()
    }

    /// Validates market, expiry, and every leg.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] on the first offending field.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.expiry.is_finite() || self.expiry <= 0.0 {
            return Err(PricingError::InvalidInput(
                "strategy expiry must be finite and > 0".to_string(),
            ));
        }
        for leg in &self.legs {
            leg.validate()?;
        }
        Ok(())
    }
}

/// Builder for [`Strategy`].
#[derive(Debug, Clone, Default)]
pub struct StrategyBuilder {
    market: MarketBuilder,
    expiry: Option<f64>,
    legs: Vec<StrategyLeg>,
}

impl StrategyBuilder {
    /// Sets the spot price.
    pub fn spot(mut self, spot: f64) -> Self {
        self.market = self.market.spot(spot);
        self
    }

    /// Sets the flat risk-free rate.
    pub fn rate(mut self, rate: f64) -> Self {
        self.market = self.market.rate(rate);
        self
    }

    /// Sets the continuous dividend yield.
    pub fn dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.market = self.market.dividend_yield(dividend_yield);
        self
    }

    /// Sets the flat volatility.
    pub fn vol(mut self, vol: f64) -> Self {
        self.market = self.market.vol(vol);
        self
    }

    /// Sets the shared expiry in years.
    pub fn expiry(mut self, expiry: f64) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Appends one leg.
    pub fn leg(mut self, leg: StrategyLeg) -> Self {
        self.legs.push(leg);
        self
    }

    /// Appends several legs in order.
    pub fn legs<I: IntoIterator<Item = StrategyLeg>>(mut self, legs: I) -> Self {
        self.legs.extend(legs);
        self
    }

    /// Validates and builds a [`Strategy`].
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when the market snapshot,
    /// expiry, or any leg fails validation.
    pub fn build(self) -> Result<Strategy, PricingError> {
        let market = self.market.build()?;
        let expiry = self
            .expiry
            .ok_or_else(|| PricingError::InvalidInput("strategy expiry is required".to_string()))?;

        let strategy = Strategy {
            market,
            expiry,
            legs: self.legs,
        };
        strategy.validate()?;
        Ok(strategy)
    }
}

/// Non-fatal findings attached to a strategy report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvaluationWarning {
    /// The leg at this index carries a barrier descriptor that the
    /// closed-form model cannot price; it was valued as vanilla.
    BarrierNotModeled { leg: usize },
}

/// Full evaluation output for one strategy.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrategyReport {
    /// Sum of signed, quantity-scaled leg prices. Positive means the
    /// strategy costs premium to enter; negative means it collects premium.
    pub total_price: f64,
    /// Component-wise sum of signed, quantity-scaled leg Greeks.
    pub total_greeks: Greeks,
    /// Per-leg valuation audit trail, in input order.
    pub legs: Vec<PricingResult>,
    /// Expiry profit/loss samples, ascending in underlying price.
    pub payoff: Vec<PayoffPoint>,
    /// Underlying prices where the payoff crosses zero, ascending,
    /// rounded to 2 decimal places.
    pub break_evens: Vec<f64>,
    /// Highest payoff over the sampled range; `None` when non-finite.
    pub max_profit: Option<f64>,
    /// Lowest payoff over the sampled range; `None` when non-finite.
    pub max_loss: Option<f64>,
    /// Non-fatal findings, e.g. unpriced barrier descriptors.
    pub warnings: Vec<EvaluationWarning>,
}

/// Evaluates a strategy into a [`StrategyReport`].
///
/// Total function: it never errors for any [`Strategy`], including an empty
/// leg list (flat zero payoff). Legs whose inputs fall outside the pricing
/// domain contribute the zero sentinel. The payoff curve samples intrinsic
/// value at expiry on a 50-point grid over `[0.5 * spot, 1.5 * spot]` and
/// subtracts the net entry premium, which equals the signed total value of
/// the legs at the current parameters.
///
/// # Examples
/// ```
/// use optstrat::core::{OptionType, PositionDirection};
/// use optstrat::instruments::StrategyLeg;
/// use optstrat::strategy::{Strategy, evaluate};
///
/// // Long straddle: long call + long put at the money.
/// let strategy = Strategy::builder()
///     .spot(100.0)
///     .rate(0.05)
///     .vol(0.20)
///     .expiry(1.0)
///     .leg(StrategyLeg::new(OptionType::Call, PositionDirection::Long, 100.0, 1.0))
///     .leg(StrategyLeg::new(OptionType::Put, PositionDirection::Long, 100.0, 1.0))
///     .build()
///     .unwrap();
///
/// let report = evaluate(&strategy);
/// assert_eq!(report.break_evens.len(), 2);
/// assert!(report.total_price > 0.0); // both legs paid for
/// ```
pub fn evaluate(strategy: &Strategy) -> StrategyReport {
    let mut warnings = Vec::new();
    let mut legs = Vec::with_capacity(strategy.legs.len());
    let mut total_price = 0.0;
    let mut total_greeks = Greeks::zero();

    for (index, leg) in strategy.legs.iter().enumerate() {
        if leg.barrier.is_some() {
            warnings.push(EvaluationWarning::BarrierNotModeled { leg: index });
        }
        let value = leg_value(leg, &strategy.market, strategy.expiry);
        total_price += value.price;
        total_greeks.accumulate(value.greeks);
        legs.push(value);
    }

    // A hand-built strategy can carry a non-positive spot; there is no
    // meaningful price axis to sample in that case, so the curve stays empty
    // and the bounds stay absent.
    let spot = strategy.market.spot;
    let payoff = if spot.is_finite() && spot > 0.0 {
        payoff_curve(spot, &strategy.legs, total_price)
    } else {
        Vec::new()
    };
    let break_evens = break_even_points(&payoff);
    let (max_profit, max_loss) = profit_bounds(&payoff);

    StrategyReport {
        total_price,
        total_greeks,
        legs,
        payoff,
        break_evens,
        max_profit,
        max_loss,
        warnings,
    }
}
