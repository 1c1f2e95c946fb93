//! Market data snapshot shared by every leg of a strategy.

use crate::core::PricingError;

/// Immutable market snapshot used by the pricing layers.
///
/// A strategy quotes a single flat volatility across its legs, so the
/// snapshot carries one `vol` rather than a surface abstraction.
///
/// # Examples
/// ```
/// use optstrat::market::Market;
///
/// let market = Market::builder()
///     .spot(100.0)
///     .rate(0.05)
///     .dividend_yield(0.01)
///     .vol(0.20)
///     .build()
///     .unwrap();
/// assert_eq!(market.spot, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Market {
    /// Spot price, > 0.
    pub spot: f64,
    /// Continuously compounded risk-free rate; negative rates are allowed.
    pub rate: f64,
    /// Continuously compounded dividend yield.
    pub dividend_yield: f64,
    /// Annualized flat volatility, > 0.
    pub vol: f64,
}

impl Market {
    /// Starts a market builder.
    #[inline]
    pub fn builder() -> MarketBuilder {
        MarketBuilder::default()
    }
}

/// Builder for [`Market`].
#[derive(Debug, Clone, Default)]
pub struct MarketBuilder {
    spot: Option<f64>,
    rate: Option<f64>,
    dividend_yield: Option<f64>,
    vol: Option<f64>,
}

impl MarketBuilder {
    /// Sets the spot price.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the flat risk-free rate.
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the continuous dividend yield.
    #[inline]
    pub fn dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = Some(dividend_yield);
        self
    }

    /// Sets the flat volatility.
    #[inline]
    pub fn vol(mut self, vol: f64) -> Self {
        self.vol = Some(vol);
        self
    }

    /// Validates and builds a [`Market`].
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when spot or vol is missing,
    /// non-positive, or non-finite, or when rate/dividend yield is non-finite.
    pub fn build(self) -> Result<Market, PricingError> {
        let spot = self
            .spot
            .ok_or_else(|| PricingError::InvalidInput("market spot is required".to_string()))?;
        if !spot.is_finite() || spot <= 0.0 {
            return Err(PricingError::InvalidInput(
                "market spot must be finite and > 0".to_string(),
            ));
        }

        let vol = self
            .vol
            .ok_or_else(|| PricingError::InvalidInput("market vol is required".to_string()))?;
        if !vol.is_finite() || vol <= 0.0 {
            return Err(PricingError::InvalidInput(
                "market vol must be finite and > 0".to_string(),
            ));
        }

        let rate = self.rate.unwrap_or(0.0);
        let dividend_yield = self.dividend_yield.unwrap_or(0.0);
        if !rate.is_finite() || !dividend_yield.is_finite() {
            return Err(PricingError::InvalidInput(
                "market rate and dividend yield must be finite".to_string(),
            ));
        }

        Ok(Market {
            spot,
            rate,
            dividend_yield,
            vol,
        })
    }
}
