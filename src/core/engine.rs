//! Engine traits, Greeks container, diagnostics storage, and error types.

use crate::market::Market;

/// Standardized Greeks container used by pricing results.
///
/// Units depend on the producing layer: the analytic kernels in
/// [`crate::engines`] report textbook per-year/per-unit sensitivities, while
/// [`crate::pricing::position_value`] converts to market-display units
/// (vega and rho per 1% move, theta per calendar day).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Greeks {
    /// First derivative to spot.
    pub delta: f64,
    /// Second derivative to spot.
    pub gamma: f64,
    /// First derivative to volatility.
    pub vega: f64,
    /// First derivative to calendar time.
    pub theta: f64,
    /// First derivative to rate.
    pub rho: f64,
}

impl Greeks {
    /// All-zero Greeks, used as the degenerate sentinel and as an
    /// accumulation seed.
    pub fn zero() -> Self {
        Self {
            delta: 0.0,
            gamma: 0.0,
            vega: 0.0,
            theta: 0.0,
            rho: 0.0,
        }
    }

    /// Component-wise scaling, e.g. by a position quantity.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            vega: self.vega * factor,
            theta: self.theta * factor,
            rho: self.rho * factor,
        }
    }

    /// Component-wise sum.
    pub fn accumulate(&mut self, other: Self) {
        self.delta += other.delta;
        self.gamma += other.gamma;
        self.vega += other.vega;
        self.theta += other.theta;
        self.rho += other.rho;
    }
}

/// Common trait implemented by every priceable instrument.
pub trait Instrument: std::fmt::Debug {
    /// Returns a short type identifier for diagnostics and payloads.
    fn instrument_type(&self) -> &str;
}

/// Pricing engine abstraction over an instrument type.
pub trait PricingEngine<I: Instrument> {
    /// Prices an instrument under the provided market state.
    fn price(&self, instrument: &I, market: &Market) -> Result<PricingResult, PricingError>;
}

/// Compact key set for pricing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagKey {
    D1,
    D2,
    Vol,
}

impl DiagKey {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "d1",
            Self::D2 => "d2",
            Self::Vol => "vol",
        }
    }
}

/// Inline diagnostics storage used in [`PricingResult`].
///
/// Fixed capacity, no allocation. Lookups are linear over at most
/// [`Diagnostics::CAPACITY`] entries.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Diagnostics {
    entries: [Option<(DiagKey, f64)>; 4],
}

impl Diagnostics {
    pub const CAPACITY: usize = 4;

    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries[0].is_none()
    }

    /// Inserts or overwrites a diagnostic value, returning the previous one.
    #[inline]
    pub fn insert(&mut self, key: DiagKey, value: f64) -> Option<f64> {
        for (entry_key, existing) in self.entries.iter_mut().flatten() {
            if *entry_key == key {
                let prev = *existing;
                *existing = value;
                return Some(prev);
            }
        }

        for entry in &mut self.entries {
            if entry.is_none() {
                *entry = Some((key, value));
                return None;
            }
        }

        panic!("diagnostics capacity exceeded ({})", Self::CAPACITY);
    }

    #[inline]
    pub fn get(&self, key: DiagKey) -> Option<f64> {
        self.entries
            .iter()
            .flatten()
            .find_map(|(entry_key, value)| (*entry_key == key).then_some(*value))
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        self.entries
            .iter()
            .flatten()
            .map(|(key, value)| (key.as_str(), *value))
    }
}

/// Unified pricing result payload.
///
/// [`crate::pricing::position_value`] returns this unconditionally (degenerate
/// inputs yield [`PricingResult::zero`]); the trait-based engines return it
/// behind a `Result` after validation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PricingResult {
    /// Present value, signed by position direction.
    pub price: f64,
    /// Sensitivities, in the producing layer's units.
    pub greeks: Greeks,
    /// Scalar diagnostics (`d1`, `d2`, `vol` for valid closed-form inputs).
    pub diagnostics: Diagnostics,
}

impl PricingResult {
    /// The all-zero sentinel emitted for out-of-domain inputs.
    ///
    /// Callers must treat this as "no value", not as a zero-cost position,
    /// and avoid dividing by any of its fields.
    pub fn zero() -> Self {
        Self {
            price: 0.0,
            greeks: Greeks::zero(),
            diagnostics: Diagnostics::new(),
        }
    }
}

/// Validation and model errors surfaced by builders and engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Input validation error.
    InvalidInput(String),
    /// Numerical issue (overflow, invalid state, etc.).
    NumericalError(String),
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::NumericalError(msg) => write!(f, "numerical error: {msg}"),
        }
    }
}

impl std::error::Error for PricingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_insert_get_overwrite() {
        let mut diag = Diagnostics::new();
        assert!(diag.is_empty());

        assert_eq!(diag.insert(DiagKey::D1, 0.35), None);
        assert_eq!(diag.insert(DiagKey::D2, 0.15), None);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.get(DiagKey::D1), Some(0.35));

        assert_eq!(diag.insert(DiagKey::D1, 0.40), Some(0.35));
        assert_eq!(diag.get(DiagKey::D1), Some(0.40));
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.get(DiagKey::Vol), None);
    }

    #[test]
    fn diagnostics_iter_yields_string_keys() {
        let mut diag = Diagnostics::new();
        diag.insert(DiagKey::Vol, 0.2);
        let collected: Vec<_> = diag.iter().collect();
        assert_eq!(collected, vec![("vol", 0.2)]);
    }

    #[test]
    fn greeks_scale_and_accumulate() {
        let mut total = Greeks::zero();
        let g = Greeks {
            delta: 0.5,
            gamma: 0.02,
            vega: 0.4,
            theta: -0.01,
            rho: 0.5,
        };
        total.accumulate(g.scaled(2.0));
        assert_eq!(total.delta, 1.0);
        assert_eq!(total.gamma, 0.04);
        assert_eq!(total.theta, -0.02);
    }

    #[test]
    fn zero_sentinel_is_all_zero() {
        let zero = PricingResult::zero();
        assert_eq!(zero.price, 0.0);
        assert_eq!(zero.greeks, Greeks::zero());
        assert!(zero.diagnostics.is_empty());
    }

    #[test]
    fn error_display_includes_message() {
        let err = PricingError::InvalidInput("strike must be > 0".to_string());
        assert_eq!(format!("{err}"), "invalid input: strike must be > 0");
    }
}
