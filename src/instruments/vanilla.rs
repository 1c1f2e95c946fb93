//! Canonical plain-vanilla option contract definition used throughout the library.
//!
//! [`VanillaOption`] stores side, strike, expiry, and position direction.
//! Validation accepts `expiry == 0` (intrinsic-value edge case). This type is
//! the input for the analytic engine and the position-pricing primitive.

use crate::core::{Instrument, OptionType, PositionDirection, PricingError};

/// Vanilla European option position.
///
/// # Examples
/// ```
/// use optstrat::core::{OptionType, PositionDirection};
/// use optstrat::instruments::VanillaOption;
///
/// let option = VanillaOption {
///     option_type: OptionType::Call,
///     strike: 100.0,
///     expiry: 1.0,
///     position: PositionDirection::Long,
/// };
/// assert!(option.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VanillaOption {
    /// Call or put.
    pub option_type: OptionType,
    /// Strike level.
    pub strike: f64,
    /// Expiry in years.
    pub expiry: f64,
    /// Long or short.
    pub position: PositionDirection,
}

impl VanillaOption {
    /// Builds a long call.
    pub fn long_call(strike: f64, expiry: f64) -> Self {
        Self {
            option_type: OptionType::Call,
            strike,
            expiry,
            position: PositionDirection::Long,
        }
    }

    /// Builds a long put.
    pub fn long_put(strike: f64, expiry: f64) -> Self {
        Self {
            option_type: OptionType::Put,
            strike,
            expiry,
            position: PositionDirection::Long,
        }
    }

    /// Builds a short call.
    pub fn short_call(strike: f64, expiry: f64) -> Self {
        Self {
            option_type: OptionType::Call,
            strike,
            expiry,
            position: PositionDirection::Short,
        }
    }

    /// Builds a short put.
    pub fn short_put(strike: f64, expiry: f64) -> Self {
        Self {
            option_type: OptionType::Put,
            strike,
            expiry,
            position: PositionDirection::Short,
        }
    }

    /// Validates instrument fields.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when `strike <= 0` or
    /// `expiry < 0`. `expiry == 0` is accepted to support immediate-expiry
    /// intrinsic-value pricing in the trait-based engine.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(PricingError::InvalidInput(
                "vanilla strike must be finite and > 0".to_string(),
            ));
        }
        if !self.expiry.is_finite() || self.expiry < 0.0 {
            return Err(PricingError::InvalidInput(
                "vanilla expiry must be finite and >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Instrument for VanillaOption {
    fn instrument_type(&self) -> &str {
        "VanillaOption"
    }
}
